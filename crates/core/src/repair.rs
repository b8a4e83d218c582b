//! Literal newline substitution.
//!
//! The repair is a plain left-to-right, non-overlapping literal replacement of the
//! two-character sequence backslash + `n` with a real newline. No escape processing
//! takes place: a preceding backslash is left alone, so `\\n` becomes `\` followed by
//! a line break.

use crate::constants::{LITERAL_NEWLINE, NEWLINE};

/// Text after substitution, with the number of sequences replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repaired {
    pub text: String,
    pub replacements: usize,
}

impl Repaired {
    /// True when the input held no literal sequences and is returned unchanged.
    pub fn is_unchanged(&self) -> bool {
        self.replacements == 0
    }
}

/// Counts the non-overlapping literal `\n` sequences in `text`.
pub fn count_literal_newlines(text: &str) -> usize {
    text.matches(LITERAL_NEWLINE).count()
}

/// Replaces every literal `\n` sequence in `text` with a newline character.
///
/// Text without the sequence comes back byte-identical. Running the repair on its
/// own output is a no-op, since a real newline never matches the pattern.
pub fn unescape_newlines(text: &str) -> Repaired {
    let replacements = count_literal_newlines(text);
    if replacements == 0 {
        return Repaired {
            text: text.to_owned(),
            replacements,
        };
    }

    Repaired {
        text: text.replace(LITERAL_NEWLINE, NEWLINE),
        replacements,
    }
}
