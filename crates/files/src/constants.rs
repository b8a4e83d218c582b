//! Constants used by the file I/O layer.

/// Prefix for temporary files created beside a target during an atomic rewrite.
pub const TEMP_FILE_PREFIX: &str = ".nlrepair-";

/// Suffix for temporary files created beside a target during an atomic rewrite.
pub const TEMP_FILE_SUFFIX: &str = ".tmp";
