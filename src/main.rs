mod cli;

use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, OutputFormat};
use nlrepair_core::constants::{DEFAULT_LOG_DIRECTIVE, LOG_ENV_VAR};
use nlrepair_core::report::{header_line, separator_line};
use nlrepair_core::{RepairRunner, RunConfig, RunReport};

/// Main entry point for nlrepair
///
/// Resolves the file list, repairs each file in order and prints the report.
///
/// # Environment Variables
/// - `NLREPAIR_LOG`: log filter directives (falls back to `RUST_LOG`, then `nlrepair=warn`)
///
/// # Returns
/// * `Ok(ExitCode::SUCCESS)` - The run completed (always, unless `--strict` and a file was not fixed)
/// * `Ok(ExitCode::FAILURE)` - `--strict` was given and at least one file was not fixed
/// * `Err(anyhow::Error)` - No files were configured, the list could not be read, or output failed
fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let filter = match std::env::var(LOG_ENV_VAR) {
        Ok(directives) => EnvFilter::try_new(directives)?,
        Err(_) => EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let strict = cli.strict;
    let stdout = std::io::stdout();
    let report = execute(cli, &mut stdout.lock())?;

    Ok(ExitCode::from(exit_status(strict, &report)))
}

/// Run the repair for parsed arguments, writing the report to `out`.
fn execute(cli: Cli, out: &mut impl Write) -> anyhow::Result<RunReport> {
    let config = RunConfig::from_sources(cli.paths, cli.list.as_deref())?;
    tracing::debug!("repairing {} files", config.paths().len());

    let runner = RepairRunner::new();
    let report = match cli.format {
        OutputFormat::Text => run_text(&runner, &config, out)?,
        OutputFormat::Json => {
            let report = runner.run(&config);
            writeln!(out, "{}", report.to_json()?)?;
            report
        }
    };
    Ok(report)
}

/// `1` under `--strict` when any file was not fixed, otherwise `0`.
fn exit_status(strict: bool, report: &RunReport) -> u8 {
    if strict && !report.all_fixed() { 1 } else { 0 }
}

/// Print progress lines as each file completes, then the summary.
///
/// A failed progress write does not stop the run; the first such error is
/// returned once every file has been processed.
fn run_text(
    runner: &RepairRunner,
    config: &RunConfig,
    out: &mut impl Write,
) -> std::io::Result<RunReport> {
    writeln!(out, "{}", header_line())?;
    writeln!(out, "{}", separator_line())?;

    let mut write_error = None;
    let report = runner.run_with(config, |outcome| {
        if let Err(e) = writeln!(out, "{}", outcome.render_line()) {
            write_error.get_or_insert(e);
        }
    });
    if let Some(e) = write_error {
        return Err(e);
    }

    writeln!(out, "{}", separator_line())?;
    writeln!(out, "{}", report.summary_line())?;
    Ok(report)
}
