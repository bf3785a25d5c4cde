//! jenkins-report - Jenkins build environment report
//!
//! CLI entry point: prints the report for the current process environment.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;

use jenkins_report::report;
use jenkins_report::{ColorMode, ProcessEnv, Reporter};

/// Environment variable holding the log filter (`env_logger` syntax)
const LOG_ENV: &str = "JENKINS_REPORT_LOG";

/// Print the Jenkins build environment
///
/// Shows the variables Jenkins injects into a freestyle job, grouped into
/// sections. Unset variables are shown as "Not Set".
#[derive(Parser, Debug, Default)]
#[command(name = "jenkins-report", version, about)]
struct Cli {
    /// When to emit ANSI color codes
    #[arg(long, value_enum, default_value_t)]
    color: ColorMode,
}

/// Parse arguments without ever failing the run.
///
/// Help and version exit through clap (status 0); anything else unparseable
/// is logged and the defaults are used.
fn parse_args() -> Cli {
    Cli::try_parse().unwrap_or_else(|err| {
        if !err.use_stderr() {
            err.exit();
        }
        log::warn!("ignoring command-line arguments: {:?}", err.kind());
        Cli::default()
    })
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = parse_args();

    let colorize = cli.color.resolve();
    log::debug!("color mode {:?} resolved to {colorize}", cli.color);

    let stdout = io::stdout().lock();
    let mut reporter = Reporter::new(BufWriter::new(stdout), colorize);
    report::run(&mut reporter, &ProcessEnv).context("Failed to print build report")?;
    reporter.finish()?;

    Ok(())
}
