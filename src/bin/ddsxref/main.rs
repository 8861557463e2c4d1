mod args;
mod tracing_config;

use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use args::{CheckArgs, CliArgs, Command, OutputFormat, PublishArgs};
use ddsxref::project::{self, LoadError, PublishError, Workspace};
use ddsxref::report::TextReport;

/// Exit status when findings or load failures were reported.
const EXIT_FINDINGS: u8 = 1;
/// Exit status for fatal errors.
const EXIT_ERROR: u8 = 2;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Publish(#[from] PublishError),
    #[cfg(feature = "json")]
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(not(feature = "json"))]
    #[error("{0}")]
    Unsupported(&'static str),
}

fn main() -> ExitCode {
    tracing_config::init_tracing();
    let args = CliArgs::parse();

    let result = match args.command {
        Command::Check(check) => run_check(&check),
        Command::Publish(publish) => run_publish(&publish),
    };
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run_check(args: &CheckArgs) -> Result<ExitCode, CliError> {
    let config = args.to_config();
    let workspace = Workspace::load_directory(&args.dir, &config)?;
    let reports = workspace.check(&config);

    match args.format {
        OutputFormat::Text => print!("{}", TextReport::new(&workspace, &reports)),
        OutputFormat::Json => println!("{}", render_json(&workspace, &reports)?),
    }

    let clean = workspace.failures().is_empty() && reports.iter().all(|r| r.is_clean());
    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_FINDINGS)
    })
}

#[cfg(feature = "json")]
fn render_json(
    workspace: &Workspace,
    reports: &[ddsxref::KindReport],
) -> Result<String, CliError> {
    Ok(ddsxref::report::render_json(workspace, reports)?)
}

#[cfg(not(feature = "json"))]
fn render_json(
    _workspace: &Workspace,
    _reports: &[ddsxref::KindReport],
) -> Result<String, CliError> {
    Err(CliError::Unsupported(
        "JSON output requires the `json` feature",
    ))
}

fn run_publish(args: &PublishArgs) -> Result<ExitCode, CliError> {
    let rewrites = project::schema_location_rewrites(&args.stamp);
    let summary = project::publish(&args.input, &args.output, &rewrites)?;
    println!(
        "Published {} file(s) to {} ({} rewritten)",
        summary.written.len(),
        args.output.display(),
        summary.changed
    );
    Ok(ExitCode::SUCCESS)
}
