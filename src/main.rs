use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod error;
mod git;
mod manifest;
mod resolve;
mod utils;

use error::SetError;
use git::GitVersionSource;
use utils::logger::{LogLevel, Logger};

#[derive(Parser)]
#[command(name = "setver")]
#[command(version)]
#[command(about = "Computes and writes the package version for CI builds")]
struct Cli {
    /// CI mode: release | releaseCanary | prPreview.
    /// Falls back to the `mode` environment variable.
    #[arg(long)]
    mode: Option<String>,

    /// Release tag (vX.Y.Z), required in release mode.
    /// Falls back to the `tag` environment variable.
    #[arg(long)]
    tag: Option<String>,

    /// Manifest whose version field is rewritten.
    #[arg(long, default_value = "package.json")]
    manifest: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logger = Logger::new();

    match run(cli) {
        Ok(version) => {
            logger.log_message(LogLevel::Success, &format!("Set version: {}", version));
            ExitCode::SUCCESS
        }
        Err(e) => {
            logger.log_message(LogLevel::Error, &e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, SetError> {
    let mode = config::resolve_mode(cli.mode)?;
    let tag = config::flag_or_env(cli.tag, config::TAG_ENV);

    let source = GitVersionSource::new();
    let version = resolve::resolve(mode, tag.as_deref(), &source)?;

    // the manifest is only touched once the version is fully derived
    manifest::set_version(&cli.manifest, &version)?;
    Ok(version)
}
