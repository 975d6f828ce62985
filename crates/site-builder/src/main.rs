//! site-builder entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "site-builder", about = "Generate the Acta Diurna deployment bundle")]
struct Cli {
    /// Directory that receives the `build/` output
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match site_builder::build_site(&cli.root) {
        Ok(report) => {
            info!(out_dir = %report.out_dir.display(), "BUILD COMPLETED SUCCESSFULLY");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("BUILD FAILED: {}", e);
            eprintln!("BUILD FAILED");
            eprintln!("Error: {}", e);
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("Caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
