//! Marquee CLI entrypoint.

use std::io::{self, Write};
use std::process::ExitCode;

use marquee::{ApiError, LogTarget, MarqueeConfig, OperationMode, init_logging};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ApiError> {
    let config = load_config()?;
    let mode = config.operation_mode();

    init_logging(LogTarget::select(
        config.log_file.as_deref(),
        mode == OperationMode::Interactive,
    ))?;

    match mode {
        OperationMode::Interactive => cli::interactive::run(&config).await,
        OperationMode::Listing => cli::listing::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<MarqueeConfig, ApiError> {
    MarqueeConfig::load().map_err(|error| ApiError::Configuration {
        message: error.to_string(),
    })
}
