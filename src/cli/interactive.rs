//! Interactive terminal client mode.

use std::io::{self, Write};

use bubbletea_rs::Program;
use marquee::tui::{AppContext, MarqueeApp, set_app_context};
use marquee::{ApiError, MarqueeConfig};

use super::build_service;

/// Runs the terminal client until the user quits.
///
/// # Errors
///
/// Returns an error when the movies API settings are invalid or the
/// terminal program fails.
pub async fn run(config: &MarqueeConfig) -> Result<(), ApiError> {
    let context = AppContext {
        service: build_service(config)?,
        redirect_delay: config.redirect_delay(),
    };
    // A context stored by an earlier run in this process stays in place.
    if !set_app_context(context) {
        tracing::debug!("application context already set");
    }

    run_tui().await.map_err(|error| ApiError::Io {
        message: format!("terminal client failed: {error}"),
    })
}

async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // MarqueeApp::init() reads the context stored above.
    let program = Program::<MarqueeApp>::builder().alt_screen(true).build()?;
    program.run().await?;
    io::stdout().flush().ok();
    Ok(())
}
