//! CLI operation mode handlers.
//!
//! - [`interactive`]: the terminal client
//! - [`listing`]: print the movie collection once and exit

use std::sync::Arc;

use marquee::{ApiError, HttpMovieGateway, MarqueeConfig, MovieDataService};

pub mod interactive;
pub mod listing;

/// Builds the data service for the configured movies API.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] when the configured address or
/// timeout is invalid.
pub fn build_service(config: &MarqueeConfig) -> Result<MovieDataService, ApiError> {
    let gateway = HttpMovieGateway::new(&config.gateway_config()?)?;
    tracing::info!(base_url = %gateway.base_url(), "movies API configured");
    Ok(MovieDataService::new(Arc::new(gateway)))
}
