//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.marquee.toml` in the current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `MARQUEE_API_URL` and friends
//! 4. **Command-line arguments** – `--api-url`/`-a`, `--list`/`-l` and the
//!    long-form flags below
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "https://movies.example.com/api/v1/movies"
//! request_timeout_seconds = 5
//! redirect_delay_millis = 1500
//! log_file = "marquee.log"
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::{ApiError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, GatewayConfig};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Launch the interactive terminal client.
    Interactive,
    /// Print the movie listing once and exit.
    Listing,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use marquee::MarqueeConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = MarqueeConfig::load().expect("failed to load configuration");
/// let gateway = config.gateway_config().expect("invalid movies API settings");
/// assert!(gateway.base_url.starts_with("http"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "MARQUEE",
    discovery(
        dotfile_name = ".marquee.toml",
        config_file_name = "marquee.toml",
        app_name = "marquee"
    )
)]
pub struct MarqueeConfig {
    /// Base address of the movies collection.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-a <URL>`
    /// - Environment: `MARQUEE_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_url: String,

    /// Per-request timeout in seconds.
    ///
    /// Can be provided via:
    /// - CLI: `--request-timeout-seconds <SECONDS>`
    /// - Environment: `MARQUEE_REQUEST_TIMEOUT_SECONDS`
    /// - Config file: `request_timeout_seconds = 10`
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Delay before the review editor returns to the movie after saving.
    ///
    /// Can be provided via:
    /// - CLI: `--redirect-delay-millis <MILLIS>`
    /// - Environment: `MARQUEE_REDIRECT_DELAY_MILLIS`
    /// - Config file: `redirect_delay_millis = 1000`
    #[ortho_config()]
    pub redirect_delay_millis: u64,

    /// File receiving diagnostic log output.
    ///
    /// The interactive client owns the terminal, so logs are only written
    /// when a file is configured.
    ///
    /// Can be provided via:
    /// - CLI: `--log-file <PATH>`
    /// - Environment: `MARQUEE_LOG_FILE`
    /// - Config file: `log_file = "..."`
    #[ortho_config(cli_short = 'o')]
    pub log_file: Option<String>,

    /// Prints the movie listing and exits instead of starting the client.
    ///
    /// Can be provided via:
    /// - CLI: `--list` or `-l`
    /// - Config file: `list = true`
    #[ortho_config(cli_short = 'l')]
    pub list: bool,
}

/// Default delay before the editor navigates back after a save.
pub const DEFAULT_REDIRECT_DELAY_MILLIS: u64 = 1_000;

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout_seconds: DEFAULT_TIMEOUT_SECS,
            redirect_delay_millis: DEFAULT_REDIRECT_DELAY_MILLIS,
            log_file: None,
            list: false,
        }
    }
}

impl MarqueeConfig {
    /// Determines which mode the binary runs in.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.list {
            OperationMode::Listing
        } else {
            OperationMode::Interactive
        }
    }

    /// Validates the API settings and builds the gateway configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when the API URL is not an
    /// absolute `http`/`https` URL or the timeout is zero.
    pub fn gateway_config(&self) -> Result<GatewayConfig, ApiError> {
        let url = Url::parse(self.api_url.trim()).map_err(|error| ApiError::Configuration {
            message: format!("api_url {:?} is not a valid URL: {error}", self.api_url),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::Configuration {
                message: format!("api_url must use http or https (got {})", url.scheme()),
            });
        }
        if self.request_timeout_seconds == 0 {
            return Err(ApiError::Configuration {
                message: "request_timeout_seconds must be greater than zero".to_owned(),
            });
        }
        Ok(GatewayConfig::new(
            url.as_str(),
            Duration::from_secs(self.request_timeout_seconds),
        ))
    }

    /// Returns the editor's post-save redirect delay.
    #[must_use]
    pub const fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_millis)
    }
}

#[cfg(test)]
mod tests;
