//! Diagnostic logging setup for the binary.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use camino::Utf8Path;
use tracing_subscriber::fmt::{self, time::ChronoUtc};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::ApiError;

/// Where diagnostic output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'path> {
    /// Append to the named file.
    File(&'path Utf8Path),
    /// Write to standard error.
    Stderr,
    /// Install nothing.
    Disabled,
}

impl<'path> LogTarget<'path> {
    /// Chooses a target: a configured file always wins, otherwise stderr is
    /// only used when the terminal is not owned by the interactive client.
    #[must_use]
    pub fn select(log_file: Option<&'path str>, interactive: bool) -> Self {
        match log_file {
            Some(path) => Self::File(Utf8Path::new(path)),
            None if interactive => Self::Disabled,
            None => Self::Stderr,
        }
    }
}

/// Installs the global `tracing` subscriber for `target`.
///
/// The filter defaults to `info` and honours `RUST_LOG`.
///
/// # Errors
///
/// Returns [`ApiError::Io`] when the log file cannot be opened and
/// [`ApiError::Configuration`] when a subscriber is already installed.
pub fn init_logging(target: LogTarget<'_>) -> Result<(), ApiError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = Registry::default().with(filter);

    let installed = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => registry
            .with(
                fmt::layer()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            registry
                .with(
                    fmt::layer()
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
        }
    };

    installed.map_err(|error| ApiError::Configuration {
        message: format!("failed to install log subscriber: {error}"),
    })
}

fn open_log_file(path: &Utf8Path) -> Result<std::fs::File, ApiError> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|error| ApiError::Io {
            message: format!("failed to create log directory {parent}: {error}"),
        })?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| ApiError::Io {
            message: format!("failed to open log file {path}: {error}"),
        })
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;
    use rstest::rstest;

    use super::{LogTarget, open_log_file};

    #[rstest]
    #[case::file_when_interactive(Some("client.log"), true, LogTarget::File(Utf8Path::new("client.log")))]
    #[case::file_when_listing(Some("client.log"), false, LogTarget::File(Utf8Path::new("client.log")))]
    #[case::silent_when_interactive(None, true, LogTarget::Disabled)]
    #[case::stderr_when_listing(None, false, LogTarget::Stderr)]
    fn target_selection(
        #[case] log_file: Option<&str>,
        #[case] interactive: bool,
        #[case] expected: LogTarget<'static>,
    ) {
        assert_eq!(LogTarget::select(log_file, interactive), expected);
    }

    #[test]
    fn log_file_parent_directories_are_created() {
        let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
        let root = temp_dir.path().to_str().expect("temp path should be UTF-8");
        let path = format!("{root}/nested/logs/marquee.log");

        open_log_file(Utf8Path::new(&path)).expect("log file should open");

        assert!(std::path::Path::new(&path).exists());
    }
}
