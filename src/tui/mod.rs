//! Terminal client for browsing movies and managing reviews.
//!
//! # Architecture
//!
//! The client follows the Model-View-Update (MVU) pattern of bubbletea-rs:
//!
//! - **Model**: [`app::MarqueeApp`] owns the active screen and the session
//! - **View**: [`components`] render screen state to text
//! - **Update**: [`messages::AppMsg`] drives the screen state machines in
//!   [`state`]; data calls run as async commands whose results come back as
//!   messages
//!
//! # Initial context
//!
//! bubbletea-rs constructs the model through the static `Model::init()`, so
//! the data service and editor delay are handed over through module-level
//! storage. Call [`set_app_context`] before starting the program.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;

use crate::api::{
    ApiError, Movie, MovieDataService, MovieGateway, MovieId, NewReview, ReviewId, ReviewUpdate,
    SearchField, UserId,
};
use crate::config::DEFAULT_REDIRECT_DELAY_MILLIS;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod routes;
pub mod state;

pub use app::MarqueeApp;

/// Dependencies the application model needs at start-up.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Data access used by every screen.
    pub service: MovieDataService,
    /// Delay before the editor returns to the movie after a save.
    pub redirect_delay: Duration,
}

/// Global storage read by `MarqueeApp::init()`.
static APP_CONTEXT: OnceLock<AppContext> = OnceLock::new();

/// Stores the start-up context for the TUI application.
///
/// Returns `true` if the context was set, `false` if it was already set.
pub fn set_app_context(context: AppContext) -> bool {
    APP_CONTEXT.set(context).is_ok()
}

/// Returns the stored context, or one whose every call fails with a
/// configuration error when none was stored.
pub(crate) fn app_context() -> AppContext {
    APP_CONTEXT.get().cloned().unwrap_or_else(|| AppContext {
        service: MovieDataService::new(Arc::new(UnconfiguredGateway)),
        redirect_delay: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MILLIS),
    })
}

/// Gateway standing in when the program starts without a context.
struct UnconfiguredGateway;

impl UnconfiguredGateway {
    fn error() -> ApiError {
        ApiError::Configuration {
            message: "movies API is not configured".to_owned(),
        }
    }
}

#[async_trait]
impl MovieGateway for UnconfiguredGateway {
    async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        Err(Self::error())
    }

    async fn movie(&self, _id: &MovieId) -> Result<Movie, ApiError> {
        Err(Self::error())
    }

    async fn ratings(&self) -> Result<Vec<String>, ApiError> {
        Err(Self::error())
    }

    async fn search_movies(&self, _field: SearchField, _query: &str) -> Result<Vec<Movie>, ApiError> {
        Err(Self::error())
    }

    async fn create_review(&self, _payload: &NewReview) -> Result<(), ApiError> {
        Err(Self::error())
    }

    async fn update_review(&self, _payload: &ReviewUpdate) -> Result<(), ApiError> {
        Err(Self::error())
    }

    async fn delete_review(&self, _review_id: &ReviewId, _user_id: &UserId) -> Result<(), ApiError> {
        Err(Self::error())
    }
}
