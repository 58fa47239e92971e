//! Data access layer for the remote movies API.
//!
//! Screens talk to [`MovieDataService`], which validates raw arguments and
//! logs failures before delegating to a [`MovieGateway`]. The production
//! gateway is [`HttpMovieGateway`].

pub mod error;
pub mod gateway;
pub mod ids;
pub mod models;
pub mod service;

pub use error::ApiError;
#[cfg(test)]
pub use gateway::MockMovieGateway;
pub use gateway::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, GatewayConfig, HttpMovieGateway, MovieGateway,
};
pub use ids::{MovieId, ReviewId, SearchField, UserId};
pub use models::{Movie, NewReview, Review, ReviewUpdate};
pub use service::MovieDataService;
