//! Gateways for talking to the remote movies API.
//!
//! The trait describes the raw remote capabilities with already-validated,
//! typed arguments. [`HttpMovieGateway`] implements it over `reqwest`; tests
//! mock the trait to observe which calls the higher layers issue.

mod error_mapping;
mod http_utils;
mod rest;

pub use rest::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, GatewayConfig, HttpMovieGateway};

use async_trait::async_trait;

use crate::api::error::ApiError;
use crate::api::ids::{MovieId, ReviewId, SearchField, UserId};
use crate::api::models::{Movie, NewReview, ReviewUpdate};

/// Gateway that can load movies and mutate reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieGateway: Send + Sync {
    /// Fetch every movie.
    async fn list_movies(&self) -> Result<Vec<Movie>, ApiError>;

    /// Fetch one movie with its embedded reviews.
    async fn movie(&self, id: &MovieId) -> Result<Movie, ApiError>;

    /// Fetch the content-rating vocabulary in server order.
    async fn ratings(&self) -> Result<Vec<String>, ApiError>;

    /// Fetch movies whose `field` matches `query`.
    async fn search_movies(&self, field: SearchField, query: &str)
    -> Result<Vec<Movie>, ApiError>;

    /// Create a review under a movie.
    async fn create_review(&self, payload: &NewReview) -> Result<(), ApiError>;

    /// Replace the text of an existing review.
    async fn update_review(&self, payload: &ReviewUpdate) -> Result<(), ApiError>;

    /// Delete a review on behalf of the acting user.
    async fn delete_review(&self, review_id: &ReviewId, user_id: &UserId)
    -> Result<(), ApiError>;
}
