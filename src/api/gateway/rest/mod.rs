//! `reqwest` implementation of the movie gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::error::ApiError;
use crate::api::ids::{MovieId, ReviewId, SearchField, UserId};
use crate::api::models::{ApiMovie, ApiMovieList, Movie, NewReview, ReviewUpdate};

use super::MovieGateway;
use super::error_mapping::{map_http_error, map_transport_error};
use super::http_utils::extract_api_message;

/// Base address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/v1/movies";
/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`HttpMovieGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base address of the movies collection (e.g. `http://host/api/v1/movies`).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GatewayConfig {
    /// Constructs configuration with an explicit base address and timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }
}

/// Movie gateway backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpMovieGateway {
    client: Client,
    base_url: Url,
}

#[derive(Debug, Serialize)]
struct DeleteReviewBody<'a> {
    review_id: &'a str,
    user_id: &'a str,
}

impl HttpMovieGateway {
    /// Builds a gateway from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when the base address is not an
    /// absolute `http`/`https` URL or the HTTP client cannot be built.
    pub fn new(config: &GatewayConfig) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| ApiError::Configuration {
                message: format!("failed to configure movies HTTP client: {error}"),
            })?;
        Ok(Self { client, base_url })
    }

    /// Returns the configured base address.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends percent-encoded path segments to the base address.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Configuration {
                message: format!("movies API base cannot carry a path: {}", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(operation: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_http_error(
            operation,
            status,
            extract_api_message(&body),
        ))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        tracing::debug!(operation, base = %self.base_url, "sending movies API request");
        Self::send(operation, request)
            .await?
            .json::<T>()
            .await
            .map_err(|error| ApiError::Decode {
                message: format!("{operation} response could not be decoded: {error}"),
            })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim()).map_err(|error| ApiError::Configuration {
        message: format!("movies API URL {raw:?} is invalid: {error}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::Configuration {
            message: format!("movies API URL must use http or https, got {raw:?}"),
        });
    }
    Ok(url)
}

/// Keeps the first occurrence of each non-blank string label.
fn distinct_labels(values: Vec<serde_json::Value>) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for value in values {
        let Some(label) = value.as_str().map(str::trim) else {
            continue;
        };
        if !label.is_empty() && !labels.iter().any(|existing| existing == label) {
            labels.push(label.to_owned());
        }
    }
    labels
}

#[async_trait]
impl MovieGateway for HttpMovieGateway {
    async fn list_movies(&self) -> Result<Vec<Movie>, ApiError> {
        let url = self.endpoint(&[""])?;
        self.get_json::<ApiMovieList>("list movies", self.client.get(url))
            .await
            .map(ApiMovieList::into_movies)
    }

    async fn movie(&self, id: &MovieId) -> Result<Movie, ApiError> {
        let url = self.endpoint(&[id.as_str()])?;
        let api = self
            .get_json::<ApiMovie>("get movie", self.client.get(url))
            .await?;
        api.into_movie().ok_or_else(|| ApiError::Decode {
            message: format!("get movie {id} returned a record without an identifier"),
        })
    }

    async fn ratings(&self) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint(&["ratings"])?;
        self.get_json::<Vec<serde_json::Value>>("list ratings", self.client.get(url))
            .await
            .map(distinct_labels)
    }

    async fn search_movies(
        &self,
        field: SearchField,
        query: &str,
    ) -> Result<Vec<Movie>, ApiError> {
        let url = self.endpoint(&[""])?;
        let request = self.client.get(url).query(&[(field.query_key(), query)]);
        self.get_json::<ApiMovieList>("search movies", request)
            .await
            .map(ApiMovieList::into_movies)
    }

    async fn create_review(&self, payload: &NewReview) -> Result<(), ApiError> {
        let url = self.endpoint(&[payload.movie_id.as_str(), "reviews"])?;
        Self::send("create review", self.client.post(url).json(payload))
            .await
            .map(drop)
    }

    async fn update_review(&self, payload: &ReviewUpdate) -> Result<(), ApiError> {
        let url = self.endpoint(&[payload.movie_id.as_str(), "reviews"])?;
        Self::send("update review", self.client.put(url).json(payload))
            .await
            .map(drop)
    }

    async fn delete_review(&self, review_id: &ReviewId, user_id: &UserId) -> Result<(), ApiError> {
        let url = self.endpoint(&["reviews"])?;
        let body = DeleteReviewBody {
            review_id: review_id.as_str(),
            user_id: user_id.as_str(),
        };
        Self::send("delete review", self.client.delete(url).json(&body))
            .await
            .map(drop)
    }
}
