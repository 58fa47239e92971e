//! Validating facade over a [`MovieGateway`].
//!
//! Every operation accepts raw, user-supplied strings, rejects malformed
//! calls before any request is issued, and logs each failure with its
//! operation name before returning it.

use std::sync::Arc;

use crate::session::Session;

use super::error::ApiError;
use super::gateway::MovieGateway;
use super::ids::{MovieId, ReviewId, SearchField, UserId};
use super::models::{Movie, NewReview, ReviewUpdate};

/// Movie and review operations used by the screens.
#[derive(Clone)]
pub struct MovieDataService {
    gateway: Arc<dyn MovieGateway>,
}

impl std::fmt::Debug for MovieDataService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieDataService").finish_non_exhaustive()
    }
}

impl MovieDataService {
    /// Creates a service backed by `gateway`.
    #[must_use]
    pub fn new(gateway: Arc<dyn MovieGateway>) -> Self {
        Self { gateway }
    }

    /// Loads every movie.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn list_all(&self) -> Result<Vec<Movie>, ApiError> {
        logged("list movies", self.gateway.list_movies().await)
    }

    /// Loads one movie with its reviews.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when `raw_id` is blank or a placeholder,
    /// when the API answers with an error status, or when the API returns a
    /// movie with a different identifier. Transport and decode failures are
    /// propagated unchanged.
    pub async fn get_by_id(&self, raw_id: &str) -> Result<Movie, ApiError> {
        let result = match MovieId::from_route_param(raw_id) {
            Ok(id) => self.fetch_matching(&id).await,
            Err(error) => Err(error),
        };
        logged("get movie", result)
    }

    async fn fetch_matching(&self, id: &MovieId) -> Result<Movie, ApiError> {
        let movie = self.gateway.movie(id).await.map_err(|error| match error {
            ApiError::ServerRejected { status, message } => {
                ApiError::not_found(format!("movie {id} unavailable ({status}): {message}"))
            }
            other => other,
        })?;
        if movie.id != *id {
            return Err(ApiError::not_found(format!(
                "requested movie {id} but the API returned {}",
                movie.id
            )));
        }
        Ok(movie)
    }

    /// Loads the distinct content-rating labels.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn list_ratings(&self) -> Result<Vec<String>, ApiError> {
        logged("list ratings", self.gateway.ratings().await)
    }

    /// Loads movies whose `field` matches `query`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::LocalValidation`] without calling the API when the
    /// query is blank; otherwise propagates gateway failures.
    pub async fn search(&self, query: &str, field: SearchField) -> Result<Vec<Movie>, ApiError> {
        let trimmed = query.trim();
        let result = if trimmed.is_empty() {
            Err(ApiError::local("search query is required"))
        } else {
            self.gateway.search_movies(field, trimmed).await
        };
        logged("search movies", result)
    }

    /// Creates a review for `raw_movie_id` authored by `session`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::LocalValidation`] without calling the API when the
    /// trimmed text is blank or the movie id is blank, `null` or `undefined`.
    pub async fn create_review(
        &self,
        raw_movie_id: &str,
        text: &str,
        session: &Session,
    ) -> Result<(), ApiError> {
        let result = match build_new_review(raw_movie_id, text, session) {
            Ok(payload) => self.gateway.create_review(&payload).await,
            Err(error) => Err(error),
        };
        logged("create review", result)
    }

    /// Replaces the text of review `raw_review_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::LocalValidation`] without calling the API when the
    /// review id or trimmed text is blank, or the movie id is a placeholder.
    pub async fn update_review(
        &self,
        raw_review_id: &str,
        raw_movie_id: &str,
        text: &str,
        session: &Session,
    ) -> Result<(), ApiError> {
        let result = match build_review_update(raw_review_id, raw_movie_id, text, session) {
            Ok(payload) => self.gateway.update_review(&payload).await,
            Err(error) => Err(error),
        };
        logged("update review", result)
    }

    /// Deletes review `raw_review_id` on behalf of `raw_user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::LocalValidation`] without calling the API when
    /// either id is blank.
    pub async fn delete_review(&self, raw_review_id: &str, raw_user_id: &str) -> Result<(), ApiError> {
        let ids = ReviewId::new(raw_review_id)
            .and_then(|review_id| UserId::new(raw_user_id).map(|user_id| (review_id, user_id)));
        let result = match ids {
            Ok((review_id, user_id)) => self.gateway.delete_review(&review_id, &user_id).await,
            Err(error) => Err(error),
        };
        logged("delete review", result)
    }
}

fn review_text(text: &str) -> Result<String, ApiError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ApiError::local("review text is required"));
    }
    Ok(trimmed.to_owned())
}

/// Movie a review is written for; placeholders never reach the API.
fn review_movie_id(raw_movie_id: &str) -> Result<MovieId, ApiError> {
    MovieId::from_route_param(raw_movie_id)
        .map_err(|_| ApiError::local(format!("movie id {raw_movie_id:?} cannot take reviews")))
}

fn build_new_review(raw_movie_id: &str, text: &str, session: &Session) -> Result<NewReview, ApiError> {
    let movie_id = review_movie_id(raw_movie_id)?;
    Ok(NewReview {
        movie_id: movie_id.as_str().to_owned(),
        review: review_text(text)?,
        name: session.name().to_owned(),
        user_id: session.user_id().as_str().to_owned(),
    })
}

fn build_review_update(
    raw_review_id: &str,
    raw_movie_id: &str,
    text: &str,
    session: &Session,
) -> Result<ReviewUpdate, ApiError> {
    let review_id = ReviewId::new(raw_review_id)?;
    let movie_id = review_movie_id(raw_movie_id)?;
    Ok(ReviewUpdate {
        review_id: review_id.as_str().to_owned(),
        movie_id: movie_id.as_str().to_owned(),
        review: review_text(text)?,
        name: session.name().to_owned(),
        user_id: session.user_id().as_str().to_owned(),
    })
}

fn logged<T>(operation: &'static str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    result.inspect_err(|error| {
        tracing::warn!(operation, kind = error.kind(), %error, "movies API call failed");
    })
}
