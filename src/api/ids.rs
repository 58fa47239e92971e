//! Identity wrappers for movies, reviews, and users.
//!
//! The remote service treats identifiers as opaque strings. These wrappers
//! trim surrounding whitespace and reject blank values so that a malformed
//! call is caught before any request is built.

use std::fmt;

use super::error::ApiError;

/// Route parameter values produced by a client that stringified a missing id.
const PLACEHOLDER_IDS: [&str; 2] = ["null", "undefined"];

fn require_non_blank(value: &str, label: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::local(format!("{label} is required")));
    }
    Ok(trimmed.to_owned())
}

/// Movie identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovieId(String);

impl MovieId {
    /// Validates that the identifier is non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::LocalValidation`] when the value is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ApiError> {
        require_non_blank(value.as_ref(), "movie id").map(Self)
    }

    /// Parses a `/movies/:id` route parameter.
    ///
    /// Besides blank values this rejects the literal placeholders `null` and
    /// `undefined`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the parameter cannot name a movie.
    pub fn from_route_param(raw: &str) -> Result<Self, ApiError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || PLACEHOLDER_IDS.contains(&trimmed) {
            return Err(ApiError::not_found(format!(
                "invalid movie id in route: {raw:?}"
            )));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the detail route for this movie.
    #[must_use]
    pub fn detail_route(&self) -> String {
        format!("/movies/{}", self.0)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Review identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReviewId(String);

impl ReviewId {
    /// Validates that the identifier is non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::LocalValidation`] when the value is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ApiError> {
        require_non_blank(value.as_ref(), "review id").map(Self)
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// User identifier chosen at login.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Validates that the identifier is non-blank.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::LocalValidation`] when the value is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ApiError> {
        require_non_blank(value.as_ref(), "user id").map(Self)
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Field a movie search is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Match on the movie title.
    Title,
    /// Match on the content rating label.
    Rating,
}

impl SearchField {
    /// Query-string key understood by the movies API.
    #[must_use]
    pub const fn query_key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Rating => "rated",
        }
    }
}
