//! Data models representing movies and their embedded reviews.
//!
//! Types prefixed with `Api` are internal deserialisation targets that accept
//! every field as optional. They convert into the public domain types, which
//! are fully defaulted so that screens never need to guess at missing data.
//! Records without an identifier are dropped during conversion.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ids::{MovieId, ReviewId, UserId};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Movie with its embedded reviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    /// Movie identifier.
    pub id: MovieId,
    /// Display title (empty when the record had none).
    pub title: String,
    /// Plot summary.
    pub plot: Option<String>,
    /// Content rating label (e.g. `PG-13`).
    pub rated: Option<String>,
    /// Poster image URL.
    pub poster: Option<String>,
    /// Runtime in minutes.
    pub runtime_minutes: Option<u32>,
    /// Genres in server order.
    pub genres: Vec<String>,
    /// Release year.
    pub year: Option<i32>,
    /// Reviews in server order.
    pub reviews: Vec<Review>,
}

impl Movie {
    /// Returns the rating label or `Not Rated`.
    #[must_use]
    pub fn rating_label(&self) -> &str {
        self.rated.as_deref().unwrap_or("Not Rated")
    }
}

/// Review embedded in a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Review identifier.
    pub id: ReviewId,
    /// Identifier of the user that owns the review.
    pub user_id: Option<UserId>,
    /// Author display name.
    pub name: Option<String>,
    /// Review body.
    pub text: String,
    /// Creation date as sent by the server.
    pub date: Option<String>,
    /// Movie the review belongs to.
    pub movie_id: Option<MovieId>,
}

impl Review {
    /// Returns the author name or `Anonymous`.
    #[must_use]
    pub fn author(&self) -> &str {
        self.name.as_deref().unwrap_or("Anonymous")
    }

    /// Formats the creation date for display.
    ///
    /// RFC 3339 timestamps are shortened to `YYYY-MM-DD`; any other value is
    /// shown as received.
    #[must_use]
    pub fn display_date(&self) -> String {
        let Some(raw) = self.date.as_deref() else {
            return "an unknown date".to_owned();
        };
        DateTime::parse_from_rfc3339(raw)
            .map_or_else(|_| raw.to_owned(), |parsed| parsed.format("%Y-%m-%d").to_string())
    }

    /// Returns true when `user_id` owns this review.
    #[must_use]
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.user_id.as_ref() == Some(user_id)
    }
}

/// Payload for creating a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReview {
    /// Movie the review is attached to.
    pub movie_id: String,
    /// Review body.
    pub review: String,
    /// Author display name.
    pub name: String,
    /// Acting user.
    pub user_id: String,
}

/// Payload for updating an existing review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewUpdate {
    /// Review being replaced.
    pub review_id: String,
    /// Movie the review is attached to.
    pub movie_id: String,
    /// New review body.
    pub review: String,
    /// Author display name.
    pub name: String,
    /// Acting user.
    pub user_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiMovieList {
    #[serde(default)]
    pub(crate) movies: Vec<ApiMovie>,
}

impl ApiMovieList {
    pub(crate) fn into_movies(self) -> Vec<Movie> {
        self.movies
            .into_iter()
            .filter_map(ApiMovie::into_movie)
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiMovie {
    #[serde(rename = "_id")]
    pub(crate) id: Option<ApiId>,
    pub(crate) title: Option<String>,
    pub(crate) plot: Option<String>,
    pub(crate) rated: Option<String>,
    pub(crate) poster: Option<String>,
    pub(crate) runtime: Option<Value>,
    #[serde(alias = "genre")]
    pub(crate) genres: Option<ApiGenres>,
    pub(crate) year: Option<Value>,
    pub(crate) reviews: Option<Vec<ApiReview>>,
}

impl ApiMovie {
    pub(crate) fn into_movie(self) -> Option<Movie> {
        let id = MovieId::new(self.id?.into_string()).ok()?;
        Some(Movie {
            id,
            title: self.title.unwrap_or_default(),
            plot: non_blank(self.plot),
            rated: non_blank(self.rated),
            poster: non_blank(self.poster),
            runtime_minutes: self
                .runtime
                .as_ref()
                .and_then(lenient_integer)
                .and_then(|value| u32::try_from(value).ok()),
            genres: self.genres.map(ApiGenres::into_vec).unwrap_or_default(),
            year: self
                .year
                .as_ref()
                .and_then(lenient_integer)
                .and_then(|value| i32::try_from(value).ok()),
            reviews: self
                .reviews
                .unwrap_or_default()
                .into_iter()
                .filter_map(ApiReview::into_review)
                .collect(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiReview {
    #[serde(rename = "_id")]
    pub(crate) id: Option<ApiId>,
    pub(crate) user_id: Option<ApiId>,
    pub(crate) name: Option<String>,
    pub(crate) review: Option<String>,
    pub(crate) date: Option<Value>,
    pub(crate) movie_id: Option<ApiId>,
}

impl ApiReview {
    pub(crate) fn into_review(self) -> Option<Review> {
        let id = ReviewId::new(self.id?.into_string()).ok()?;
        Some(Review {
            id,
            user_id: self
                .user_id
                .and_then(|raw| UserId::new(raw.into_string()).ok()),
            name: non_blank(self.name),
            text: self.review.unwrap_or_default(),
            date: self.date.as_ref().and_then(date_string),
            movie_id: self
                .movie_id
                .and_then(|raw| MovieId::new(raw.into_string()).ok()),
        })
    }
}

/// Identifier as plain string, number, or extended-JSON `{"$oid": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum ApiId {
    Text(String),
    Number(i64),
    Object {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

impl ApiId {
    pub(crate) fn into_string(self) -> String {
        match self {
            Self::Text(value) | Self::Object { oid: value } => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum ApiGenres {
    One(String),
    Many(Vec<String>),
}

impl ApiGenres {
    fn into_vec(self) -> Vec<String> {
        let genres = match self {
            Self::One(genre) => vec![genre],
            Self::Many(genres) => genres,
        };
        genres
            .into_iter()
            .map(|genre| genre.trim().to_owned())
            .filter(|genre| !genre.is_empty())
            .collect()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn lenient_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => {
            let digits: String = text.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

fn date_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Object(map) => map.get("$date").and_then(date_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
