//! Test helpers for constructing `Movie` and `Review` fixtures.
//!
//! # Examples
//!
//! ```
//! use marquee::api::models::test_support::{movie, owned_review};
//!
//! let mut inception = movie("1", "Inception");
//! inception.reviews.push(owned_review("r1", "u1", "Mind-bending"));
//! assert_eq!(inception.reviews.len(), 1);
//! ```

use super::{Movie, Review};
use crate::api::ids::{MovieId, ReviewId, UserId};

/// Constructs a movie with only an id and title set.
///
/// # Panics
///
/// Panics if `id` is blank.
#[must_use]
pub fn movie(id: &str, title: &str) -> Movie {
    Movie {
        id: MovieId::new(id).unwrap_or_else(|error| panic!("fixture movie id: {error}")),
        title: title.to_owned(),
        plot: None,
        rated: None,
        poster: None,
        runtime_minutes: None,
        genres: Vec::new(),
        year: None,
        reviews: Vec::new(),
    }
}

/// Constructs a review owned by `user_id`.
///
/// # Panics
///
/// Panics if `id` or `user_id` is blank.
#[must_use]
pub fn owned_review(id: &str, user_id: &str, text: &str) -> Review {
    Review {
        id: ReviewId::new(id).unwrap_or_else(|error| panic!("fixture review id: {error}")),
        user_id: Some(UserId::new(user_id).unwrap_or_else(|error| panic!("fixture user: {error}"))),
        name: Some(format!("user {user_id}")),
        text: text.to_owned(),
        date: Some("2024-05-01T12:00:00Z".to_owned()),
        movie_id: None,
    }
}
