//! Movie detail screen state.
//!
//! Review edit and delete actions pass through the owner-only gate in
//! [`crate::session::can_modify`]. A successful delete removes the review
//! from local state without refetching the movie.

use crate::api::{ApiError, Movie, MovieId, Review, ReviewId, UserId};
use crate::session::{Session, can_modify};
use crate::tui::routes::Route;

/// Lifecycle of the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPhase {
    /// Waiting for the movie.
    Loading,
    /// The movie is displayed.
    Ready(Movie),
    /// The route parameter cannot name a movie.
    InvalidId,
    /// The movie could not be fetched.
    FetchFailed(String),
}

/// Deletion the screen wants issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    /// Review to delete.
    pub review_id: ReviewId,
    /// Acting user.
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingDelete {
    review_id: ReviewId,
    position: usize,
}

/// State of the movie detail screen.
#[derive(Debug, Clone)]
pub struct DetailScreen {
    movie_id: String,
    phase: DetailPhase,
    cursor: usize,
    notice: Option<String>,
    pending_delete: Option<PendingDelete>,
}

impl DetailScreen {
    /// Opens the screen for `raw_id`.
    ///
    /// Returns the movie to fetch, or `None` when the route parameter is
    /// empty or a `null`/`undefined` placeholder.
    #[must_use]
    pub fn open(raw_id: &str) -> (Self, Option<MovieId>) {
        let target = MovieId::from_route_param(raw_id).ok();
        let phase = if target.is_some() {
            DetailPhase::Loading
        } else {
            DetailPhase::InvalidId
        };
        let screen = Self {
            movie_id: raw_id.to_owned(),
            phase,
            cursor: 0,
            notice: None,
            pending_delete: None,
        };
        (screen, target)
    }

    /// Returns the route parameter this screen shows.
    #[must_use]
    pub fn movie_id(&self) -> &str {
        &self.movie_id
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    /// Returns the loaded movie.
    #[must_use]
    pub const fn movie(&self) -> Option<&Movie> {
        match &self.phase {
            DetailPhase::Ready(movie) => Some(movie),
            _ => None,
        }
    }

    /// Returns the selected review index.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the last action notice.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Returns the selected review.
    #[must_use]
    pub fn selected_review(&self) -> Option<&Review> {
        self.movie().and_then(|movie| movie.reviews.get(self.cursor))
    }

    /// Applies the fetch result for `movie_id`; other ids are stale.
    pub fn apply_movie(&mut self, movie_id: &str, result: Result<Movie, ApiError>) {
        if movie_id != self.movie_id {
            return;
        }
        self.cursor = 0;
        self.phase = match result {
            Ok(movie) => DetailPhase::Ready(movie),
            Err(ApiError::NotFound { .. }) => {
                DetailPhase::FetchFailed("Movie not found.".to_owned())
            }
            Err(error) => DetailPhase::FetchFailed(format!("Could not load movie: {error}")),
        };
    }

    /// Moves the selection up one review.
    pub const fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the selection down one review.
    pub fn cursor_down(&mut self) {
        let count = self.movie().map_or(0, |movie| movie.reviews.len());
        if self.cursor.saturating_add(1) < count {
            self.cursor += 1;
        }
    }

    fn gate_selected(&mut self, session: Option<&Session>) -> Option<Review> {
        let Some(review) = self.selected_review().cloned() else {
            self.notice = Some("Select a review first.".to_owned());
            return None;
        };
        if session.is_none() {
            self.notice = Some("Log in to manage your reviews.".to_owned());
            return None;
        }
        if !can_modify(session, &review) {
            self.notice = Some("Only the author can change this review.".to_owned());
            return None;
        }
        Some(review)
    }

    /// Requests deletion of the selected review.
    ///
    /// Returns `None` and sets a notice when no session exists, the session
    /// does not own the review, or a deletion is already pending.
    pub fn request_delete(&mut self, session: Option<&Session>) -> Option<DeleteRequest> {
        if self.pending_delete.is_some() {
            self.notice = Some("A review is already being deleted.".to_owned());
            return None;
        }
        let review = self.gate_selected(session)?;
        let user_id = session?.user_id().clone();
        self.pending_delete = Some(PendingDelete {
            review_id: review.id.clone(),
            position: self.cursor,
        });
        self.notice = None;
        Some(DeleteRequest {
            review_id: review.id,
            user_id,
        })
    }

    /// Applies a deletion outcome.
    ///
    /// On success the review is removed at the position it occupied when
    /// the deletion was requested; on failure the reviews are unchanged.
    pub fn apply_delete(&mut self, review_id: &ReviewId, result: Result<(), ApiError>) {
        let Some(pending) = self.pending_delete.take() else {
            return;
        };
        if pending.review_id != *review_id {
            self.pending_delete = Some(pending);
            return;
        }
        if let Err(error) = result {
            self.notice = Some(format!("Failed to delete review: {error}"));
            return;
        }
        let DetailPhase::Ready(movie) = &mut self.phase else {
            return;
        };
        let matches_position = movie
            .reviews
            .get(pending.position)
            .is_some_and(|review| review.id == pending.review_id);
        if matches_position {
            movie.reviews.remove(pending.position);
        } else {
            movie.reviews.retain(|review| review.id != pending.review_id);
        }
        let remaining = movie.reviews.len();
        self.cursor = self.cursor.min(remaining.saturating_sub(1));
        self.notice = Some("Review deleted.".to_owned());
    }

    /// Returns the editor route for the selected review, if permitted.
    pub fn request_edit(&mut self, session: Option<&Session>) -> Option<Route> {
        let review = self.gate_selected(session)?;
        Some(Route::ReviewEditor {
            movie_id: self.movie_id.clone(),
            existing: Some(review),
        })
    }

    /// Returns the editor route for a new review, if a session exists and
    /// the movie is shown.
    pub fn request_add(&mut self, session: Option<&Session>) -> Option<Route> {
        if session.is_none() {
            self.notice = Some("Log in to write a review.".to_owned());
            return None;
        }
        let unavailable = match &self.phase {
            DetailPhase::Ready(_) => None,
            DetailPhase::Loading => Some("Wait for the movie to load."),
            DetailPhase::InvalidId | DetailPhase::FetchFailed(_) => {
                Some("This movie cannot be reviewed.")
            }
        };
        if let Some(reason) = unavailable {
            self.notice = Some(reason.to_owned());
            return None;
        }
        Some(Route::ReviewEditor {
            movie_id: self.movie_id.clone(),
            existing: None,
        })
    }
}
