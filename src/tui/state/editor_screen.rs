//! Review editor screen state.
//!
//! The editor creates a review, or updates one when it was opened with an
//! existing review as navigation state. Submission needs a session and
//! non-blank text; on success the screen confirms and the application
//! returns to the movie after a delay.

use crate::api::{ApiError, Movie, MovieId, Review};
use crate::session::Session;

/// Shown when submitting blank text.
pub const EMPTY_REVIEW_MESSAGE: &str = "Review cannot be empty.";
/// Shown when the API rejects a save.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save review. Please try again.";
/// Shown after a successful save.
pub const SAVED_MESSAGE: &str = "Review submitted successfully!";
/// Shown when no session exists.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to write a review.";
/// Shown when the route cannot name a movie.
pub const INVALID_MOVIE_MESSAGE: &str = "Invalid movie id; reviews cannot be saved.";
/// Shown when submitting before the movie context has arrived.
pub const STILL_LOADING_MESSAGE: &str = "Still loading the movie. Try again in a moment.";

/// Lifecycle of the review editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    /// Waiting for the movie context.
    LoadingMovie,
    /// Accepting text.
    FormReady,
    /// No session; the form is disabled.
    Blocked,
    /// The route cannot name a movie; the form is disabled.
    InvalidMovie,
    /// A save is in flight.
    Submitting,
    /// The save succeeded.
    Submitted,
}

/// Save the editor wants issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    /// Create a review.
    Create {
        /// Movie the review belongs to.
        movie_id: String,
        /// Review text as typed.
        text: String,
    },
    /// Update an existing review.
    Update {
        /// Review being replaced.
        review_id: String,
        /// Movie the review belongs to.
        movie_id: String,
        /// Review text as typed.
        text: String,
    },
}

/// State of the review editor screen.
#[derive(Debug, Clone)]
pub struct EditorScreen {
    movie_id: String,
    existing: Option<Review>,
    movie_title: Option<String>,
    text: String,
    phase: EditorPhase,
    error: Option<String>,
    notice: Option<String>,
}

impl EditorScreen {
    /// Opens the editor for `movie_id`.
    ///
    /// Edit mode pre-fills the existing review text. An empty, `null` or
    /// `undefined` id opens the editor in [`EditorPhase::InvalidMovie`].
    #[must_use]
    pub fn open(movie_id: &str, existing: Option<Review>) -> Self {
        let text = existing
            .as_ref()
            .map(|review| review.text.clone())
            .unwrap_or_default();
        let phase = if MovieId::from_route_param(movie_id).is_ok() {
            EditorPhase::LoadingMovie
        } else {
            EditorPhase::InvalidMovie
        };
        Self {
            movie_id: movie_id.to_owned(),
            existing,
            movie_title: None,
            text,
            phase,
            error: None,
            notice: None,
        }
    }

    /// Returns true while the movie context should be fetched.
    #[must_use]
    pub const fn needs_movie(&self) -> bool {
        matches!(self.phase, EditorPhase::LoadingMovie)
    }

    /// Returns the movie the editor is attached to.
    #[must_use]
    pub fn movie_id(&self) -> &str {
        &self.movie_id
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> EditorPhase {
        self.phase
    }

    /// Returns true when an existing review is being edited.
    #[must_use]
    pub const fn is_edit_mode(&self) -> bool {
        self.existing.is_some()
    }

    /// Returns the text typed so far.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the loaded movie title.
    #[must_use]
    pub fn movie_title(&self) -> Option<&str> {
        self.movie_title.as_deref()
    }

    /// Returns the validation or save error.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the informational notice.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Applies the movie context.
    ///
    /// A failed fetch still allows authoring, since a save only needs the
    /// movie identifier; the failure is shown as a notice.
    pub fn apply_movie(
        &mut self,
        movie_id: &str,
        result: Result<Movie, ApiError>,
        session: Option<&Session>,
    ) {
        if movie_id != self.movie_id || self.phase != EditorPhase::LoadingMovie {
            return;
        }
        match result {
            Ok(movie) => {
                self.movie_title = Some(movie.title);
                self.notice = None;
            }
            Err(error) => self.notice = Some(format!("Movie details unavailable: {error}")),
        }
        self.phase = if session.is_some() {
            EditorPhase::FormReady
        } else {
            EditorPhase::Blocked
        };
    }

    /// Reacts to login or logout while open.
    pub const fn session_changed(&mut self, session: Option<&Session>) {
        match (self.phase, session) {
            (EditorPhase::FormReady, None) => self.phase = EditorPhase::Blocked,
            (EditorPhase::Blocked, Some(_)) => self.phase = EditorPhase::FormReady,
            _ => {}
        }
    }

    /// Appends a character while the form accepts text.
    pub fn insert_char(&mut self, ch: char) {
        if self.accepts_text() {
            self.text.push(ch);
            self.error = None;
        }
    }

    /// Removes the last character while the form accepts text.
    pub fn delete_char(&mut self) {
        if self.accepts_text() {
            self.text.pop();
        }
    }

    fn accepts_text(&self) -> bool {
        matches!(self.phase, EditorPhase::FormReady | EditorPhase::LoadingMovie)
    }

    /// Validates and starts a save.
    ///
    /// Returns `None` without a request when the form is not ready, no
    /// session exists, or the text is blank.
    pub fn submit(&mut self, session: Option<&Session>) -> Option<SubmitRequest> {
        if session.is_none() {
            if self.phase == EditorPhase::FormReady {
                self.phase = EditorPhase::Blocked;
            }
            return None;
        }
        if self.phase == EditorPhase::LoadingMovie {
            self.notice = Some(STILL_LOADING_MESSAGE.to_owned());
            return None;
        }
        if self.phase != EditorPhase::FormReady {
            return None;
        }
        if self.text.trim().is_empty() {
            self.error = Some(EMPTY_REVIEW_MESSAGE.to_owned());
            return None;
        }
        self.error = None;
        self.phase = EditorPhase::Submitting;
        let request = match &self.existing {
            Some(review) => SubmitRequest::Update {
                review_id: review.id.as_str().to_owned(),
                movie_id: self.movie_id.clone(),
                text: self.text.clone(),
            },
            None => SubmitRequest::Create {
                movie_id: self.movie_id.clone(),
                text: self.text.clone(),
            },
        };
        Some(request)
    }

    /// Applies a save outcome. Returns true when the save succeeded.
    ///
    /// Failures return to the form with the typed text preserved.
    pub fn apply_saved(&mut self, movie_id: &str, result: Result<(), ApiError>) -> bool {
        if movie_id != self.movie_id || self.phase != EditorPhase::Submitting {
            return false;
        }
        match result {
            Ok(()) => {
                self.phase = EditorPhase::Submitted;
                self.notice = Some(SAVED_MESSAGE.to_owned());
                true
            }
            Err(_) => {
                self.phase = EditorPhase::FormReady;
                self.error = Some(SAVE_FAILED_MESSAGE.to_owned());
                false
            }
        }
    }
}
