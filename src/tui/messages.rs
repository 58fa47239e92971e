//! Message types for the TUI update loop.
//!
//! Messages represent user intents decoded from key presses, results of
//! async data commands, and terminal events.

use crate::api::{ApiError, Movie, ReviewId};

use super::routes::Route;

/// Messages for the movie review client.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Input intents
    /// Move the selection up.
    CursorUp,
    /// Move the selection down.
    CursorDown,
    /// Activate the selection or submit the focused form.
    Confirm,
    /// Leave the current input or screen.
    Cancel,
    /// Type a character into the focused field.
    InsertChar(char),
    /// Delete the character before the caret.
    DeleteChar,
    /// Move focus to the next form field.
    NextField,
    /// Focus the title search box.
    FocusSearch,
    /// Select the next content-rating filter.
    CycleRating,
    /// Open the editor for a new review.
    AddReview,
    /// Open the editor for the selected review.
    EditReview,
    /// Delete the selected review.
    DeleteReview,
    /// Open the login form, or log out when a session exists.
    ToggleSession,

    // Navigation
    /// Switch to another screen.
    Navigate(Route),

    // Data results
    /// Initial movie collection and rating vocabulary.
    ListLoaded {
        /// List screen request generation the results answer.
        generation: u64,
        /// Movie collection result.
        movies: Result<Vec<Movie>, ApiError>,
        /// Rating vocabulary result.
        ratings: Result<Vec<String>, ApiError>,
    },
    /// Search, filter or unfiltered reload results.
    SearchLoaded {
        /// List screen request generation the result answers.
        generation: u64,
        /// Movie collection result.
        movies: Result<Vec<Movie>, ApiError>,
    },
    /// Movie requested by the detail screen.
    MovieLoaded {
        /// Route parameter the request was issued for.
        movie_id: String,
        /// Fetch result.
        result: Result<Movie, ApiError>,
    },
    /// Movie context requested by the review editor.
    EditorMovieLoaded {
        /// Movie the editor was opened for.
        movie_id: String,
        /// Fetch result.
        result: Result<Movie, ApiError>,
    },
    /// Outcome of a review deletion.
    ReviewDeleted {
        /// Movie whose review was targeted.
        movie_id: String,
        /// Review that was targeted.
        review_id: ReviewId,
        /// Deletion result.
        result: Result<(), ApiError>,
    },
    /// Outcome of a review create or update.
    ReviewSaved {
        /// Movie the review belongs to.
        movie_id: String,
        /// Save result.
        result: Result<(), ApiError>,
    },
    /// The post-save confirmation delay elapsed.
    RedirectElapsed {
        /// Movie to return to.
        movie_id: String,
    },

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for results of async data commands.
    #[must_use]
    pub const fn is_data_result(&self) -> bool {
        matches!(
            self,
            Self::ListLoaded { .. }
                | Self::SearchLoaded { .. }
                | Self::MovieLoaded { .. }
                | Self::EditorMovieLoaded { .. }
                | Self::ReviewDeleted { .. }
                | Self::ReviewSaved { .. }
                | Self::RedirectElapsed { .. }
        )
    }

    /// Returns true for messages decoded from key presses.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::Confirm
                | Self::Cancel
                | Self::InsertChar(_)
                | Self::DeleteChar
                | Self::NextField
                | Self::FocusSearch
                | Self::CycleRating
                | Self::AddReview
                | Self::EditReview
                | Self::DeleteReview
        )
    }
}
