//! Review editor input handling and save flow.

use bubbletea_rs::Cmd;

use super::{MarqueeApp, Screen, commands};
use crate::api::ApiError;
use crate::tui::messages::AppMsg;
use crate::tui::routes::Route;
use crate::tui::state::EditorPhase;

impl MarqueeApp {
    /// Handles input while the review editor is shown.
    pub(super) fn handle_editor_input(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let session = self.session.current();
        let Screen::Editor(editor) = &mut self.screen else {
            return None;
        };

        match msg {
            AppMsg::InsertChar(ch) => {
                editor.insert_char(*ch);
                None
            }
            AppMsg::DeleteChar => {
                editor.delete_char();
                None
            }
            AppMsg::Confirm => {
                let request = editor.submit(session)?;
                let author = session?.clone();
                Some(commands::save_review(self.service.clone(), request, author))
            }
            AppMsg::Cancel => {
                if editor.phase() == EditorPhase::Submitting {
                    return None;
                }
                let movie_id = editor.movie_id().to_owned();
                self.navigate(Route::MovieDetail { movie_id })
            }
            _ => None,
        }
    }

    /// Applies a save outcome and schedules the return to the movie.
    pub(super) fn handle_review_saved(
        &mut self,
        movie_id: &str,
        result: Result<(), ApiError>,
    ) -> Option<Cmd> {
        let Screen::Editor(editor) = &mut self.screen else {
            return None;
        };
        if let Err(error) = &result {
            tracing::warn!(movie_id, %error, "review save failed");
        }
        editor
            .apply_saved(movie_id, result)
            .then(|| commands::redirect_after(self.redirect_delay, movie_id.to_owned()))
    }

    /// Returns to the movie once the confirmation delay has passed.
    pub(super) fn handle_redirect_elapsed(&mut self, movie_id: &str) -> Option<Cmd> {
        let still_confirming = matches!(
            &self.screen,
            Screen::Editor(editor)
                if editor.movie_id() == movie_id && editor.phase() == EditorPhase::Submitted
        );
        if !still_confirming {
            return None;
        }
        self.navigate(Route::MovieDetail {
            movie_id: movie_id.to_owned(),
        })
    }
}
