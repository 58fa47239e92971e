//! Movie detail input handling.

use bubbletea_rs::Cmd;

use super::{MarqueeApp, Screen, commands};
use crate::api::{ApiError, ReviewId};
use crate::tui::messages::AppMsg;
use crate::tui::routes::Route;

impl MarqueeApp {
    /// Handles input while a movie detail is shown.
    pub(super) fn handle_detail_input(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let session = self.session.current();
        let Screen::Detail(detail) = &mut self.screen else {
            return None;
        };

        match msg {
            AppMsg::CursorUp => {
                detail.cursor_up();
                None
            }
            AppMsg::CursorDown => {
                detail.cursor_down();
                None
            }
            AppMsg::Cancel => self.navigate(Route::MovieList),
            AppMsg::AddReview => {
                let route = detail.request_add(session)?;
                self.navigate(route)
            }
            AppMsg::EditReview => {
                let route = detail.request_edit(session)?;
                self.navigate(route)
            }
            AppMsg::DeleteReview => {
                let request = detail.request_delete(session)?;
                let movie_id = detail.movie_id().to_owned();
                tracing::info!(review_id = %request.review_id, "deleting review");
                Some(commands::delete_review(
                    self.service.clone(),
                    movie_id,
                    request,
                ))
            }
            _ => None,
        }
    }

    /// Applies a deletion outcome to the movie it was issued for.
    pub(super) fn handle_review_deleted(
        &mut self,
        movie_id: &str,
        review_id: &ReviewId,
        result: Result<(), ApiError>,
    ) {
        if let Screen::Detail(detail) = &mut self.screen
            && detail.movie_id() == movie_id
        {
            detail.apply_delete(review_id, result);
        }
    }
}
