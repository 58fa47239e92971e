//! Async data commands.
//!
//! Each command owns a clone of the data service and resolves to exactly one
//! [`AppMsg`] carrying the result, tagged with what it was issued for so the
//! model can drop responses that arrive after their screen was left.

use std::any::Any;
use std::time::Duration;

use bubbletea_rs::Cmd;

use crate::api::MovieDataService;
use crate::session::Session;
use crate::tui::messages::AppMsg;
use crate::tui::state::{DeleteRequest, ListRequest, SubmitRequest};

fn deliver(msg: AppMsg) -> Option<Box<dyn Any + Send>> {
    Some(Box::new(msg) as Box<dyn Any + Send>)
}

/// Loads list screen data for `generation`.
///
/// The initial request joins the movie and ratings calls concurrently.
pub(super) fn load_list(service: MovieDataService, generation: u64, request: ListRequest) -> Cmd {
    Box::pin(async move {
        let msg = match request {
            ListRequest::Initial => {
                let (movies, ratings) = tokio::join!(service.list_all(), service.list_ratings());
                AppMsg::ListLoaded {
                    generation,
                    movies,
                    ratings,
                }
            }
            ListRequest::All => AppMsg::SearchLoaded {
                generation,
                movies: service.list_all().await,
            },
            ListRequest::Search { query, field } => AppMsg::SearchLoaded {
                generation,
                movies: service.search(&query, field).await,
            },
        };
        deliver(msg)
    })
}

/// Loads the movie shown by the detail screen.
pub(super) fn load_detail_movie(service: MovieDataService, movie_id: String) -> Cmd {
    Box::pin(async move {
        let result = service.get_by_id(&movie_id).await;
        deliver(AppMsg::MovieLoaded { movie_id, result })
    })
}

/// Loads the movie context of the review editor.
pub(super) fn load_editor_movie(service: MovieDataService, movie_id: String) -> Cmd {
    Box::pin(async move {
        let result = service.get_by_id(&movie_id).await;
        deliver(AppMsg::EditorMovieLoaded { movie_id, result })
    })
}

/// Deletes a review on behalf of the session user.
pub(super) fn delete_review(
    service: MovieDataService,
    movie_id: String,
    request: DeleteRequest,
) -> Cmd {
    Box::pin(async move {
        let result = service
            .delete_review(request.review_id.as_str(), request.user_id.as_str())
            .await;
        deliver(AppMsg::ReviewDeleted {
            movie_id,
            review_id: request.review_id,
            result,
        })
    })
}

/// Creates or updates a review authored by `session`.
pub(super) fn save_review(
    service: MovieDataService,
    request: SubmitRequest,
    session: Session,
) -> Cmd {
    Box::pin(async move {
        let (movie_id, result) = match request {
            SubmitRequest::Create { movie_id, text } => {
                let result = service.create_review(&movie_id, &text, &session).await;
                (movie_id, result)
            }
            SubmitRequest::Update {
                review_id,
                movie_id,
                text,
            } => {
                let result = service
                    .update_review(&review_id, &movie_id, &text, &session)
                    .await;
                (movie_id, result)
            }
        };
        deliver(AppMsg::ReviewSaved { movie_id, result })
    })
}

/// Emits [`AppMsg::RedirectElapsed`] after `delay`.
pub(super) fn redirect_after(delay: Duration, movie_id: String) -> Cmd {
    Box::pin(async move {
        tokio::time::sleep(delay).await;
        deliver(AppMsg::RedirectElapsed { movie_id })
    })
}
