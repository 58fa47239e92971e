//! Message routing and screen navigation.
//!
//! Input intents are dispatched to the handler of the active screen. Data
//! results are only applied when the screen that issued them is still
//! active; anything else is dropped.

use bubbletea_rs::Cmd;

use super::{MarqueeApp, Screen, commands};
use crate::tui::messages::AppMsg;
use crate::tui::routes::Route;
use crate::tui::state::{DetailScreen, EditorScreen, ListScreen, LoginForm};

impl MarqueeApp {
    /// Handles a message, returning any command it produces.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_input() {
            return self.handle_input_msg(msg);
        }
        if msg.is_data_result() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    fn handle_input_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match self.screen {
            Screen::List(_) => self.handle_list_input(msg),
            Screen::Detail(_) => self.handle_detail_input(msg),
            Screen::Editor(_) => self.handle_editor_input(msg),
            Screen::Login(_) => self.handle_login_input(msg),
        }
    }

    fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::ListLoaded {
                generation,
                movies,
                ratings,
            } => {
                if let Screen::List(list) = &mut self.screen {
                    list.apply_initial(*generation, movies.clone(), ratings.clone());
                }
                None
            }
            AppMsg::SearchLoaded { generation, movies } => {
                if let Screen::List(list) = &mut self.screen {
                    list.apply_results(*generation, movies.clone());
                }
                None
            }
            AppMsg::MovieLoaded { movie_id, result } => {
                if let Screen::Detail(detail) = &mut self.screen {
                    detail.apply_movie(movie_id, result.clone());
                }
                None
            }
            AppMsg::EditorMovieLoaded { movie_id, result } => {
                let session = self.session.current();
                if let Screen::Editor(editor) = &mut self.screen {
                    editor.apply_movie(movie_id, result.clone(), session);
                }
                None
            }
            AppMsg::ReviewDeleted {
                movie_id,
                review_id,
                result,
            } => {
                self.handle_review_deleted(movie_id, review_id, result.clone());
                None
            }
            AppMsg::ReviewSaved { movie_id, result } => {
                self.handle_review_saved(movie_id, result.clone())
            }
            AppMsg::RedirectElapsed { movie_id } => self.handle_redirect_elapsed(movie_id),
            _ => {
                debug_assert!(false, "non-data message routed to handle_data_msg");
                None
            }
        }
    }

    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::Navigate(route) => self.navigate(route.clone()),
            AppMsg::ToggleSession => self.handle_toggle_session(),
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => None,
        }
    }

    /// Replaces the active screen with the one for `route`.
    pub(crate) fn navigate(&mut self, route: Route) -> Option<Cmd> {
        tracing::debug!(route = %route.path(), "navigating");
        self.status = None;
        match route {
            Route::MovieList => {
                let (list, request) = ListScreen::open();
                let generation = list.generation();
                self.screen = Screen::List(list);
                Some(commands::load_list(self.service.clone(), generation, request))
            }
            Route::MovieDetail { movie_id } => {
                let (detail, target) = DetailScreen::open(&movie_id);
                self.screen = Screen::Detail(detail);
                target.map(|_| commands::load_detail_movie(self.service.clone(), movie_id))
            }
            Route::ReviewEditor { movie_id, existing } => {
                let editor = EditorScreen::open(&movie_id, existing);
                let needs_movie = editor.needs_movie();
                self.screen = Screen::Editor(editor);
                needs_movie.then(|| commands::load_editor_movie(self.service.clone(), movie_id))
            }
            Route::Login => {
                self.screen = Screen::Login(LoginForm::new());
                None
            }
        }
    }
}
