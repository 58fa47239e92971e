//! Main TUI application model implementing the MVU pattern.
//!
//! # Module Structure
//!
//! - `model_impl`: `bubbletea_rs::Model` implementation
//! - `routing`: message dispatch and screen navigation
//! - `commands`: async data commands
//! - `list_handlers`, `detail_handlers`, `editor_handlers`,
//!   `session_handlers`: per-screen message handling
//! - `rendering`: frame chrome around the screen components

use std::time::Duration;

use bubbletea_rs::Cmd;

use crate::api::MovieDataService;
use crate::session::SessionHolder;

use super::AppContext;
use super::routes::Route;
use super::state::{DetailScreen, EditorScreen, ListScreen, LoginForm};

mod commands;
mod detail_handlers;
mod editor_handlers;
mod list_handlers;
mod model_impl;
mod rendering;
mod routing;
mod session_handlers;

/// The screen currently shown.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Movie list at `/movies`.
    List(ListScreen),
    /// Movie detail at `/movies/:id`.
    Detail(DetailScreen),
    /// Review editor at `/movies/:id/review`.
    Editor(EditorScreen),
    /// Login form at `/login`.
    Login(LoginForm),
}

/// Main application model for the movie review client.
#[derive(Debug)]
pub struct MarqueeApp {
    service: MovieDataService,
    redirect_delay: Duration,
    pub(crate) session: SessionHolder,
    pub(crate) screen: Screen,
    /// One-line message shown in the status bar.
    pub(crate) status: Option<String>,
    width: u16,
    height: u16,
}

impl MarqueeApp {
    /// Creates the application on the movie list, returning the command
    /// that loads it.
    #[must_use]
    pub fn new(context: AppContext) -> (Self, Option<Cmd>) {
        let (list, request) = ListScreen::open();
        let app = Self {
            service: context.service,
            redirect_delay: context.redirect_delay,
            session: SessionHolder::default(),
            screen: Screen::List(list),
            status: None,
            width: 80,
            height: 24,
        };
        let cmd = commands::load_list(app.service.clone(), 0, request);
        (app, Some(cmd))
    }

    /// Returns the active screen.
    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Returns the session holder.
    #[must_use]
    pub const fn session(&self) -> &SessionHolder {
        &self.session
    }

    /// Returns the status bar message.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the route of the active screen.
    ///
    /// Editor routes do not carry the review being edited.
    #[must_use]
    pub fn route(&self) -> Route {
        match &self.screen {
            Screen::List(_) => Route::MovieList,
            Screen::Detail(detail) => Route::MovieDetail {
                movie_id: detail.movie_id().to_owned(),
            },
            Screen::Editor(editor) => Route::ReviewEditor {
                movie_id: editor.movie_id().to_owned(),
                existing: None,
            },
            Screen::Login(_) => Route::Login,
        }
    }
}
