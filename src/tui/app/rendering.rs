//! Frame chrome around the screen components.
//!
//! These are pure query methods over application state.

use super::{MarqueeApp, Screen};
use crate::tui::components::{
    MovieDetailViewContext, MovieGridViewContext, render_editor, render_login,
    render_movie_detail, render_movie_grid,
};
use crate::tui::state::{EditorPhase, ListFocus};

/// Rows taken by the header, its spacer and the status bar.
const CHROME_HEIGHT: usize = 3;

impl MarqueeApp {
    /// Renders the header with the route and session.
    pub(super) fn render_header(&self) -> String {
        let user = self
            .session
            .current()
            .map_or_else(|| "not logged in".to_owned(), |session| session.name().to_owned());
        format!("Marquee  {}  [{user}]\n\n", self.route().path())
    }

    /// Renders the active screen.
    pub(super) fn render_body(&self) -> String {
        let max_width = usize::from(self.width.max(1)).saturating_sub(1).max(1);
        let body_height = usize::from(self.height).saturating_sub(CHROME_HEIGHT);
        let mut body = match &self.screen {
            Screen::List(list) => render_movie_grid(&MovieGridViewContext {
                screen: list,
                max_width,
                visible_height: body_height.saturating_sub(3),
            }),
            Screen::Detail(detail) => render_movie_detail(&MovieDetailViewContext {
                screen: detail,
                session: self.session.current(),
                max_width,
                visible_height: body_height,
            }),
            Screen::Editor(editor) => render_editor(editor, max_width, body_height),
            Screen::Login(form) => render_login(form),
        };
        if !body.ends_with('\n') {
            body.push('\n');
        }

        // Keep the status bar on the last row.
        let used = body.lines().count();
        body.push_str(&"\n".repeat(body_height.saturating_sub(used)));
        body
    }

    /// Renders the status bar: the last message, or key hints.
    pub(super) fn render_status_bar(&self) -> String {
        let line = self.status.as_deref().unwrap_or_else(|| self.key_hints());
        format!("{line}\n")
    }

    fn key_hints(&self) -> &'static str {
        match &self.screen {
            Screen::List(list) if list.focus() == ListFocus::Search => {
                "Enter:search  Esc:cancel"
            }
            Screen::List(_) => "j/k:move  Enter:open  /:search  r:rating  l:login  q:quit",
            Screen::Detail(_) => {
                "j/k:move  a:add  e:edit  d:delete  Esc:back  l:login  q:quit"
            }
            Screen::Editor(editor) if editor.phase() == EditorPhase::Blocked => {
                "Ctrl+L:login  Esc:back"
            }
            Screen::Editor(editor) if editor.phase() == EditorPhase::InvalidMovie => "Esc:back",
            Screen::Editor(_) => "Enter:submit  Esc:back  Ctrl+L:logout",
            Screen::Login(_) => "Tab:next field  Enter:log in  Esc:cancel",
        }
    }
}
