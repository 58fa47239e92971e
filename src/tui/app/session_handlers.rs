//! Login form handling and session toggling.

use bubbletea_rs::Cmd;

use super::{MarqueeApp, Screen};
use crate::tui::messages::AppMsg;
use crate::tui::routes::Route;

impl MarqueeApp {
    /// Logs out when a session exists, otherwise opens the login form.
    pub(super) fn handle_toggle_session(&mut self) -> Option<Cmd> {
        if matches!(self.screen, Screen::Login(_)) {
            return None;
        }
        let Some(previous) = self.session.logout() else {
            return self.navigate(Route::Login);
        };
        tracing::debug!(user = previous.name(), "session cleared");
        if let Screen::Editor(editor) = &mut self.screen {
            editor.session_changed(None);
        }
        self.status = Some("Logged out.".to_owned());
        None
    }

    /// Handles input while the login form is shown.
    pub(super) fn handle_login_input(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let Screen::Login(form) = &mut self.screen else {
            return None;
        };

        match msg {
            AppMsg::InsertChar(ch) => {
                form.insert_char(*ch);
                None
            }
            AppMsg::DeleteChar => {
                form.delete_char();
                None
            }
            AppMsg::NextField => {
                form.toggle_focus();
                None
            }
            AppMsg::Confirm => {
                let session = form.submit()?;
                let greeting = format!("Logged in as {}.", session.name());
                self.session.login(session);
                let cmd = self.navigate(Route::MovieList);
                self.status = Some(greeting);
                cmd
            }
            AppMsg::Cancel => self.navigate(Route::MovieList),
            _ => None,
        }
    }
}
