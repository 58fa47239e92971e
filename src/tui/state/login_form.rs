//! Login form state.
//!
//! Logging in performs no credential check: the two fields become the
//! session's display name and user identifier.

use crate::session::Session;

/// Shown when a field is left blank.
pub const INCOMPLETE_LOGIN_MESSAGE: &str = "Both name and id are required.";

/// Field receiving typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    /// Display name.
    Name,
    /// User identifier.
    UserId,
}

/// State of the login form.
#[derive(Debug, Clone)]
pub struct LoginForm {
    name: String,
    user_id: String,
    focus: LoginField,
    error: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    /// Creates an empty form focused on the name field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: String::new(),
            user_id: String::new(),
            focus: LoginField::Name,
            error: None,
        }
    }

    /// Returns the typed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the typed user id.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the focused field.
    #[must_use]
    pub const fn focus(&self) -> LoginField {
        self.focus
    }

    /// Returns the validation error.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switches focus to the other field.
    pub const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Name => LoginField::UserId,
            LoginField::UserId => LoginField::Name,
        };
    }

    const fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Name => &mut self.name,
            LoginField::UserId => &mut self.user_id,
        }
    }

    /// Appends a character to the focused field.
    pub fn insert_char(&mut self, ch: char) {
        self.focused_mut().push(ch);
        self.error = None;
    }

    /// Removes the last character of the focused field.
    pub fn delete_char(&mut self) {
        self.focused_mut().pop();
    }

    /// Builds a session from the fields.
    ///
    /// Returns `None` and records an error when either field is blank.
    pub fn submit(&mut self) -> Option<Session> {
        match Session::new(&self.name, &self.user_id) {
            Ok(session) => {
                self.error = None;
                Some(session)
            }
            Err(_) => {
                self.error = Some(INCOMPLETE_LOGIN_MESSAGE.to_owned());
                None
            }
        }
    }
}
