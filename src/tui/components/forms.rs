//! Review editor and login form rendering.

use crate::tui::state::{EditorPhase, EditorScreen, LoginField, LoginForm};
use crate::tui::state::editor_screen::{INVALID_MOVIE_MESSAGE, LOGIN_REQUIRED_MESSAGE};

use super::text::wrap_words;

/// Renders the review editor body in at most `visible_height` lines.
///
/// Long drafts show their last lines, where the caret is.
#[must_use]
pub fn render_editor(editor: &EditorScreen, max_width: usize, visible_height: usize) -> String {
    let heading = if editor.is_edit_mode() {
        "Edit review"
    } else {
        "New review"
    };
    let subject = editor.movie_title().unwrap_or_else(|| editor.movie_id());
    let mut output = format!("{heading} for {subject}\n");
    let mut used = 1_usize;

    if let Some(notice) = editor.notice() {
        output.push_str(notice);
        output.push('\n');
        used += 1;
    }

    match editor.phase() {
        EditorPhase::Blocked => {
            output.push_str(LOGIN_REQUIRED_MESSAGE);
            output.push('\n');
            return output;
        }
        EditorPhase::InvalidMovie => {
            output.push_str(INVALID_MOVIE_MESSAGE);
            output.push('\n');
            return output;
        }
        EditorPhase::Submitted => return output,
        EditorPhase::LoadingMovie => {
            output.push_str("Loading movie...\n");
            used += 1;
        }
        EditorPhase::Submitting => {
            output.push_str("Saving...\n");
            used += 1;
        }
        EditorPhase::FormReady => {}
    }

    output.push('\n');
    used += 1;
    let error_rows = if editor.error().is_some() { 2 } else { 0 };
    let text_rows = visible_height
        .saturating_sub(used)
        .saturating_sub(error_rows)
        .max(1);

    let lines = wrap_words(editor.text(), max_width.saturating_sub(2));
    let last = lines.len().saturating_sub(1);
    let first = lines.len().saturating_sub(text_rows);
    for (index, line) in lines.iter().enumerate().skip(first) {
        let caret = if index == last && editor.phase() == EditorPhase::FormReady {
            "_"
        } else {
            ""
        };
        output.push_str(&format!("| {line}{caret}\n"));
    }

    if let Some(error) = editor.error() {
        output.push('\n');
        output.push_str(error);
        output.push('\n');
    }
    output
}

/// Renders the login form body.
#[must_use]
pub fn render_login(form: &LoginForm) -> String {
    let mut output = String::from("Login\n\n");
    output.push_str(&render_field("Name", form.name(), form.focus() == LoginField::Name));
    output.push_str(&render_field("Id", form.user_id(), form.focus() == LoginField::UserId));
    if let Some(error) = form.error() {
        output.push('\n');
        output.push_str(error);
        output.push('\n');
    }
    output
}

fn render_field(label: &str, value: &str, focused: bool) -> String {
    let marker = if focused { ">" } else { " " };
    let caret = if focused { "_" } else { "" };
    format!("{marker} {label}: [{value}{caret}]\n")
}
