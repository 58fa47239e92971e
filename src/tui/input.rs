//! Input handling for the TUI application.
//!
//! Key presses are decoded differently depending on whether a text field has
//! focus: while typing, letters are text rather than commands.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// Input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing lists and detail; single keys are commands.
    Browse,
    /// A text field has focus.
    TextEntry,
}

/// Maps a key event to an application message for `context`.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg, context: InputContext) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.key {
            KeyCode::Char('c') => Some(AppMsg::Quit),
            KeyCode::Char('l') => Some(AppMsg::ToggleSession),
            _ => None,
        };
    }

    match context {
        InputContext::Browse => map_browse_key(key.key),
        InputContext::TextEntry => map_text_entry_key(key.key),
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_browse_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Enter => Some(AppMsg::Confirm),
        KeyCode::Esc | KeyCode::Char('b') => Some(AppMsg::Cancel),
        KeyCode::Char('/') => Some(AppMsg::FocusSearch),
        KeyCode::Char('r') => Some(AppMsg::CycleRating),
        KeyCode::Char('a') => Some(AppMsg::AddReview),
        KeyCode::Char('e') => Some(AppMsg::EditReview),
        KeyCode::Char('d') => Some(AppMsg::DeleteReview),
        KeyCode::Char('l') => Some(AppMsg::ToggleSession),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_text_entry_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char(ch) => Some(AppMsg::InsertChar(ch)),
        KeyCode::Backspace => Some(AppMsg::DeleteChar),
        KeyCode::Tab | KeyCode::BackTab => Some(AppMsg::NextField),
        KeyCode::Enter => Some(AppMsg::Confirm),
        KeyCode::Esc => Some(AppMsg::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::{InputContext, map_key_to_message};
    use crate::tui::messages::AppMsg;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[rstest]
    #[case::quit(KeyCode::Char('q'), "Quit")]
    #[case::down(KeyCode::Down, "CursorDown")]
    #[case::search(KeyCode::Char('/'), "FocusSearch")]
    #[case::delete(KeyCode::Char('d'), "DeleteReview")]
    fn browse_keys_are_commands(#[case] code: KeyCode, #[case] expected: &str) {
        let msg = map_key_to_message(&key(code), InputContext::Browse).expect("mapped");
        assert!(format!("{msg:?}").starts_with(expected), "got {msg:?}");
    }

    #[test]
    fn letters_are_text_while_typing() {
        let msg = map_key_to_message(&key(KeyCode::Char('q')), InputContext::TextEntry);
        assert!(matches!(msg, Some(AppMsg::InsertChar('q'))));
    }

    #[rstest]
    #[case::browse(InputContext::Browse)]
    #[case::text_entry(InputContext::TextEntry)]
    fn ctrl_c_always_quits(#[case] context: InputContext) {
        let msg = map_key_to_message(
            &KeyMsg {
                key: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            },
            context,
        );
        assert!(matches!(msg, Some(AppMsg::Quit)));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert!(map_key_to_message(&key(KeyCode::F(5)), InputContext::Browse).is_none());
    }
}
