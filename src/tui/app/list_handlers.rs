//! Movie list input handling.

use bubbletea_rs::Cmd;

use super::{MarqueeApp, Screen, commands};
use crate::tui::messages::AppMsg;
use crate::tui::routes::Route;
use crate::tui::state::{ListFocus, ListRequest};

impl MarqueeApp {
    /// Handles input while the movie list is shown.
    pub(super) fn handle_list_input(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let Screen::List(list) = &mut self.screen else {
            return None;
        };

        if list.focus() == ListFocus::Search {
            return match msg {
                AppMsg::InsertChar(ch) => {
                    list.insert_char(*ch);
                    None
                }
                AppMsg::DeleteChar => {
                    list.delete_char();
                    None
                }
                AppMsg::Confirm => {
                    let request = list.submit_search();
                    self.issue_list_request(request)
                }
                AppMsg::Cancel => {
                    list.focus_cards();
                    None
                }
                _ => None,
            };
        }

        match msg {
            AppMsg::CursorUp => {
                list.cursor_up();
                None
            }
            AppMsg::CursorDown => {
                list.cursor_down();
                None
            }
            AppMsg::FocusSearch => {
                list.focus_search();
                None
            }
            AppMsg::CycleRating => {
                let request = list.cycle_rating();
                self.issue_list_request(request)
            }
            AppMsg::Confirm => {
                let route = list
                    .selected_link()
                    .and_then(|link| Route::from_path(&link))?;
                self.navigate(route)
            }
            _ => None,
        }
    }

    fn issue_list_request(&self, request: ListRequest) -> Option<Cmd> {
        let Screen::List(list) = &self.screen else {
            return None;
        };
        Some(commands::load_list(
            self.service.clone(),
            list.generation(),
            request,
        ))
    }
}
