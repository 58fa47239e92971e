//! `Model` trait implementation for the movie review client.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::{MarqueeApp, Screen};
use crate::tui::input::{InputContext, map_key_to_message};
use crate::tui::messages::AppMsg;
use crate::tui::state::ListFocus;

impl Model for MarqueeApp {
    fn init() -> (Self, Option<Cmd>) {
        // Dependencies come from module-level storage set before start-up.
        Self::new(crate::tui::app_context())
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            let mapped = map_key_to_message(key_msg, self.input_context())?;
            return self.handle_message(&mapped);
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_body());
        output.push_str(&self.render_status_bar());
        fit_frame(&output, self.width, self.height)
    }
}

impl MarqueeApp {
    /// Returns the input context for key mapping on the active screen.
    pub(super) const fn input_context(&self) -> InputContext {
        match &self.screen {
            Screen::List(list) => match list.focus() {
                ListFocus::Search => InputContext::TextEntry,
                ListFocus::Cards => InputContext::Browse,
            },
            Screen::Detail(_) => InputContext::Browse,
            Screen::Editor(_) | Screen::Login(_) => InputContext::TextEntry,
        }
    }
}

/// Fits `output` to a `width` by `height` terminal.
///
/// Rows stop one column short of the edge so the terminal never autowraps,
/// and every row is padded so stale cells from a wider frame are cleared.
fn fit_frame(output: &str, width: u16, height: u16) -> String {
    let columns = usize::from(width).saturating_sub(1).max(1);
    let rows = usize::from(height.max(1));
    let mut frame = output
        .lines()
        .chain(std::iter::repeat(""))
        .take(rows)
        .map(|line| pad_or_truncate_line(line, columns))
        .collect::<Vec<_>>()
        .join("\n");
    frame.push('\n');
    frame
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut fitted = String::with_capacity(width);
    let mut used = 0usize;
    for ch in line.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used.saturating_add(ch_width) > width {
            break;
        }
        fitted.push(ch);
        used = used.saturating_add(ch_width);
    }
    fitted.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    fitted
}
