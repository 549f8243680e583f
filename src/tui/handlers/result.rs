//! Handler for the result screen: scrolling only.

use crossterm::event::KeyCode;

use super::super::app::ResultView;
use super::super::constants;

pub(crate) fn handle_result_key(key_code: KeyCode, view: &mut ResultView) {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => view.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => view.scroll_down(1),
        KeyCode::PageUp => view.scroll_up(constants::SCROLL_LINES_PAGE),
        KeyCode::PageDown | KeyCode::Char(' ') => view.scroll_down(constants::SCROLL_LINES_PAGE),
        KeyCode::Home | KeyCode::Char('g') => view.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => view.scroll_to_bottom(),
        _ => {}
    }
}
