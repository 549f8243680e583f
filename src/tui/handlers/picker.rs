//! Handler for the directory picker screen.

use crossterm::event::KeyCode;
use std::path::PathBuf;

use super::super::app::PickerState;

/// Action to apply after handling a picker key.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PickerAction {
    /// Start scanning the confirmed directory.
    Confirm(PathBuf),
    /// The picker moved; list its directory off the UI thread.
    List,
    /// No action; stay on the picker.
    Keep,
}

/// Handle a key on the picker. Enter marks the highlighted directory, and a
/// second Enter confirms the mark; Space clears it.
pub(crate) fn handle_picker_key(key_code: KeyCode, state: &mut PickerState) -> PickerAction {
    let moved = match key_code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_up();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_down();
            false
        }
        KeyCode::Right | KeyCode::Char('l') => state.open_highlighted(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => state.open_parent(),
        KeyCode::Char('.') => state.toggle_hidden(),
        KeyCode::Char(' ') => {
            state.clear_mark();
            false
        }
        KeyCode::Enter => match state.marked.clone() {
            Some(dir) => return PickerAction::Confirm(dir),
            None => {
                state.mark_highlighted();
                false
            }
        },
        _ => false,
    };
    if moved {
        PickerAction::List
    } else {
        PickerAction::Keep
    }
}
