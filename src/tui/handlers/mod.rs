//! Event handlers for the TUI: keyboard and mouse, dispatched by screen.

mod listing_spawn;
mod picker;
mod result;
mod scan_spawn;

use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use std::sync::Arc;
use std::sync::mpsc;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;

use super::app::{App, ScanEvent, Screen};
use super::constants;
use super::shortcuts::Shortcut;

pub use listing_spawn::{PendingListing, spawn_listing};
pub use scan_spawn::spawn_scan;

/// Receiver side of a scan in progress.
pub struct PendingScan {
    pub events_rx: mpsc::Receiver<ScanEvent>,
    /// Token to cancel the in-flight scan.
    pub cancel_token: CancellationToken,
}

/// Result of handling an event: continue the loop or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Context for key event handling. Bundles mutable state to reduce parameter count.
pub struct HandleKeyContext<'a> {
    pub app: &'a mut App,
    pub config: &'a Arc<Config>,
    pub pending_scan: &'a mut Option<PendingScan>,
    pub pending_listing: &'a mut Option<PendingListing>,
    pub handle: &'a Handle,
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub fn handle_key(key: KeyEvent, ctx: HandleKeyContext<'_>) -> HandleResult {
    let HandleKeyContext {
        app,
        config,
        pending_scan,
        pending_listing,
        handle,
    } = ctx;

    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }
    if Shortcut::match_key(&key) == Some(Shortcut::Quit) {
        return HandleResult::Break;
    }

    match &mut app.screen {
        Screen::FilePicker(state) => match picker::handle_picker_key(key.code, state) {
            picker::PickerAction::List => {
                // Any older listing is abandoned; its result would be stale.
                *pending_listing = Some(spawn_listing(handle, state.dir.clone(), state.show_hidden));
            }
            picker::PickerAction::Confirm(root) => {
                if app.begin_scan(root.clone()) {
                    *pending_listing = None;
                    *pending_scan = Some(spawn_scan(handle, Arc::clone(config), root));
                }
            }
            picker::PickerAction::Keep => {}
        },
        Screen::Scanning(_) => {}
        Screen::Result(view) => result::handle_result_key(key.code, view),
    }
    HandleResult::Continue
}

/// Handle a mouse event: the wheel scrolls the result view.
pub fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    let Screen::Result(view) = &mut app.screen else {
        return;
    };
    match mouse.kind {
        MouseEventKind::ScrollUp => view.scroll_up(constants::SCROLL_LINES_SMALL),
        MouseEventKind::ScrollDown => view.scroll_down(constants::SCROLL_LINES_SMALL),
        _ => {}
    }
}
