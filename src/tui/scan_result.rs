//! Draining background results (scan events, picker listings) into the
//! application state.

use std::sync::mpsc::TryRecvError;

use super::app::{App, DirListing, Screen};
use super::handlers::{PendingListing, PendingScan};

/// Apply the picker listing if it has arrived. Returns true once the pending
/// handle can be dropped.
pub(super) fn poll_listing(app: &mut App, pending: &PendingListing) -> bool {
    match pending.listing_rx.try_recv() {
        Ok(listing) => {
            app.apply_listing(listing);
            true
        }
        Err(TryRecvError::Empty) => false,
        Err(TryRecvError::Disconnected) => {
            log::error!("Directory listing task ended without a result");
            if let Screen::FilePicker(state) = &app.screen {
                let failed = DirListing {
                    dir: state.dir.clone(),
                    show_hidden: state.show_hidden,
                    result: Err("listing task ended unexpectedly".to_string()),
                };
                app.apply_listing(failed);
            }
            true
        }
    }
}

/// Apply every queued scan event. Returns true once the scan is over and the
/// pending handle can be dropped.
pub(super) fn drain_scan_events(app: &mut App, scan: &PendingScan) -> bool {
    loop {
        match scan.events_rx.try_recv() {
            Ok(event) => {
                if app.apply_scan_event(event) {
                    return true;
                }
            }
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                log::error!("Scan task ended without reporting a result");
                app.abort_scan("scan task ended unexpectedly");
                return true;
            }
        }
    }
}
