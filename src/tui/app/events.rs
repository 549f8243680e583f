//! Messages posted by the scan task to the UI loop.

use crate::core::scanner::{Progress, ScanError};

/// One-way event from the scan task. The UI loop is the only consumer.
#[derive(Debug)]
pub enum ScanEvent {
    /// Latest counters; replaces any earlier progress.
    Progress(Progress),
    /// Scan finished; the rendered listing.
    Complete(String),
    /// Scan aborted.
    Failed(ScanError),
}
