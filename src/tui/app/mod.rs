//! TUI application state: a three-screen state machine
//! (picker → scanning → result) where each screen owns its own data.

mod events;
mod picker;

use std::path::PathBuf;

use crate::core::scanner::Progress;

pub use events::ScanEvent;
pub(crate) use picker::{CURRENT_DIR_LABEL, DirListing, PickerState};

/// A scan in flight for a chosen root.
pub struct ScanSession {
    pub root: PathBuf,
    /// Latest progress received; never accumulated.
    pub progress: Progress,
}

/// How a scan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Rendered(String),
    Failed(String),
}

/// Scrollable result of a finished scan.
pub struct ResultView {
    pub root: PathBuf,
    pub outcome: ScanOutcome,
    pub(crate) scroll: usize,
    /// Largest valid scroll offset, updated each draw from the viewport height.
    pub(crate) last_max_scroll: usize,
}

impl ResultView {
    fn new(root: PathBuf, outcome: ScanOutcome) -> Self {
        Self {
            root,
            outcome,
            scroll: 0,
            last_max_scroll: usize::MAX,
        }
    }

    pub(crate) fn line_count(&self) -> usize {
        match &self.outcome {
            ScanOutcome::Rendered(text) => text.lines().count(),
            ScanOutcome::Failed(_) => 1,
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.scroll = (self.scroll + n).min(self.last_max_scroll);
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    pub(crate) fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub(crate) fn scroll_to_bottom(&mut self) {
        self.scroll = self.last_max_scroll.min(self.line_count());
    }
}

/// Current screen with the data that belongs to it.
pub enum Screen {
    FilePicker(PickerState),
    Scanning(ScanSession),
    Result(ResultView),
}

/// What the session produced when the loop exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub root: PathBuf,
    pub outcome: ScanOutcome,
}

pub struct App {
    pub screen: Screen,
}

impl App {
    /// Start on the picker, browsing `start_dir`.
    pub fn new(start_dir: PathBuf) -> Self {
        Self {
            screen: Screen::FilePicker(PickerState::open(start_dir)),
        }
    }

    /// Hand a finished directory listing to the picker. Dropped on other screens.
    pub fn apply_listing(&mut self, listing: DirListing) -> bool {
        match &mut self.screen {
            Screen::FilePicker(state) => state.apply_listing(listing),
            _ => false,
        }
    }

    /// Leave the picker for the scanning screen. Ignored on other screens.
    pub fn begin_scan(&mut self, root: PathBuf) -> bool {
        if !matches!(self.screen, Screen::FilePicker(_)) {
            return false;
        }
        self.screen = Screen::Scanning(ScanSession {
            root,
            progress: Progress::default(),
        });
        true
    }

    /// Apply an event from the scan task. Returns true once the scan is over.
    ///
    /// Events that arrive outside the scanning screen are discarded.
    pub fn apply_scan_event(&mut self, event: ScanEvent) -> bool {
        let Screen::Scanning(session) = &mut self.screen else {
            log::debug!("Discarding scan event outside the scanning screen");
            return false;
        };
        match event {
            ScanEvent::Progress(progress) => {
                session.progress = progress;
                false
            }
            ScanEvent::Complete(text) => {
                self.finish(ScanOutcome::Rendered(text));
                true
            }
            ScanEvent::Failed(err) => {
                self.finish(ScanOutcome::Failed(err.to_string()));
                true
            }
        }
    }

    /// End the scan with a failure that did not come from the scan task.
    pub fn abort_scan(&mut self, message: &str) {
        if matches!(self.screen, Screen::Scanning(_)) {
            self.finish(ScanOutcome::Failed(message.to_string()));
        }
    }

    fn finish(&mut self, outcome: ScanOutcome) {
        if let Screen::Scanning(session) = &mut self.screen {
            let root = std::mem::take(&mut session.root);
            self.screen = Screen::Result(ResultView::new(root, outcome));
        }
    }

    /// Fraction shown on the progress bar, once the total is known.
    pub fn progress_ratio(&self) -> Option<f64> {
        match &self.screen {
            Screen::Scanning(session) => session.progress.ratio(),
            _ => None,
        }
    }

    /// Outcome of the session; `None` unless a scan reached the result screen.
    pub fn into_report(self) -> Option<ScanReport> {
        match self.screen {
            Screen::Result(view) => Some(ScanReport {
                root: view.root,
                outcome: view.outcome,
            }),
            _ => None,
        }
    }
}
