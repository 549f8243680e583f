//! TUI (Text User Interface): pick a directory, watch the scan, browse the result.

mod app;
mod constants;
mod draw;
mod handlers;
mod scan_result;
mod shortcuts;

pub use app::{ScanOutcome, ScanReport};

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

use crate::core::config::Config;

use app::App;
use draw::draw;
use handlers::{HandleResult, PendingListing, PendingScan};

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop starting on the picker at `config.root`. Scans run on the
/// blocking pool of the runtime behind `handle`.
///
/// Returns the report of the scan that reached the result screen, if any.
pub fn run(config: Arc<Config>, handle: Handle) -> io::Result<Option<ScanReport>> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Mouse wheel scrolls the result view.
    execute!(io::stdout(), crossterm::event::EnableMouseCapture)?;

    let mut app = App::new(config.root.clone());
    let mut pending_scan: Option<PendingScan> = None;
    // The picker's first listing, like every later one, runs off the UI thread.
    let mut pending_listing: Option<PendingListing> =
        Some(handlers::spawn_listing(&handle, config.root.clone(), false));

    loop {
        if let Some(ref listing) = pending_listing
            && scan_result::poll_listing(&mut app, listing)
        {
            pending_listing = None;
        }
        if let Some(ref scan) = pending_scan
            && scan_result::drain_scan_events(&mut app, scan)
        {
            pending_scan = None;
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Mouse(mouse) => handlers::handle_mouse(mouse, &mut app),
                Event::Key(key) => {
                    let result = handlers::handle_key(
                        key,
                        handlers::HandleKeyContext {
                            app: &mut app,
                            config: &config,
                            pending_scan: &mut pending_scan,
                            pending_listing: &mut pending_listing,
                            handle: &handle,
                        },
                    );
                    if result == HandleResult::Break {
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    if let Some(scan) = pending_scan.take() {
        log::info!("Cancelling scan on exit");
        scan.cancel_token.cancel();
    }

    terminal.show_cursor()?;
    Ok(app.into_report())
}
