//! Spawns the blocking scan on the runtime's blocking pool with an event channel.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::render;
use crate::core::scanner::{self, Progress, ScanRequest};

use super::super::app::ScanEvent;
use super::super::constants;
use super::PendingScan;

/// Spawn a scan of `root`. Progress is posted with `try_send` and dropped when
/// the channel is full; the final event always blocks until delivered.
pub fn spawn_scan(handle: &Handle, config: Arc<Config>, root: PathBuf) -> PendingScan {
    spawn_scan_with_token(handle, config, root, CancellationToken::new())
}

fn spawn_scan_with_token(
    handle: &Handle,
    config: Arc<Config>,
    root: PathBuf,
    cancel_token: CancellationToken,
) -> PendingScan {
    let (events_tx, events_rx) = mpsc::sync_channel(constants::SCAN_EVENT_BACKLOG);
    let cancel_token_clone = cancel_token.clone();

    log::info!("Scanning {}", root.display());
    handle.spawn_blocking(move || {
        let request = ScanRequest {
            root: &root,
            ignore: &config.ignore,
            scope: &config.scope,
            cancel: Some(&cancel_token_clone),
        };
        let progress_tx = events_tx.clone();
        let mut on_progress = move |p: Progress| {
            let _ = progress_tx.try_send(ScanEvent::Progress(p));
        };
        let event = match scanner::walk(&request, Some(&mut on_progress)) {
            Ok(entries) => {
                log::info!("Scan of {} found {} entries", root.display(), entries.len());
                ScanEvent::Complete(render::render(&entries, &root, config.render))
            }
            Err(e) => {
                log::warn!("Scan of {} failed: {}", root.display(), e);
                ScanEvent::Failed(e)
            }
        };
        // The UI may already be gone; the result is then discarded.
        let _ = events_tx.send(event);
    });

    PendingScan {
        events_rx,
        cancel_token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::format::PathStyle;
    use crate::core::ignore::IgnoreSpec;
    use crate::core::render::RenderMode;
    use crate::core::scope::SelectionScope;
    use crate::core::sink::Sink;
    use crate::tui::app::{App, ScanOutcome, Screen};
    use crate::tui::scan_result::drain_scan_events;
    use std::fs;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn config(root: &std::path::Path, render: RenderMode) -> Arc<Config> {
        let mut ignore = IgnoreSpec::new();
        ignore.add_ext("log");
        Arc::new(Config {
            root: root.to_path_buf(),
            ignore,
            scope: SelectionScope::default(),
            render,
            sink: Sink::Stdout,
        })
    }

    /// Drive the UI side until the scan reaches the result screen.
    fn run_to_result(app: &mut App, scan: &PendingScan) -> ScanOutcome {
        let deadline = Instant::now() + Duration::from_secs(10);
        while !drain_scan_events(app, scan) {
            assert!(Instant::now() < deadline, "scan did not finish");
            std::thread::sleep(Duration::from_millis(5));
        }
        match &app.screen {
            Screen::Result(view) => view.outcome.clone(),
            _ => panic!("expected result screen"),
        }
    }

    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), vec![b'x'; 10]).unwrap();
        fs::create_dir(tmp.path().join("b")).unwrap();
        fs::write(tmp.path().join("b/c.log"), "log").unwrap();
        tmp
    }

    #[test]
    fn scan_task_renders_with_configured_mode() {
        let tmp = fixture();
        let rt = tokio::runtime::Runtime::new().unwrap();
        let root = tmp.path().to_path_buf();
        let name = root.file_name().unwrap().to_string_lossy().into_owned();

        let mut app = App::new(root.clone());
        assert!(app.begin_scan(root.clone()));
        let scan = spawn_scan(rt.handle(), config(&root, RenderMode::Tree), root.clone());
        assert_eq!(
            run_to_result(&mut app, &scan),
            ScanOutcome::Rendered(format!("{}/\n├── a.txt (10 B)\n└── b/\n", name))
        );

        let mut app = App::new(root.clone());
        assert!(app.begin_scan(root.clone()));
        let list = RenderMode::PathList(PathStyle::Relative);
        let scan = spawn_scan(rt.handle(), config(&root, list), root.clone());
        assert_eq!(
            run_to_result(&mut app, &scan),
            ScanOutcome::Rendered("a.txt\n".to_string())
        );
    }

    #[test]
    fn cancelled_scan_reports_failure() {
        let tmp = fixture();
        let rt = tokio::runtime::Runtime::new().unwrap();
        let root = tmp.path().to_path_buf();
        let token = CancellationToken::new();
        token.cancel();

        let mut app = App::new(root.clone());
        assert!(app.begin_scan(root.clone()));
        let scan = spawn_scan_with_token(
            rt.handle(),
            config(&root, RenderMode::Tree),
            root.clone(),
            token,
        );
        assert_eq!(
            run_to_result(&mut app, &scan),
            ScanOutcome::Failed("scan cancelled".to_string())
        );
    }

    #[test]
    fn missing_root_reports_failure() {
        let tmp = TempDir::new().unwrap();
        let rt = tokio::runtime::Runtime::new().unwrap();
        let root = tmp.path().join("gone");

        let mut app = App::new(tmp.path().to_path_buf());
        assert!(app.begin_scan(root.clone()));
        let scan = spawn_scan(rt.handle(), config(&root, RenderMode::Tree), root);
        assert!(matches!(
            run_to_result(&mut app, &scan),
            ScanOutcome::Failed(msg) if msg.starts_with("cannot access")
        ));
    }
}
