//! Application run modes: logger init, plain output, TUI launch.

use std::error::Error;
use std::io;
use std::sync::Arc;

use crate::cli::Args;
use crate::core;
use crate::core::config::Config;
use crate::core::render;
use crate::core::scanner::{self, ScanRequest};
use crate::tui::{ScanOutcome, ScanReport};

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.tui {
        let log_path = core::paths::cache_dir().and_then(|d| {
            std::fs::create_dir_all(&d).ok()?;
            Some(d.join(format!("{}.log", core::app::NAME)))
        });
        if let Some(path) = log_path
            && let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Scan `config.root` and deliver the rendered text to the configured sink.
pub fn run_plain(config: &Config) -> Result<(), Box<dyn Error>> {
    let request = ScanRequest {
        root: &config.root,
        ignore: &config.ignore,
        scope: &config.scope,
        cancel: None,
    };
    let entries = scanner::walk(&request, None)?;
    log::info!(
        "Scanned {} entries under {}",
        entries.len(),
        config.root.display()
    );
    let text = render::render(&entries, &config.root, config.render);
    config.sink.write(&text)?;
    Ok(())
}

/// Launch the TUI in a blocking thread, then deliver the finished scan to the sink.
pub async fn launch_tui(config: Config) -> Result<(), Box<dyn Error>> {
    let config = Arc::new(config);
    let config_clone = config.clone();
    let handle = tokio::runtime::Handle::current();
    let join_result: Result<io::Result<Option<ScanReport>>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config_clone, handle)).await;

    let report = match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(Box::new(io::Error::other("TUI thread panicked")) as Box<dyn Error>);
        }
    };

    match report {
        Some(ScanReport {
            root,
            outcome: ScanOutcome::Rendered(text),
        }) => {
            log::info!("Delivering scan of {}", root.display());
            config.sink.write(&text)?;
            Ok(())
        }
        Some(ScanReport {
            root,
            outcome: ScanOutcome::Failed(msg),
        }) => Err(format!("scan of {} failed: {}", root.display(), msg).into()),
        None => Err("interactive session closed without a completed scan".into()),
    }
}
