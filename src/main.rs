//! # dirtree
//!
//! Prints a directory as an ASCII tree or a flat path list, filtered by
//! ignore rules and scope prefixes, to stdout, a file, or the clipboard.
//!
//! ## Modes
//! - Plain mode (default): scan the current directory and print
//! - Interactive mode with `--tui`: pick a directory, watch progress, browse the result

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};

use cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(Commands::Completions { shell }) = &args.command {
        let mut cmd = Args::command();
        cli::generate(*shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
        return Ok(());
    }

    run::init_logger(&args);

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load(&args.flags()).unwrap_or_else(|e| {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let result = if args.tui {
        run::launch_tui(config).await
    } else {
        run::run_plain(&config)
    };

    if let Err(e) = result {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
