//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::core::config::Flags;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  dirtree                              Print the current directory as a tree
  dirtree --relative                   List files relative to the current directory
  dirtree --ignore-dirs target,.git    Skip directories ending with these names
  dirtree --ignore-exts log,tmp        Skip files with these extensions
  dirtree --tui                        Pick the directory interactively
  dirtree -c                           Copy the tree to the clipboard
  dirtree completions bash             Generate bash completions

IGNORE CONFIG:
  One rule per line: `dir:<suffix>` or `ext:<extension>`.
  Defaults to ~/.config/dirtree/ignore when present.
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Print a directory as an ASCII tree or a flat path list",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print root-relative paths instead of a tree
    #[arg(long)]
    pub relative: bool,

    /// Print absolute paths instead of a tree
    #[arg(long)]
    pub absolute: bool,

    /// Write the output to a file
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Copy the output to the system clipboard
    #[arg(short = 'c', long)]
    pub clipboard: bool,

    /// Directory suffixes to ignore (comma-separated)
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    pub ignore_dirs: Vec<String>,

    /// File extensions to ignore (comma-separated, with or without the dot)
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    pub ignore_exts: Vec<String>,

    /// Ignore-config file with `dir:` and `ext:` lines
    #[arg(long, value_name = "FILE")]
    pub ignore_config: Option<PathBuf>,

    /// Only include paths starting with this prefix (repeatable)
    ///
    /// Relative values are resolved against the current directory, also in
    /// --tui mode where another root may be picked. The match is a plain
    /// prefix test applied to every entry, so a scope nested two or more
    /// levels below the root also excludes its parent and yields nothing.
    #[arg(long, value_name = "PATH")]
    pub scope: Vec<PathBuf>,

    /// Choose the directory in an interactive picker before scanning
    #[arg(long)]
    pub tui: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// Option values handed to the configuration loader.
    pub fn flags(&self) -> Flags {
        Flags {
            relative: self.relative,
            absolute: self.absolute,
            output: self.output.clone(),
            clipboard: self.clipboard,
            ignore_dirs: self.ignore_dirs.clone(),
            ignore_exts: self.ignore_exts.clone(),
            ignore_config: self.ignore_config.clone(),
            scope: self.scope.clone(),
        }
    }
}
