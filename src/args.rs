//! The fixed logging flag group shared by every parser that uses the host.
//! Flatten [`LogArgs`] into a `clap` parser struct (and into each subcommand's
//! args struct when subcommands are hosted) so all of them expose identical
//! flags under the same "Logging options" help heading.
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::Level;

#[derive(Args, Debug, Clone, Default)]
#[command(next_help_heading = "Logging options")]
pub struct LogArgs {
    /// write debug messages to the log
    #[arg(short, long)]
    pub verbose: bool,

    /// write only warning and error messages to the log
    #[arg(short, long)]
    pub quiet: bool,

    /// log file name
    #[arg(long, value_name = "FILE")]
    pub log: Option<Option<PathBuf>>,
}

impl LogArgs {
    /// Severity threshold selected by the flags. `--verbose` wins over
    /// `--quiet` when both are given.
    pub fn level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }

    /// Resolve `--log` against the host's default file name: absent means no
    /// file sink, a bare `--log` means the default name, `--log FILE` means
    /// that exact path.
    pub fn log_file(&self, default_name: &Path) -> Option<PathBuf> {
        match &self.log {
            None => None,
            Some(None) => Some(default_name.to_path_buf()),
            Some(Some(path)) => Some(path.clone()),
        }
    }
}

/// Seam between a parsed options struct and the host's logging bootstrap.
///
/// Top-level parsers return their flattened [`LogArgs`] directly; parsers
/// hosting subcommands return the selected subcommand's group, or `None`
/// when no subcommand was chosen (the host then falls back to the default
/// configuration: console sink at INFO).
pub trait LogSettings {
    fn log_args(&self) -> Option<&LogArgs>;
}
