//! Crate-level error type and `Result` alias.
//!
//! Grammar and validation failures at the CLI boundary never surface here:
//! they terminate the process through the parsing engine's diagnostic path.
//! The fallible library surface is limited to attaching sinks.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open log file {}: {}", .path.display(), .source)]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
