//! Shared helpers for the integration tests: read back an in-memory console
//! sink and drop the timestamp column so output is comparable across runs.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

pub fn captured(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
    String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
}

/// Every log line starts with a 23-char timestamp and a space; drop both.
pub fn strip_timestamps(text: &str) -> String {
    text.lines()
        .map(|line| line.get(24..).unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n")
}
