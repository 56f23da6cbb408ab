//! Log line rendering and sink routing.
//!
//! The configuration derived from the logging flags is an explicit
//! [`LogContext`]: a severity threshold plus an injected sink list. It can be
//! installed as the process-wide subscriber (the normal CLI path) or used as
//! a scoped dispatcher so tests capture output in memory instead of patching
//! global state.
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::field::Visit;
use tracing::{Dispatch, Event, Level, Metadata, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

use crate::error::{Error, Result};

/// A destination for formatted log lines.
///
/// Every sink attached to a [`LogContext`] receives identical bytes; file
/// sinks are flushed per line so the file mirrors the console at any point
/// during the run.
#[derive(Clone)]
pub enum Sink {
    Stdout,
    File(Arc<Mutex<File>>),
    Memory(Arc<Mutex<Vec<u8>>>),
}

impl Sink {
    /// File sink at `path`, truncating any previous contents.
    pub fn file(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| Error::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Sink::File(Arc::new(Mutex::new(file))))
    }

    /// In-memory sink plus a handle to the buffer it fills.
    pub fn memory() -> (Self, Arc<Mutex<Vec<u8>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        (Sink::Memory(Arc::clone(&buffer)), buffer)
    }

    fn write_line(&self, line: &str) {
        match self {
            Sink::Stdout => {
                let mut out = std::io::stdout().lock();
                let _ = out.write_all(line.as_bytes());
                let _ = out.flush();
            }
            Sink::File(file) => {
                if let Ok(mut file) = file.lock() {
                    let _ = file.write_all(line.as_bytes());
                    let _ = file.flush();
                }
            }
            Sink::Memory(buffer) => {
                if let Ok(mut buffer) = buffer.lock() {
                    buffer.extend_from_slice(line.as_bytes());
                }
            }
        }
    }
}

struct MessageVisitor {
    message: String,
}

impl MessageVisitor {
    fn new() -> Self {
        Self {
            message: String::new(),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

fn level_name(level: Level) -> &'static str {
    if level == Level::ERROR {
        "ERROR"
    } else if level == Level::WARN {
        "WARNING"
    } else if level == Level::INFO {
        "INFO"
    } else if level == Level::DEBUG {
        "DEBUG"
    } else {
        "TRACE"
    }
}

/// Renders each event as `<timestamp> <LEVEL padded to 7> <message>` and
/// fans the line out to every sink.
struct LineLayer {
    max_level: Level,
    sinks: Vec<Sink>,
}

impl<S> Layer<S> for LineLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        *metadata.level() <= self.max_level
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::new();
        event.record(&mut visitor);

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f");
        let line = format!(
            "{} {:<7} {}\n",
            timestamp,
            level_name(*event.metadata().level()),
            visitor.message
        );
        for sink in &self.sinks {
            sink.write_line(&line);
        }
    }
}

/// One active logging configuration: threshold plus sink list.
pub struct LogContext {
    dispatch: Dispatch,
}

impl LogContext {
    pub fn new(level: Level, sinks: Vec<Sink>) -> Self {
        let layer = LineLayer {
            max_level: level,
            sinks,
        };
        let subscriber = Registry::default().with(layer);
        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Make this configuration the process-wide subscriber. The first
    /// installation in a process wins; later ones are no-ops.
    pub fn install(&self) {
        let _ = tracing::dispatcher::set_global_default(self.dispatch.clone());
    }

    /// Run `f` with this configuration as the thread-local dispatcher,
    /// overriding whatever is installed process-wide.
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}
