//! The options host: wraps a `clap` parser, bootstraps logging from the
//! standard flags, and owns the header list echoed to the log.
use std::fmt;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::info;

use crate::args::{LogArgs, LogSettings};
use crate::logging::{LogContext, Sink};

/// A label/value pair queued for structured log display. The label carries
/// its trailing colon so alignment is computed over the rendered form.
#[derive(Debug, Clone)]
pub struct Header {
    pub label: String,
    pub value: String,
}

impl Header {
    fn new(label: &str, value: impl fmt::Display) -> Self {
        Self {
            label: format!("{}:", label),
            value: value.to_string(),
        }
    }
}

/// Handle passed to the validation callback: append headers for options
/// worth surfacing, or reject the parsed options fatally.
pub struct Validator<'a> {
    command: &'a mut clap::Command,
    headers: &'a mut Vec<Header>,
}

impl Validator<'_> {
    pub fn add_header(&mut self, label: &str, value: impl fmt::Display) {
        self.headers.push(Header::new(label, value));
    }

    /// Print `message` plus the usage synopsis to stderr and exit non-zero,
    /// exactly like a grammar error from the parsing engine.
    pub fn error(&mut self, message: impl fmt::Display) -> ! {
        self.command
            .error(ErrorKind::ValueValidation, message)
            .exit()
    }
}

type Check<T> = Box<dyn Fn(&T, &mut Validator<'_>)>;

/// Decorator around a `clap` parser.
///
/// The host reads program name and description from the parser's command
/// metadata, parses the command line, configures process-wide logging from
/// the flattened [`LogArgs`], records a `Command` header for non-empty
/// invocations, and runs the caller's validation callback before handing
/// the typed options back.
///
/// Designed as the outermost layer of a short-lived CLI process: grammar
/// and validation failures terminate the process through the engine's own
/// diagnostic path, and one host is parsed per process lifetime.
pub struct OptionsHost<T> {
    command: clap::Command,
    prog: String,
    description: String,
    default_log_name: PathBuf,
    console: Sink,
    headers: Vec<Header>,
    log: Option<LogContext>,
    check: Option<Check<T>>,
}

impl<T: Parser + LogSettings> OptionsHost<T> {
    pub fn new() -> Self {
        let command = T::command();
        let prog = command.get_name().to_string();
        let description = command
            .get_about()
            .map(|about| about.to_string())
            .unwrap_or_default();
        let invocation = std::env::args().next().unwrap_or_else(|| prog.clone());
        let default_log_name = Path::new(&invocation)
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(&prog))
            .with_extension("log");

        Self {
            command,
            prog,
            description,
            default_log_name,
            console: Sink::Stdout,
            headers: Vec::new(),
            log: None,
            check: None,
        }
    }

    /// Replace the console sink. Tests inject [`Sink::memory`] here to
    /// capture output instead of writing to stdout.
    pub fn set_console(&mut self, sink: Sink) {
        self.console = sink;
    }

    /// Register the validation callback, run after logging is configured.
    /// It receives the parsed options and a [`Validator`] handle.
    pub fn validate(&mut self, check: impl Fn(&T, &mut Validator<'_>) + 'static) {
        self.check = Some(Box::new(check));
    }

    /// Parse the process's own arguments (program name excluded).
    pub fn parse(&mut self) -> T {
        self.parse_tokens(std::env::args().skip(1).collect())
    }

    /// Parse an explicit token sequence, program name excluded.
    pub fn parse_from<I, S>(&mut self, args: I) -> T
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parse_tokens(args.into_iter().map(Into::into).collect())
    }

    fn parse_tokens(&mut self, tokens: Vec<String>) -> T {
        let argv = std::iter::once(self.prog.clone()).chain(tokens.iter().cloned());
        let options = match T::try_parse_from(argv) {
            Ok(options) => options,
            Err(err) => err.exit(),
        };

        if !tokens.is_empty() {
            self.add_header("Command", tokens.join(" "));
        }

        let defaults = LogArgs::default();
        let log_args = options.log_args().unwrap_or(&defaults);
        let mut sinks = vec![self.console.clone()];
        if let Some(path) = log_args.log_file(&self.default_log_name) {
            match Sink::file(&path) {
                Ok(sink) => sinks.push(sink),
                Err(err) => self.error(err),
            }
        }
        let context = LogContext::new(log_args.level(), sinks);
        context.install();
        self.log = Some(context);

        if let Some(check) = self.check.as_ref() {
            let mut validator = Validator {
                command: &mut self.command,
                headers: &mut self.headers,
            };
            check(&options, &mut validator);
        }

        options
    }

    /// Queue a label/value pair for [`log_headers`](Self::log_headers).
    pub fn add_header(&mut self, label: &str, value: impl fmt::Display) {
        self.headers.push(Header::new(label, value));
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// Emit `"<prog> - <description>"` at INFO, then one INFO line per
    /// queued header with labels left-padded to the widest label.
    pub fn log_headers(&self) {
        info!("{} - {}", self.prog, self.description);
        if let Some(width) = self.headers.iter().map(|header| header.label.len()).max() {
            for header in &self.headers {
                info!("  {0:<1$} {2}", header.label, width, header.value);
            }
        }
    }

    /// Run `f` with the configuration built by the last parse as the
    /// thread-local dispatcher. Falls through to `f` directly when nothing
    /// has been parsed yet.
    pub fn log_scope<R>(&self, f: impl FnOnce() -> R) -> R {
        match &self.log {
            Some(context) => context.scope(f),
            None => f(),
        }
    }

    /// The engine's generated help text.
    pub fn render_help(&mut self) -> String {
        self.command.render_help().to_string()
    }

    /// Fatal rejection outside the validation callback; same diagnostic
    /// path as [`Validator::error`].
    pub fn error(&mut self, message: impl fmt::Display) -> ! {
        self.command
            .error(ErrorKind::ValueValidation, message)
            .exit()
    }
}
