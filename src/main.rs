//! Demo entrypoint for the options host.
//!
//! Parses one custom flag on top of the standard logging flags, validates
//! it, echoes the headers, then emits one message below and one above the
//! default threshold so the effect of `-v`/`-q`/`--log` is visible.

use clap::Parser;
use optlog::{LogArgs, LogSettings, OptionsHost};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "optlog", about = "Demonstrate a derived options parser")]
struct DemoArgs {
    /// first argument (limit: 50)
    #[arg(short, long, value_name = "NUM", default_value_t = 1)]
    first: i64,

    #[command(flatten)]
    logging: LogArgs,
}

impl LogSettings for DemoArgs {
    fn log_args(&self) -> Option<&LogArgs> {
        Some(&self.logging)
    }
}

fn main() {
    let mut host = OptionsHost::<DemoArgs>::new();
    host.validate(|opts, v| {
        if opts.first > 50 {
            v.error(format!(
                "argument 'first' is {}, which is greater than 50",
                opts.first
            ));
        }
        v.add_header("First", opts.first);
    });
    host.parse();
    host.log_headers();
    debug!("This is a debug message");
    warn!("This is a warning message");
}
