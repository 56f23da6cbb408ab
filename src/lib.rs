#![doc = r#"
optlog — an enhanced command-line options host.

A thin layer over `clap` that every short-lived CLI ends up rebuilding by
hand: a standard set of logging flags (`-v/--verbose`, `-q/--quiet`,
`--log [FILE]`), one-shot bootstrap of process-wide logging from those
flags, and a queue of label/value "headers" echoed to the log so a run
records the options it actually ran with.

The argument grammar stays yours: define it with `#[derive(Parser)]`,
flatten [`LogArgs`] into it, and hand the type to [`OptionsHost`]. Grammar
errors keep `clap`'s behavior (diagnostic plus usage to stderr, exit 2),
and semantic validation is a callback with the same fatal path.

Quick start
-----------
```rust,no_run
use clap::Parser;
use optlog::{LogArgs, LogSettings, OptionsHost};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "greet", about = "Demonstrate the options host")]
struct Cli {
    /// whom to greet
    #[arg(long, default_value = "world")]
    name: String,

    #[command(flatten)]
    logging: LogArgs,
}

impl LogSettings for Cli {
    fn log_args(&self) -> Option<&LogArgs> {
        Some(&self.logging)
    }
}

fn main() {
    let mut host = OptionsHost::<Cli>::new();
    host.validate(|cli, v| v.add_header("Name", &cli.name));
    let cli = host.parse();
    host.log_headers();
    debug!("greeting {}", cli.name);
    warn!("no greeting actually sent");
}
```

Running the above with `-v --log greet.log` writes DEBUG and up to both
stdout and a truncated `greet.log`, each line formatted as
`<timestamp> <LEVEL padded to 7> <message>`.

Subcommands
-----------
Flatten [`LogArgs`] into each subcommand's args struct so every subcommand
exposes identical logging flags under the same "Logging options" heading,
and point [`LogSettings::log_args`] at the selected subcommand's group.

Testing
-------
Logging is not global state you have to patch: inject a [`Sink::memory`]
console before parsing and wrap assertions in
[`log_scope`](OptionsHost::log_scope) to capture exactly what a run would
have printed.

One host is parsed per process lifetime; repeated parses are not supported
and only the first installs the process-wide subscriber.
"#]

pub mod args;
pub mod error;
pub mod host;
pub mod logging;

pub use args::{LogArgs, LogSettings};
pub use error::{Error, Result};
pub use host::{Header, OptionsHost, Validator};
pub use logging::{LogContext, Sink};
