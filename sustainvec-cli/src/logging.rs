use std::io::IsTerminal;

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Installs a stderr `fmt` subscriber. `RUST_LOG` overrides the default
/// `info` level. Colors only when stderr is a terminal.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .with(filter)
        .try_init();
}
