//! Tracing setup for the `onecard` binary.
//!
//! Engine events are emitted through `tracing`; the binary installs a
//! formatter on stderr so stdout stays reserved for game output.
//! `RUST_LOG` overrides the default `warn` filter, e.g.
//! `RUST_LOG=onecard_engine=info onecard play`.

use tracing_subscriber::EnvFilter;

/// Default directive when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize logging for the application. A second call is a no-op.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_logging();
        init_logging();
    }
}
