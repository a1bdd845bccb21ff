//! Diagnostic logging to stderr.
//!
//! Verbosity comes from `-v`/`-q`; `DOCS_PORTAL_LOG` overrides both with a
//! full filter directive (e.g. `docs_portal=trace`).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::paths;

/// Filter directive for the given flags, ignoring the environment
pub fn directive(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call once per process.
pub fn init(verbose: u8, quiet: bool) {
    let filter = match std::env::var(paths::LOG_ENV_VAR) {
        Ok(spec) if !spec.is_empty() => {
            EnvFilter::try_new(&spec).unwrap_or_else(|_| EnvFilter::new(directive(verbose, quiet)))
        }
        _ => EnvFilter::new(directive(verbose, quiet)),
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose >= 2),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_levels() {
        assert_eq!(directive(0, false), "warn");
        assert_eq!(directive(0, true), "error");
        assert_eq!(directive(1, false), "info");
        assert_eq!(directive(2, false), "debug");
        assert_eq!(directive(7, false), "trace");
    }
}
