//! Tracing subscriber setup
//!
//! Log output goes to stderr so command output on stdout stays clean. The
//! filter comes from `FINTRACK_LOG` (falling back to `RUST_LOG`); without
//! either, the verbosity flag picks the level for this crate.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "FINTRACK_LOG";

static TRACING_INIT: Once = Once::new();

/// Default directive for a verbosity count (`-v`, `-vv`)
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "fintrack=warn",
        1 => "fintrack=info",
        2 => "fintrack=debug",
        _ => "fintrack=trace",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    std::env::var(LOG_ENV)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbosity)))
}

/// Initialize the global subscriber once; later calls are no-ops
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(build_filter(verbosity))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "fintrack=warn");
        assert_eq!(default_directive(2), "fintrack=debug");
        assert_eq!(default_directive(9), "fintrack=trace");
    }

    #[test]
    fn test_init_is_idempotent() {
        init_tracing(0);
        init_tracing(3);
    }
}
