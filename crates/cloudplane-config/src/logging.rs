// Tracing subscriber setup for provider hosts.

use tracing_subscriber::EnvFilter;

/// Provider-specific filter variable, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "CLOUDPLANE_LOG";

/// Level used when neither variable is set.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

/// Install the global fmt subscriber. Returns `false` if one was already set.
pub fn init_tracing(verbosity: u8) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
