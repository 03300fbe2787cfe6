//! Logging setup for hookchat.
//!
//! Structured logging via `tracing`. Noisy HTTP-stack modules are filtered
//! to `warn` so chat output stays readable; `RUST_LOG` overrides everything.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Modules whose debug/trace output is connection-pool and TLS chatter
/// rather than anything about the relay itself.
const NOISY_MODULES: &[&str] = &["hyper", "hyper_util", "reqwest", "h2", "rustls"];

/// Build the default `EnvFilter` with noise suppression.
fn build_filter(log_level: &str) -> EnvFilter {
    // Environment variable wins when present
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let mut directives = String::from(log_level);
    for module in NOISY_MODULES {
        directives.push_str(&format!(",{module}=warn"));
    }

    EnvFilter::new(&directives)
}

/// Initialize logging with the given base level and format ("json" or
/// "pretty"). Safe to call more than once; later calls are no-ops.
pub fn init_logging(log_level: &str, log_format: &str) {
    let filter = build_filter(log_level);
    let subscriber = tracing_subscriber::registry().with(filter);

    if log_format == "json" {
        let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
        let _ = subscriber.with(fmt_layer).try_init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
        let _ = subscriber.with(fmt_layer).try_init();
    }
}
