//! Tracing subscriber setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset or does not parse.
const DEFAULT_FILTER: &str = "info";

/// Initialize the global subscriber.
/// JSON lines unless `RUST_LOG_FORMAT` is set to something other than `json`.
pub fn init_tracing() {
  let use_json = std::env::var("RUST_LOG_FORMAT")
    .map(|v| v == "json")
    .unwrap_or(true);
  let filter = env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());

  if use_json {
    tracing_subscriber::registry()
      .with(fmt::layer().json().flatten_event(true).with_current_span(true))
      .with(filter)
      .init();
  } else {
    tracing_subscriber::registry()
      .with(fmt::layer())
      .with(filter)
      .init();
  }
}

/// `RUST_LOG` directives as given, or `info` when there are none.
fn env_filter(directives: Option<&str>) -> EnvFilter {
  directives
    .filter(|d| !d.trim().is_empty())
    .and_then(|d| EnvFilter::try_new(d).ok())
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
