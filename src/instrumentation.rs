//! Span timing for searches.
//!
//! Enable with `--features instrumentation`. Every instrumented search entry point
//! reports its elapsed time when it returns, and `log` records are forwarded to the
//! same subscriber.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Respects the RUST_LOG environment variable and defaults to `info`, which is the
/// level of the search spans.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .compact();

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
    if let Err(err) = result {
        eprintln!("Failed to set tracing subscriber: {}", err);
    }
}
