//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use tracing_subscriber::util::TryInitError;

/// Install the global tracing subscriber with the given filter directive.
///
/// Fails if a global subscriber is already set, so callers that may run more
/// than once (tests) can ignore the result.
pub fn init_tracing(level: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::new(level))
        .try_init()
}
