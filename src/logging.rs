//! Subscriber setup for applications embedding the manager.
//!
//! The library only emits `tracing` events; nothing is printed until the host
//! installs a subscriber. These helpers install a formatted one.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "mouse_manager=info";

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global formatted subscriber.
///
/// `RUST_LOG` wins over `fallback`. Returns `false` when a global subscriber
/// was already installed, which makes repeated calls harmless.
pub fn init(fallback: &str) -> bool {
    let subscriber = tracing_subscriber::registry().with(env_filter(fallback)).with(
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return false;
    }

    tracing::debug!("tracing initialized");
    true
}

/// Subscriber that writes through the test harness capture.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("mouse_manager=trace"))
        .with_test_writer()
        .try_init();
}
