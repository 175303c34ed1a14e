//! Tracing initialization.

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{fmt::format::FmtSpan, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times; only the first call wins.
///
/// Logs go to stderr so stdout carries nothing but results. `RUST_LOG`
/// directives are honored on top of the default level, which is `WARN`, or
/// `INFO` when `verbose` is set.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let level = if verbose { Level::INFO } else { Level::WARN };
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(false)
            .with_span_events(FmtSpan::NONE)
            .compact();

        if let Err(e) = builder.with_writer(std::io::stderr).finish().try_init() {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}

/// Install a test-writer subscriber for the current thread.
///
/// The returned guard restores the previous subscriber on drop.
pub fn init_for_tests() -> tracing::subscriber::DefaultGuard {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .finish()
        .set_default()
}
