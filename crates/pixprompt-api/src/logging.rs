//! Tracing subscriber setup

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize tracing with a compact console format.
///
/// Honors `RUST_LOG` when set; otherwise defaults to debug-level logs for the
/// service and the HTTP trace layer.
pub fn init_logging() {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixprompt=debug,tower_http=debug".into()),
        )
        .with(console_fmt)
        .init();
}
