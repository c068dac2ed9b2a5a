//! Tracing subscriber setup

use aegis_shared::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured level. Records emitted through the
/// `log` facade (actix-web's request logger) are forwarded to tracing.
/// Calling this twice is harmless; the second call is ignored.
pub fn init_tracing(cfg: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match cfg.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .flatten_event(true)
                .with_ansi(false)
                .with_file(cfg.source_location)
                .with_line_number(cfg.source_location);

            let _ = registry.with(layer).try_init();
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_file(cfg.source_location)
                .with_line_number(cfg.source_location);

            let _ = registry.with(layer).try_init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_file(cfg.source_location)
                .with_line_number(cfg.source_location);

            let _ = registry.with(layer).try_init();
        }
    };
}
