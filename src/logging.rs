//! Logging and tracing setup.
//!
//! Structured logging through the tracing crate. The filter comes from
//! `RUST_LOG` and defaults to `info`.

use crate::config::LogFormat;
use std::sync::Once;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber.
///
/// Only the first call has any effect.
pub fn init_tracing(format: LogFormat) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let registry = tracing_subscriber::registry().with(env_filter);

        match format {
            LogFormat::Text => {
                let fmt_layer = fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr);
                registry.with(fmt_layer).init();
            }
            LogFormat::Json => {
                let fmt_layer = fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_writer(std::io::stderr);
                registry.with(fmt_layer).init();
            }
        }

        info!(?format, "eulerbrick tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::debug;

    #[test]
    fn test_init_tracing_once() {
        init_tracing(LogFormat::Text);
        init_tracing(LogFormat::Json);
        debug!(value = 3, "after init");
    }
}
