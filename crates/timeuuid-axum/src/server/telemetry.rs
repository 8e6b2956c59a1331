//! Console logging for the server.
//!
//! Events are filtered with `RUST_LOG` (default `info`) and printed either as
//! pretty multi-line records or as one JSON object per line. Set
//! `RUST_LOG=timeuuid=debug` to see clock sequence bumps from the generator.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::config::LogFormat;

pub fn init_telemetry(format: LogFormat) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()));

    match format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_target(false)
                    .with_timer(fmt::time::ChronoLocal::rfc_3339())
                    .with_file(true)
                    .pretty(),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_thread_ids(true)
                    .with_timer(fmt::time::ChronoLocal::rfc_3339())
                    .json(),
            )
            .try_init()?,
    }

    Ok(())
}
