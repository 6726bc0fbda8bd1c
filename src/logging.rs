//! Diagnostic logging on stderr.
//!
//! Console output for the user goes to stdout through [`crate::report`];
//! tracing output stays on stderr so the two never interleave in a pipe.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize logging. `RUST_LOG` overrides `level`.
pub fn init(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(())
}
