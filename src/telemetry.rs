//! Tracing setup for the binary.
//!
//! The library only emits `tracing` events. Embedders wire their own
//! subscriber; the CLI calls [`init_default_tracing`].

/// Installs a compact stderr subscriber when the `telemetry` feature is
/// enabled. `RUST_LOG` overrides `default_level`.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already set.
#[must_use]
pub fn init_default_tracing(default_level: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        builder.try_init().is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_level;
        false
    }
}
