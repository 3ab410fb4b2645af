//! Opt-in tracing setup for hosts embedding `chart-bands`.
//!
//! The crate only emits `tracing` events (band recomputation at `debug`, per
//! draw details at `trace`). Hosts that already configure a subscriber need
//! nothing from here.

/// Default filter used when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "info,chart_bands=debug";

/// Installs a compact `fmt` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_TRACING_FILTER)
}

/// Like `init_default_tracing`, with a caller-supplied fallback filter.
/// `RUST_LOG` still takes precedence when present.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
