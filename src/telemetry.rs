//! Opt-in tracing setup for hosts embedding `chart-box`.
//!
//! Scale builds and span selections log at `debug`, event dispatch at
//! `trace`. Hosts with their own subscriber need nothing from this module.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_TRACE_FILTER: &str = "chart_box=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_TRACE_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_TRACE_FILTER)
}

/// Same as [`init_default_tracing`] with an explicit fallback filter, e.g.
/// `"chart_box=trace"` to see every pointer event routed to observers.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
