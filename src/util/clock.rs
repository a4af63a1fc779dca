//! Wall-clock shim for the session freshness window.
//!
//! The browser is the only place the clock matters; off the browser it
//! returns zero, which keeps the cache logic deterministic in host builds.
//! Freshness methods take the timestamp as an argument, so tests pass their
//! own.

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
