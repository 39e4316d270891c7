//! Logging shims.
//!
//! These expand to `tracing` events when the `tracing` feature is enabled and
//! to nothing otherwise, so call sites stay free of `cfg` attributes.

macro_rules! trace_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    }};
}

macro_rules! trace_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    }};
}
