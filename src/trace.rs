//! Internal hooks for the optional `tracing` feature.
//!
//! `trace_event!` forwards to `tracing::trace!` when the feature is enabled
//! and expands to nothing otherwise.

#[allow(unused_macros)]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($argument)*);
        }
    };
}
