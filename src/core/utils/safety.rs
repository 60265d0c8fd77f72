//! Invariant checks - "roll cage" for programmer errors
//!
//! Debug: a violated invariant panics with a useful message.
//! Release: the violation is reported on the console and the frame keeps going.
//!
//! Usage:
//! ```rust
//! use grapple_engine::engine_invariant;
//!
//! let width = 12.0_f64;
//! engine_invariant!(width >= 0.0, "negative width {}", width);
//! ```

/// Assert in debug builds, warn in release builds
#[macro_export]
macro_rules! engine_invariant {
    ($cond:expr, $($arg:tt)+) => {{
        #[cfg(debug_assertions)]
        {
            assert!($cond, $($arg)+);
        }
        #[cfg(not(debug_assertions))]
        {
            if !($cond) {
                $crate::engine_warn!($($arg)+);
            }
        }
    }};
}
