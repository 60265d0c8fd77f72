//! Console logging
//!
//! On wasm32 messages go to the browser console through `web_sys::console`.
//! Native builds (tests, tooling) compile the calls away; the arguments are
//! still type-checked so a log line can't rot behind a cfg.
//!
//! ```rust
//! use grapple_engine::{engine_log, engine_warn};
//!
//! let anchors = 9;
//! engine_log!("arena ready: {} anchors", anchors);
//! engine_warn!("frame discarded: dt={}ms", 250.0);
//! ```

/// Informational message (`console.log`)
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = || ::std::format!($($arg)*);
        }
    }};
}

/// Something recovered silently but worth knowing about (`console.warn`)
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&::std::format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = || ::std::format!($($arg)*);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn log_macros_are_noops_natively() {
        let frame = 7u64;
        engine_log!("frame {}", frame);
        engine_warn!("frame {} discarded", frame);
    }
}
