/// Wall-clock milliseconds from the host (browser `Date.now()` on wasm)
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Stopwatch for the per-stage numbers in `PerfStats`
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start_ms: now_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.start_ms).max(0.0)
    }

    /// Elapsed time, then restart from now
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let now = now_ms();
        let lap = (now - self.start_ms).max(0.0);
        self.start_ms = now;
        lap
    }
}
