use wasm_bindgen::prelude::*;

/// What `advance` did with a driver timestamp
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// One frame was simulated
    Stepped = 0,
    /// First timestamp; only recorded
    Primed = 1,
    /// Elapsed time was out of bounds; timestamp refreshed, nothing simulated
    Discarded = 2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Tick {
    Prime,
    Run { elapsed_ms: f64 },
    Discard { elapsed_ms: f64 },
}

/// Turns driver timestamps (ms) into per-frame elapsed time.
///
/// A frame longer than `max_frame_ms` (tab in background, debugger pause)
/// is dropped and the clock re-primed from the new timestamp, so the next
/// frame starts from a fresh baseline.
#[derive(Clone, Debug, Default)]
pub(crate) struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn tick(&mut self, now_ms: f64, max_frame_ms: f64) -> Tick {
        if !now_ms.is_finite() {
            return Tick::Discard { elapsed_ms: now_ms };
        }
        let Some(last) = self.last_ms.replace(now_ms) else {
            return Tick::Prime;
        };
        let elapsed_ms = now_ms - last;
        if elapsed_ms < 0.0 || elapsed_ms > max_frame_ms {
            Tick::Discard { elapsed_ms }
        } else {
            Tick::Run { elapsed_ms }
        }
    }

    pub(crate) fn reset(&mut self) {
        self.last_ms = None;
    }
}
