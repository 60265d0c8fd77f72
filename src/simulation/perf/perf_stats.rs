use wasm_bindgen::prelude::*;

/// Last frame's perf snapshot. Zeros until `enable_perf_metrics(true)`.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) pairs_tested: u32,
    pub(super) overlaps_resolved: u32,
    pub(super) pickups: u32,
    pub(super) body_count: u32,
    /// Running total, survives per-frame resets
    pub(super) frames_discarded: u32,
}

impl PerfStats {
    /// Clear the per-frame numbers
    pub(crate) fn reset(&mut self) {
        *self = PerfStats {
            frames_discarded: self.frames_discarded,
            ..PerfStats::default()
        };
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn overlaps_resolved(&self) -> u32 { self.overlaps_resolved }
    #[wasm_bindgen(getter)]
    pub fn pickups(&self) -> u32 { self.pickups }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn frames_discarded(&self) -> u32 { self.frames_discarded }
}
