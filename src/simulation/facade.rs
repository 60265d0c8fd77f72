use wasm_bindgen::prelude::*;

use crate::domain::EngineError;

use super::perf_stats::PerfStats;
use super::{ArenaCore, FrameOutcome};

fn to_js(e: EngineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// JS-facing arena. The page owns the frame loop and input listeners; it
/// forwards key events and `requestAnimationFrame` timestamps, then reads
/// the snapshot back to draw.
#[wasm_bindgen]
pub struct Arena {
    core: ArenaCore,
}

#[wasm_bindgen]
impl Arena {
    /// Arena with default tunables
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<Arena, JsValue> {
        let core = ArenaCore::new(width, height).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Arena with tunables from a JSON document (missing fields keep defaults)
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(width: f64, height: f64, json: &str) -> Result<Arena, JsValue> {
        let core = ArenaCore::from_config_json(width, height, json).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn collectible_count(&self) -> u32 { self.core.collectible_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn player_count(&self) -> u32 { self.core.player_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn grapple_range(&self) -> f64 { self.core.grapple_range() }

    /// Anchor points as [x0, y0, x1, y1, ...]
    pub fn anchors_flat(&self) -> Vec<f64> {
        self.core.layout().anchors_flat()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, gravity: f64) -> Result<(), JsValue> {
        self.core.set_gravity(gravity).map_err(to_js)
    }

    pub fn set_friction(&mut self, friction: f64) -> Result<(), JsValue> {
        self.core.set_friction(friction).map_err(to_js)
    }

    pub fn set_shooting_enabled(&mut self, enabled: bool) {
        self.core.set_shooting_enabled(enabled);
    }

    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    /// Forward a keydown (`active = true`) or keyup
    pub fn key_event(&mut self, key: &str, active: bool) {
        self.core.push_key_event(key, active);
    }

    pub fn set_player_position(&mut self, index: usize, x: f64, y: f64) -> Result<(), JsValue> {
        self.core.set_player_position(index, x, y).map_err(to_js)
    }

    pub fn inject_acceleration(&mut self, index: usize, ax: f64, ay: f64) -> Result<(), JsValue> {
        self.core.inject_acceleration(index, ax, ay).map_err(to_js)
    }

    pub fn prune_projectiles(&mut self) -> u32 {
        self.core.prune_projectiles() as u32
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Feed a frame timestamp in ms
    pub fn advance(&mut self, now_ms: f64) -> FrameOutcome {
        self.core.advance(now_ms)
    }

    /// Run one frame with an explicit sim-time delta
    pub fn step(&mut self, dt: f64) {
        self.core.step(dt);
    }

    pub fn snapshot_json(&self) -> String {
        self.core.snapshot_json()
    }

    pub fn player_x(&self, index: usize) -> Result<f64, JsValue> {
        self.core.player(index).map(|b| b.position.x).map_err(to_js)
    }

    pub fn player_y(&self, index: usize) -> Result<f64, JsValue> {
        self.core.player(index).map(|b| b.position.y).map_err(to_js)
    }

    pub fn player_score(&self, index: usize) -> Result<u32, JsValue> {
        self.core
            .player(index)
            .map(|b| b.score().unwrap_or(0))
            .map_err(to_js)
    }

    pub fn player_grappling(&self, index: usize) -> Result<bool, JsValue> {
        self.core.player(index).map(|b| b.is_grappling()).map_err(to_js)
    }
}
