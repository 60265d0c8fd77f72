//! Arena - the owned simulation context
//!
//! `ArenaCore` owns everything one match needs: configuration, arena
//! layout, the body registry, registered forces, input state and the
//! collectible spawner. It only orchestrates; the per-frame work lives in
//! `systems/` and the step sequence in `step/step.rs`.
//!
//! Lifecycle is explicit: construct (`new` / `with_config`), drive
//! (`advance` with driver timestamps, or `step` with an explicit dt), read
//! back (`snapshot`), drop.

use crate::domain::{
    ArenaLayout, Body, BodyKey, BodyRegistry, CollectibleSpawner, EngineConfig, EngineError,
    InputState, XorShiftSpawner,
};
use crate::systems::ForceRegistry;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "clock/frame_clock.rs"]
mod frame_clock;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/player_input.rs"]
mod player_input;
#[path = "step/compact.rs"]
mod compact;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::Arena;
pub use frame_clock::FrameOutcome;
pub use perf_stats::PerfStats;
pub use render_extract::{BodyView, PlayerView, RenderSnapshot};

use frame_clock::FrameClock;
use perf_timer::PerfTimer;

/// Seed for the default collectible spawner
const DEFAULT_SPAWN_SEED: u32 = 12345;

/// The simulation context
pub struct ArenaCore {
    config: EngineConfig,
    layout: ArenaLayout,
    registry: BodyRegistry,
    forces: ForceRegistry,
    input: InputState,
    spawner: Box<dyn CollectibleSpawner>,
    clock: FrameClock,

    /// Stable handle per player slot
    players: Vec<BodyKey>,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl ArenaCore {
    /// Arena with default tunables and seeded random collectible placement
    pub fn new(width: f64, height: f64) -> Result<Self, EngineError> {
        Self::with_config(width, height, EngineConfig::default())
    }

    pub fn with_config(width: f64, height: f64, config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_spawner(
            width,
            height,
            config,
            Box::new(XorShiftSpawner::new(DEFAULT_SPAWN_SEED)),
        )
    }

    /// Full control over collectible placement (tests, replays)
    pub fn with_spawner(
        width: f64,
        height: f64,
        config: EngineConfig,
        spawner: Box<dyn CollectibleSpawner>,
    ) -> Result<Self, EngineError> {
        init::create_arena_core(width, height, config, spawner)
    }

    pub fn from_config_json(width: f64, height: f64, json: &str) -> Result<Self, EngineError> {
        let config = EngineConfig::from_json(json).map_err(|e| {
            engine_warn!("[arena] rejected configuration: {}", e);
            e
        })?;
        Self::with_config(width, height, config)
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn layout(&self) -> &ArenaLayout { &self.layout }

    pub fn width(&self) -> f64 { self.layout.width }

    pub fn height(&self) -> f64 { self.layout.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn bodies(&self) -> &[Body] { self.registry.bodies() }

    pub fn body_count(&self) -> usize { self.registry.len() }

    pub fn collectible_count(&self) -> usize { self.registry.collectible_count() }

    pub fn player_count(&self) -> usize { self.players.len() }

    pub fn grapple_range(&self) -> f64 { self.layout.grapple_range }

    /// Current body of player `index`
    pub fn player(&self, index: usize) -> Result<&Body, EngineError> {
        let key = self.player_key(index)?;
        self.registry
            .get(key)
            .ok_or(EngineError::UnknownPlayer { index })
    }

    pub fn player_key(&self, index: usize) -> Result<BodyKey, EngineError> {
        self.players
            .get(index)
            .copied()
            .ok_or(EngineError::UnknownPlayer { index })
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_gravity(&mut self, gravity: f64) -> Result<(), EngineError> {
        settings::set_gravity(self, gravity)
    }

    pub fn set_friction(&mut self, friction: f64) -> Result<(), EngineError> {
        settings::set_friction(self, friction)
    }

    pub fn set_shooting_enabled(&mut self, enabled: bool) {
        settings::set_shooting_enabled(self, enabled);
    }

    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    /// Queue a key press/release; applied at the start of the next frame
    pub fn push_key_event(&mut self, key: &str, active: bool) {
        commands::push_key_event(self, key, active);
    }

    /// Teleport a player (and zero its implied velocity)
    pub fn set_player_position(&mut self, index: usize, x: f64, y: f64) -> Result<(), EngineError> {
        commands::set_player_position(self, index, x, y)
    }

    /// One-shot acceleration consumed by the next integration
    pub fn inject_acceleration(&mut self, index: usize, ax: f64, ay: f64) -> Result<(), EngineError> {
        commands::inject_acceleration(self, index, ax, ay)
    }

    /// Drop projectiles that left the drawable area
    pub fn prune_projectiles(&mut self) -> usize {
        commands::prune_projectiles(self)
    }

    /// Rebuild the arena from the current configuration
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    /// Feed a driver timestamp (ms); simulates at most one frame
    pub fn advance(&mut self, now_ms: f64) -> FrameOutcome {
        step::advance(self, now_ms)
    }

    /// Run one frame with an explicit elapsed sim time
    pub fn step(&mut self, dt: f64) {
        step::step(self, dt);
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        render_extract::snapshot(self)
    }

    pub fn snapshot_json(&self) -> String {
        render_extract::snapshot_json(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
