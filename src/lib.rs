//! Grapple Engine - two-player arcade physics in WASM
//!
//! Verlet bodies, AABB collision with shallow-axis resolution, grip
//! detection, collectible pickup and a grappling-hook rope constraint,
//! stepped once per animation frame by the page.
//!
//! Architecture:
//! - core/       - vector math, boxes, logging and invariant macros
//! - domain/     - bodies, players, arena layout, input, config, errors
//! - systems/    - forces, integrator, collision, grapple
//! - simulation/ - the owned arena context, step sequence, JS facade

// Macros must be declared first so every later module sees them
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("Grapple engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use self::core::{Aabb, Vec2};
pub use domain::{
    ArenaLayout, Body, BodyKey, BodyKind, CollectibleSpawner, EngineConfig, EngineError,
    FixedSpawner, KeyBindings, XorShiftSpawner,
};
pub use simulation::{Arena, ArenaCore, FrameOutcome, PerfStats, RenderSnapshot};
