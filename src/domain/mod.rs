//! Domain - the data the engine simulates
//!
//! - body      - the universal simulation entity and its kinds
//! - player    - per-player state (score, cooldown, grapple)
//! - arena     - arena layout: walls, anchor points, grapple range
//! - input     - key events, held-key state, per-player bindings
//! - config    - tunables, loadable from JSON
//! - registry  - the authoritative body list
//! - spawn     - collectible placement (external randomness)
//! - error     - engine error type

pub mod arena;
pub mod body;
pub mod config;
pub mod error;
pub mod input;
pub mod player;
pub mod registry;
pub mod spawn;

pub use arena::ArenaLayout;
pub use body::{Body, BodyKey, BodyKind, BodyStyle, KindTag};
pub use config::EngineConfig;
pub use error::EngineError;
pub use input::{InputEvent, InputState, KeyBindings, PlayerIntent};
pub use player::{GrappleState, PlayerState};
pub use registry::BodyRegistry;
pub use spawn::{CollectibleSpawner, FixedSpawner, XorShiftSpawner};
