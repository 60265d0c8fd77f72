//! Core primitives shared by every system
//!
//! - utils/  - logging and invariant macros (must be first for macro export!)
//! - vec2    - 2D vector math
//! - aabb    - axis-aligned boxes and the clamp-based overlap test

#[macro_use]
pub mod utils;
pub mod aabb;
pub mod vec2;

pub use aabb::Aabb;
pub use vec2::Vec2;
