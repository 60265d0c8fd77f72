//! Systems - per-frame physics passes
//!
//! - forces     - gravity + friction accumulated before integration
//! - integrator - Verlet position step
//! - collision  - AABB overlap, penetration resolution, grip, pickup
//! - grapple    - anchor engagement and the rope constraint

pub mod collision;
pub mod forces;
pub mod grapple;
pub mod integrator;

pub use collision::{grip_flags, has_grip, resolve_all, resolve_pair, CollisionStats};
pub use forces::{Force, ForceContext, ForceRegistry, Friction, Gravity};
pub use grapple::GrappleTransition;
pub use integrator::{integrate, integrate_all};
