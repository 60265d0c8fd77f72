//! Force accumulator
//!
//! Each registered force is a stateless function of (body, context)
//! evaluated fresh every frame. The sum lands in `body.acceleration`
//! right before integration. Transient impulses (movement keys, jumps,
//! projectile launch) are added to `acceleration` directly by callers.

use crate::core::Vec2;
use crate::domain::{Body, EngineConfig};

/// Per-body inputs to force evaluation
pub struct ForceContext<'a> {
    pub config: &'a EngineConfig,
    /// Body's inflated box touches something this frame
    pub has_grip: bool,
}

pub trait Force {
    fn name(&self) -> &'static str;
    fn evaluate(&self, body: &Body, ctx: &ForceContext) -> Vec2;
}

/// Constant downward pull
pub struct Gravity;

impl Force for Gravity {
    fn name(&self) -> &'static str {
        "gravity"
    }

    fn evaluate(&self, body: &Body, ctx: &ForceContext) -> Vec2 {
        if body.is_static() {
            return Vec2::ZERO;
        }
        Vec2::new(0.0, ctx.config.gravity)
    }
}

/// Damping proportional to implied velocity. Stronger with grip,
/// weaker while swinging on a grapple.
pub struct Friction;

impl Friction {
    pub fn coefficient(body: &Body, ctx: &ForceContext) -> f64 {
        let mut scale = ctx.config.friction;
        if ctx.has_grip {
            scale *= ctx.config.grip_friction_multiplier;
        }
        if body.is_grappling() {
            scale *= ctx.config.grapple_friction_multiplier;
        }
        scale
    }
}

impl Force for Friction {
    fn name(&self) -> &'static str {
        "friction"
    }

    fn evaluate(&self, body: &Body, ctx: &ForceContext) -> Vec2 {
        if body.is_static() {
            return Vec2::ZERO;
        }
        body.velocity() * -Self::coefficient(body, ctx)
    }
}

/// Registered per-frame forces
pub struct ForceRegistry {
    forces: Vec<Box<dyn Force>>,
}

impl ForceRegistry {
    pub fn new() -> Self {
        Self { forces: Vec::new() }
    }

    /// Gravity + friction
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(Gravity));
        registry.register(Box::new(Friction));
        registry
    }

    pub fn register(&mut self, force: Box<dyn Force>) {
        self.forces.push(force);
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.forces.iter().map(|f| f.name()).collect()
    }

    /// Sum of every registered force for `body`.
    /// Static bodies and projectiles feel nothing.
    pub fn sum(&self, body: &Body, ctx: &ForceContext) -> Vec2 {
        if body.is_static() || body.is_projectile() {
            return Vec2::ZERO;
        }
        self.forces
            .iter()
            .fold(Vec2::ZERO, |acc, force| acc + force.evaluate(body, ctx))
    }

    /// Add this frame's forces into `body.acceleration`
    pub fn accumulate(&self, body: &mut Body, ctx: &ForceContext) {
        let total = self.sum(body, ctx);
        body.acceleration += total;
    }
}

impl Default for ForceRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
