//! Body - the universal simulation entity
//!
//! Every body is an axis-aligned box with Verlet state: velocity is never
//! stored, it is implied by `position - last_position`.
//!
//! Identity comes in two flavours:
//! - `key`: stable for the body's whole life, issued by the registry.
//! - `id` / `parent_id`: the slot in the body list, re-derived at the start
//!   of every frame. Only compare them within the frame that assigned them.

use serde::Serialize;

use crate::core::{Aabb, Vec2};

use super::player::PlayerState;

/// Stable body handle (never reused within a registry)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct BodyKey(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub enum BodyKind {
    Player(PlayerState),
    Obstacle,
    Collectible,
    Projectile,
}

/// Plain kind tag for render readback
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KindTag {
    Player,
    Obstacle,
    Collectible,
    Projectile,
}

/// Visual hints passed through to the renderer
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodyStyle {
    pub color: &'static str,
    pub border_color: Option<&'static str>,
    /// Width of the border ring drawn around the box
    pub border: f64,
}

impl BodyStyle {
    pub const WALL: BodyStyle = BodyStyle {
        color: "white",
        border_color: None,
        border: 0.0,
    };
    pub const EMERALD: BodyStyle = BodyStyle {
        color: "#31ed31",
        border_color: None,
        border: 0.0,
    };
    pub const PLAYER_ONE: BodyStyle = BodyStyle {
        color: "rgba(255, 0, 0, 1.0)",
        border_color: Some("rgba(255, 0, 0, 0.2)"),
        border: 0.0,
    };
    pub const PLAYER_TWO: BodyStyle = BodyStyle {
        color: "rgba(191, 255, 255, 1.0)",
        border_color: Some("rgba(191, 255, 255, 0.2)"),
        border: 0.0,
    };

    pub fn for_player(slot: usize, grip_radius: f64) -> Self {
        let base = if slot == 0 { Self::PLAYER_ONE } else { Self::PLAYER_TWO };
        Self {
            border: grip_radius,
            ..base
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub key: BodyKey,
    /// Slot index, valid for the current frame only
    pub id: usize,
    pub position: Vec2,
    pub last_position: Vec2,
    /// Accumulated this frame, consumed (and zeroed) by integration
    pub acceleration: Vec2,
    pub width: f64,
    pub height: f64,
    pub kind: BodyKind,
    /// Stable handle of the spawning body (projectiles)
    pub owner: Option<BodyKey>,
    /// Slot of the owner, re-derived each frame from `owner`
    pub parent_id: Option<usize>,
    /// Removal pending; the registry drops it at end of frame
    pub collected: bool,
    pub style: BodyStyle,
}

impl Body {
    fn base(position: Vec2, width: f64, height: f64, kind: BodyKind, style: BodyStyle) -> Self {
        engine_invariant!(
            width >= 0.0 && height >= 0.0,
            "body with negative dimensions {}x{}",
            width,
            height
        );
        Self {
            key: BodyKey(0),
            id: 0,
            position,
            last_position: position,
            acceleration: Vec2::ZERO,
            width,
            height,
            kind,
            owner: None,
            parent_id: None,
            collected: false,
            style,
        }
    }

    pub fn player(position: Vec2, width: f64, height: f64, state: PlayerState, style: BodyStyle) -> Self {
        Self::base(position, width, height, BodyKind::Player(state), style)
    }

    /// Obstacle from its top-left corner and size
    pub fn wall(x: f64, y: f64, width: f64, height: f64) -> Self {
        let center = Vec2::new(x + width / 2.0, y + height / 2.0);
        Self::base(center, width, height, BodyKind::Obstacle, BodyStyle::WALL)
    }

    pub fn collectible(position: Vec2, size: f64) -> Self {
        Self::base(position, size, size, BodyKind::Collectible, BodyStyle::EMERALD)
    }

    /// Projectile at rest at `position` with a one-shot `impulse` queued
    pub fn projectile(position: Vec2, impulse: Vec2, owner: BodyKey, style: BodyStyle) -> Self {
        let mut body = Self::base(position, 2.0, 2.0, BodyKind::Projectile, style);
        body.acceleration = impulse;
        body.owner = Some(owner);
        body
    }

    /// Never moved by integration or pushed by collision response
    #[inline]
    pub fn is_static(&self) -> bool {
        matches!(self.kind, BodyKind::Obstacle | BodyKind::Collectible)
    }

    #[inline]
    pub fn is_projectile(&self) -> bool {
        matches!(self.kind, BodyKind::Projectile)
    }

    /// Can be the primary side of a collision pair
    #[inline]
    pub fn is_mover(&self) -> bool {
        !self.is_static() && !self.is_projectile()
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.position - self.last_position
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.position, self.width, self.height)
    }

    pub fn tag(&self) -> KindTag {
        match self.kind {
            BodyKind::Player(_) => KindTag::Player,
            BodyKind::Obstacle => KindTag::Obstacle,
            BodyKind::Collectible => KindTag::Collectible,
            BodyKind::Projectile => KindTag::Projectile,
        }
    }

    pub fn player_state(&self) -> Option<&PlayerState> {
        match &self.kind {
            BodyKind::Player(state) => Some(state),
            _ => None,
        }
    }

    pub fn player_state_mut(&mut self) -> Option<&mut PlayerState> {
        match &mut self.kind {
            BodyKind::Player(state) => Some(state),
            _ => None,
        }
    }

    /// Only scoring bodies (players) have a score
    pub fn score(&self) -> Option<u32> {
        self.player_state().map(|p| p.score)
    }

    pub fn is_grappling(&self) -> bool {
        self.player_state().map(PlayerState::is_grappling).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_is_centered_on_its_rect() {
        let wall = Body::wall(0.0, 100.0, 200.0, 20.0);
        assert_eq!(wall.position, Vec2::new(100.0, 110.0));
        assert_eq!(wall.aabb().min(), Vec2::new(0.0, 100.0));
        assert!(wall.is_static());
        assert!(!wall.is_mover());
    }

    #[test]
    fn new_bodies_start_at_rest() {
        let player = Body::player(
            Vec2::new(5.0, 5.0),
            4.0,
            8.0,
            PlayerState::new(0),
            BodyStyle::for_player(0, 12.0),
        );
        assert_eq!(player.velocity(), Vec2::ZERO);
        assert_eq!(player.score(), Some(0));
        assert_eq!(player.style.border, 12.0);
        assert!(player.is_mover());
    }

    #[test]
    fn projectile_is_dynamic_but_never_a_mover() {
        let p = Body::projectile(Vec2::ZERO, Vec2::new(1.0, 0.0), BodyKey(3), BodyStyle::PLAYER_ONE);
        assert!(!p.is_static());
        assert!(!p.is_mover());
        assert_eq!(p.owner, Some(BodyKey(3)));
        assert_eq!(p.score(), None);
    }
}
