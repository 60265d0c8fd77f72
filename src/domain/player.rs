use crate::core::Vec2;

/// Grapple engagement of one player
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GrappleState {
    Idle,
    /// Attached to `anchor`; `length` is the distance captured on attach.
    /// Both stay fixed until the grapple is released or breaks.
    Engaged { anchor: Vec2, length: f64 },
}

/// Player-only part of a body
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    /// Index into the bindings table (0 = player one)
    pub slot: usize,
    pub score: u32,
    /// Seconds until the next shot is allowed
    pub cooldown_remaining: f64,
    pub grapple: GrappleState,
    /// 0..1 presentation ramp, no effect on physics
    pub grapple_fraction: f64,
}

impl PlayerState {
    pub fn new(slot: usize) -> Self {
        Self {
            slot,
            score: 0,
            cooldown_remaining: 0.0,
            grapple: GrappleState::Idle,
            grapple_fraction: 0.0,
        }
    }

    #[inline]
    pub fn is_grappling(&self) -> bool {
        matches!(self.grapple, GrappleState::Engaged { .. })
    }

    pub fn grapple_anchor(&self) -> Option<Vec2> {
        match self.grapple {
            GrappleState::Engaged { anchor, .. } => Some(anchor),
            GrappleState::Idle => None,
        }
    }
}
