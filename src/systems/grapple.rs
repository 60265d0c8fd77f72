//! Grapple solver
//!
//! Per player: Idle <-> Engaged.
//! - Idle -> Engaged: grapple held and the nearest anchor is within range.
//!   Anchor and rope length are captured once and held for the engagement.
//! - Engaged -> Idle: grapple released, or the player ended up farther than
//!   the grapple range from the anchor.
//!
//! While engaged, the integrated position is bent onto an arc around the
//! anchor (same distance travelled, new direction), then projected onto the
//! rope circle. Positional, single iteration, no energy bookkeeping.

use crate::core::Vec2;
use crate::domain::{ArenaLayout, Body, GrappleState, PlayerState};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GrappleTransition {
    None,
    Engaged { anchor: Vec2, length: f64 },
    Released,
    /// Overextended past the grapple range
    Broken,
}

/// Run the engagement state machine for one player.
pub fn update_engagement(
    state: &mut PlayerState,
    position: Vec2,
    held: bool,
    layout: &ArenaLayout,
) -> GrappleTransition {
    match state.grapple {
        GrappleState::Engaged { .. } if !held => {
            state.grapple = GrappleState::Idle;
            GrappleTransition::Released
        }
        GrappleState::Engaged { anchor, .. } => {
            if position.distance(anchor) > layout.grapple_range {
                state.grapple = GrappleState::Idle;
                GrappleTransition::Broken
            } else {
                GrappleTransition::None
            }
        }
        GrappleState::Idle if !held => GrappleTransition::None,
        GrappleState::Idle => match layout.reachable_anchor(position) {
            Some((anchor, length)) => {
                state.grapple = GrappleState::Engaged { anchor, length };
                GrappleTransition::Engaged { anchor, length }
            }
            None => GrappleTransition::None,
        },
    }
}

/// Bend this frame's motion around the anchor. Returns false when the body
/// is not an engaged player.
pub fn apply_constraint(body: &mut Body) -> bool {
    let Some(GrappleState::Engaged { anchor, length }) = body.player_state().map(|p| p.grapple) else {
        return false;
    };

    let last = body.last_position;
    let mut position = body.position;
    let moved = position.distance(last);

    // Arc step: aim at the point on the pre-step circle in the direction the
    // body is heading, keep the distance travelled.
    let radius_before = last.distance(anchor);
    if let Some(outward) = (position - anchor).normalize() {
        let target = anchor + outward * radius_before;
        if let Some(direction) = (target - last).normalize() {
            position = last + direction * moved;
        }
    }

    // Hold the captured rope length
    if let Some(outward) = (position - anchor).normalize() {
        position = anchor + outward * length;
    }

    body.position = position;
    true
}

/// Ramp the presentation fraction toward 1 (engaged) or 0 (idle).
pub fn advance_fraction(state: &mut PlayerState, dt_seconds: f64, rate: f64) {
    let step = rate * dt_seconds;
    let fraction = if state.is_grappling() {
        state.grapple_fraction + step
    } else {
        state.grapple_fraction - step
    };
    state.grapple_fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
}

/// Non-finite coordinates snap to the arena center (position and last
/// position both), then the position is clamped into the drawable area.
/// Returns true when a snap happened.
pub fn harden(body: &mut Body, layout: &ArenaLayout) -> bool {
    let center = layout.center();
    let mut snapped = false;

    if !body.position.x.is_finite() || !body.last_position.x.is_finite() {
        body.position.x = center.x;
        body.last_position.x = center.x;
        snapped = true;
    }
    if !body.position.y.is_finite() || !body.last_position.y.is_finite() {
        body.position.y = center.y;
        body.last_position.y = center.y;
        snapped = true;
    }

    body.position = layout.clamp(body.position);
    snapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BodyStyle, EngineConfig};
    use crate::systems::integrator::integrate;

    fn layout() -> ArenaLayout {
        // spacing (100, 50): range = |(100, 50)| * 3 ~ 335
        ArenaLayout::new(2000.0, 1000.0, &EngineConfig::default()).unwrap()
    }

    fn player_at(p: Vec2) -> Body {
        Body::player(p, 10.0, 20.0, PlayerState::new(0), BodyStyle::PLAYER_ONE)
    }

    fn engage(body: &mut Body, layout: &ArenaLayout) -> GrappleTransition {
        let position = body.position;
        update_engagement(body.player_state_mut().unwrap(), position, true, layout)
    }

    #[test]
    fn engages_nearest_anchor_in_range() {
        let layout = layout();
        let mut body = player_at(Vec2::new(1000.0, 450.0));
        let t = engage(&mut body, &layout);
        assert_eq!(
            t,
            GrappleTransition::Engaged { anchor: Vec2::new(1000.0, 500.0), length: 50.0 }
        );
        assert!(body.is_grappling());
    }

    #[test]
    fn no_engagement_out_of_range() {
        let layout = layout();
        let mut body = player_at(Vec2::new(5.0, 5.0));
        assert_eq!(engage(&mut body, &layout), GrappleTransition::None);
        assert!(!body.is_grappling());
    }

    #[test]
    fn anchor_is_held_while_engaged() {
        let layout = layout();
        let mut body = player_at(Vec2::new(1000.0, 450.0));
        engage(&mut body, &layout);

        // Now nearer the (1000, 233.3) anchor; the captured one stays.
        body.position = Vec2::new(1000.0, 300.0);
        assert_eq!(engage(&mut body, &layout), GrappleTransition::None);
        assert_eq!(
            body.player_state().unwrap().grapple_anchor(),
            Some(Vec2::new(1000.0, 500.0))
        );
    }

    #[test]
    fn release_and_overextension_disengage() {
        let layout = layout();
        let mut body = player_at(Vec2::new(1000.0, 450.0));
        engage(&mut body, &layout);
        let p = body.position;
        let t = update_engagement(body.player_state_mut().unwrap(), p, false, &layout);
        assert_eq!(t, GrappleTransition::Released);

        engage(&mut body, &layout);
        body.position = Vec2::new(1000.0, 500.0 - layout.grapple_range - 1.0);
        assert_eq!(engage(&mut body, &layout), GrappleTransition::Broken);
        assert!(!body.is_grappling());
    }

    #[test]
    fn constraint_holds_rope_length_under_sideways_force() {
        let layout = layout();
        let anchor = Vec2::new(1000.0, 500.0);
        let mut body = player_at(Vec2::new(1000.0, 550.0));
        engage(&mut body, &layout);

        for frame in 0..120 {
            body.acceleration = Vec2::new(if frame < 60 { 5.0 } else { -5.0 }, 0.1);
            integrate(&mut body, 1.6);
            assert!(apply_constraint(&mut body));
            let d = body.position.distance(anchor);
            assert!((d - 50.0).abs() < 1e-9, "frame {frame}: distance {d}");
        }
    }

    #[test]
    fn arc_step_keeps_distance_travelled_for_small_moves() {
        let anchor = Vec2::new(0.0, 0.0);
        let mut body = player_at(Vec2::new(0.0, 100.0));
        body.player_state_mut().unwrap().grapple = GrappleState::Engaged { anchor, length: 100.0 };
        body.last_position = Vec2::new(0.0, 100.0);
        body.position = Vec2::new(1.0, 100.0);
        apply_constraint(&mut body);

        let travelled = body.position.distance(body.last_position);
        assert!((travelled - 1.0).abs() < 1e-3);
        assert!(body.position.x > 0.0);
    }

    #[test]
    fn coincident_anchor_does_not_produce_nan() {
        let anchor = Vec2::new(50.0, 50.0);
        let mut body = player_at(anchor);
        body.player_state_mut().unwrap().grapple = GrappleState::Engaged { anchor, length: 0.0 };
        apply_constraint(&mut body);
        assert!(body.position.is_finite());
    }

    #[test]
    fn idle_players_are_left_alone() {
        let mut body = player_at(Vec2::new(3.0, 4.0));
        body.position = Vec2::new(9.0, 9.0);
        assert!(!apply_constraint(&mut body));
        assert_eq!(body.position, Vec2::new(9.0, 9.0));
    }

    #[test]
    fn fraction_ramps_and_clamps() {
        let mut state = PlayerState::new(0);
        state.grapple = GrappleState::Engaged { anchor: Vec2::ZERO, length: 1.0 };
        advance_fraction(&mut state, 0.1, 4.0);
        assert!((state.grapple_fraction - 0.4).abs() < 1e-12);
        advance_fraction(&mut state, 1.0, 4.0);
        assert_eq!(state.grapple_fraction, 1.0);

        state.grapple = GrappleState::Idle;
        advance_fraction(&mut state, 10.0, 4.0);
        assert_eq!(state.grapple_fraction, 0.0);
    }

    #[test]
    fn harden_snaps_non_finite_to_center_and_clamps() {
        let layout = layout();
        let mut body = player_at(Vec2::new(10.0, 10.0));
        body.position = Vec2::new(f64::NAN, 20.0);
        assert!(harden(&mut body, &layout));
        assert_eq!(body.position, Vec2::new(1000.0, 20.0));
        assert_eq!(body.last_position.x, 1000.0);

        body.position = Vec2::new(-40.0, 5000.0);
        assert!(!harden(&mut body, &layout));
        assert_eq!(body.position, Vec2::new(0.0, 1000.0));
    }
}
