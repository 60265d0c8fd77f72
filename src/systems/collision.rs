//! Collision engine
//!
//! AABB overlap + shallow-axis penetration resolution between every mover
//! and every other body, once per frame. This is iterative relaxation:
//! pairs are resolved one after another in body-list order, so dense piles
//! can take several frames to settle.
//!
//! Rules per (mover, other) pair:
//! - movers are non-static, non-projectile bodies
//! - skip self pairs and bodies spawned by the mover (`other.parent_id`)
//! - skip collectibles already consumed this frame
//! - weights: static other (1, 0), projectile other (0, 1), else (1, 1);
//!   each side moves by the full penetration times its weight
//! - a scoring mover touching a collectible consumes it (first overlap wins)

use crate::core::Aabb;
use crate::domain::{Body, BodyKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Outcome of one resolved pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub axis: Axis,
    pub depth: f64,
    pub picked_up: bool,
}

/// Counters from one full resolution pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub pairs_tested: u32,
    pub overlaps_resolved: u32,
    pub pickups: u32,
}

#[inline]
pub fn overlaps(a: &Body, b: &Body) -> bool {
    a.aabb().overlaps(&b.aabb())
}

/// Resolve `mover` against `other` if they overlap.
pub fn resolve_pair(mover: &mut Body, other: &mut Body) -> Option<Contact> {
    let size = mover.aabb().intersection_size(&other.aabb());
    if size.x == 0.0 || size.y == 0.0 {
        return None;
    }

    let (w_mover, w_other) = if other.is_static() {
        (1.0, 0.0)
    } else if other.is_projectile() {
        (0.0, 1.0)
    } else {
        (1.0, 1.0)
    };

    let mut picked_up = false;
    if matches!(other.kind, BodyKind::Collectible) && !other.collected {
        if let Some(state) = mover.player_state_mut() {
            state.score = state.score.saturating_add(1);
            other.collected = true;
            picked_up = true;
        }
    }

    // Shallow axis; equal depths resolve horizontally
    let contact = if size.y < size.x {
        let sign = if mover.position.y > other.position.y { -1.0 } else { 1.0 };
        mover.position.y -= sign * size.y * w_mover;
        other.position.y += sign * size.y * w_other;
        Contact { axis: Axis::Vertical, depth: size.y, picked_up }
    } else {
        let sign = if mover.position.x > other.position.x { -1.0 } else { 1.0 };
        mover.position.x -= sign * size.x * w_mover;
        other.position.x += sign * size.x * w_other;
        Contact { axis: Axis::Horizontal, depth: size.x, picked_up }
    };

    Some(contact)
}

/// Two distinct mutable borrows into one slice
fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    engine_invariant!(i != j, "pair_mut on the same slot {}", i);
    if i < j {
        let (head, tail) = items.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

/// One resolution pass over every ordered (mover, other) pair.
pub fn resolve_all(bodies: &mut [Body]) -> CollisionStats {
    let mut stats = CollisionStats::default();

    for i in 0..bodies.len() {
        if !bodies[i].is_mover() {
            continue;
        }
        engine_invariant!(bodies[i].id == i, "stale id {} at slot {}", bodies[i].id, i);

        for j in 0..bodies.len() {
            if i == j {
                continue;
            }
            if bodies[j].parent_id == Some(bodies[i].id) {
                continue;
            }
            if bodies[j].collected {
                continue;
            }

            stats.pairs_tested += 1;
            let (mover, other) = pair_mut(bodies, i, j);
            if let Some(contact) = resolve_pair(mover, other) {
                stats.overlaps_resolved += 1;
                if contact.picked_up {
                    stats.pickups += 1;
                }
            }
        }
    }

    stats
}

/// Grip-detection box: the body's box grown by `grip_radius` on every side
#[inline]
pub fn grip_box(body: &Body, grip_radius: f64) -> Aabb {
    body.aabb().inflate(grip_radius)
}

/// Whether the body's grip box touches any other body.
/// Contact counts (zero gap grips).
pub fn has_grip(bodies: &[Body], index: usize, grip_radius: f64) -> bool {
    let Some(body) = bodies.get(index) else {
        return false;
    };
    let probe = grip_box(body, grip_radius);
    bodies
        .iter()
        .enumerate()
        .any(|(j, other)| j != index && probe.touches(&other.aabb()))
}

/// Grip flag for every body (static bodies never need one)
pub fn grip_flags(bodies: &[Body], grip_radius: f64) -> Vec<bool> {
    (0..bodies.len())
        .map(|i| !bodies[i].is_static() && has_grip(bodies, i, grip_radius))
        .collect()
}
