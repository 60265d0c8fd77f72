use crate::core::Vec2;
use crate::domain::{Body, BodyKey, BodyStyle};
use crate::systems::grapple::{self, GrappleTransition};

use super::ArenaCore;

/// Shot requested this frame; spawned once every player has been read
struct Shot {
    owner: BodyKey,
    origin: Vec2,
    impulse: Vec2,
    style: BodyStyle,
}

/// Turn held keys into per-player impulses and grapple transitions.
///
/// `grips` is indexed by body slot and sampled before anything moved.
/// Returns the number of projectiles fired.
pub(super) fn apply_player_input(arena: &mut ArenaCore, grips: &[bool]) -> usize {
    let ArenaCore {
        config,
        layout,
        registry,
        input,
        players,
        ..
    } = arena;

    let bullet_speed = layout.grapple_range / config.bullet_speed_divisor;
    let mut shots = Vec::new();

    for (slot, &key) in players.iter().enumerate() {
        let (Some(index), Some(bindings)) = (registry.slot_of(key), config.bindings.get(slot)) else {
            continue;
        };
        let intent = bindings.intent(input, config.shooting_enabled);
        let has_grip = grips.get(index).copied().unwrap_or(false);
        let enemy = players
            .iter()
            .filter(|&&other| other != key)
            .find_map(|&other| registry.get(other))
            .map(|body| body.position);

        let body = &mut registry.bodies_mut()[index];
        if intent.left {
            body.acceleration.x -= config.player_speed;
        }
        if intent.right {
            body.acceleration.x += config.player_speed;
        }
        if intent.jump && has_grip {
            body.acceleration.y -= config.jump_force;
        }

        let position = body.position;
        let Some(state) = body.player_state_mut() else {
            continue;
        };

        if intent.shoot && state.cooldown_remaining <= 0.0 {
            if let Some(target) = enemy {
                state.cooldown_remaining = config.shot_cooldown;
                shots.push(Shot {
                    owner: key,
                    origin: position,
                    impulse: (target - position).normalize_or_zero() * bullet_speed,
                    style: BodyStyle::for_player(slot, 0.0),
                });
            }
        }

        match grapple::update_engagement(state, position, intent.grapple, layout) {
            GrappleTransition::Engaged { anchor, length } => engine_log!(
                "[grapple] player {} engaged ({:.1}, {:.1}) at length {:.1}",
                slot,
                anchor.x,
                anchor.y,
                length
            ),
            GrappleTransition::Released => engine_log!("[grapple] player {} released", slot),
            GrappleTransition::Broken => {
                engine_log!("[grapple] player {} overextended, grapple broke", slot)
            }
            GrappleTransition::None => {}
        }
    }

    let fired = shots.len();
    for shot in shots {
        registry.add(Body::projectile(shot.origin, shot.impulse, shot.owner, shot.style));
    }
    fired
}
