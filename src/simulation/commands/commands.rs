use crate::core::Vec2;
use crate::domain::{EngineError, InputEvent};
use crate::systems::grapple;

use super::init::populate;
use super::ArenaCore;

pub(super) fn push_key_event(arena: &mut ArenaCore, key: &str, active: bool) {
    arena.input.push(InputEvent::new(key, active));
}

pub(super) fn set_player_position(
    arena: &mut ArenaCore,
    index: usize,
    x: f64,
    y: f64,
) -> Result<(), EngineError> {
    let key = arena.player_key(index)?;
    let body = arena
        .registry
        .get_mut(key)
        .ok_or(EngineError::UnknownPlayer { index })?;

    body.position = Vec2::new(x, y);
    body.last_position = body.position;
    if grapple::harden(body, &arena.layout) {
        engine_warn!("[arena] player {} placed at non-finite ({}, {}), moved to center", index, x, y);
    }
    body.last_position = body.position;
    Ok(())
}

pub(super) fn inject_acceleration(
    arena: &mut ArenaCore,
    index: usize,
    ax: f64,
    ay: f64,
) -> Result<(), EngineError> {
    let key = arena.player_key(index)?;
    let body = arena
        .registry
        .get_mut(key)
        .ok_or(EngineError::UnknownPlayer { index })?;

    let impulse = Vec2::new(ax, ay);
    if !impulse.is_finite() {
        engine_warn!("[arena] ignoring non-finite impulse ({}, {}) for player {}", ax, ay, index);
        return Ok(());
    }
    body.acceleration += impulse;
    Ok(())
}

pub(super) fn prune_projectiles(arena: &mut ArenaCore) -> usize {
    let layout = &arena.layout;
    let removed = arena
        .registry
        .remove_where(|body| body.is_projectile() && !layout.contains(body.position));
    if removed > 0 {
        arena.registry.assign_ids();
    }
    removed
}

pub(super) fn reset(arena: &mut ArenaCore) {
    arena.registry.clear();
    arena.players = populate(
        &mut arena.registry,
        &arena.layout,
        &arena.config,
        arena.spawner.as_mut(),
    );
    arena.input.reset();
    arena.clock.reset();
    arena.perf_stats.reset();
    arena.frame = 0;
}
