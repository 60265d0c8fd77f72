use crate::systems::grapple;
use crate::systems::{grip_flags, integrate_all, resolve_all};

use super::frame_clock::Tick;
use super::{compact, player_input};
use super::{ArenaCore, FrameOutcome, PerfTimer};

pub(super) fn advance(arena: &mut ArenaCore, now_ms: f64) -> FrameOutcome {
    match arena.clock.tick(now_ms, arena.config.max_frame_ms) {
        Tick::Prime => FrameOutcome::Primed,
        Tick::Discard { elapsed_ms } => {
            engine_warn!(
                "[arena] frame {} discarded after {:.1} ms (limit {} ms)",
                arena.frame,
                elapsed_ms,
                arena.config.max_frame_ms
            );
            if arena.perf_enabled {
                arena.perf_stats.frames_discarded = arena.perf_stats.frames_discarded.saturating_add(1);
            }
            FrameOutcome::Discarded
        }
        Tick::Run { elapsed_ms } => {
            step(arena, elapsed_ms * arena.config.time_units_per_ms);
            FrameOutcome::Stepped
        }
    }
}

/// One frame:
/// 1. slot ids
/// 2. queued input -> held keys
/// 3. player impulses + grapple transitions
/// 4. forces + integration, then grapple constraint and hardening per player
/// 5. collision resolution (pickups happen here)
/// 6. compaction + replacement collectibles
pub(super) fn step(arena: &mut ArenaCore, dt: f64) {
    if !(dt.is_finite() && dt >= 0.0) {
        engine_warn!("[arena] step skipped, dt = {}", dt);
        return;
    }

    let perf_on = arena.perf_enabled;
    if perf_on {
        arena.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    arena.registry.assign_ids();
    arena.input.drain();

    let mut grips = grip_flags(arena.registry.bodies(), arena.config.grip_radius);
    if player_input::apply_player_input(arena, &grips) > 0 {
        // Fresh projectiles sit at the end of the list
        grips.resize(arena.registry.len(), false);
    }

    let mut lap = step_start.map(|_| PerfTimer::start());
    integrate_all(
        arena.registry.bodies_mut(),
        &arena.forces,
        &grips,
        &arena.config,
        dt,
    );
    constrain_players(arena, dt);
    if let Some(t) = lap.as_mut() {
        arena.perf_stats.integrate_ms = t.lap_ms();
    }

    let stats = resolve_all(arena.registry.bodies_mut());
    if let Some(t) = lap.as_mut() {
        arena.perf_stats.collision_ms = t.lap_ms();
    }

    compact::compact(arena);
    arena.frame += 1;

    if let Some(start) = step_start {
        arena.perf_stats.pairs_tested = stats.pairs_tested;
        arena.perf_stats.overlaps_resolved = stats.overlaps_resolved;
        arena.perf_stats.pickups = stats.pickups;
        arena.perf_stats.body_count = arena.registry.len() as u32;
        arena.perf_stats.step_ms = start.elapsed_ms();
    }
}

/// Post-integration player upkeep: rope constraint, cooldown, grapple
/// presentation ramp, then non-finite reset and bounds clamp.
fn constrain_players(arena: &mut ArenaCore, dt: f64) {
    let dt_seconds = dt / arena.config.time_units_per_second;

    for (slot, &key) in arena.players.iter().enumerate() {
        let Some(body) = arena.registry.get_mut(key) else {
            continue;
        };

        grapple::apply_constraint(body);
        if let Some(state) = body.player_state_mut() {
            state.cooldown_remaining = (state.cooldown_remaining - dt_seconds).max(0.0);
            grapple::advance_fraction(state, dt_seconds, arena.config.grapple_fraction_rate);
        }
        if grapple::harden(body, &arena.layout) {
            engine_warn!("[arena] player {} had a non-finite position, reset to center", slot);
        }
    }
}
