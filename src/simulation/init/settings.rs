use crate::domain::EngineError;

use super::perf_stats::PerfStats;
use super::ArenaCore;

pub(super) fn enable_perf_metrics(arena: &mut ArenaCore, enabled: bool) {
    arena.perf_enabled = enabled;
    if !enabled {
        arena.perf_stats = PerfStats::default();
    }
}

pub(super) fn get_perf_stats(arena: &ArenaCore) -> PerfStats {
    arena.perf_stats.clone()
}

pub(super) fn set_gravity(arena: &mut ArenaCore, gravity: f64) -> Result<(), EngineError> {
    if !gravity.is_finite() {
        return Err(EngineError::InvalidConfig {
            reason: format!("gravity must be finite, got {gravity}"),
        });
    }
    arena.config.gravity = gravity;
    Ok(())
}

pub(super) fn set_friction(arena: &mut ArenaCore, friction: f64) -> Result<(), EngineError> {
    if !(friction.is_finite() && friction >= 0.0) {
        return Err(EngineError::InvalidConfig {
            reason: format!("friction must be finite and non-negative, got {friction}"),
        });
    }
    arena.config.friction = friction;
    Ok(())
}

pub(super) fn set_shooting_enabled(arena: &mut ArenaCore, enabled: bool) {
    arena.config.shooting_enabled = enabled;
}
