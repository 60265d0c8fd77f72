use crate::domain::{
    ArenaLayout, Body, BodyKey, BodyRegistry, BodyStyle, CollectibleSpawner, EngineConfig,
    EngineError, InputState, PlayerState,
};
use crate::systems::ForceRegistry;

use super::frame_clock::FrameClock;
use super::perf_stats::PerfStats;
use super::ArenaCore;

pub(super) fn create_arena_core(
    width: f64,
    height: f64,
    mut config: EngineConfig,
    mut spawner: Box<dyn CollectibleSpawner>,
) -> Result<ArenaCore, EngineError> {
    config.normalize_bindings();
    config.validate()?;
    let layout = ArenaLayout::new(width, height, &config)?;

    let mut registry = BodyRegistry::new();
    let players = populate(&mut registry, &layout, &config, spawner.as_mut());

    engine_log!(
        "[arena] {}x{} with {} players, {} anchors, grapple range {:.1}",
        width,
        height,
        players.len(),
        layout.anchors.len(),
        layout.grapple_range
    );

    Ok(ArenaCore {
        config,
        layout,
        registry,
        forces: ForceRegistry::with_defaults(),
        input: InputState::new(),
        spawner,
        clock: FrameClock::new(),
        players,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}

/// Walls, then players, then the starting collectibles.
/// Returns the player keys in slot order.
pub(super) fn populate(
    registry: &mut BodyRegistry,
    layout: &ArenaLayout,
    config: &EngineConfig,
    spawner: &mut dyn CollectibleSpawner,
) -> Vec<BodyKey> {
    for wall in layout.walls() {
        registry.add(wall);
    }

    let (w, h) = layout.player_size();
    let players = (0..config.bindings.len())
        .map(|slot| {
            registry.add(Body::player(
                layout.player_spawn(slot),
                w,
                h,
                PlayerState::new(slot),
                BodyStyle::for_player(slot, config.grip_radius),
            ))
        })
        .collect();

    for _ in 0..config.collectible_count {
        let position = spawner.next_position(layout);
        registry.add(Body::collectible(position, config.collectible_size));
    }

    registry.assign_ids();
    players
}
