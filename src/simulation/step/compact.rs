use crate::domain::Body;

use super::ArenaCore;

/// Remove collected bodies (swap-with-last, order not kept) and spawn one
/// replacement collectible per removal. Returns the number removed.
pub(super) fn compact(arena: &mut ArenaCore) -> usize {
    let removed = arena.registry.remove_collected();
    for _ in 0..removed {
        let position = arena.spawner.next_position(&arena.layout);
        arena
            .registry
            .add(Body::collectible(position, arena.config.collectible_size));
    }
    removed
}
