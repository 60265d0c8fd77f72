//! Collectible placement
//!
//! Where a new collectible appears is not the engine's business; the
//! simulation asks a `CollectibleSpawner` for a position every time it
//! needs one (startup, and once per consumed collectible).

use crate::core::Vec2;

use super::arena::ArenaLayout;

pub trait CollectibleSpawner {
    fn next_position(&mut self, layout: &ArenaLayout) -> Vec2;
}

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform placement over the whole arena (seeded, reproducible)
#[derive(Clone, Debug)]
pub struct XorShiftSpawner {
    state: u32,
}

impl XorShiftSpawner {
    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift
        Self {
            state: if seed == 0 { 12345 } else { seed },
        }
    }

    fn next_unit(&mut self) -> f64 {
        xorshift32(&mut self.state) as f64 / (u32::MAX as f64 + 1.0)
    }
}

impl CollectibleSpawner for XorShiftSpawner {
    fn next_position(&mut self, layout: &ArenaLayout) -> Vec2 {
        let x = self.next_unit() * layout.width;
        let y = self.next_unit() * layout.height;
        Vec2::new(x, y)
    }
}

/// Cycles through a fixed list of points (tests, replays)
#[derive(Clone, Debug)]
pub struct FixedSpawner {
    points: Vec<Vec2>,
    cursor: usize,
}

impl FixedSpawner {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points, cursor: 0 }
    }
}

impl CollectibleSpawner for FixedSpawner {
    fn next_position(&mut self, layout: &ArenaLayout) -> Vec2 {
        if self.points.is_empty() {
            return layout.center();
        }
        let p = self.points[self.cursor % self.points.len()];
        self.cursor = self.cursor.wrapping_add(1);
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::EngineConfig;

    #[test]
    fn xorshift_positions_stay_inside_arena() {
        let layout = ArenaLayout::new(640.0, 480.0, &EngineConfig::default()).unwrap();
        let mut spawner = XorShiftSpawner::new(0);
        for _ in 0..500 {
            let p = spawner.next_position(&layout);
            assert!(layout.contains(p), "{p:?} outside arena");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let layout = ArenaLayout::new(640.0, 480.0, &EngineConfig::default()).unwrap();
        let mut a = XorShiftSpawner::new(42);
        let mut b = XorShiftSpawner::new(42);
        for _ in 0..10 {
            assert_eq!(a.next_position(&layout), b.next_position(&layout));
        }
    }

    #[test]
    fn fixed_spawner_cycles() {
        let layout = ArenaLayout::new(640.0, 480.0, &EngineConfig::default()).unwrap();
        let mut spawner = FixedSpawner::new(vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
        assert_eq!(spawner.next_position(&layout), Vec2::new(1.0, 2.0));
        assert_eq!(spawner.next_position(&layout), Vec2::new(3.0, 4.0));
        assert_eq!(spawner.next_position(&layout), Vec2::new(1.0, 2.0));
    }
}
