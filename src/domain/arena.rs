//! Arena layout
//!
//! Everything here is derived from the arena size once at startup:
//! spacing, boundary walls, the 3x3 grid of grapple anchors and the
//! grapple range.

use crate::core::Vec2;

use super::body::Body;
use super::config::EngineConfig;
use super::error::EngineError;

/// Spacing divisions per axis
const SPACING_DIVISIONS: f64 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ArenaLayout {
    pub width: f64,
    pub height: f64,
    /// (width / 20, height / 20)
    pub spacing: Vec2,
    pub anchors: Vec<Vec2>,
    pub grapple_range: f64,
}

impl ArenaLayout {
    pub fn new(width: f64, height: f64, config: &EngineConfig) -> Result<Self, EngineError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(EngineError::InvalidDimensions { width, height });
        }

        let spacing = Vec2::new(width / SPACING_DIVISIONS, height / SPACING_DIVISIONS);

        let mut anchors = Vec::with_capacity(9);
        for i in -1..=1 {
            for j in -1..=1 {
                anchors.push(Vec2::new(
                    width / 2.0 + i as f64 * (width - spacing.y * 4.0) / 3.0,
                    height / 2.0 + j as f64 * (height - spacing.y * 4.0) / 3.0,
                ));
            }
        }

        Ok(Self {
            width,
            height,
            spacing,
            anchors,
            grapple_range: spacing.length() * config.grapple_range_spacings,
        })
    }

    /// Ground, ceiling, left and right walls. Each overlaps the drawable
    /// area by one unit so nothing slips through the corners.
    pub fn walls(&self) -> Vec<Body> {
        let (w, h) = (self.width, self.height);
        let (sx, sy) = (self.spacing.x, self.spacing.y);
        vec![
            Body::wall(0.0, h - 1.0, w, sy),
            Body::wall(0.0, -sy + 1.0, w, sy),
            Body::wall(-sx + 1.0, 0.0, sx, h),
            Body::wall(w - 1.0, 0.0, sx, h),
        ]
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// Clamp into the drawable area
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.max(0.0).min(self.width), p.y.max(0.0).min(self.height))
    }

    /// Closest anchor and its distance (first one wins on ties)
    pub fn nearest_anchor(&self, p: Vec2) -> Option<(Vec2, f64)> {
        let mut best: Option<(Vec2, f64)> = None;
        for &anchor in &self.anchors {
            let d = anchor.distance(p);
            match best {
                Some((_, best_d)) if best_d <= d => {}
                _ => best = Some((anchor, d)),
            }
        }
        best
    }

    /// Closest anchor, only if it is within grapple range
    pub fn reachable_anchor(&self, p: Vec2) -> Option<(Vec2, f64)> {
        self.nearest_anchor(p).filter(|&(_, d)| d <= self.grapple_range)
    }

    pub fn player_spawn(&self, slot: usize) -> Vec2 {
        if slot == 0 {
            Vec2::new(self.spacing.x, self.spacing.y)
        } else {
            Vec2::new(self.width - self.spacing.x, self.spacing.y)
        }
    }

    /// (width, height) of a player box
    pub fn player_size(&self) -> (f64, f64) {
        (self.spacing.x / 2.0, self.spacing.y)
    }

    pub fn anchors_flat(&self) -> Vec<f64> {
        self.anchors.iter().flat_map(|a| [a.x, a.y]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(w: f64, h: f64) -> ArenaLayout {
        ArenaLayout::new(w, h, &EngineConfig::default()).unwrap()
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        let config = EngineConfig::default();
        assert!(ArenaLayout::new(0.0, 100.0, &config).is_err());
        assert!(ArenaLayout::new(100.0, f64::NAN, &config).is_err());
    }

    #[test]
    fn anchors_form_a_centered_grid() {
        let arena = layout(2000.0, 1000.0);
        assert_eq!(arena.anchors.len(), 9);
        assert!(arena.anchors.contains(&arena.center()));
        // spY = 50 -> columns step (2000 - 200) / 3 = 600, rows (1000 - 200) / 3
        assert!(arena.anchors.contains(&Vec2::new(400.0, 500.0)));
        assert!(arena.anchors.contains(&Vec2::new(1600.0, 500.0)));
    }

    #[test]
    fn grapple_range_is_three_spacing_diagonals() {
        let arena = layout(2000.0, 1500.0);
        // spacing (100, 75) -> diagonal 125
        assert_eq!(arena.grapple_range, 375.0);
    }

    #[test]
    fn nearest_anchor_and_reachability() {
        let arena = layout(2000.0, 1000.0);
        let (anchor, d) = arena.nearest_anchor(Vec2::new(1010.0, 500.0)).unwrap();
        assert_eq!(anchor, Vec2::new(1000.0, 500.0));
        assert_eq!(d, 10.0);

        // Player spawn corner is far from every anchor.
        let far = Vec2::new(0.0, 0.0);
        let (_, d) = arena.nearest_anchor(far).unwrap();
        assert!(d > arena.grapple_range);
        assert!(arena.reachable_anchor(far).is_none());
    }

    #[test]
    fn walls_frame_the_arena() {
        let arena = layout(400.0, 200.0);
        let walls = arena.walls();
        assert_eq!(walls.len(), 4);
        let ground = walls[0].aabb();
        assert_eq!(ground.min().y, 199.0);
        assert_eq!(ground.max().x, 400.0);
        assert!(walls.iter().all(|w| w.is_static()));
    }

    #[test]
    fn clamp_keeps_points_drawable() {
        let arena = layout(400.0, 200.0);
        assert_eq!(arena.clamp(Vec2::new(-5.0, 250.0)), Vec2::new(0.0, 200.0));
        assert!(arena.contains(arena.clamp(Vec2::new(1e9, -1e9))));
    }
}
