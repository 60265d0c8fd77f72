use super::vec2::Vec2;

/// Sweep bound for the clamp-based intersection. Anything in the arena is
/// far inside it.
const SWEEP_BOUND: f64 = 10_000_000.0;

/// Axis-aligned box, stored as center + half extents. Never rotated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, width: f64, height: f64) -> Self {
        engine_invariant!(
            width >= 0.0 && height >= 0.0,
            "aabb with negative dimensions {}x{}",
            width,
            height
        );
        Self {
            center,
            half: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half
    }

    /// Same center, grown by `radius` on every side
    pub fn inflate(&self, radius: f64) -> Self {
        Self {
            center: self.center,
            half: self.half + Vec2::new(radius, radius),
        }
    }

    /// Nearest point of the box to `p`
    #[inline]
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        let min = self.min();
        let max = self.max();
        Vec2::new(min.x.max(p.x.min(max.x)), min.y.max(p.y.min(max.y)))
    }

    /// Extent of the intersection rectangle on each axis.
    ///
    /// Two far corners are pulled through `self`, `other`, `self`; for
    /// overlapping boxes they land on the corners of the intersection,
    /// for separated boxes they collapse onto a shared edge (zero extent).
    pub fn intersection_size(&self, other: &Aabb) -> Vec2 {
        let corner = |p: Vec2| self.clamp_point(other.clamp_point(self.clamp_point(p)));
        let lo = corner(Vec2::new(-SWEEP_BOUND, -SWEEP_BOUND));
        let hi = corner(Vec2::new(SWEEP_BOUND, SWEEP_BOUND));
        (lo - hi).abs()
    }

    /// Strict overlap: zero-area contact is not a collision.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let size = self.intersection_size(other);
        size.x != 0.0 && size.y != 0.0
    }

    /// Closed-interval test: boxes sharing an edge or a corner count.
    #[inline]
    pub fn touches(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x <= b_max.x && b_min.x <= a_max.x && a_min.y <= b_max.y && b_min.y <= a_max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f64, y: f64, w: f64, h: f64) -> Aabb {
        Aabb::new(Vec2::new(x, y), w, h)
    }

    #[test]
    fn identical_boxes_overlap_fully() {
        let a = boxed(10.0, 10.0, 4.0, 6.0);
        assert!(a.overlaps(&a));
        assert_eq!(a.intersection_size(&a), Vec2::new(4.0, 6.0));
    }

    #[test]
    fn disjoint_on_either_axis_never_overlaps() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&boxed(20.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&boxed(0.0, -20.0, 10.0, 10.0)));
        assert!(!a.overlaps(&boxed(30.0, 30.0, 10.0, 10.0)));
    }

    #[test]
    fn intersection_is_interval_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(8.0, 3.0, 10.0, 10.0);
        assert_eq!(a.intersection_size(&b), Vec2::new(2.0, 7.0));
        assert_eq!(b.intersection_size(&a), Vec2::new(2.0, 7.0));

        // Containment
        let small = boxed(1.0, 1.0, 2.0, 2.0);
        assert_eq!(a.intersection_size(&small), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn shared_edge_touches_but_does_not_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.touches(&b));
        assert!(!a.touches(&boxed(11.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn inflate_grows_every_side() {
        let a = boxed(5.0, 5.0, 2.0, 4.0).inflate(3.0);
        assert_eq!(a.min(), Vec2::new(1.0, 0.0));
        assert_eq!(a.max(), Vec2::new(9.0, 10.0));
    }
}
