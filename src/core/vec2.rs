use serde::Serialize;

/// 2D vector for positions, displacements and accelerations.
///
/// `f64` throughout: arena coordinates run into the thousands and the
/// grapple projection is applied every frame, so drift has to stay at
/// epsilon level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector in the same direction.
    ///
    /// `None` for a zero (or non-finite) length; callers pick their own fallback.
    #[inline]
    pub fn normalize(&self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(Self { x: self.x / len, y: self.y / len })
        } else {
            None
        }
    }

    #[inline]
    pub fn normalize_or_zero(&self) -> Self {
        self.normalize().unwrap_or(Self::ZERO)
    }

    /// Component-wise absolute value
    #[inline]
    pub fn abs(&self) -> Self {
        Self { x: self.x.abs(), y: self.y.abs() }
    }

    #[inline]
    pub fn distance(&self, other: Vec2) -> f64 {
        (*self - other).length()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_matches_components() {
        let a = Vec2::new(3.0, -4.0);
        let b = Vec2::new(1.5, 2.0);
        assert_eq!(a + b, Vec2::new(4.5, -2.0));
        assert_eq!(a - b, Vec2::new(1.5, -6.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, -8.0));
        assert_eq!(a.abs(), Vec2::new(3.0, 4.0));
        assert_eq!(a.length(), 5.0);
        assert_eq!(a.distance(Vec2::ZERO), 5.0);
    }

    #[test]
    fn normalize_rejects_zero_length() {
        assert_eq!(Vec2::ZERO.normalize(), None);
        assert_eq!(Vec2::ZERO.normalize_or_zero(), Vec2::ZERO);
        assert_eq!(Vec2::new(f64::NAN, 1.0).normalize(), None);

        let n = Vec2::new(0.0, -7.0).normalize().unwrap();
        assert_eq!(n, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn repeated_normalize_stays_unit_length() {
        let mut v = Vec2::new(1234.5, -987.25);
        for _ in 0..1000 {
            v = v.normalize().unwrap() * 2500.0;
        }
        assert!((v.length() - 2500.0).abs() < 1e-9);
    }
}
