//! 2D integer point for positions and offsets

use serde::{Deserialize, Serialize};

/// 2D point for positions and offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Create a new point
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset both axes by the same amount
    #[inline]
    pub fn offset(self, amount: i32) -> Self {
        Self::new(self.x.saturating_add(amount), self.y.saturating_add(amount))
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x.saturating_add(other.x), self.y.saturating_add(other.y))
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x.saturating_sub(other.x), self.y.saturating_sub(other.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_add_sub() {
        let a = Point::new(10, 20);
        let b = Point::new(3, -4);
        assert_eq!(a + b, Point::new(13, 16));
        assert_eq!(a - b, Point::new(7, 24));
    }

    #[test]
    fn test_point_offset() {
        assert_eq!(Point::new(100, 100).offset(60), Point::new(160, 160));
    }

    #[test]
    fn test_point_saturates() {
        let p = Point::new(i32::MAX, i32::MIN);
        assert_eq!(p.offset(1), Point::new(i32::MAX, i32::MIN + 1));
    }
}
