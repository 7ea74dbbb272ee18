//! Foundation types — points, rectangles, and shared constants.
//!
//! The most fundamental value types in the crate; everything else
//! depends on them. All geometry is expressed in device units with a
//! y-down coordinate system.

// ============================================================================
// Mathematical constants
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

pub type PointI = PointBase<i32>;
pub type PointF = PointBase<f32>;
pub type PointD = PointBase<f64>;

// ============================================================================
// Rectangle
// ============================================================================

/// An axis-aligned rectangle stored as two corners (x1, y1)-(x2, y2).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Normalize so that x1 <= x2 and y1 <= y2, swapping if needed.
    pub fn normalize(&mut self) -> &Self {
        if self.x1 > self.x2 {
            core::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            core::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }

    /// Clip this rectangle to the intersection with `r`.
    /// Returns `true` if the result is a valid (non-empty) rectangle.
    pub fn clip(&mut self, r: &Self) -> bool {
        if self.x2 > r.x2 {
            self.x2 = r.x2;
        }
        if self.y2 > r.y2 {
            self.y2 = r.y2;
        }
        if self.x1 < r.x1 {
            self.x1 = r.x1;
        }
        if self.y1 < r.y1 {
            self.y1 = r.y1;
        }
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Returns `true` if the rectangle is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Returns `true` if the point (x, y) is inside the rectangle.
    pub fn hit_test(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Returns `true` if this rectangle overlaps with `r`.
    pub fn overlaps(&self, r: &Self) -> bool {
        !(r.x1 > self.x2 || r.x2 < self.x1 || r.y1 > self.y2 || r.y2 < self.y1)
    }
}

/// Rectangle with `i32` coordinates.
pub type RectI = Rect<i32>;
/// Rectangle with `f64` coordinates.
pub type RectD = Rect<f64>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point() {
        let p = PointD::new(3.0, -4.0);
        assert_eq!(p.x, 3.0);
        assert_eq!(p.y, -4.0);
    }

    #[test]
    fn test_rect_normalize() {
        let mut r = RectD::new(10.0, 20.0, 0.0, 5.0);
        r.normalize();
        assert_eq!(r, RectD::new(0.0, 5.0, 10.0, 20.0));
        assert!(r.is_valid());
    }

    #[test]
    fn test_rect_clip() {
        let mut r = RectD::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.clip(&RectD::new(5.0, 5.0, 20.0, 20.0)));
        assert_eq!(r, RectD::new(5.0, 5.0, 10.0, 10.0));

        let mut r = RectD::new(0.0, 0.0, 10.0, 10.0);
        assert!(!r.clip(&RectD::new(20.0, 20.0, 30.0, 30.0)));
    }

    #[test]
    fn test_rect_hit_test() {
        let r = RectI::new(0, 0, 10, 10);
        assert!(r.hit_test(0, 0));
        assert!(r.hit_test(10, 10));
        assert!(!r.hit_test(11, 5));
    }

    #[test]
    fn test_rect_overlaps() {
        let a = RectD::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&RectD::new(9.0, 9.0, 20.0, 20.0)));
        assert!(!a.overlaps(&RectD::new(10.1, 0.0, 20.0, 10.0)));
    }
}
