use std::ops::{Add, Sub};

use super::Axis;

/// A location in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset.
    pub x: f32,
    /// Vertical offset.
    pub y: f32,
}

impl Point {
    /// Construct a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Return the coordinate along an axis.
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Return a copy with the coordinate along `axis` replaced.
    pub fn with_along(self, axis: Axis, v: f32) -> Self {
        match axis {
            Axis::Horizontal => Self { x: v, ..self },
            Axis::Vertical => Self { y: v, ..self },
        }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from(v: (f32, f32)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add() {
        assert_eq!(Point::zero() + (1.0, 1.0).into(), (1.0, 1.0).into());
        assert_eq!(Point::new(2.0, 3.0) - Point::new(1.0, 1.0), Point::new(1.0, 2.0));
    }

    #[test]
    fn along() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.along(Axis::Horizontal), 3.0);
        assert_eq!(p.with_along(Axis::Vertical, 9.0), Point::new(3.0, 9.0));
    }
}
