use super::{Expanse, Point};

/// A positioned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub pos: Point,
    /// Width and height.
    pub size: Expanse,
}

impl Rect {
    /// Construct a rectangle from a corner and an extent.
    pub const fn new(pos: Point, size: Expanse) -> Self {
        Self { pos, size }
    }

    /// Does this rectangle contain the point? Edges are half-open: the
    /// top-left edges are inside, the bottom-right edges are not.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.pos.x
            && p.y >= self.pos.y
            && p.x < self.pos.x + self.size.w
            && p.y < self.pos.y + self.size.h
    }
}

impl From<(f32, f32, f32, f32)> for Rect {
    fn from(v: (f32, f32, f32, f32)) -> Self {
        Self {
            pos: Point::new(v.0, v.1),
            size: Expanse::new(v.2, v.3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains() {
        let r = Rect::from((10.0, 10.0, 5.0, 5.0));
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(14.9, 14.9)));
        assert!(!r.contains(Point::new(15.0, 12.0)));
        assert!(!r.contains(Point::new(12.0, 15.0)));
        assert!(!r.contains(Point::new(9.9, 12.0)));
    }

    #[test]
    fn zero_size_contains_nothing() {
        let r = Rect::from((0.0, 0.0, 0.0, 0.0));
        assert!(!r.contains(Point::zero()));
    }
}
