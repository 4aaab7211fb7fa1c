use super::{Axis, Point, Rect};

/// An `Expanse` has a width and height but no location. Either component may
/// be `f32::INFINITY` when it describes an unbounded extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Expanse {
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Expanse {
    /// Construct an extent.
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    /// An extent that is unbounded in both directions.
    pub const fn infinite() -> Self {
        Self {
            w: f32::INFINITY,
            h: f32::INFINITY,
        }
    }

    /// Return a `Rect` with these dimensions located at (0, 0).
    pub fn rect(&self) -> Rect {
        Rect::new(Point::zero(), *self)
    }

    /// Return the component along an axis.
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.w,
            Axis::Vertical => self.h,
        }
    }

    /// Return a copy with the component along `axis` replaced.
    pub fn with_along(self, axis: Axis, v: f32) -> Self {
        match axis {
            Axis::Horizontal => Self { w: v, ..self },
            Axis::Vertical => Self { h: v, ..self },
        }
    }

    /// True if both components are finite.
    pub fn is_finite(&self) -> bool {
        self.w.is_finite() && self.h.is_finite()
    }
}

impl From<Rect> for Expanse {
    fn from(r: Rect) -> Self {
        r.size
    }
}

impl From<(f32, f32)> for Expanse {
    fn from(v: (f32, f32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}
