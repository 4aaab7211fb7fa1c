//! Layout value types: the constraints a parent hands its children, and the
//! policies containers use to split space.

use crate::geom::{Axis, Edges, Expanse};

/// Bounds a parent imposes on a child during layout. Maxima may be infinite,
/// minima are always finite and never exceed the matching maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    /// Smallest acceptable width.
    pub min_width: f32,
    /// Smallest acceptable height.
    pub min_height: f32,
    /// Largest acceptable width.
    pub max_width: f32,
    /// Largest acceptable height.
    pub max_height: f32,
}

impl Constraints {
    /// Construct from explicit bounds.
    pub const fn new(min_width: f32, min_height: f32, max_width: f32, max_height: f32) -> Self {
        Self {
            min_width,
            min_height,
            max_width,
            max_height,
        }
    }

    /// Anything from zero up to `max`.
    pub const fn loose(max: Expanse) -> Self {
        Self::new(0.0, 0.0, max.w, max.h)
    }

    /// No bounds at all.
    pub const fn unbounded() -> Self {
        Self::new(0.0, 0.0, f32::INFINITY, f32::INFINITY)
    }

    /// The maxima as an extent.
    pub fn max(&self) -> Expanse {
        Expanse::new(self.max_width, self.max_height)
    }

    /// The minima as an extent.
    pub fn min(&self) -> Expanse {
        Expanse::new(self.min_width, self.min_height)
    }

    /// Clamp a width into range. A minimum above the maximum loses.
    pub fn constrain_width(&self, w: f32) -> f32 {
        clamp(w, self.min_width, self.max_width)
    }

    /// Clamp a height into range. A minimum above the maximum loses.
    pub fn constrain_height(&self, h: f32) -> f32 {
        clamp(h, self.min_height, self.max_height)
    }

    /// Clamp both components of a size into range.
    pub fn constrain(&self, size: Expanse) -> Expanse {
        Expanse::new(self.constrain_width(size.w), self.constrain_height(size.h))
    }

    /// Shrink every bound by the given insets, flooring at zero.
    pub fn deflate(&self, e: Edges) -> Self {
        Self::new(
            (self.min_width - e.horizontal()).max(0.0),
            (self.min_height - e.vertical()).max(0.0),
            (self.max_width - e.horizontal()).max(0.0),
            (self.max_height - e.vertical()).max(0.0),
        )
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// `max(lo, min(hi, v))`, which unlike `f32::clamp` tolerates `lo > hi`.
pub(crate) fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    lo.max(hi.min(v))
}

/// Which axes a container stretches to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Shrink to content on both axes.
    #[default]
    None,
    /// Fill the available width.
    Horizontal,
    /// Fill the available height.
    Vertical,
    /// Fill both axes.
    Center,
}

impl Alignment {
    /// Does this alignment fill the given axis?
    pub fn fills(self, axis: Axis) -> bool {
        match self {
            Self::None => false,
            Self::Center => true,
            Self::Horizontal => axis == Axis::Horizontal,
            Self::Vertical => axis == Axis::Vertical,
        }
    }
}

/// Where leftover space goes when no child on an axis is flexible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxisAlign {
    /// Children pack at the leading edge.
    #[default]
    Start,
    /// Children pack at the trailing edge.
    End,
    /// Children are centered.
    Center,
}

impl AxisAlign {
    /// Offset of the first child given the leftover space on the axis.
    pub fn offset(self, leftover: f32) -> f32 {
        if !leftover.is_finite() || leftover <= 0.0 {
            return 0.0;
        }
        match self {
            Self::Start => 0.0,
            Self::End => leftover,
            Self::Center => leftover / 2.0,
        }
    }
}

/// Per-axis flags telling a parent that a child's size on that axis does not
/// depend on the space it is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fixed {
    /// Width is fixed.
    pub width: bool,
    /// Height is fixed.
    pub height: bool,
}

impl Fixed {
    /// Fixed on both axes.
    pub const BOTH: Self = Self {
        width: true,
        height: true,
    };

    /// Flag for an axis.
    pub fn along(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_tolerates_inverted_bounds() {
        let c = Constraints::new(100.0, 0.0, 50.0, 10.0);
        assert_eq!(c.constrain(Expanse::new(70.0, 20.0)), Expanse::new(100.0, 10.0));
    }

    #[test]
    fn deflate_floors_at_zero() {
        let c = Constraints::new(4.0, 4.0, 10.0, f32::INFINITY).deflate(Edges::all(3.0));
        assert_eq!(c.min(), Expanse::new(0.0, 0.0));
        assert_eq!(c.max_width, 4.0);
        assert!(c.max_height.is_infinite());
    }

    #[test]
    fn axis_offsets() {
        assert_eq!(AxisAlign::Start.offset(10.0), 0.0);
        assert_eq!(AxisAlign::End.offset(10.0), 10.0);
        assert_eq!(AxisAlign::Center.offset(10.0), 5.0);
        assert_eq!(AxisAlign::Center.offset(f32::INFINITY), 0.0);
        assert_eq!(AxisAlign::End.offset(-3.0), 0.0);
    }

    #[test]
    fn alignment_fills() {
        assert!(Alignment::Center.fills(Axis::Vertical));
        assert!(Alignment::Horizontal.fills(Axis::Horizontal));
        assert!(!Alignment::Horizontal.fills(Axis::Vertical));
        assert!(!Alignment::None.fills(Axis::Horizontal));
    }
}
