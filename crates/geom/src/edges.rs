use super::Expanse;

/// Insets on the four sides of a box, used for padding and margins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    /// Top inset.
    pub top: f32,
    /// Right inset.
    pub right: f32,
    /// Bottom inset.
    pub bottom: f32,
    /// Left inset.
    pub left: f32,
}

impl Edges {
    /// Construct from explicit components.
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same inset on every side.
    pub const fn all(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Vertical and horizontal insets.
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Both totals as an extent.
    pub fn total(&self) -> Expanse {
        Expanse::new(self.horizontal(), self.vertical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals() {
        let e = Edges::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(e.horizontal(), 6.0);
        assert_eq!(e.vertical(), 4.0);
        assert_eq!(Edges::all(5.0).total(), Expanse::new(10.0, 10.0));
        assert_eq!(Edges::symmetric(1.0, 2.0), Edges::new(1.0, 2.0, 1.0, 2.0));
    }
}
