/// A point in 2D space.
///
/// Points are plain values. They are taken and produced by the geometry functions, but never backed by [`crate::Slots`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// The X-coordinate.
    pub x: f64,
    /// The Y-coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `x`: The X-coordinate.
    /// * `y`: The Y-coordinate.
    #[inline(always)]
    pub fn new(x: impl Into<f64>, y: impl Into<f64>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Compares both coordinates with [`crate::fuzzy_eq`].
    pub fn fuzzy_eq(&self, other: &Point) -> bool {
        crate::fuzzy_eq(self.x, other.x) && crate::fuzzy_eq(self.y, other.y)
    }
}

impl<A, B> From<(A, B)> for Point where
    A: Into<f64>,
    B: Into<f64>,
{
    #[inline(always)]
    fn from(coords: (A, B)) -> Self {
        Self::new(coords.0, coords.1)
    }
}
