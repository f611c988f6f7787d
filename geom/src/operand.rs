//! Tagged constructor arguments.
//!
//! Rectangles and sizes can be built from several shapes of input (four numbers, a point and a size, two points, ...). Instead of
//! guessing from the argument types, constructors receive a slice of [`Operand`]s and dispatch on their [`Tag`]s.

use std::fmt::{Display, Formatter};

use crate::error::{GeomError, Result};
use crate::point::Point;
use crate::pool::Pool;
use crate::rect::{Rect, RectLike};
use crate::size::{Size, SizeLike};

/// The tag of an [`Operand`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Tag {
    Number,
    Point,
    Size,
    Rect,
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            Tag::Number => "number",
            Tag::Point => "point",
            Tag::Size => "size",
            Tag::Rect => "rect",
        };
        f.write_str(string)
    }
}

/// A constructor argument.
#[derive(Copy, Clone)]
pub enum Operand<'a> {
    Number(f64),
    Point(Point),
    Size(&'a dyn SizeLike),
    Rect(&'a dyn RectLike),
}

impl<'a> Operand<'a> {
    pub fn tag(&self) -> Tag {
        match self {
            Operand::Number(_) => Tag::Number,
            Operand::Point(_) => Tag::Point,
            Operand::Size(_) => Tag::Size,
            Operand::Rect(_) => Tag::Rect,
        }
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Number(value)
    }
}

impl From<i32> for Operand<'_> {
    fn from(value: i32) -> Self {
        Operand::Number(value.into())
    }
}

impl From<Point> for Operand<'_> {
    fn from(value: Point) -> Self {
        Operand::Point(value)
    }
}

impl<'a, 'p> From<&'a Size<'p>> for Operand<'a> {
    fn from(value: &'a Size<'p>) -> Self {
        Operand::Size(value)
    }
}

impl<'a, 'p> From<&'a Rect<'p>> for Operand<'a> {
    fn from(value: &'a Rect<'p>) -> Self {
        Operand::Rect(value)
    }
}

/// Renders the tags of the provided operands for error messages, e.g. `(point, number)`.
pub(crate) fn describe(args: &[Operand]) -> String {
    let tags: Vec<String> = args.iter()
        .map(|arg| arg.tag().to_string())
        .collect();
    format!("({})", tags.join(", "))
}

/// Where a pooled rectangle or size gets its pool from.
///
/// Next to a [`Pool`] itself, an existing view can be provided, in which case its backing pool is used. An instance that owns its
/// storage exposes no pool and is rejected.
#[derive(Copy, Clone, Debug)]
pub enum PoolSource<'a, 'p> {
    Pool(&'p Pool),
    Rect(&'a Rect<'p>),
    Size(&'a Size<'p>),
}

impl<'a, 'p> PoolSource<'a, 'p> {
    /// Resolves the backing pool.
    pub fn pool(&self) -> Result<&'p Pool> {
        match self {
            PoolSource::Pool(pool) => Ok(*pool),
            PoolSource::Rect(rect) => rect.pool()
                .ok_or_else(|| GeomError::type_error("The provided rect does not expose a backing pool.")),
            PoolSource::Size(size) => size.pool()
                .ok_or_else(|| GeomError::type_error("The provided size does not expose a backing pool.")),
        }
    }
}

impl<'p> From<&'p Pool> for PoolSource<'_, 'p> {
    fn from(pool: &'p Pool) -> Self {
        PoolSource::Pool(pool)
    }
}

impl<'a, 'p> From<&'a Rect<'p>> for PoolSource<'a, 'p> {
    fn from(rect: &'a Rect<'p>) -> Self {
        PoolSource::Rect(rect)
    }
}

impl<'a, 'p> From<&'a Size<'p>> for PoolSource<'a, 'p> {
    fn from(size: &'a Size<'p>) -> Self {
        PoolSource::Size(size)
    }
}
