//! Rectangles backed by four numeric slots.

use std::fmt::{Debug, Formatter};

use crate::error::{GeomError, Result};
use crate::operand::{describe, Operand, PoolSource};
use crate::point::Point;
use crate::pool::Pool;
use crate::scalar::ScalarKind;
use crate::size::SizeLike;
use crate::slots::Slots;

/// Slot index of the left edge.
pub const X1: usize = 0;
/// Slot index of the top edge.
pub const Y1: usize = 1;
/// Slot index of the right edge.
pub const X2: usize = 2;
/// Slot index of the bottom edge.
pub const Y2: usize = 3;

/// Anything that is shaped like a rectangle: four scalars `(x1, y1, x2, y2)` of a single [`ScalarKind`].
///
/// The kind decides whether `(x2, y2)` is the last covered unit (integer kinds) or an exclusive bound (floating kinds). No ordering is
/// enforced: `x2 < x1` is a legal, anti-normalized rectangle.
///
/// Setters accept any value, including negative and non-finite ones.
pub trait RectLike {
    fn kind(&self) -> ScalarKind;

    /// Reads a raw slot ([`X1`], [`Y1`], [`X2`] or [`Y2`]).
    fn slot(&self, index: usize) -> f64;

    /// Writes a raw slot ([`X1`], [`Y1`], [`X2`] or [`Y2`]).
    fn set_slot(&mut self, index: usize, value: f64);

    /// The edge adjustment term. See [`ScalarKind::adj`].
    #[inline(always)]
    fn adj(&self) -> f64 {
        self.kind().adj()
    }

    fn corners(&self) -> [f64; 4] {
        [self.slot(X1), self.slot(Y1), self.slot(X2), self.slot(Y2)]
    }

    fn set_corners(&mut self, corners: [f64; 4]) {
        let [x1, y1, x2, y2] = corners;
        self.set_slot(X1, x1);
        self.set_slot(Y1, y1);
        self.set_slot(X2, x2);
        self.set_slot(Y2, y2);
    }

    #[inline(always)]
    fn left(&self) -> f64 {
        self.slot(X1)
    }

    #[inline(always)]
    fn top(&self) -> f64 {
        self.slot(Y1)
    }

    #[inline(always)]
    fn right(&self) -> f64 {
        self.slot(X2)
    }

    #[inline(always)]
    fn bottom(&self) -> f64 {
        self.slot(Y2)
    }

    #[inline(always)]
    fn x(&self) -> f64 {
        self.slot(X1)
    }

    #[inline(always)]
    fn y(&self) -> f64 {
        self.slot(Y1)
    }

    #[inline(always)]
    fn width(&self) -> f64 {
        self.slot(X2) - self.slot(X1) + self.adj()
    }

    #[inline(always)]
    fn height(&self) -> f64 {
        self.slot(Y2) - self.slot(Y1) + self.adj()
    }

    /// Moves the left edge. The right edge stays where it is.
    fn set_left(&mut self, value: f64) {
        self.set_slot(X1, value);
    }

    /// Moves the top edge. The bottom edge stays where it is.
    fn set_top(&mut self, value: f64) {
        self.set_slot(Y1, value);
    }

    /// Moves the right edge. The left edge stays where it is.
    fn set_right(&mut self, value: f64) {
        self.set_slot(X2, value);
    }

    /// Moves the bottom edge. The top edge stays where it is.
    fn set_bottom(&mut self, value: f64) {
        self.set_slot(Y2, value);
    }

    /// Same as [`RectLike::set_left`].
    fn set_x(&mut self, value: f64) {
        self.set_left(value);
    }

    /// Same as [`RectLike::set_top`].
    fn set_y(&mut self, value: f64) {
        self.set_top(value);
    }

    /// Moves the right edge so that the rectangle gets the provided width.
    fn set_width(&mut self, value: f64) {
        let x2 = self.slot(X1) + value - self.adj();
        self.set_slot(X2, x2);
    }

    /// Moves the bottom edge so that the rectangle gets the provided height.
    fn set_height(&mut self, value: f64) {
        let y2 = self.slot(Y1) + value - self.adj();
        self.set_slot(Y2, y2);
    }
}

/// A rectangle.
///
/// The slots are either owned (`Rect<'static>`) or a view into a [`Pool`] (`Rect<'p>`). A pooled rectangle writes straight into the
/// pool's bytes. Use [`Rect::detach`] to get an owned copy.
pub struct Rect<'p> {
    slots: Slots<'p, 4>,
}

impl Rect<'static> {
    /// Creates the null rectangle of the provided kind: `(0, 0, -adj, -adj)`.
    pub fn new(kind: ScalarKind) -> Self {
        let mut slots = Slots::new(kind);
        slots.set_values(null_corners(kind));
        Self { slots }
    }

    /// Creates an integer rectangle from its corners.
    pub fn int(x1: impl Into<f64>, y1: impl Into<f64>, x2: impl Into<f64>, y2: impl Into<f64>) -> Self {
        Self::from_corners(ScalarKind::Int16, x1.into(), y1.into(), x2.into(), y2.into())
    }

    /// Creates a 64-bit floating rectangle from its corners.
    pub fn float(x1: impl Into<f64>, y1: impl Into<f64>, x2: impl Into<f64>, y2: impl Into<f64>) -> Self {
        Self::from_corners(ScalarKind::Float64, x1.into(), y1.into(), x2.into(), y2.into())
    }

    /// Creates a new instance from the top-left and bottom-right corner scalars.
    pub fn from_corners(kind: ScalarKind, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::owned(kind, [x1, y1, x2, y2])
    }

    /// Creates a new instance from its top-left corner and its dimensions.
    pub fn from_point_and_extent(kind: ScalarKind, origin: impl Into<Point>, width: f64, height: f64) -> Self {
        Self::owned(kind, corners_from_extent(kind, origin.into(), width, height))
    }

    /// Creates a new instance from its top-left corner and a size.
    pub fn from_point_and_size(kind: ScalarKind, origin: impl Into<Point>, size: &impl SizeLike) -> Self {
        Self::from_point_and_extent(kind, origin, size.width(), size.height())
    }

    /// Creates a new instance from its top-left and bottom-right corners.
    pub fn from_two_points(kind: ScalarKind, top_left: impl Into<Point>, bottom_right: impl Into<Point>) -> Self {
        let top_left = top_left.into();
        let bottom_right = bottom_right.into();
        Self::owned(kind, [top_left.x, top_left.y, bottom_right.x, bottom_right.y])
    }

    /// Creates a new instance with a copy of the four raw scalars of another rectangle.
    pub fn from_rect(kind: ScalarKind, other: &(impl RectLike + ?Sized)) -> Self {
        Self::owned(kind, other.corners())
    }

    /// Creates a new instance from tagged arguments.
    ///
    /// Accepted shapes:
    /// * `()`: the null rectangle.
    /// * `(number, number, number, number)`: the corners `x1, y1, x2, y2`.
    /// * `(rect)`: a copy of the corners.
    /// * `(point, number, number)`: the top-left corner, width and height.
    /// * `(point, point)`: the top-left and bottom-right corners.
    /// * `(point, size)`: the top-left corner and the dimensions.
    ///
    /// # Errors
    /// [`GeomError::Type`] for any other shape.
    pub fn construct(kind: ScalarKind, args: &[Operand]) -> Result<Self> {
        let corners = resolve_corners(kind, args)?;
        Ok(Self::owned(kind, corners))
    }

    fn owned(kind: ScalarKind, corners: [f64; 4]) -> Self {
        let mut slots = Slots::new(kind);
        slots.set_values(corners);
        Self { slots }
    }
}

impl<'p> Rect<'p> {
    /// Creates a null rectangle in a pool.
    pub fn in_pool(pool: &'p Pool, kind: ScalarKind) -> Result<Self> {
        let mut slots = Slots::in_pool(pool, kind)?;
        slots.set_values(null_corners(kind));
        Ok(Self { slots })
    }

    /// Same as [`Rect::construct`], but the slots are allocated in a pool.
    ///
    /// # Parameters
    /// * `source`: A pool, or an existing pooled rectangle or size whose pool is used.
    /// * `kind`: The storage kind.
    /// * `args`: The tagged arguments.
    ///
    /// # Errors
    /// [`GeomError::Type`] if `source` exposes no pool or `args` has an unsupported shape, [`GeomError::Domain`] if the pool is
    /// exhausted. Nothing is allocated on error.
    pub fn construct_in_pool<'a>(source: impl Into<PoolSource<'a, 'p>>, kind: ScalarKind, args: &[Operand]) -> Result<Self> where
        'p: 'a,
    {
        let pool = source.into().pool()?;
        let corners = resolve_corners(kind, args)?;
        let mut slots = Slots::in_pool(pool, kind)?;
        slots.set_values(corners);
        Ok(Self { slots })
    }

    /// Creates a view at an explicit byte offset in a pool, without initializing it.
    ///
    /// The view may overlap other views in the same pool, in which case they observe each other's writes.
    pub fn view_at(pool: &'p Pool, kind: ScalarKind, offset: usize) -> Result<Self> {
        Ok(Self {
            slots: Slots::at(pool, kind, offset)?,
        })
    }

    /// The backing pool, if any.
    pub fn pool(&self) -> Option<&'p Pool> {
        self.slots.pool()
    }

    /// The byte offset in the backing pool, if any.
    pub fn offset(&self) -> Option<usize> {
        self.slots.offset()
    }

    /// Copies this rectangle into owned storage of the same kind.
    pub fn detach(&self) -> Rect<'static> {
        Rect {
            slots: self.slots.detach(),
        }
    }
}

impl RectLike for Rect<'_> {
    #[inline(always)]
    fn kind(&self) -> ScalarKind {
        self.slots.kind()
    }

    #[inline(always)]
    fn slot(&self, index: usize) -> f64 {
        self.slots.get(index)
    }

    #[inline(always)]
    fn set_slot(&mut self, index: usize, value: f64) {
        self.slots.set(index, value)
    }
}

impl Debug for Rect<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rect")
            .field("kind", &self.kind())
            .field("x1", &self.left())
            .field("y1", &self.top())
            .field("x2", &self.right())
            .field("y2", &self.bottom())
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Exact equality of kind and corners. See [`crate::fuzzy_eq_rect`] for a tolerant comparison.
impl PartialEq for Rect<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.corners() == other.corners()
    }
}

#[inline(always)]
pub(crate) fn null_corners(kind: ScalarKind) -> [f64; 4] {
    let adj = kind.adj();
    [0.0, 0.0, -adj, -adj]
}

#[inline(always)]
fn corners_from_extent(kind: ScalarKind, origin: Point, width: f64, height: f64) -> [f64; 4] {
    let adj = kind.adj();
    [origin.x, origin.y, origin.x + width - adj, origin.y + height - adj]
}

/// Dispatches on the tags of the arguments. See [`Rect::construct`].
fn resolve_corners(kind: ScalarKind, args: &[Operand]) -> Result<[f64; 4]> {
    match args {
        [] => Ok(null_corners(kind)),
        [Operand::Number(x1), Operand::Number(y1), Operand::Number(x2), Operand::Number(y2)] => Ok([*x1, *y1, *x2, *y2]),
        [Operand::Rect(rect)] => Ok(rect.corners()),
        [Operand::Point(origin), Operand::Number(width), Operand::Number(height)] => {
            Ok(corners_from_extent(kind, *origin, *width, *height))
        }
        [Operand::Point(top_left), Operand::Point(bottom_right)] => {
            Ok([top_left.x, top_left.y, bottom_right.x, bottom_right.y])
        }
        [Operand::Point(origin), Operand::Size(size)] => {
            Ok(corners_from_extent(kind, *origin, size.width(), size.height()))
        }
        _ => {
            let msg = format!("Cannot construct a rect from {}.", describe(args));
            log::debug!("{msg}");
            Err(GeomError::type_error(msg))
        }
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use super::{Rect, RectLike};
    use crate::scalar::ScalarKind;

    /// The serialized form of a [`Rect`].
    #[derive(Serialize, Deserialize)]
    struct RectRecord {
        kind: ScalarKind,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    }

    impl Serialize for Rect<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let [x1, y1, x2, y2] = self.corners();
            RectRecord { kind: self.kind(), x1, y1, x2, y2 }.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Rect<'static> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let RectRecord { kind, x1, y1, x2, y2 } = RectRecord::deserialize(deserializer)?;
            Ok(Rect::from_corners(kind, x1, y1, x2, y2))
        }
    }
}
