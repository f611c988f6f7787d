//! Sizes backed by two numeric slots.

use std::fmt::{Debug, Formatter};

use crate::error::{GeomError, Result};
use crate::operand::{describe, Operand, PoolSource};
use crate::pool::Pool;
use crate::scalar::ScalarKind;
use crate::slots::Slots;

/// Slot index of the width.
pub const WIDTH: usize = 0;
/// Slot index of the height.
pub const HEIGHT: usize = 1;

/// Anything that is shaped like a size: two scalars `(width, height)` of a single [`ScalarKind`].
///
/// Sizes are plain magnitudes. Unlike rectangles they have no edge adjustment.
pub trait SizeLike {
    fn kind(&self) -> ScalarKind;

    /// Reads a raw slot ([`WIDTH`] or [`HEIGHT`]).
    fn slot(&self, index: usize) -> f64;

    /// Writes a raw slot ([`WIDTH`] or [`HEIGHT`]) without validation.
    fn set_slot(&mut self, index: usize, value: f64);

    #[inline(always)]
    fn width(&self) -> f64 {
        self.slot(WIDTH)
    }

    #[inline(always)]
    fn height(&self) -> f64 {
        self.slot(HEIGHT)
    }

    /// Sets the width.
    ///
    /// # Errors
    /// [`GeomError::Type`] if `value` is not a number (NaN). Nothing is written in that case.
    fn set_width(&mut self, value: f64) -> Result<()> {
        self.set_slot(WIDTH, check_numeric("width", value)?);
        Ok(())
    }

    /// Sets the height.
    ///
    /// # Errors
    /// [`GeomError::Type`] if `value` is not a number (NaN). Nothing is written in that case.
    fn set_height(&mut self, value: f64) -> Result<()> {
        self.set_slot(HEIGHT, check_numeric("height", value)?);
        Ok(())
    }

    fn dimensions(&self) -> [f64; 2] {
        [self.width(), self.height()]
    }

    /// Writes both slots without validation.
    fn set_dimensions(&mut self, dimensions: [f64; 2]) {
        let [width, height] = dimensions;
        self.set_slot(WIDTH, width);
        self.set_slot(HEIGHT, height);
    }
}

/// A size (or dimension) in 2D space.
///
/// Like [`crate::Rect`], the slots are either owned or a view into a [`Pool`].
pub struct Size<'p> {
    slots: Slots<'p, 2>,
}

impl Size<'static> {
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `kind`: The storage kind.
    /// * `width`: The width.
    /// * `height`: The height.
    pub fn new(kind: ScalarKind, width: f64, height: f64) -> Self {
        let mut slots = Slots::new(kind);
        slots.set_values([width, height]);
        Self { slots }
    }

    /// Creates an integer size.
    pub fn int(width: impl Into<f64>, height: impl Into<f64>) -> Self {
        Self::new(ScalarKind::Int16, width.into(), height.into())
    }

    /// Creates a 64-bit floating size.
    pub fn float(width: impl Into<f64>, height: impl Into<f64>) -> Self {
        Self::new(ScalarKind::Float64, width.into(), height.into())
    }

    /// Creates a new instance from tagged arguments.
    ///
    /// Accepted shapes:
    /// * `()`: zero width and height.
    /// * `(number, number)`: width and height.
    /// * `(size)`: a copy.
    ///
    /// # Errors
    /// [`GeomError::Type`] for any other shape or if a number is NaN.
    pub fn construct(kind: ScalarKind, args: &[Operand]) -> Result<Self> {
        let [width, height] = resolve_dimensions(args)?;
        Ok(Self::new(kind, width, height))
    }
}

impl<'p> Size<'p> {
    /// Creates a zero size in a pool.
    pub fn in_pool(pool: &'p Pool, kind: ScalarKind) -> Result<Self> {
        let mut slots = Slots::in_pool(pool, kind)?;
        slots.set_values([0.0, 0.0]);
        Ok(Self { slots })
    }

    /// Same as [`Size::construct`], but the slots are allocated in a pool.
    ///
    /// # Errors
    /// [`GeomError::Type`] if `source` exposes no pool or `args` has an unsupported shape, [`GeomError::Domain`] if the pool is
    /// exhausted. Nothing is allocated on error.
    pub fn construct_in_pool<'a>(source: impl Into<PoolSource<'a, 'p>>, kind: ScalarKind, args: &[Operand]) -> Result<Self> where
        'p: 'a,
    {
        let pool = source.into().pool()?;
        let dimensions = resolve_dimensions(args)?;
        let mut slots = Slots::in_pool(pool, kind)?;
        slots.set_values(dimensions);
        Ok(Self { slots })
    }

    /// Creates a view at an explicit byte offset in a pool, without initializing it.
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

    /// Copies this size into owned storage of the same kind.
    pub fn detach(&self) -> Size<'static> {
        Size {
            slots: self.slots.detach(),
        }
    }
}

impl SizeLike for Size<'_> {
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

impl Debug for Size<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Size")
            .field("kind", &self.kind())
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl PartialEq for Size<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.dimensions() == other.dimensions()
    }
}

fn check_numeric(field: &str, value: f64) -> Result<f64> {
    if value.is_nan() {
        let msg = format!("The {field} of a size must be a number.");
        log::debug!("{msg}");
        Err(GeomError::type_error(msg))
    } else {
        Ok(value)
    }
}

/// Dispatches on the tags of the arguments. See [`Size::construct`].
fn resolve_dimensions(args: &[Operand]) -> Result<[f64; 2]> {
    match args {
        [] => Ok([0.0, 0.0]),
        [Operand::Number(width), Operand::Number(height)] => {
            Ok([check_numeric("width", *width)?, check_numeric("height", *height)?])
        }
        [Operand::Size(size)] => Ok(size.dimensions()),
        _ => {
            let msg = format!("Cannot construct a size from {}.", describe(args));
            log::debug!("{msg}");
            Err(GeomError::type_error(msg))
        }
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use super::{Size, SizeLike};
    use crate::scalar::ScalarKind;

    /// The serialized form of a [`Size`].
    #[derive(Serialize, Deserialize)]
    struct SizeRecord {
        kind: ScalarKind,
        width: f64,
        height: f64,
    }

    impl Serialize for Size<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            SizeRecord { kind: self.kind(), width: self.width(), height: self.height() }.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Size<'static> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let SizeRecord { kind, width, height } = SizeRecord::deserialize(deserializer)?;
            Ok(Size::new(kind, width, height))
        }
    }
}
