//! Axis-aligned rectangles and sizes for GUI layout.
//!
//! A [`Rect`] is four scalars `(x1, y1, x2, y2)` and a [`Size`] is two scalars `(width, height)`. Both keep their scalars in
//! [`Slots`] of a runtime [`ScalarKind`]: 16-bit integers or 32/64-bit floats. The slots either own their storage or are a view into a
//! shared [`Pool`], so that many rectangles can live in one buffer.
//!
//! The kind also decides the edge convention of a rectangle. For integer rectangles the bottom-right corner is the last covered unit
//! (a 10 by 10 rectangle at the origin is `(0, 0, 9, 9)`), for floating rectangles it is an exclusive bound (`(0, 0, 10, 10)`). The
//! functions in [`algebra`] branch on this, so the same code serves both.
//!
//! ```
//! use vista_geom::{algebra, Rect, RectLike, ScalarKind};
//!
//! let a = Rect::int(0, 0, 9, 9);
//! let b = Rect::int(5, 5, 14, 14);
//! let mut out = Rect::new(ScalarKind::Int16);
//! algebra::and(&a, &b, &mut out);
//! assert_eq!([5.0, 5.0, 9.0, 9.0], out.corners());
//! ```

pub mod algebra;
pub mod error;
pub mod operand;
pub mod point;
pub mod pool;
pub mod rect;
pub mod scalar;
pub mod size;
pub mod slots;
pub mod xml;

pub use algebra::{fuzzy_eq_rect, fuzzy_eq_size};
pub use error::{GeomError, Result};
pub use operand::{Operand, PoolSource, Tag};
pub use point::Point;
pub use pool::Pool;
pub use rect::{Rect, RectLike};
pub use scalar::{fuzzy_eq, Element, ScalarKind, EPSILON};
pub use size::{Size, SizeLike};
pub use slots::Slots;
