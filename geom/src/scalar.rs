//! Scalar storage kinds and the conversions between them.

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use crate::error::GeomError;

/// The relative tolerance used by [`fuzzy_eq`].
pub const EPSILON: f64 = 1e-6;

/// The storage kind of the numeric slots behind a rectangle or a size.
///
/// The kind decides the edge convention of a rectangle. Integer rectangles have an inclusive bottom-right corner (the last covered
/// unit), floating rectangles have an exclusive one. See [`ScalarKind::adj`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScalarKind {
    /// 16-bit signed integer.
    Int16,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
}

impl ScalarKind {
    /// Returns the adjustment term for the edge convention: `1` for integer kinds, `0` for floating kinds.
    #[inline(always)]
    pub fn adj(&self) -> f64 {
        if self.is_integer() {
            1.0
        } else {
            0.0
        }
    }

    #[inline(always)]
    pub fn is_integer(&self) -> bool {
        matches!(self, ScalarKind::Int16)
    }

    /// The size of a single element in bytes. This is also its required alignment inside a [`crate::Pool`].
    #[inline(always)]
    pub fn element_size(&self) -> usize {
        match self {
            ScalarKind::Int16 => std::mem::size_of::<i16>(),
            ScalarKind::Float32 => std::mem::size_of::<f32>(),
            ScalarKind::Float64 => std::mem::size_of::<f64>(),
        }
    }

    /// Converts a value the way storing it in a slot of this kind would.
    pub fn coerce(&self, value: f64) -> f64 {
        match self {
            ScalarKind::Int16 => i16::from_f64(value).to_f64(),
            ScalarKind::Float32 => f32::from_f64(value).to_f64(),
            ScalarKind::Float64 => value,
        }
    }
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let string = match self {
            ScalarKind::Int16 => "int",
            ScalarKind::Float32 => "f32",
            ScalarKind::Float64 => "f64",
        };
        f.write_str(string)
    }
}

impl FromStr for ScalarKind {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" | "i16" => Ok(ScalarKind::Int16),
            "f32" => Ok(ScalarKind::Float32),
            "f64" | "float" => Ok(ScalarKind::Float64),
            other => Err(GeomError::domain(format!("Invalid scalar kind: {other}."))),
        }
    }
}

/// A primitive that can back a numeric slot.
pub trait Element: Copy + Debug + PartialEq {
    /// The kind that corresponds to this primitive.
    const KIND: ScalarKind;

    /// The native-endian byte representation.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Converts from `f64` with typed-array semantics.
    fn from_f64(value: f64) -> Self;

    fn to_f64(self) -> f64;

    fn from_ne_bytes(bytes: Self::Bytes) -> Self;

    fn to_ne_bytes(self) -> Self::Bytes;
}

macro_rules! impl_element {
    ($ty:ty, $kind:expr, $from_f64:expr) => {
        impl Element for $ty {
            const KIND: ScalarKind = $kind;

            type Bytes = [u8; std::mem::size_of::<$ty>()];

            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                $from_f64(value)
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                <$ty>::from_ne_bytes(bytes)
            }

            #[inline(always)]
            fn to_ne_bytes(self) -> Self::Bytes {
                <$ty>::to_ne_bytes(self)
            }
        }
    }
}

impl_element!(i16, ScalarKind::Int16, to_int16);
impl_element!(f32, ScalarKind::Float32, |value: f64| value as f32);
impl_element!(f64, ScalarKind::Float64, |value: f64| value);

/// Truncates toward zero and wraps modulo 2^16. Non-finite values become zero.
fn to_int16(value: f64) -> i16 {
    if !value.is_finite() {
        return 0;
    }
    let wrapped = value.trunc().rem_euclid(65536.0);
    wrapped as u16 as i16
}

/// Compares two scalars with a relative tolerance of [`EPSILON`] (absolute for magnitudes below one).
#[inline]
pub fn fuzzy_eq(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= EPSILON * 1f64.max(a.abs()).max(b.abs())
}
