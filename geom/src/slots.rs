//! Fixed-length numeric slot arrays, either owned or viewing a [`Pool`].

use std::fmt::{Debug, Formatter};

use crate::error::Result;
use crate::pool::Pool;
use crate::scalar::{Element, ScalarKind};

/// The backing storage of [`Slots`].
enum Storage<'p, const N: usize> {
    Int16([i16; N]),
    Float32([f32; N]),
    Float64([f64; N]),
    /// A window into a pool, starting at a byte offset that is aligned for `kind`.
    Pooled {
        pool: &'p Pool,
        offset: usize,
        kind: ScalarKind,
    },
}

/// `N` numeric slots of a single [`ScalarKind`].
///
/// All values pass through `f64` on their way in and out. Writing a value converts it the way the storage kind dictates (see
/// [`ScalarKind::coerce`]), so reading it back may yield a different value.
pub struct Slots<'p, const N: usize> {
    storage: Storage<'p, N>,
}

impl<const N: usize> Slots<'static, N> {
    /// Creates zeroed slots that own their storage.
    pub fn new(kind: ScalarKind) -> Self {
        let storage = match kind {
            ScalarKind::Int16 => Storage::Int16([0; N]),
            ScalarKind::Float32 => Storage::Float32([0.0; N]),
            ScalarKind::Float64 => Storage::Float64([0.0; N]),
        };
        Self { storage }
    }
}

impl<'p, const N: usize> Slots<'p, N> {
    /// Allocates the slots in a pool.
    ///
    /// # Parameters
    /// * `pool`: The pool.
    /// * `kind`: The storage kind. The pool aligns the region for it.
    pub fn in_pool(pool: &'p Pool, kind: ScalarKind) -> Result<Self> {
        let offset = pool.alloc(kind, N)?;
        Ok(Self::pooled(pool, offset, kind))
    }

    /// Places the slots at an explicit offset in a pool.
    ///
    /// The region is checked for alignment and bounds, but not for overlap with other views.
    pub fn at(pool: &'p Pool, kind: ScalarKind, offset: usize) -> Result<Self> {
        pool.check_region(kind, offset, N)?;
        Ok(Self::pooled(pool, offset, kind))
    }

    fn pooled(pool: &'p Pool, offset: usize, kind: ScalarKind) -> Self {
        log::trace!("Created {N} x {kind} view at offset {offset}.");
        Self {
            storage: Storage::Pooled { pool, offset, kind },
        }
    }

    pub fn kind(&self) -> ScalarKind {
        match &self.storage {
            Storage::Int16(_) => ScalarKind::Int16,
            Storage::Float32(_) => ScalarKind::Float32,
            Storage::Float64(_) => ScalarKind::Float64,
            Storage::Pooled { kind, .. } => *kind,
        }
    }

    /// The pool backing these slots, if any.
    pub fn pool(&self) -> Option<&'p Pool> {
        match &self.storage {
            Storage::Pooled { pool, .. } => Some(*pool),
            _ => None,
        }
    }

    /// The byte offset in the backing pool, if any.
    pub fn offset(&self) -> Option<usize> {
        match &self.storage {
            Storage::Pooled { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Reads a slot.
    ///
    /// # Panics
    /// This function panics if `index` is not smaller than `N`.
    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        assert!(index < N, "Slot index {index} out of range for {N} slots.");
        match &self.storage {
            Storage::Int16(values) => values[index].to_f64(),
            Storage::Float32(values) => values[index].to_f64(),
            Storage::Float64(values) => values[index],
            Storage::Pooled { pool, offset, kind } => {
                let at = offset + index * kind.element_size();
                match kind {
                    ScalarKind::Int16 => pool.load::<i16>(at).to_f64(),
                    ScalarKind::Float32 => pool.load::<f32>(at).to_f64(),
                    ScalarKind::Float64 => pool.load::<f64>(at),
                }
            }
        }
    }

    /// Writes a slot. Any value is accepted, it is converted per the storage kind.
    ///
    /// # Panics
    /// This function panics if `index` is not smaller than `N`.
    #[inline]
    pub fn set(&mut self, index: usize, value: f64) {
        assert!(index < N, "Slot index {index} out of range for {N} slots.");
        match &mut self.storage {
            Storage::Int16(values) => values[index] = i16::from_f64(value),
            Storage::Float32(values) => values[index] = f32::from_f64(value),
            Storage::Float64(values) => values[index] = value,
            Storage::Pooled { pool, offset, kind } => {
                let at = *offset + index * kind.element_size();
                match kind {
                    ScalarKind::Int16 => pool.store(at, i16::from_f64(value)),
                    ScalarKind::Float32 => pool.store(at, f32::from_f64(value)),
                    ScalarKind::Float64 => pool.store(at, value),
                }
            }
        }
    }

    /// Reads all slots.
    pub fn values(&self) -> [f64; N] {
        std::array::from_fn(|index| self.get(index))
    }

    /// Writes all slots.
    pub fn set_values(&mut self, values: [f64; N]) {
        values.into_iter()
            .enumerate()
            .for_each(|(index, value)| self.set(index, value));
    }

    /// Copies the values into owned slots of the same kind.
    pub fn detach(&self) -> Slots<'static, N> {
        let mut out = Slots::new(self.kind());
        out.set_values(self.values());
        out
    }
}

impl<const N: usize> Debug for Slots<'_, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = f.debug_struct("Slots");
        out.field("kind", &self.kind())
            .field("values", &self.values());
        if let Some(offset) = self.offset() {
            out.field("offset", &offset);
        }
        out.finish()
    }
}
