//! A shared byte buffer that rectangles and sizes can be constructed as views into.
//!
//! Views created in a [`Pool`] borrow it, so they can never outlive it. Views do not own their region exclusively, though: two views
//! may be placed over the same bytes (see [`crate::Rect::view_at`]) and a write through one of them is visible through the other.
//! Nothing in this crate detects or prevents such aliasing. A [`Pool`] is not [`Sync`], so all views into it live on one thread, and
//! it is up to the caller to choreograph mutations of aliased views.

use std::cell::Cell;
use std::fmt::{Debug, Formatter};

use crate::error::{GeomError, Result};
use crate::scalar::{Element, ScalarKind};

/// A fixed-capacity byte buffer with a bump allocator that hands out type-aligned regions.
pub struct Pool {
    /// The backing bytes.
    bytes: Box<[Cell<u8>]>,
    /// The offset of the first unallocated byte.
    cursor: Cell<usize>,
}

impl Pool {
    /// Creates a new zero-filled instance.
    ///
    /// # Parameters
    /// * `capacity`: The capacity in bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: (0..capacity).map(|_| Cell::new(0)).collect(),
            cursor: Cell::new(0),
        }
    }

    /// The capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// The number of bytes handed out so far, including alignment padding.
    pub fn used(&self) -> usize {
        self.cursor.get()
    }

    /// Allocates a region for `count` elements of `kind`.
    ///
    /// # Parameters
    /// * `kind`: The element kind. The region starts at a multiple of its element size.
    /// * `count`: The number of elements.
    ///
    /// # Returns
    /// The byte offset of the region or an error if the pool is exhausted.
    pub fn alloc(&self, kind: ScalarKind, count: usize) -> Result<usize> {
        let align = kind.element_size();
        let offset = align_up(self.cursor.get(), align);
        let end = region_end(offset, align, count).filter(|end| *end <= self.capacity())
            .ok_or_else(|| GeomError::domain(format!(
                "Pool exhausted: {count} x {kind} requested at offset {offset} but the capacity is {}.",
                self.capacity()
            )))?;
        self.cursor.set(end);
        log::debug!("Pool allocated {count} x {kind} at offset {offset}.");
        Ok(offset)
    }

    /// Checks that `count` elements of `kind` fit at `offset` and that `offset` is aligned for `kind`.
    pub fn check_region(&self, kind: ScalarKind, offset: usize, count: usize) -> Result<()> {
        let align = kind.element_size();
        if offset % align != 0 {
            return Err(GeomError::domain(format!("Offset {offset} is not aligned for {kind} (alignment {align}).")));
        }
        let fits = region_end(offset, align, count).map_or(false, |end| end <= self.capacity());
        if !fits {
            return Err(GeomError::domain(format!(
                "Region of {count} x {kind} at offset {offset} exceeds the pool capacity of {}.",
                self.capacity()
            )));
        }
        Ok(())
    }

    /// Rewinds the allocator and zeroes all bytes.
    ///
    /// This requires exclusive access, so no view into the pool can be alive.
    pub fn reset(&mut self) {
        self.bytes.iter().for_each(|byte| byte.set(0));
        self.cursor.set(0);
    }

    /// Copies the current contents.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.iter().map(Cell::get).collect()
    }

    /// Reads the element at the provided byte offset.
    ///
    /// # Panics
    /// This function panics if the element does not fit inside the pool. Views validate their region on construction.
    pub(crate) fn load<E: Element>(&self, offset: usize) -> E {
        let mut bytes = <E::Bytes as Default>::default();
        let target = bytes.as_mut();
        let source = &self.bytes[offset..offset + target.len()];
        target.iter_mut()
            .zip(source)
            .for_each(|(byte, cell)| *byte = cell.get());
        E::from_ne_bytes(bytes)
    }

    /// Writes the element at the provided byte offset.
    ///
    /// # Panics
    /// This function panics if the element does not fit inside the pool.
    pub(crate) fn store<E: Element>(&self, offset: usize, value: E) {
        let bytes = value.to_ne_bytes();
        let source = bytes.as_ref();
        let target = &self.bytes[offset..offset + source.len()];
        target.iter()
            .zip(source)
            .for_each(|(cell, byte)| cell.set(*byte));
    }
}

impl Debug for Pool {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool")
            .field("capacity", &self.capacity())
            .field("used", &self.used())
            .finish()
    }
}

#[inline(always)]
fn align_up(offset: usize, align: usize) -> usize {
    (offset + align - 1) / align * align
}

/// The end of a region of `count` elements of `size` bytes at `offset`, or `None` if it is not addressable.
#[inline(always)]
fn region_end(offset: usize, size: usize, count: usize) -> Option<usize> {
    size.checked_mul(count)
        .and_then(|len| offset.checked_add(len))
}
