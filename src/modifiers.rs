//! Operations that change the live range: appends, positional insertion and
//! removal, bulk assignment.
//!
//! Positional operations accept either cursor flavour. A position is turned
//! into a slot index first, then validated, and only then is anything
//! touched, so a rejected position never leaves a half-shifted vector.

use core::mem;

use crate::cursor::{Cursor, Position};
use crate::error::SlotVecError;
use crate::slot_vec::{Growth, SlotVec};

/// Exchanges the contents of two vectors without copying elements.
pub fn swap<T>(a: &mut SlotVec<T>, b: &mut SlotVec<T>) {
    a.swap(b);
}

impl<T> SlotVec<T> {
    /// Appends `value`, doubling the capacity first when the vector is full.
    pub fn push_back(&mut self, value: T)
    where
        T: Default,
    {
        self.ensure_room(1, Growth::Double);
        let len = self.len();
        self.slots_mut()[len] = value;
        self.set_len(len + 1);
    }

    /// Drops the last element from the live range. Its value stays in the
    /// slot until overwritten.
    ///
    /// # Errors
    ///
    /// Returns `SlotVecError::EmptyVector` if the vector is empty.
    pub fn pop_back(&mut self) -> Result<(), SlotVecError> {
        if self.is_empty() {
            return Err(SlotVecError::EmptyVector {
                operation: "pop_back",
            });
        }
        self.set_len(self.len() - 1);
        Ok(())
    }

    /// Empties the live range. Capacity and slot contents are kept.
    pub fn clear(&mut self) {
        self.set_len(0);
    }

    /// Exchanges length, capacity and buffer with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    fn insertion_index<P: Position<Item = T>>(&self, pos: P) -> usize {
        let offset = self.offset_of(pos);
        match usize::try_from(offset) {
            Ok(index) if index <= self.len() => index,
            _ => panic!(
                "Insertion position {} out of bounds for vector of length {}",
                offset,
                self.len()
            ),
        }
    }

    fn erasure_index<P: Position<Item = T>>(&self, pos: P) -> usize {
        let offset = self.offset_of(pos);
        match usize::try_from(offset) {
            Ok(index) if index < self.len() => index,
            _ => panic!(
                "Erase position {} out of bounds for vector of length {}",
                offset,
                self.len()
            ),
        }
    }

    /// Inserts `value` before `pos` and returns a cursor to it.
    ///
    /// Cursors taken before the call are invalid afterwards if the vector
    /// had to grow.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not within `[begin, end]`.
    pub fn insert<P: Position<Item = T>>(&mut self, pos: P, value: T) -> Cursor<T>
    where
        T: Default,
    {
        let index = self.insertion_index(pos);
        self.insert_at(index, value)
    }

    /// Index-based form of [`SlotVec::insert`].
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Cursor<T>
    where
        T: Default,
    {
        let len = self.len();
        assert!(
            index <= len,
            "Insertion index {index} out of bounds for vector of length {len}"
        );
        self.ensure_room(1, Growth::Double);
        self.shift_tail_right(index, 1);
        self.slots_mut()[index] = value;
        self.set_len(len + 1);
        self.cursor_at(index)
    }

    /// Inserts a block of elements before `pos`, keeping their order, and
    /// returns a cursor to the first of them.
    ///
    /// When the block does not fit, capacity becomes
    /// `(capacity + block) * 2`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not within `[begin, end]`.
    pub fn insert_range<P, I>(&mut self, pos: P, items: I) -> Cursor<T>
    where
        P: Position<Item = T>,
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
        T: Default,
    {
        let index = self.insertion_index(pos);
        let items = items.into_iter();
        let block = items.len();

        self.ensure_room(block, Growth::Block);
        self.shift_tail_right(index, block);
        for (slot, value) in self.slots_mut()[index..index + block]
            .iter_mut()
            .zip(items)
        {
            *slot = value;
        }
        let len = self.len();
        self.set_len(len + block);
        self.cursor_at(index)
    }

    /// Inserts a copy of `items` before `pos`. See [`SlotVec::insert_range`].
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not within `[begin, end]`.
    pub fn insert_slice<P: Position<Item = T>>(&mut self, pos: P, items: &[T]) -> Cursor<T>
    where
        T: Default + Clone,
    {
        self.insert_range(pos, items.iter().cloned())
    }

    /// Removes the element at `pos` and returns a cursor to the slot it
    /// occupied, which now holds its successor.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not within `[begin, end)`.
    pub fn erase<P: Position<Item = T>>(&mut self, pos: P) -> Cursor<T> {
        let index = self.erasure_index(pos);
        self.erase_at(index)
    }

    /// Index-based form of [`SlotVec::erase`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase_at(&mut self, index: usize) -> Cursor<T> {
        let len = self.len();
        assert!(
            index < len,
            "Erase index {index} out of bounds for vector of length {len}"
        );
        self.shift_tail_left(index, 1);
        self.set_len(len - 1);
        self.cursor_at(index)
    }

    /// Removes `[first, last)` and returns a cursor at `first`.
    ///
    /// # Panics
    ///
    /// Panics unless `begin <= first <= last <= end`.
    pub fn erase_range<P: Position<Item = T>>(&mut self, first: P, last: P) -> Cursor<T> {
        let start = self.offset_of(first);
        let end = self.offset_of(last);
        match (usize::try_from(start), usize::try_from(end)) {
            (Ok(start), Ok(end)) if start <= end && end <= self.len() => {
                self.erase_span(start, end)
            }
            _ => panic!(
                "Erase range {}..{} out of bounds for vector of length {}",
                start,
                end,
                self.len()
            ),
        }
    }

    /// Index-based form of [`SlotVec::erase_range`].
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end <= len()`.
    pub fn erase_span(&mut self, start: usize, end: usize) -> Cursor<T> {
        let len = self.len();
        assert!(
            start <= end && end <= len,
            "Erase range {start}..{end} out of bounds for vector of length {len}"
        );
        let count = end - start;
        self.shift_tail_left(start, count);
        self.set_len(len - count);
        self.cursor_at(start)
    }

    /// Replaces the content with `count` copies of `value`.
    ///
    /// The buffer is reallocated to exactly `count` slots only when it is
    /// too small; otherwise capacity is left as it was.
    pub fn assign(&mut self, count: usize, value: T)
    where
        T: Default + Clone,
    {
        if self.capacity() < count {
            self.reallocate(count, 0);
        }
        self.slots_mut()[..count].fill(value);
        self.set_len(count);
    }

    /// Replaces the content with a copy of `items`. Capacity follows the
    /// rules of [`SlotVec::assign`].
    pub fn assign_slice(&mut self, items: &[T])
    where
        T: Default + Clone,
    {
        let count = items.len();
        if self.capacity() < count {
            self.reallocate(count, 0);
        }
        self.slots_mut()[..count].clone_from_slice(items);
        self.set_len(count);
    }

    /// Replaces the content with the items of a range of known length.
    /// Capacity follows the rules of [`SlotVec::assign`].
    pub fn assign_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
        T: Default,
    {
        let items = items.into_iter();
        let count = items.len();
        if self.capacity() < count {
            self.reallocate(count, 0);
        }
        let mut written = 0;
        for (slot, value) in self.slots_mut()[..count].iter_mut().zip(items) {
            *slot = value;
            written += 1;
        }
        self.set_len(written);
    }

    /// Copy assignment from another vector.
    ///
    /// Afterwards `len() == capacity() == other.len()`, even when the
    /// existing buffer was large enough to be reused.
    pub fn copy_from(&mut self, other: &SlotVec<T>)
    where
        T: Clone,
    {
        self.copy_from_slice(other.as_slice());
    }

    /// Copy assignment from a list. Same capacity rule as
    /// [`SlotVec::copy_from`].
    pub fn copy_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        let count = items.len();
        if self.capacity() < count {
            self.replace_storage(items.into(), count);
            return;
        }
        self.slots_mut()[..count].clone_from_slice(items);
        self.set_len(count);
        self.narrow_capacity(count);
    }
}
