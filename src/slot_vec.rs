use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;
use core::ops::{Index, IndexMut};
use core::slice;

use crate::cursor::{distance, ConstCursor, Cursor, Position};
use crate::error::SlotVecError;

#[cfg(feature = "log")]
const LOG_TARGET: &str = "slotvec";

/// How to pick the new capacity once the live range no longer fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Growth {
    /// Single-element appends: `max(1, capacity * 2)`.
    Double,
    /// Block insertion of `n` elements: `(capacity + n) * 2`.
    Block,
}

/// A growable contiguous vector with explicit capacity control
///
/// The whole buffer is made of real `T` values: slots past the live range
/// hold defaults or stale values left behind by removals.
pub struct SlotVec<T> {
    storage: Box<[T]>,
    len: usize,
    capacity: usize,
}

pub(crate) fn default_slots<T: Default>(count: usize) -> Box<[T]> {
    iter::repeat_with(T::default).take(count).collect()
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl<T> SlotVec<T> {
    /// Creates an empty vector without allocating.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Box::default(),
            len: 0,
            capacity: 0,
        }
    }

    /// Creates a vector of `len` default elements, with capacity exactly `len`.
    #[must_use]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self {
            storage: default_slots(len),
            len,
            capacity: len,
        }
    }

    /// Creates a vector from a range of known length.
    ///
    /// Exactly `iter.len()` slots are allocated. An iterator that yields
    /// fewer items than it reported leaves the missing slots as defaults
    /// outside the live range.
    pub fn from_range<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
        T: Default,
    {
        let items = items.into_iter();
        let count = items.len();
        let mut storage = default_slots(count);
        let mut len = 0;
        for (slot, value) in storage.iter_mut().zip(items) {
            *slot = value;
            len += 1;
        }
        Self {
            storage,
            len,
            capacity: count,
        }
    }

    /// Creates a vector holding a copy of `items`, with capacity exactly
    /// `items.len()`.
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from(items.to_vec())
    }

    /// Creates a vector of `count` copies of `value`.
    #[must_use]
    pub fn from_elem(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        Self {
            storage: iter::repeat(value).take(count).collect(),
            len: count,
            capacity: count,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Grows the buffer to exactly `new_capacity` slots if that is more than
    /// the current capacity.
    pub fn reserve(&mut self, new_capacity: usize)
    where
        T: Default,
    {
        if new_capacity > self.capacity {
            self.reallocate(new_capacity, self.len);
        }
    }

    /// Reallocates to exactly `len()` slots if there is unused capacity.
    pub fn shrink_to_fit(&mut self)
    where
        T: Default,
    {
        if self.capacity > self.len {
            self.reallocate(self.len, self.len);
        }
    }

    /// Replaces the buffer with `new_capacity` fresh slots, moving the first
    /// `keep` live elements over. The old buffer is dropped.
    pub(crate) fn reallocate(&mut self, new_capacity: usize, keep: usize)
    where
        T: Default,
    {
        debug_assert!(keep <= self.len && keep <= new_capacity);
        let mut fresh = default_slots(new_capacity);
        fresh[..keep].swap_with_slice(&mut self.storage[..keep]);

        #[cfg(feature = "log")]
        log::trace!(
            target: LOG_TARGET,
            "reallocated storage: capacity {} -> {}, {} elements moved",
            self.capacity,
            new_capacity,
            keep
        );

        self.storage = fresh;
        self.capacity = new_capacity;
    }

    /// Makes room for `additional` more live elements, growing the buffer by
    /// `growth` when they do not fit.
    pub(crate) fn ensure_room(&mut self, additional: usize, growth: Growth)
    where
        T: Default,
    {
        let required = self
            .len
            .checked_add(additional)
            .unwrap_or_else(|| capacity_overflow());
        if required <= self.capacity {
            return;
        }
        let new_capacity = match growth {
            Growth::Double => self.capacity.checked_mul(2).map(|doubled| doubled.max(1)),
            Growth::Block => self
                .capacity
                .checked_add(additional)
                .and_then(|sum| sum.checked_mul(2)),
        }
        .unwrap_or_else(|| capacity_overflow());
        self.reallocate(new_capacity.max(required), self.len);
    }

    /// Moves the run `[index, len)` right by `count` slots, walking backward
    /// from the old end. The `count` slots opened at `index` hold whatever
    /// placeholders were displaced. `len` is not changed.
    pub(crate) fn shift_tail_right(&mut self, index: usize, count: usize) {
        debug_assert!(self.len + count <= self.capacity);
        let mut source = self.len;
        while source > index {
            source -= 1;
            self.storage.swap(source, source + count);
        }
    }

    /// Moves the run `[index + count, len)` left by `count` slots, swapping
    /// pairwise while walking forward. The `count` displaced elements end up
    /// at the tail of the live range. `len` is not changed.
    pub(crate) fn shift_tail_left(&mut self, index: usize, count: usize) {
        let mut target = index;
        for source in index + count..self.len {
            self.storage.swap(target, source);
            target += 1;
        }
    }

    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity);
        self.len = len;
    }

    /// Installs a buffer of exactly `storage.len()` slots with `len` live.
    pub(crate) fn replace_storage(&mut self, storage: Box<[T]>, len: usize) {
        debug_assert!(len <= storage.len());

        #[cfg(feature = "log")]
        log::trace!(
            target: LOG_TARGET,
            "replaced storage: capacity {} -> {}",
            self.capacity,
            storage.len()
        );

        self.capacity = storage.len();
        self.storage = storage;
        self.len = len;
    }

    /// Narrows the reported capacity without touching the buffer.
    pub(crate) fn narrow_capacity(&mut self, capacity: usize) {
        debug_assert!(self.len <= capacity && capacity <= self.capacity);
        self.capacity = capacity;
    }

    pub(crate) fn into_parts(self) -> (Box<[T]>, usize) {
        (self.storage, self.len)
    }

    /// Every allocated slot, live or not.
    pub(crate) fn slots(&self) -> &[T] {
        &self.storage[..self.capacity]
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [T] {
        &mut self.storage[..self.capacity]
    }

    fn check_bounds(&self, index: usize) -> Result<(), SlotVecError> {
        if index >= self.len {
            Err(SlotVecError::IndexOutOfBounds {
                index,
                length: self.len,
            })
        } else {
            Ok(())
        }
    }

    fn check_not_empty(&self, operation: &'static str) -> Result<(), SlotVecError> {
        if self.len == 0 {
            Err(SlotVecError::EmptyVector { operation })
        } else {
            Ok(())
        }
    }

    /// Gets the element at `index`, checked against the live range.
    ///
    /// # Errors
    ///
    /// Returns `SlotVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, SlotVecError> {
        self.check_bounds(index)?;
        Ok(&self.storage[index])
    }

    /// Mutable counterpart of [`SlotVec::at`].
    ///
    /// # Errors
    ///
    /// Returns `SlotVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SlotVecError> {
        self.check_bounds(index)?;
        Ok(&mut self.storage[index])
    }

    /// # Errors
    ///
    /// Returns `SlotVecError::EmptyVector` if the vector is empty.
    pub fn front(&self) -> Result<&T, SlotVecError> {
        self.check_not_empty("front")?;
        Ok(&self.storage[0])
    }

    /// # Errors
    ///
    /// Returns `SlotVecError::EmptyVector` if the vector is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, SlotVecError> {
        self.check_not_empty("front_mut")?;
        Ok(&mut self.storage[0])
    }

    /// # Errors
    ///
    /// Returns `SlotVecError::EmptyVector` if the vector is empty.
    pub fn back(&self) -> Result<&T, SlotVecError> {
        self.check_not_empty("back")?;
        Ok(&self.storage[self.len - 1])
    }

    /// # Errors
    ///
    /// Returns `SlotVecError::EmptyVector` if the vector is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, SlotVecError> {
        self.check_not_empty("back_mut")?;
        let last = self.len - 1;
        Ok(&mut self.storage[last])
    }

    /// The live range as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.storage[..self.len]
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage[..self.len]
    }

    /// Address of the first slot.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }

    /// Returns an iterator over the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Cursor at the first slot.
    #[must_use]
    pub fn begin(&mut self) -> Cursor<T> {
        Cursor::new(self.storage.as_mut_ptr())
    }

    /// Cursor one past the last live element.
    #[must_use]
    pub fn end(&mut self) -> Cursor<T> {
        self.cursor_at(self.len)
    }

    #[must_use]
    pub fn cbegin(&self) -> ConstCursor<T> {
        ConstCursor::new(self.storage.as_ptr())
    }

    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn cend(&self) -> ConstCursor<T> {
        self.cbegin().offset(self.len as isize)
    }

    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn cursor_at(&mut self, index: usize) -> Cursor<T> {
        self.begin().offset(index as isize)
    }

    /// Slot offset of `pos` from the first slot.
    pub(crate) fn offset_of<P: Position<Item = T>>(&self, pos: P) -> isize {
        distance(self.cbegin(), ConstCursor::new(pos.slot_ptr()))
    }
}

impl<T> Default for SlotVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// `clone()` and `clone_from()` both mirror the source capacity. Use
/// [`SlotVec::copy_from`] for the assignment that trims capacity to length.
impl<T: Default + Clone> Clone for SlotVec<T> {
    fn clone(&self) -> Self {
        let mut storage = default_slots(self.capacity);
        storage[..self.len].clone_from_slice(self.as_slice());
        Self {
            storage,
            len: self.len,
            capacity: self.capacity,
        }
    }
}

impl<T> Index<usize> for SlotVec<T> {
    type Output = T;

    /// Unchecked against the live range: any allocated slot can be read.
    ///
    /// Panics only if `index >= capacity()`.
    fn index(&self, index: usize) -> &T {
        &self.slots()[index]
    }
}

impl<T> IndexMut<usize> for SlotVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots_mut()[index]
    }
}

impl<T, U> PartialEq<SlotVec<U>> for SlotVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &SlotVec<U>) -> bool {
        if self.len != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for SlotVec<T> {}

impl<T, U> PartialEq<[U]> for SlotVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for SlotVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for SlotVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<Vec<U>> for SlotVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for SlotVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for SlotVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> From<Vec<T>> for SlotVec<T> {
    fn from(items: Vec<T>) -> Self {
        let storage = items.into_boxed_slice();
        let len = storage.len();
        Self {
            storage,
            len,
            capacity: len,
        }
    }
}

impl<T: Clone> From<&[T]> for SlotVec<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T, const N: usize> From<[T; N]> for SlotVec<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T> FromIterator<T> for SlotVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::from(items.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for SlotVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for value in items {
            self.push_back(value);
        }
    }
}
