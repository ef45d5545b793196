use alloc::vec;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::slice;

use crate::cursor::{slot_offset, slot_ref};
use crate::slot_vec::SlotVec;

/// Iterator over the slots between two cursors
///
/// Created by `range_to` on [`Cursor`](crate::Cursor) or
/// [`ConstCursor`](crate::ConstCursor). This iterator implements `Clone`.
pub struct CursorRange<'a, T> {
    front: *const T,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<T> CursorRange<'_, T> {
    pub(crate) fn new(front: *const T, remaining: usize) -> Self {
        Self {
            front,
            remaining,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for CursorRange<'_, T> {
    fn clone(&self) -> Self {
        Self::new(self.front, self.remaining)
    }
}

impl<'a, T> Iterator for CursorRange<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // Safe: the range was created via unsafe `range_to()`, whose caller
        // guaranteed that every slot in [front, front + remaining) is live
        #[allow(unsafe_code)]
        let item = unsafe { slot_ref(self.front) };
        self.front = slot_offset(self.front, 1);
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for CursorRange<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        // Safe: same contract as `next()`, the slot lies inside the range
        #[allow(unsafe_code, clippy::cast_possible_wrap)]
        unsafe {
            Some(slot_ref(slot_offset(self.front, self.remaining as isize)))
        }
    }
}

impl<T> ExactSizeIterator for CursorRange<'_, T> {}

impl<T> FusedIterator for CursorRange<'_, T> {}

/// Owning iterator over the live elements of a `SlotVec`
///
/// Placeholder slots past the live range are dropped without being yielded.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SlotVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (storage, len) = self.into_parts();
        let mut items = storage.into_vec();
        items.truncate(len);
        IntoIter {
            inner: items.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SlotVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SlotVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
