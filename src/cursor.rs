//! Pointer-like slot handles.
//!
//! A cursor is a raw slot address plus a type. Moving it, offsetting it,
//! comparing it and measuring distances are plain address arithmetic and never
//! touch memory, so they are safe. Reading through a cursor is `unsafe`: a
//! cursor does not know which vector it came from and does not notice when
//! that vector reallocates or is dropped.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr::{self, NonNull};

use crate::iter::CursorRange;

mod sealed {
    pub trait Sealed {}
}

/// A slot position accepted by the positional `SlotVec` operations.
///
/// Implemented by [`Cursor`] and [`ConstCursor`], so `insert`, `erase` and
/// friends behave identically whichever flavour the caller holds.
pub trait Position: Copy + sealed::Sealed {
    /// Element type of the slot.
    type Item;

    /// Raw address of the slot.
    fn slot_ptr(self) -> *const Self::Item;
}

/// Signed number of slots from `first` to `last` ("last - first").
///
/// Cursors over zero-sized slots step one byte per slot, so their distances
/// count slots as well.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn distance<P: Position>(first: P, last: P) -> isize {
    let slot_size = mem::size_of::<P::Item>().max(1);
    let bytes = (last.slot_ptr() as isize).wrapping_sub(first.slot_ptr() as isize);
    bytes / slot_size as isize
}

/// Address `count` slots away from `ptr`.
///
/// Zero-sized slots advance by one byte each, so that positions in a vector
/// of `()` stay distinct and measurable.
pub(crate) fn slot_offset<T>(ptr: *const T, count: isize) -> *const T {
    if mem::size_of::<T>() == 0 {
        ptr.wrapping_byte_offset(count)
    } else {
        ptr.wrapping_offset(count)
    }
}

/// Reference to the slot at `ptr`.
///
/// # Safety
///
/// For sized `T`, `ptr` must point at a live slot that outlives `'a`.
#[allow(unsafe_code)]
pub(crate) unsafe fn slot_ref<'a, T>(ptr: *const T) -> &'a T {
    if mem::size_of::<T>() == 0 {
        // the address only encodes a position and may be misaligned
        NonNull::dangling().as_ref()
    } else {
        &*ptr
    }
}

/// Mutable form of [`slot_ref`], with the same contract plus exclusivity.
#[allow(unsafe_code)]
unsafe fn slot_mut<'a, T>(ptr: *mut T) -> &'a mut T {
    if mem::size_of::<T>() == 0 {
        let mut slot = NonNull::dangling();
        slot.as_mut()
    } else {
        &mut *ptr
    }
}

/// Handle to a slot with write access, taken from `&mut SlotVec`.
pub struct Cursor<T> {
    ptr: *mut T,
    _marker: PhantomData<T>,
}

/// Read-only handle to a slot, taken from `&SlotVec`.
pub struct ConstCursor<T> {
    ptr: *const T,
    _marker: PhantomData<T>,
}

macro_rules! cursor_common {
    ($name:ident, $ptr:ty, $null:path) => {
        impl<T> $name<T> {
            /// Wraps a raw slot address.
            #[must_use]
            pub const fn new(ptr: $ptr) -> Self {
                Self {
                    ptr,
                    _marker: PhantomData,
                }
            }

            /// The end sentinel that points nowhere.
            #[must_use]
            pub const fn null() -> Self {
                Self::new($null())
            }

            #[must_use]
            pub fn as_ptr(self) -> $ptr {
                self.ptr
            }

            #[must_use]
            pub fn is_null(self) -> bool {
                self.ptr.is_null()
            }

            /// Moves one slot forward and returns the moved handle.
            pub fn increment(&mut self) -> Self {
                *self = self.offset(1);
                *self
            }

            /// Moves one slot forward and returns the handle as it was before.
            pub fn post_increment(&mut self) -> Self {
                let before = *self;
                *self = self.offset(1);
                before
            }

            /// Moves one slot backward and returns the moved handle.
            pub fn decrement(&mut self) -> Self {
                *self = self.offset(-1);
                *self
            }

            /// Moves one slot backward and returns the handle as it was before.
            pub fn post_decrement(&mut self) -> Self {
                let before = *self;
                *self = self.offset(-1);
                before
            }

            /// Handle `n` slots away; negative `n` moves backward.
            #[must_use]
            pub fn offset(self, n: isize) -> Self {
                Self::new(slot_offset(self.ptr as *const T, n) as $ptr)
            }

            /// Signed slot count from `self` to `other`.
            #[must_use]
            pub fn distance_to(self, other: Self) -> isize {
                distance(self, other)
            }

            /// Adapts the `[self, last)` pair into an iterator over the slots.
            ///
            /// A `last` that lies before `self` yields an empty range.
            ///
            /// # Safety
            ///
            /// Both handles must point into (or one past the end of) the same
            /// live buffer, and that buffer must not be reallocated, dropped
            /// or written through another path while the range is alive.
            #[allow(unsafe_code)]
            #[must_use]
            pub unsafe fn range_to<'a>(self, last: Self) -> CursorRange<'a, T> {
                let remaining = usize::try_from(distance(self, last)).unwrap_or(0);
                CursorRange::new(self.ptr as *const T, remaining)
            }
        }

        impl<T> sealed::Sealed for $name<T> {}

        impl<T> Position for $name<T> {
            type Item = T;

            fn slot_ptr(self) -> *const T {
                self.ptr as *const T
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::null()
            }
        }

        impl<T> PartialEq for $name<T> {
            fn eq(&self, other: &Self) -> bool {
                ptr::eq(self.ptr, other.ptr)
            }
        }

        impl<T> Eq for $name<T> {}

        impl<T> PartialOrd for $name<T> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<T> Ord for $name<T> {
            fn cmp(&self, other: &Self) -> Ordering {
                (self.ptr as usize).cmp(&(other.ptr as usize))
            }
        }

        impl<T> Hash for $name<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                (self.ptr as usize).hash(state);
            }
        }

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.ptr).finish()
            }
        }

        impl<T> Add<isize> for $name<T> {
            type Output = Self;

            fn add(self, n: isize) -> Self {
                self.offset(n)
            }
        }

        impl<T> Add<$name<T>> for isize {
            type Output = $name<T>;

            fn add(self, cursor: $name<T>) -> $name<T> {
                cursor.offset(self)
            }
        }

        impl<T> Sub<isize> for $name<T> {
            type Output = Self;

            fn sub(self, n: isize) -> Self {
                self.offset(n.wrapping_neg())
            }
        }

        impl<T> Sub for $name<T> {
            type Output = isize;

            fn sub(self, earlier: Self) -> isize {
                distance(earlier, self)
            }
        }

        impl<T> AddAssign<isize> for $name<T> {
            fn add_assign(&mut self, n: isize) {
                *self = self.offset(n);
            }
        }

        impl<T> SubAssign<isize> for $name<T> {
            fn sub_assign(&mut self, n: isize) {
                *self = self.offset(n.wrapping_neg());
            }
        }
    };
}

cursor_common!(Cursor, *mut T, ptr::null_mut);
cursor_common!(ConstCursor, *const T, ptr::null);

impl<T> Cursor<T> {
    /// Reads the slot.
    ///
    /// # Safety
    ///
    /// The cursor must point at a slot of a buffer that has not been
    /// reallocated or dropped since the cursor was taken, and no mutable
    /// reference to that slot may be alive for `'a`.
    #[allow(unsafe_code)]
    #[must_use]
    pub unsafe fn get<'a>(self) -> &'a T {
        slot_ref(self.ptr)
    }

    /// Writable access to the slot.
    ///
    /// # Safety
    ///
    /// Same as [`Cursor::get`], and additionally no other reference to the
    /// slot may be alive for `'a`.
    #[allow(unsafe_code)]
    #[must_use]
    pub unsafe fn get_mut<'a>(self) -> &'a mut T {
        slot_mut(self.ptr)
    }
}

impl<T> ConstCursor<T> {
    /// Reads the slot.
    ///
    /// # Safety
    ///
    /// The cursor must point at a slot of a buffer that has not been
    /// reallocated or dropped since the cursor was taken, and no mutable
    /// reference to that slot may be alive for `'a`.
    #[allow(unsafe_code)]
    #[must_use]
    pub unsafe fn get<'a>(self) -> &'a T {
        slot_ref(self.ptr)
    }
}

impl<T> From<Cursor<T>> for ConstCursor<T> {
    fn from(cursor: Cursor<T>) -> Self {
        ConstCursor::new(cursor.ptr as *const T)
    }
}
