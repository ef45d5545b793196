#![no_std]
#![deny(unsafe_code)]

//! `SlotVec`: a growable contiguous vector with explicit capacity control and
//! pointer-like cursors.
//!
//! `SlotVec<T>` owns a single heap buffer of `capacity()` slots, of which the
//! first `len()` are live. Every slot always holds a real `T`: fresh slots are
//! default-constructed, and removals only move the live boundary, so the
//! unused tail can still be read through unchecked indexing.
//!
//! This crate is `no_std` compatible and needs only `alloc`.
//!
//! # Capacity Policy
//!
//! - `push_back()` / `insert()` on a full vector: capacity becomes
//!   `max(1, capacity * 2)`, which makes appends amortized O(1)
//! - `insert_range()` / `insert_slice()` of `n` elements that do not fit:
//!   capacity becomes `(capacity + n) * 2`
//! - `reserve(n)`: exactly `n`, only if `n > capacity()`
//! - `shrink_to_fit()`: exactly `len()`
//! - `assign*()`: exactly the incoming count, only if it does not fit
//! - `copy_from*()`: capacity always ends equal to the incoming length
//! - `clone()` / `clone_from()`: capacity mirrors the source
//!
//! ```
//! # use slotvec::SlotVec;
//! let mut v: SlotVec<i32> = SlotVec::with_len(4);
//! for (i, value) in [1, 2, 3, 4].into_iter().enumerate() {
//!     v[i] = value;
//! }
//! assert_eq!(v.capacity(), 4);
//!
//! v.push_back(5);
//! assert_eq!(v.capacity(), 8);
//! assert_eq!(v, [1, 2, 3, 4, 5]);
//! ```
//!
//! # Checked and Unchecked Access
//!
//! Indexing with `[]` is checked only against the allocated buffer, never
//! against the live range. `at()`, `front()`, `back()` and `pop_back()` check
//! the live range and report violations as [`SlotVecError`] without touching
//! the vector:
//!
//! ```
//! # use slotvec::{slotvec, SlotVecError};
//! let mut v = slotvec![1, 2, 3];
//! v.pop_back().unwrap();
//!
//! assert_eq!(v.at(1), Ok(&2));
//! assert_eq!(
//!     v.at(2),
//!     Err(SlotVecError::IndexOutOfBounds { index: 2, length: 2 })
//! );
//! // the popped value is still in its slot
//! assert_eq!(v[2], 3);
//! ```
//!
//! # Cursors
//!
//! [`Cursor`] and [`ConstCursor`] are raw slot handles with pointer
//! arithmetic. They carry no lifetime: like raw pointers they dangle as soon
//! as the vector reallocates, so reading through them is `unsafe`. Moving,
//! comparing and measuring them is not.
//!
//! ```
//! # use slotvec::{distance, slotvec};
//! let mut v = slotvec![1, 2, 3, 4, 5];
//!
//! let first = v.cbegin() + 1;
//! let last = v.cbegin() + 3;
//! assert_eq!(distance(first, last), 2);
//!
//! v.erase_range(first, last);
//! assert_eq!(v, [1, 4, 5]);
//!
//! let at = v.insert(v.cbegin(), 99);
//! // Safe: `at` was returned after the last reallocation
//! assert_eq!(unsafe { *at.get() }, 99);
//! assert_eq!(v, [99, 1, 4, 5]);
//! ```
//!
//! A cursor pair converts into an ordinary iterator, which is how cursors feed
//! the range operations:
//!
//! ```
//! # use slotvec::{slotvec, SlotVec};
//! let source = slotvec![10, 20, 30, 40];
//! // Safe: `source` is neither mutated nor dropped while the range is alive
//! let middle = unsafe { (source.cbegin() + 1).range_to(source.cend()) };
//! let copy = SlotVec::from_range(middle.copied());
//! assert_eq!(copy, [20, 30, 40]);
//! ```
//!
//! # Diagnostics
//!
//! ```
//! # use slotvec::slotvec;
//! let mut v = slotvec![1, 2, 3];
//! v.reserve(5);
//! assert_eq!(v.to_debug_string(), "[ 1 2 3 | 0 0 ], end = 3, capacity = 5");
//! ```
//!
//! # Logging
//!
//! With the `log` feature enabled every reallocation is reported at trace
//! level under the `slotvec` target.

extern crate alloc;

mod cursor;
mod diagnostic;
mod error;
mod iter;
mod modifiers;
mod slot_vec;

// Re-export public types and traits
pub use cursor::{distance, ConstCursor, Cursor, Position};
pub use diagnostic::Diagnostic;
pub use error::SlotVecError;
pub use iter::{CursorRange, IntoIter};
pub use modifiers::swap;
pub use slot_vec::SlotVec;

/// Creates a `SlotVec` containing the arguments.
///
/// `slotvec![a, b, c]` allocates exactly as many slots as there are
/// elements; `slotvec![value; n]` builds `n` clones of `value`.
///
/// ```
/// # use slotvec::slotvec;
/// let v = slotvec![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
///
/// let w = slotvec![String::from("hi"); 2];
/// assert_eq!(w, ["hi", "hi"]);
/// ```
#[macro_export]
macro_rules! slotvec {
    () => {
        $crate::SlotVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SlotVec::from_elem($elem, $n)
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::SlotVec::from([$($elem),+])
    };
}
