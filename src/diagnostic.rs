use alloc::string::{String, ToString};
use core::fmt;

use crate::slot_vec::SlotVec;

/// Diagnostic rendering of a `SlotVec`, including its unused slots
///
/// Formats as `[ 1 2 3 | 0 0 ], end = 3, capacity = 5`: the live elements,
/// a `|` separator, the allocated tail, then length and capacity.
pub struct Diagnostic<'a, T> {
    vec: &'a SlotVec<T>,
}

impl<T: fmt::Display> fmt::Display for Diagnostic<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (live, tail) = self.vec.slots().split_at(self.vec.len());
        f.write_str("[ ")?;
        for value in live {
            write!(f, "{value} ")?;
        }
        f.write_str("| ")?;
        for value in tail {
            write!(f, "{value} ")?;
        }
        write!(
            f,
            "], end = {}, capacity = {}",
            self.vec.len(),
            self.vec.capacity()
        )
    }
}

impl<T> SlotVec<T> {
    #[must_use]
    pub fn diagnostic(&self) -> Diagnostic<'_, T> {
        Diagnostic { vec: self }
    }

    #[must_use]
    pub fn to_debug_string(&self) -> String
    where
        T: fmt::Display,
    {
        self.diagnostic().to_string()
    }
}
