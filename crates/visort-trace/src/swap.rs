//! Swap operations and the traces built from them.

use std::fmt;
use std::slice;

/// Exchange of the values at two positions of a sequence.
///
/// `a == b` is allowed and leaves the sequence untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swap {
    pub a: usize,
    pub b: usize,
}

impl Swap {
    /// Create a swap of positions `a` and `b`.
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Whether this swap leaves any sequence unchanged.
    pub const fn is_noop(&self) -> bool {
        self.a == self.b
    }

    /// Apply the exchange to `values` in place.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds for `values`.
    #[inline]
    pub fn apply<T>(&self, values: &mut [T]) {
        values.swap(self.a, self.b);
    }
}

impl From<(usize, usize)> for Swap {
    fn from((a, b): (usize, usize)) -> Self {
        Self { a, b }
    }
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// Ordered list of swaps that reproduces a sort when replayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    swaps: Vec<Swap>,
}

impl Trace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a swap at the end of the trace.
    pub fn push(&mut self, swap: Swap) {
        self.swaps.push(swap);
    }

    /// Number of recorded swaps.
    pub fn len(&self) -> usize {
        self.swaps.len()
    }

    /// Whether the trace contains no swaps.
    pub fn is_empty(&self) -> bool {
        self.swaps.is_empty()
    }

    /// Swap at position `step`, if any.
    pub fn get(&self, step: usize) -> Option<Swap> {
        self.swaps.get(step).copied()
    }

    /// Borrow the swaps in replay order.
    pub fn as_slice(&self) -> &[Swap] {
        &self.swaps
    }

    /// Iterate over the swaps in replay order.
    pub fn iter(&self) -> slice::Iter<'_, Swap> {
        self.swaps.iter()
    }

    /// Number of swaps whose two indices are equal.
    pub fn noop_count(&self) -> usize {
        self.swaps.iter().filter(|s| s.is_noop()).count()
    }

    /// Replay every swap, in order, against `values`.
    pub fn apply_to<T>(&self, values: &mut [T]) {
        for swap in &self.swaps {
            swap.apply(values);
        }
    }
}

impl From<Vec<Swap>> for Trace {
    fn from(swaps: Vec<Swap>) -> Self {
        Self { swaps }
    }
}

impl FromIterator<Swap> for Trace {
    fn from_iter<I: IntoIterator<Item = Swap>>(iter: I) -> Self {
        Self {
            swaps: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Swap;
    type IntoIter = slice::Iter<'a, Swap>;

    fn into_iter(self) -> Self::IntoIter {
        self.swaps.iter()
    }
}

/// Check that `values` is in non-decreasing order.
pub fn is_sorted<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
