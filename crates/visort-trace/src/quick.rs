//! Quicksort trace generation (Lomuto partition, last element as pivot).

use crate::swap::{Swap, Trace};
use crate::TraceGenerator;

/// Recursive partition sort.
///
/// Every `element <= pivot` hit during a partition scan records a swap,
/// including the `i == j` case where nothing moves. Those no-op swaps are
/// kept in the trace and show up as extra playback steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuickSort;

impl TraceGenerator for QuickSort {
    fn name(&self) -> &'static str {
        "quick"
    }

    fn generate<T: Ord + Clone>(&self, initial: &[T]) -> Trace {
        let mut work = initial.to_vec();
        let mut trace = Trace::new();
        let hi = work.len() as isize - 1;

        sort_range(&mut work, 0, hi, &mut trace);
        trace
    }
}

/// Sort `work[lo..=hi]`, appending swaps to `trace`.
///
/// Bounds are signed so that `pivot - 1` at `lo == 0` stays below `lo`.
fn sort_range<T: Ord>(work: &mut [T], lo: isize, hi: isize, trace: &mut Trace) {
    if lo >= hi {
        return;
    }

    let pivot = partition(work, lo as usize, hi as usize, trace) as isize;
    sort_range(work, lo, pivot - 1, trace);
    sort_range(work, pivot + 1, hi, trace);
}

/// Partition `work[lo..=hi]` around `work[hi]` and return the pivot's final
/// position. The pivot placement is the last swap recorded.
fn partition<T: Ord>(work: &mut [T], lo: usize, hi: usize, trace: &mut Trace) -> usize {
    // `boundary` is one past the last element known to be <= pivot.
    let mut boundary = lo;

    for j in lo..hi {
        if work[j] <= work[hi] {
            let swap = Swap::new(boundary, j);
            swap.apply(work);
            trace.push(swap);
            boundary += 1;
        }
    }

    let swap = Swap::new(boundary, hi);
    swap.apply(work);
    trace.push(swap);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_sorted;

    #[test]
    fn two_element_scenario() {
        let trace = QuickSort.generate(&[2, 1]);
        assert_eq!(trace.as_slice(), &[Swap::new(0, 1)]);
    }

    #[test]
    fn empty_and_singleton_yield_empty_trace() {
        assert!(QuickSort.generate::<u32>(&[]).is_empty());
        assert!(QuickSort.generate(&[5]).is_empty());
    }

    #[test]
    fn sorted_input_emits_noop_swaps() {
        let input: Vec<u32> = (1..=4).collect();
        let trace = QuickSort.generate(&input);

        // Each level scans the range with every element <= pivot and then
        // places the pivot onto itself.
        assert!(!trace.is_empty());
        assert_eq!(trace.noop_count(), trace.len());

        let mut values = input.clone();
        trace.apply_to(&mut values);
        assert_eq!(values, input);
    }

    #[test]
    fn partition_swaps_precede_recursion() {
        // [3, 1, 2]: pivot 2, scan hits 1 at j=1 -> swap(0, 1), place pivot
        // swap(1, 2). Left range [0, 0] and right range [2, 2] are trivial.
        let trace = QuickSort.generate(&[3, 1, 2]);
        assert_eq!(trace.as_slice(), &[Swap::new(0, 1), Swap::new(1, 2)]);
    }

    #[test]
    fn left_recursion_precedes_right_recursion() {
        // Top level places pivot 4 at index 3. The left range [0, 2] recurses
        // twice more before the right range [4, 5] emits anything.
        let trace = QuickSort.generate(&[2, 1, 3, 6, 5, 4]);
        let expected: Vec<Swap> = [
            (0, 0),
            (1, 1),
            (2, 2),
            (3, 5),
            (0, 0),
            (1, 1),
            (2, 2),
            (0, 1),
            (4, 4),
            (5, 5),
        ]
        .into_iter()
        .map(Swap::from)
        .collect();
        assert_eq!(trace.as_slice(), expected.as_slice());

        let mut values = [2, 1, 3, 6, 5, 4];
        trace.apply_to(&mut values);
        assert_eq!(values, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn equal_values_sort_with_noops() {
        let trace = QuickSort.generate(&[4, 4, 4]);
        assert!(!trace.is_empty());

        let mut values = [4, 4, 4];
        trace.apply_to(&mut values);
        assert_eq!(values, [4, 4, 4]);
    }

    #[test]
    fn reverse_input_is_sorted() {
        let input: Vec<u32> = (1..=50).rev().collect();
        let trace = QuickSort.generate(&input);

        let mut values = input;
        trace.apply_to(&mut values);
        assert!(is_sorted(&values));
    }
}
