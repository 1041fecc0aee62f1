//! Bubble sort trace generation.

use crate::swap::{Swap, Trace};
use crate::TraceGenerator;

/// Adjacent-pair exchange sort.
///
/// Only exchanges are recorded; comparisons that leave a pair in place add
/// nothing to the trace, so the trace length depends on the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BubbleSort;

impl TraceGenerator for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble"
    }

    fn generate<T: Ord + Clone>(&self, initial: &[T]) -> Trace {
        let mut work = initial.to_vec();
        let mut trace = Trace::new();
        let n = work.len();

        for i in 0..n {
            for j in 1..(n - i) {
                if work[j - 1] > work[j] {
                    let swap = Swap::new(j - 1, j);
                    swap.apply(&mut work);
                    trace.push(swap);
                }
            }
        }

        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_sorted;

    #[test]
    fn three_element_scenario() {
        let trace = BubbleSort.generate(&[3, 1, 2]);
        assert_eq!(trace.as_slice(), &[Swap::new(0, 1), Swap::new(1, 2)]);

        let mut values = [3, 1, 2];
        trace.apply_to(&mut values);
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn sorted_input_yields_empty_trace() {
        let input: Vec<u32> = (1..=20).collect();
        assert!(BubbleSort.generate(&input).is_empty());
    }

    #[test]
    fn equal_values_never_swap() {
        assert!(BubbleSort.generate(&[7, 7, 7, 7]).is_empty());
    }

    #[test]
    fn reverse_input_swaps_every_pair() {
        let input: Vec<u32> = (1..=6).rev().collect();
        let trace = BubbleSort.generate(&input);

        // Every inversion needs exactly one adjacent exchange.
        assert_eq!(trace.len(), 6 * 5 / 2);

        let mut values = input.clone();
        trace.apply_to(&mut values);
        assert!(is_sorted(&values));
    }

    #[test]
    fn input_is_not_mutated() {
        let input = vec![4, 3, 2, 1];
        let _ = BubbleSort.generate(&input);
        assert_eq!(input, vec![4, 3, 2, 1]);
    }
}
