//! Visort Sort Traces
//!
//! Turns a sort into the ordered list of swaps needed to replay it.
//!
//! # Model
//!
//! A generator never sorts the caller's data. It sorts a private working
//! copy and records every exchange it performs as a [`Swap`]. Replaying the
//! resulting [`Trace`] in order against the original input leaves it in
//! non-decreasing order, and since the trace only exchanges, the multiset
//! of values is unchanged.
//!
//! # Usage
//!
//! ```
//! use visort_trace::{Algorithm, TraceGenerator, is_sorted};
//!
//! let mut columns = vec![3u32, 1, 2];
//! let trace = Algorithm::Bubble.generate(&columns);
//! trace.apply_to(&mut columns);
//! assert!(is_sorted(&columns));
//! ```

mod algorithm;
mod bubble;
mod error;
mod quick;
mod swap;

pub use algorithm::Algorithm;
pub use bubble::BubbleSort;
pub use error::ParseAlgorithmError;
pub use quick::QuickSort;
pub use swap::{is_sorted, Swap, Trace};

/// Produces the swap trace for sorting a sequence.
///
/// Implementations are pure: the input is only read, and the same input
/// always yields the same trace.
pub trait TraceGenerator {
    /// Short lowercase name, used for selection and logging.
    fn name(&self) -> &'static str;

    /// Generate the trace that sorts `initial` into non-decreasing order.
    fn generate<T: Ord + Clone>(&self, initial: &[T]) -> Trace;
}
