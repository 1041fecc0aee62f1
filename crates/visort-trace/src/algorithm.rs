//! Generator selection by name.

use std::fmt;
use std::str::FromStr;

use crate::bubble::BubbleSort;
use crate::error::ParseAlgorithmError;
use crate::quick::QuickSort;
use crate::swap::Trace;
use crate::TraceGenerator;

/// Trace generator chosen when a run is set up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Adjacent-pair exchange sort
    Bubble,
    /// Lomuto-partition quicksort
    #[default]
    Quick,
}

impl Algorithm {
    /// All selectable algorithms.
    pub const ALL: [Algorithm; 2] = [Algorithm::Bubble, Algorithm::Quick];
}

impl TraceGenerator for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => BubbleSort.name(),
            Algorithm::Quick => QuickSort.name(),
        }
    }

    fn generate<T: Ord + Clone>(&self, initial: &[T]) -> Trace {
        match self {
            Algorithm::Bubble => BubbleSort.generate(initial),
            Algorithm::Quick => QuickSort.generate(initial),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" | "bubblesort" => Ok(Algorithm::Bubble),
            "quick" | "quicksort" => Ok(Algorithm::Quick),
            _ => Err(ParseAlgorithmError { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Swap;

    #[test]
    fn default_is_quick() {
        assert_eq!(Algorithm::default(), Algorithm::Quick);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("bubble".parse::<Algorithm>().unwrap(), Algorithm::Bubble);
        assert_eq!("QuickSort".parse::<Algorithm>().unwrap(), Algorithm::Quick);
        assert_eq!(" quick ".parse::<Algorithm>().unwrap(), Algorithm::Quick);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "merge".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.name, "merge");
        assert!(err.to_string().contains("merge"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn delegates_to_variant() {
        assert_eq!(
            Algorithm::Bubble.generate(&[3, 1, 2]).as_slice(),
            &[Swap::new(0, 1), Swap::new(1, 2)]
        );
        assert_eq!(Algorithm::Quick.generate(&[2, 1]).as_slice(), &[Swap::new(0, 1)]);
    }
}
