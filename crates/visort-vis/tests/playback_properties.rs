//! Tick-by-tick replay against one-pass trace application.

use proptest::prelude::*;
use visort_vis::{Algorithm, Playback, PlaybackState, TraceGenerator};

proptest! {
    #[test]
    fn ticking_matches_batch_apply(
        input in prop::collection::vec(any::<u32>(), 0..48),
        algorithm in prop::sample::select(Algorithm::ALL.to_vec()),
    ) {
        let trace = algorithm.generate(&input);
        let mut batch = input.clone();
        trace.apply_to(&mut batch);

        let total = trace.len();
        let mut playback = Playback::new(input, trace);
        for _ in 0..total {
            prop_assert_eq!(playback.state(), PlaybackState::Playing);
            prop_assert!(playback.tick().is_some());
        }

        prop_assert_eq!(playback.state(), PlaybackState::Finished);
        prop_assert_eq!(playback.columns(), batch.as_slice());
    }

    #[test]
    fn extra_ticks_change_nothing(
        input in prop::collection::vec(any::<u32>(), 0..48),
        algorithm in prop::sample::select(Algorithm::ALL.to_vec()),
        extra in 1usize..20,
    ) {
        let trace = algorithm.generate(&input);
        let total = trace.len();
        let mut playback = Playback::new(input, trace);
        for _ in 0..total {
            playback.tick();
        }
        let finished = playback.columns().to_vec();

        for _ in 0..extra {
            prop_assert!(playback.tick().is_none());
        }
        prop_assert_eq!(playback.columns(), finished.as_slice());
        prop_assert_eq!(playback.current_step(), total);
    }
}
