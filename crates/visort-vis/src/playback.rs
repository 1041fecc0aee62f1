//! Step-by-step replay of a sort trace.

use visort_trace::{Swap, Trace};

/// Current state of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Swaps remain to be applied
    Playing,
    /// Every swap has been applied
    Finished,
}

/// Playback controller for a swap trace.
///
/// Owns the live columns and advances them one swap per [`tick`](Self::tick).
pub struct Playback<T = u32> {
    columns: Vec<T>,
    trace: Trace,
    cursor: usize,
}

impl<T> Playback<T> {
    /// Create a playback of `trace` starting from `columns`.
    ///
    /// The trace must have been generated for a sequence of the same length.
    pub fn new(columns: Vec<T>, trace: Trace) -> Self {
        debug_assert!(trace.iter().all(|s| s.a < columns.len() && s.b < columns.len()));
        Self {
            columns,
            trace,
            cursor: 0,
        }
    }

    /// Apply the next swap, if any, and return it.
    ///
    /// Once the trace is exhausted this is a no-op returning `None`.
    pub fn tick(&mut self) -> Option<Swap> {
        let swap = self.trace.get(self.cursor)?;
        swap.apply(&mut self.columns);
        self.cursor += 1;
        Some(swap)
    }

    /// Live column values.
    pub fn columns(&self) -> &[T] {
        &self.columns
    }

    /// Get the current playback state.
    pub fn state(&self) -> PlaybackState {
        if self.cursor < self.trace.len() {
            PlaybackState::Playing
        } else {
            PlaybackState::Finished
        }
    }

    /// Whether every swap has been applied.
    pub fn is_finished(&self) -> bool {
        self.state() == PlaybackState::Finished
    }

    /// Number of swaps applied so far.
    pub fn current_step(&self) -> usize {
        self.cursor
    }

    /// Total number of swaps in the trace.
    pub fn total_steps(&self) -> usize {
        self.trace.len()
    }

    /// Swaps still to be applied.
    pub fn remaining(&self) -> usize {
        self.trace.len() - self.cursor
    }

    /// The trace being replayed.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Calculate progress as a fraction (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        if self.trace.is_empty() {
            1.0
        } else {
            self.cursor as f64 / self.trace.len() as f64
        }
    }
}

/// Point-in-time summary of a playback, for logging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackStatus {
    pub current_step: usize,
    pub total_steps: usize,
    pub state: PlaybackState,
    pub progress: f64,
}

impl<T> From<&Playback<T>> for PlaybackStatus {
    fn from(playback: &Playback<T>) -> Self {
        Self {
            current_step: playback.cursor,
            total_steps: playback.total_steps(),
            state: playback.state(),
            progress: playback.progress(),
        }
    }
}
