//! One visualizer run: shuffled columns, their trace and its playback.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use visort_trace::{Algorithm, Swap, TraceGenerator};

use crate::canvas::{draw_columns, Canvas};
use crate::config::VisConfig;
use crate::error::Result;
use crate::playback::{Playback, PlaybackState, PlaybackStatus};

/// Swaps between progress log lines.
const PROGRESS_LOG_INTERVAL: usize = 500;

/// Ties a configuration and a trace generator to a running playback.
pub struct Session {
    config: VisConfig,
    algorithm: Algorithm,
    playback: Playback,
    finish_logged: bool,
}

impl Session {
    /// Shuffle the configured columns and generate their trace.
    ///
    /// With a `seed` the shuffle is reproducible; without one it is drawn
    /// from OS entropy.
    pub fn new(config: VisConfig, algorithm: Algorithm, seed: Option<u64>) -> Result<Self> {
        config.validate()?;

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let columns = config.shuffled_columns(&mut rng);

        let start = Instant::now();
        let trace = algorithm.generate(&columns);
        tracing::info!(
            algorithm = algorithm.name(),
            columns = columns.len(),
            swaps = trace.len(),
            noop_swaps = trace.noop_count(),
            "Generated trace in {:?}",
            start.elapsed()
        );

        Ok(Self::from_parts(config, algorithm, Playback::new(columns, trace)))
    }

    /// Assemble a session around an existing playback.
    pub fn from_parts(config: VisConfig, algorithm: Algorithm, playback: Playback) -> Self {
        let finish_logged = playback.is_finished();
        Self {
            config,
            algorithm,
            playback,
            finish_logged,
        }
    }

    /// Advance playback by one swap.
    pub fn tick(&mut self) -> Option<Swap> {
        let swap = self.playback.tick();

        if let Some(swap) = swap {
            tracing::debug!(step = self.playback.current_step(), %swap, "Applied swap");
            if self.playback.current_step() % PROGRESS_LOG_INTERVAL == 0 {
                let status = PlaybackStatus::from(&self.playback);
                tracing::info!(
                    "Playback: {}/{} swaps ({:.0}%)",
                    status.current_step,
                    status.total_steps,
                    status.progress * 100.0
                );
            }
        }

        if !self.finish_logged && self.playback.state() == PlaybackState::Finished {
            self.finish_logged = true;
            tracing::info!(
                algorithm = self.algorithm.name(),
                "Sort finished after {} swaps",
                self.playback.total_steps()
            );
        }

        swap
    }

    /// Draw the current columns onto `canvas`.
    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> std::result::Result<(), C::Error> {
        draw_columns(canvas, self.playback.columns(), &self.config)
    }

    /// Configuration the session was built with.
    pub fn config(&self) -> &VisConfig {
        &self.config
    }

    /// Trace generator that produced the playback.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Playback being driven.
    pub fn playback(&self) -> &Playback {
        &self.playback
    }
}
