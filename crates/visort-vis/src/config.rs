//! Run configuration and column generation.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use visort_trace::Algorithm;

use crate::error::{Error, Result};

/// Window and frame settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisConfig {
    /// Canvas width in pixels
    pub window_width: u32,
    /// Canvas height in pixels
    pub window_height: u32,
    /// Width of a single column (bar) in pixels
    pub column_width: u32,
    /// Longest wait between frames
    pub frame_interval: Duration,
    /// Window title
    pub title: String,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            window_width: 900,
            window_height: 450,
            column_width: 2,
            frame_interval: Duration::from_millis(20),
            title: "VisualSort".to_string(),
        }
    }
}

impl VisConfig {
    /// Number of columns that fit across the window.
    pub fn column_count(&self) -> usize {
        self.window_width.checked_div(self.column_width).unwrap_or(0) as usize
    }

    /// Height step between consecutive column values.
    pub fn height_unit(&self) -> u32 {
        match self.column_count() {
            0 => 0,
            count => self.window_height / count as u32,
        }
    }

    /// Check that the configuration yields at least one visible column.
    pub fn validate(&self) -> Result<()> {
        // Canvas coordinates are signed pixels.
        if i32::try_from(self.window_width).is_err()
            || i32::try_from(self.window_height).is_err()
        {
            return Err(Error::InvalidConfig(format!(
                "window {}x{} exceeds the drawable range of {} pixels",
                self.window_width,
                self.window_height,
                i32::MAX
            )));
        }
        if self.column_width == 0 {
            return Err(Error::InvalidConfig("column width must be non-zero".into()));
        }
        if self.column_count() == 0 {
            return Err(Error::InvalidConfig(format!(
                "column width {} exceeds window width {}",
                self.column_width, self.window_width
            )));
        }
        if self.height_unit() == 0 {
            return Err(Error::InvalidConfig(format!(
                "{} columns do not fit in a window {} pixels high",
                self.column_count(),
                self.window_height
            )));
        }
        Ok(())
    }

    /// Column values in ascending order: `unit, 2 * unit, ..., count * unit`.
    pub fn columns(&self) -> Vec<u32> {
        let unit = self.height_unit();
        (1..=self.column_count() as u32).map(|k| k * unit).collect()
    }

    /// Column values in random order.
    pub fn shuffled_columns<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<u32> {
        let mut columns = self.columns();
        columns.shuffle(rng);
        columns
    }
}

/// Options taken from the command line: `[ALGORITHM] [SEED]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Trace generator to animate
    pub algorithm: Algorithm,
    /// Shuffle seed; `None` shuffles from entropy
    pub seed: Option<u64>,
}

impl Invocation {
    /// Parse positional arguments, program name already removed.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let mut invocation = Self::default();

        if let Some(name) = args.next() {
            invocation.algorithm = name.as_ref().parse()?;
        }

        if let Some(seed) = args.next() {
            let seed = seed.as_ref();
            invocation.seed = Some(
                seed.parse()
                    .map_err(|_| Error::InvalidSeed(seed.to_string()))?,
            );
        }

        Ok(invocation)
    }
}
