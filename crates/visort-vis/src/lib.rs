//! Visort Playback
//!
//! Replays a sort trace one swap per frame and lays the columns out for a
//! host canvas.
//!
//! # Architecture
//!
//! - **Config**: window geometry, frame interval and the column values it implies
//! - **Playback**: live columns plus a cursor into an immutable trace
//! - **Canvas**: the drawing operations a host window must provide
//! - **Session**: shuffles, generates the trace and drives playback
//!
//! # Usage
//!
//! ```ignore
//! let mut session = Session::new(VisConfig::default(), Algorithm::Quick, None)?;
//! loop {
//!     session.tick();
//!     session.draw(&mut canvas)?;
//! }
//! ```

mod canvas;
mod config;
mod error;
mod playback;
mod session;

pub use canvas::{draw_columns, Canvas, Rect, Rgba};
pub use config::{Invocation, VisConfig};
pub use error::{Error, Result};
pub use playback::{Playback, PlaybackState, PlaybackStatus};
pub use session::Session;

pub use visort_trace::{Algorithm, Swap, Trace, TraceGenerator};
