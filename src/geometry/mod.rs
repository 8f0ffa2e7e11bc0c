//! Pure geometry computations for the clock face.
//!
//! Everything here is a bounded, synchronous function of immutable inputs:
//! an instant and screen dimensions in, angles, positions, and sizes out.
//! Safe to call concurrently and cheap enough to run once per frame.

mod display;
mod font;
mod markers;
mod metrics;
mod time;

pub use display::DisplayState;
pub use font::FontWeight;
pub use markers::{DEGREES_PER_MARKER, MARKER_COUNT, MarkerKind, MarkerTick, marker_ticks};
pub use metrics::{hand_length, label_offset, label_text, scaled};
pub use time::TimeState;
