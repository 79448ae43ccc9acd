//! Proportional bar computation
//!
//! Pure layer: turns result counts into a `BarChart` value with no UI
//! dependency. The display list and renderers consume the output.

pub mod bar;

pub use bar::{BarChart, Segment, SegmentKind};
