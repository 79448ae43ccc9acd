//! HTML Layout
//!
//! This module turns a computed `BarChart` into a display list with all
//! classes, widths, and tooltip strings needed to build the DOM elements
//! without any further calculation.

pub mod chart;
pub mod display_list;

pub use chart::ChartStyleBuilder;
pub use display_list::{RenderBar, RenderChart};
