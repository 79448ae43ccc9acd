//! Models module for the status dashboard charts
//!
//! This module contains the input data structures shared by the chart
//! computation core and the WASM API boundary.

pub mod counts;

pub use counts::{CountsError, ResultCounts};
