//! Status dashboard WASM API
//!
//! JavaScript-facing entry points, plus shared helpers for serialization
//! and console logging.
//!
//! - `helpers`: serde-wasm-bindgen wrappers and console log macros
//! - `charts`: bar chart operations (append to a row, compute a display
//!   list, render an HTML string)

pub mod charts;
pub mod helpers;

pub use charts::{add_bar_chart, bar_chart_html, compute_bar_chart};
