//! Status Dashboard Charts WASM Module
//!
//! Renders small proportional ok/error/missing bars into dashboard table
//! rows. The computation core is pure; thin adapters handle DOM and HTML
//! output.

pub mod api;
pub mod chart;
pub mod html_layout;
pub mod models;
pub mod renderers;

// Re-export commonly used types
pub use chart::{BarChart, Segment, SegmentKind};
pub use html_layout::{ChartStyleBuilder, RenderBar, RenderChart};
pub use models::{CountsError, ResultCounts};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Status dashboard charts WASM module initialized");
}
