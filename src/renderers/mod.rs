//! Renderers module for the status dashboard charts
//!
//! This module contains the rendering adapters that consume a display list:
//! a DOM adapter for the browser and an HTML string emitter for server-side
//! rendering and native tests.

pub mod dom;
pub mod html;

pub use dom::DomChartRenderer;
pub use html::render_chart_cell;
