//! Display list for chart rendering
//!
//! Output structure handed to JavaScript or to a renderer. It contains the
//! final classes, style widths, and tooltip strings, so consumers only
//! create elements and copy the values across.

use serde::{Deserialize, Serialize};

/// A fully styled chart, ready to be mounted inside a table cell
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderChart {
    /// CSS classes for the outer box (`bar-box`, plus `bar-empty` when
    /// there is nothing to chart)
    pub classes: Vec<String>,

    /// Completion tooltip for the outer box, e.g. `"90%"`; absent in the
    /// empty state
    pub title: Option<String>,

    /// Inner bars in drawing order
    pub bars: Vec<RenderBar>,
}

/// A single inner bar
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderBar {
    /// CSS classes (`chart-bar` plus the role class)
    pub classes: Vec<String>,

    /// Style width value, e.g. `"35%"`; always a multiple of 5
    pub width: String,

    /// Tooltip with the unsnapped share, e.g. `"3%"`
    pub title: String,
}
