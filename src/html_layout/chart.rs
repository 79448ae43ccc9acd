//! Chart-level styling
//!
//! CSS class generation and tooltip formatting for the proportional bar,
//! mapping the computed `BarChart` onto the display list.

use crate::chart::{BarChart, Segment, SegmentKind};

use super::display_list::{RenderBar, RenderChart};

/// Builder for chart styling
pub struct ChartStyleBuilder;

impl ChartStyleBuilder {
    /// Create a new chart style builder
    pub fn new() -> Self {
        Self
    }

    /// Build a complete RenderChart with all classes and tooltips
    pub fn build_render_chart(&self, chart: &BarChart) -> RenderChart {
        let mut classes = vec!["bar-box".to_string()];
        if chart.is_empty() {
            classes.push("bar-empty".to_string());
        }

        RenderChart {
            classes,
            title: chart.completion_percent.map(|pct| format!("{}%", pct)),
            bars: chart
                .segments
                .iter()
                .map(|segment| self.build_render_bar(segment))
                .collect(),
        }
    }

    fn build_render_bar(&self, segment: &Segment) -> RenderBar {
        let role = match segment.kind {
            SegmentKind::Error => "bar-error",
            SegmentKind::Missing => "bar-warning",
        };

        RenderBar {
            classes: vec!["chart-bar".to_string(), role.to_string()],
            width: format!("{}%", segment.width_percent),
            title: format!("{}%", segment.tooltip_percent),
        }
    }
}

impl Default for ChartStyleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
