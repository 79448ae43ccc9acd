//! Proportional bar chart computation
//!
//! Computes the segments of a horizontal ok/error/missing summary bar.
//! Segment widths are snapped to multiples of 5% so the rendered bars only
//! take a small fixed set of widths, with a minimum-visibility rule that
//! keeps small-but-nonzero segments from disappearing.

use serde::{Deserialize, Serialize};

use crate::models::ResultCounts;

/// Smallest rendered segment width, in percent
const MIN_WIDTH: f64 = 5.0;

/// Largest width a segment may keep when the other side is forced visible
const CAPPED_WIDTH: f64 = 100.0 - MIN_WIDTH;

/// Role of a bar segment
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Failing results (red bar)
    Error,
    /// Unreported results (orange bar)
    Missing,
}

/// One drawable segment of the bar
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Segment role
    pub kind: SegmentKind,

    /// Exact share of the total, before snapping
    pub raw_percent: f64,

    /// Rendered width; always a multiple of 5 in 0..=100
    pub width_percent: u8,

    /// Tooltip value: the raw share rounded to a whole percent
    pub tooltip_percent: u8,
}

/// Computed chart for one row of the dashboard
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BarChart {
    /// Rounded ok-share shown as the outer box tooltip; `None` when the
    /// total is zero and the empty variant is rendered instead
    pub completion_percent: Option<u8>,

    /// Segments in drawing order: error first, then missing
    pub segments: Vec<Segment>,
}

impl BarChart {
    /// Compute the chart for the given counts.
    ///
    /// Pure and deterministic: identical counts always yield an identical
    /// chart. When the total is zero no percentage math happens and the
    /// empty variant is returned.
    pub fn from_counts(counts: &ResultCounts) -> Self {
        let total = counts.total();
        if total == 0 {
            return Self {
                completion_percent: None,
                segments: Vec::new(),
            };
        }

        let total = total as f64;
        let pct_error = counts.error as f64 * 100.0 / total;
        let pct_missing = counts.missing as f64 * 100.0 / total;
        let completion = (counts.ok as f64 * 100.0 / total).round() as u8;

        let mut width_error = snap_to_five(pct_error);
        let mut width_missing = snap_to_five(pct_missing);

        // Minimum-visibility rule, error side first. The missing-side cap
        // below sees the already-forced error width, never the original one;
        // the asymmetry is part of the rendering contract.
        if pct_error > 0.0 && pct_error < MIN_WIDTH {
            width_error = MIN_WIDTH;
            width_missing = width_missing.min(CAPPED_WIDTH);
        }
        if pct_missing > 0.0 && pct_missing < MIN_WIDTH {
            width_missing = MIN_WIDTH;
            width_error = width_error.min(CAPPED_WIDTH);
        }

        // Independent snapping can leave the pair at 105 (both halves round
        // up); the missing side gives way, consistent with the error-first
        // ordering above.
        if width_error + width_missing > 100.0 {
            width_missing = 100.0 - width_error;
        }

        let mut segments = Vec::with_capacity(2);
        if width_error > 0.0 {
            segments.push(Segment {
                kind: SegmentKind::Error,
                raw_percent: pct_error,
                width_percent: width_error as u8,
                tooltip_percent: pct_error.round() as u8,
            });
        }
        if width_missing > 0.0 {
            segments.push(Segment {
                kind: SegmentKind::Missing,
                raw_percent: pct_missing,
                width_percent: width_missing as u8,
                tooltip_percent: pct_missing.round() as u8,
            });
        }

        Self {
            completion_percent: Some(completion),
            segments,
        }
    }

    /// True when the total was zero and the empty variant applies
    pub fn is_empty(&self) -> bool {
        self.completion_percent.is_none()
    }
}

/// Snap a percentage to the nearest multiple of 5
fn snap_to_five(pct: f64) -> f64 {
    5.0 * (pct / 5.0).round()
}
