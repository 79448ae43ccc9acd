//! Result counts and boundary validation
//!
//! Counts arrive from JavaScript as plain numbers. Rather than letting a
//! negative or NaN value propagate into rendered widths, the constructor
//! rejects anything that is not a finite non-negative number.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for counts crossing the JS boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CountsError {
    /// Count is NaN or infinite
    #[error("{field} count must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    /// Count is negative
    #[error("{field} count must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// Per-row result counts feeding one proportional bar
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultCounts {
    /// Number of passing results
    pub ok: u64,

    /// Number of failing results
    pub error: u64,

    /// Number of results never reported; absent in most payloads
    #[serde(default)]
    pub missing: u64,
}

impl ResultCounts {
    /// Validate raw JS numbers into counts. `missing` defaults to 0.
    pub fn new(ok: f64, error: f64, missing: Option<f64>) -> Result<Self, CountsError> {
        Ok(Self {
            ok: validate_count("ok", ok)?,
            error: validate_count("error", error)?,
            missing: validate_count("missing", missing.unwrap_or(0.0))?,
        })
    }

    /// Sum of all three counts; zero means the empty chart variant
    pub fn total(&self) -> u64 {
        self.ok + self.error + self.missing
    }
}

fn validate_count(field: &'static str, value: f64) -> Result<u64, CountsError> {
    if !value.is_finite() {
        return Err(CountsError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(CountsError::Negative { field, value });
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_defaults_to_zero() {
        let counts = ResultCounts::new(3.0, 1.0, None).expect("valid counts should parse");
        assert_eq!(counts.missing, 0);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_negative_count_rejected() {
        let err = ResultCounts::new(3.0, -1.0, None).expect_err("negative count should fail");
        assert_eq!(
            err,
            CountsError::Negative {
                field: "error",
                value: -1.0
            }
        );
    }

    #[test]
    fn test_nan_count_rejected() {
        let err = ResultCounts::new(f64::NAN, 0.0, None).expect_err("NaN count should fail");
        assert!(matches!(err, CountsError::NotFinite { field: "ok", .. }));
    }

    #[test]
    fn test_serde_missing_field_defaults() {
        let counts: ResultCounts =
            serde_json::from_str(r#"{"ok": 10, "error": 2}"#).expect("payload should parse");
        assert_eq!(counts.missing, 0);
        assert_eq!(counts.total(), 12);
    }
}
