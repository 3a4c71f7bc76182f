//! Structured run diagnostics.
//!
//! Returned alongside the feature table in place of ad hoc logging, for
//! consumption by an external observability collaborator.

use serde::{Deserialize, Serialize};

/// A per-indicator computation failure captured mid-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorFailure {
    /// Indicator display name.
    pub indicator: String,
    /// Failure message.
    pub message: String,
}

/// Diagnostic record for one pipeline invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Rows inspected by the trimming stage.
    pub rows_examined: usize,
    /// Rows dropped for carrying an undefined cell.
    pub rows_dropped: usize,
    /// Strategy the run computed with.
    pub backend: String,
    /// Notes recorded when the requested strategy was unavailable.
    pub fallback_events: Vec<String>,
    /// Indicators whose computation failed mid-run.
    pub indicator_failures: Vec<IndicatorFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_json() {
        let diagnostics = Diagnostics {
            rows_examined: 40,
            rows_dropped: 19,
            backend: "reference".to_string(),
            fallback_events: vec![],
            indicator_failures: vec![IndicatorFailure {
                indicator: "RSI_14".to_string(),
                message: "boom".to_string(),
            }],
        };

        let json = serde_json::to_string(&diagnostics).unwrap();
        let parsed: Diagnostics = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.rows_dropped, 19);
        assert_eq!(parsed.indicator_failures.len(), 1);
    }
}
