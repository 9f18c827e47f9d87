//! Generation report: non-fatal findings collected during a run.
//!
//! Parse misses and domain misses never abort a generation pass; they are
//! recorded here so the shells can tell the user why a segment or model is
//! missing from a chart.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::ModelKind;

/// Why a row or a segment/model pair contributed nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The segment name cell was empty.
    MissingSegmentName,
    /// `x_min` or `x_max` was missing or non-numeric.
    MissingRange,
    /// The observed range is unusable (negative start, or `x_max <= x_min`).
    InvalidDomain {
        /// Supplied range start.
        x_min: f64,
        /// Supplied range end.
        x_max: f64,
    },
    /// A non-empty equation string did not match the expected pattern.
    EquationMismatch,
    /// The logarithmic model needs a positive range start.
    NonPositiveDomain {
        /// Supplied range start.
        x_min: f64,
    },
    /// The cost-metric display range collapsed (start past the range end).
    EmptyCostDomain {
        /// Computed display start, `max(x*, x_min)`.
        start: f64,
        /// Observed range end.
        end: f64,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingSegmentName => write!(f, "segment name is empty"),
            SkipReason::MissingRange => write!(f, "x_min/x_max missing or non-numeric"),
            SkipReason::InvalidDomain { x_min, x_max } => {
                write!(f, "invalid observed range [{x_min}, {x_max}]")
            }
            SkipReason::EquationMismatch => {
                write!(f, "equation text does not match the expected pattern")
            }
            SkipReason::NonPositiveDomain { x_min } => {
                write!(f, "logarithmic model requires x_min > 0 (got {x_min})")
            }
            SkipReason::EmptyCostDomain { start, end } => {
                write!(f, "cost display range is empty ({start} >= {end})")
            }
        }
    }
}

/// One skipped contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skip {
    /// Segment name, or a `row N` placeholder when the name is missing.
    pub segment: String,
    /// Affected model, or `None` when the whole row was skipped.
    pub model: Option<ModelKind>,
    /// Why the contribution was dropped.
    pub reason: SkipReason,
}

impl Skip {
    /// Records a whole-row skip.
    #[must_use]
    pub fn row(segment: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            segment: segment.into(),
            model: None,
            reason,
        }
    }

    /// Records a skip scoped to one model of one segment.
    #[must_use]
    pub fn model(segment: impl Into<String>, model: ModelKind, reason: SkipReason) -> Self {
        Self {
            segment: segment.into(),
            model: Some(model),
            reason,
        }
    }
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.model {
            Some(kind) => write!(f, "{} [{}]: {}", self.segment, kind.suffix(), self.reason),
            None => write!(f, "{}: {}", self.segment, self.reason),
        }
    }
}

/// Non-fatal findings from one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Rows and segment/model pairs that contributed nothing.
    pub skips: Vec<Skip>,
}

impl GenerationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a skip.
    pub fn record(&mut self, skip: Skip) {
        log::debug!("skipped: {skip}");
        self.skips.push(skip);
    }

    /// Returns true when nothing was skipped.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skips.is_empty()
    }

    /// Human-readable messages, one per skip.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.skips.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_collects_skips() {
        let mut report = GenerationReport::new();
        assert!(report.is_clean());

        report.record(Skip::row("row 3", SkipReason::MissingRange));
        report.record(Skip::model(
            "Seg1",
            ModelKind::Logarithmic,
            SkipReason::NonPositiveDomain { x_min: 0.0 },
        ));

        assert!(!report.is_clean());
        let messages = report.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[1].contains("Seg1"));
        assert!(messages[1].contains("log"));
    }

    #[test]
    fn test_skip_display_without_model() {
        let skip = Skip::row("row 2", SkipReason::MissingSegmentName);
        assert_eq!(skip.to_string(), "row 2: segment name is empty");
    }
}
