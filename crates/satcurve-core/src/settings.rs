//! Chart generation settings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::types::ModelKind;

/// Lowest accepted extrapolation ratio (no extension past the data).
pub const RATIO_MIN: f64 = 1.0;

/// Highest accepted extrapolation ratio (3x the largest observed max).
pub const RATIO_MAX: f64 = 3.0;

/// Which regression model(s) to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelSelection {
    /// Logarithmic fits only (saturating view).
    #[default]
    Logarithmic,
    /// Linear fits only (non-saturating view).
    Linear,
    /// Both model families side by side.
    Both,
}

impl ModelSelection {
    /// Returns true when the given model kind should be displayed.
    #[must_use]
    pub fn includes(&self, kind: ModelKind) -> bool {
        match self {
            ModelSelection::Logarithmic => kind == ModelKind::Logarithmic,
            ModelSelection::Linear => kind == ModelKind::Linear,
            ModelSelection::Both => true,
        }
    }

    /// Returns true when both model families are displayed together,
    /// which switches trace naming and line styling into the
    /// disambiguated mode.
    #[must_use]
    pub fn is_both(&self) -> bool {
        matches!(self, ModelSelection::Both)
    }

    /// Model kinds selected, in display order.
    #[must_use]
    pub fn kinds(&self) -> &'static [ModelKind] {
        match self {
            ModelSelection::Logarithmic => &[ModelKind::Logarithmic],
            ModelSelection::Linear => &[ModelKind::Linear],
            ModelSelection::Both => &[ModelKind::Logarithmic, ModelKind::Linear],
        }
    }
}

impl fmt::Display for ModelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelSelection::Logarithmic => "logarithmic",
            ModelSelection::Linear => "linear",
            ModelSelection::Both => "both",
        };
        write!(f, "{name}")
    }
}

/// User-facing settings for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSettings {
    /// Model families to display.
    #[serde(default)]
    pub models: ModelSelection,
    /// Whether to compute and render extrapolated ranges.
    #[serde(default = "default_show_extrapolation")]
    pub show_extrapolation: bool,
    /// Multiplier applied to the largest observed `x_max` to form the
    /// global extrapolation bound. Valid range [`RATIO_MIN`]..=[`RATIO_MAX`].
    #[serde(default = "default_ratio")]
    pub extrapolation_ratio: f64,
    /// Free-text chart title.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_show_extrapolation() -> bool {
    true
}

fn default_ratio() -> f64 {
    1.5
}

fn default_title() -> String {
    "Ad spend saturation by segment".to_string()
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            models: ModelSelection::default(),
            show_extrapolation: default_show_extrapolation(),
            extrapolation_ratio: default_ratio(),
            title: default_title(),
        }
    }
}

impl GraphSettings {
    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRatio`] when the extrapolation ratio is
    /// non-finite or outside [`RATIO_MIN`]..=[`RATIO_MAX`].
    pub fn validate(&self) -> CoreResult<()> {
        if !self.extrapolation_ratio.is_finite()
            || self.extrapolation_ratio < RATIO_MIN
            || self.extrapolation_ratio > RATIO_MAX
        {
            return Err(CoreError::InvalidRatio {
                value: self.extrapolation_ratio,
                min: RATIO_MIN,
                max: RATIO_MAX,
            });
        }
        Ok(())
    }
}
