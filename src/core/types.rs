use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Inclusive pixel range used to clamp a derived dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampRange {
    pub min: f64,
    pub max: f64,
}

impl ClampRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamps `value` into the range; the lower bound wins on inverted input.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn validate(self, label: &str) -> ChartResult<Self> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ChartError::InvalidConfig(format!(
                "{label} range must be finite with min <= max (got {}..{})",
                self.min, self.max
            )));
        }
        Ok(self)
    }
}

/// Resolved chart height: absolute pixels or a per-band step.
///
/// Serializes to the shape the chart grammar expects: a bare number or
/// `{"step": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartHeight {
    Px(f64),
    Step { step: f64 },
}

impl ChartHeight {
    #[must_use]
    pub fn px(self) -> Option<f64> {
        match self {
            Self::Px(value) => Some(value),
            Self::Step { .. } => None,
        }
    }

    #[must_use]
    pub fn step(self) -> Option<f64> {
        match self {
            Self::Step { step } => Some(step),
            Self::Px(_) => None,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        let value = match self {
            Self::Px(value) => value,
            Self::Step { step } => step,
        };
        value.is_finite() && value > 0.0
    }
}

/// Width the layout works from: the observed container width, or `fallback`
/// when the container is absent or reports a zero/non-finite width.
#[must_use]
pub fn effective_container_width(observed: Option<f64>, fallback: f64) -> f64 {
    match observed {
        Some(width) if width.is_finite() && width > 0.0 => width,
        _ => fallback,
    }
}
