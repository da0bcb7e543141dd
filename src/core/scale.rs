use serde::{Deserialize, Serialize};

use crate::core::ClampRange;
use crate::error::{ChartError, ChartResult};

/// Linear factor between a resolved chart width and its design width.
#[must_use]
pub fn scale_factor(width: f64, base_width: f64) -> f64 {
    if base_width > 0.0 { width / base_width } else { 1.0 }
}

/// Secondary dimension proportional to chart width, clamped on its own.
///
/// `value = clamp(base * width / base_width)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledValue {
    pub base: f64,
    pub base_width: f64,
    pub range: ClampRange,
}

impl ScaledValue {
    #[must_use]
    pub const fn new(base: f64, base_width: f64, range: ClampRange) -> Self {
        Self {
            base,
            base_width,
            range,
        }
    }

    #[must_use]
    pub fn resolve(self, width: f64) -> f64 {
        self.range
            .clamp(self.base * scale_factor(width, self.base_width))
    }

    pub fn validate(self, label: &str) -> ChartResult<Self> {
        if !self.base.is_finite() || self.base <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{label} base must be finite and > 0"
            )));
        }
        if !self.base_width.is_finite() || self.base_width <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{label} base width must be finite and > 0"
            )));
        }
        self.range.validate(label)?;
        Ok(self)
    }
}
