use crate::charts::FACET_GAP_PX;
use crate::error::{ChartError, ChartResult};

use super::{CarouselConfig, DashboardConfig};

pub(super) fn validate_carousel_config(config: &CarouselConfig) -> ChartResult<()> {
    if config.window_size == 0 || config.window_size % 2 == 0 {
        return Err(ChartError::InvalidConfig(format!(
            "carousel window_size must be odd and >= 1, got {}",
            config.window_size
        )));
    }
    if config.transition_ms == 0 {
        return Err(ChartError::InvalidConfig(
            "carousel transition_ms must be > 0".to_owned(),
        ));
    }
    if config.auto_rotate_ms <= config.transition_ms {
        return Err(ChartError::InvalidConfig(
            "carousel auto_rotate_ms must be longer than transition_ms".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_dashboard_config(config: &DashboardConfig) -> ChartResult<()> {
    for (label, url) in [
        ("caffeine_data_url", &config.caffeine_data_url),
        ("survey_data_url", &config.survey_data_url),
        ("testimonial_data_url", &config.testimonial_data_url),
        ("bean_glyph_url", &config.bean_glyph_url),
    ] {
        if url.trim().is_empty() {
            return Err(ChartError::InvalidConfig(format!("{label} must not be empty")));
        }
    }
    if !config.facet_breakpoint_px.is_finite() || config.facet_breakpoint_px <= FACET_GAP_PX {
        return Err(ChartError::InvalidConfig(format!(
            "facet_breakpoint_px must be finite and > the {FACET_GAP_PX} px facet gap, got {}",
            config.facet_breakpoint_px
        )));
    }
    if config.resize_debounce_ms == 0 {
        return Err(ChartError::InvalidConfig(
            "resize_debounce_ms must be > 0".to_owned(),
        ));
    }
    validate_carousel_config(&config.carousel)
}

impl DashboardConfig {
    pub fn validate(&self) -> ChartResult<()> {
        validate_dashboard_config(self)
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> ChartResult<()> {
        validate_carousel_config(self)
    }
}
