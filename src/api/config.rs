use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::charts::CatalogOptions;
use crate::spec::Palette;

/// Carousel timing and presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    #[serde(default = "default_auto_rotate_ms")]
    pub auto_rotate_ms: u64,
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            transition_ms: default_transition_ms(),
            auto_rotate_ms: default_auto_rotate_ms(),
            fallback_message: default_fallback_message(),
        }
    }
}

impl CarouselConfig {
    #[must_use]
    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    #[must_use]
    pub fn auto_rotate_period(&self) -> Duration {
        Duration::from_millis(self.auto_rotate_ms)
    }

    #[must_use]
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    #[must_use]
    pub fn with_auto_rotate_ms(mut self, auto_rotate_ms: u64) -> Self {
        self.auto_rotate_ms = auto_rotate_ms;
        self
    }

    #[must_use]
    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }
}

/// Page bootstrap configuration.
///
/// Serializable so a page can ship its setup as JSON next to the data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_caffeine_data_url")]
    pub caffeine_data_url: String,
    #[serde(default = "default_survey_data_url")]
    pub survey_data_url: String,
    #[serde(default = "default_testimonial_data_url")]
    pub testimonial_data_url: String,
    #[serde(default = "default_bean_glyph_url")]
    pub bean_glyph_url: String,
    #[serde(default)]
    pub stress_palette: Palette,
    #[serde(default = "default_facet_breakpoint_px")]
    pub facet_breakpoint_px: f64,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    #[serde(default)]
    pub carousel: CarouselConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            caffeine_data_url: default_caffeine_data_url(),
            survey_data_url: default_survey_data_url(),
            testimonial_data_url: default_testimonial_data_url(),
            bean_glyph_url: default_bean_glyph_url(),
            stress_palette: Palette::default(),
            facet_breakpoint_px: default_facet_breakpoint_px(),
            resize_debounce_ms: default_resize_debounce_ms(),
            carousel: CarouselConfig::default(),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn with_stress_palette(mut self, palette: Palette) -> Self {
        self.stress_palette = palette;
        self
    }

    #[must_use]
    pub fn with_facet_breakpoint_px(mut self, breakpoint: f64) -> Self {
        self.facet_breakpoint_px = breakpoint;
        self
    }

    #[must_use]
    pub fn with_resize_debounce_ms(mut self, quiet_ms: u64) -> Self {
        self.resize_debounce_ms = quiet_ms;
        self
    }

    #[must_use]
    pub fn with_carousel(mut self, carousel: CarouselConfig) -> Self {
        self.carousel = carousel;
        self
    }

    #[must_use]
    pub fn resize_quiet_period(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    #[must_use]
    pub fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions {
            caffeine_data_url: self.caffeine_data_url.clone(),
            survey_data_url: self.survey_data_url.clone(),
            bean_glyph_url: self.bean_glyph_url.clone(),
            stress_palette: self.stress_palette.clone(),
            facet_breakpoint_px: self.facet_breakpoint_px,
        }
    }
}

fn default_window_size() -> usize {
    5
}

fn default_transition_ms() -> u64 {
    400
}

fn default_auto_rotate_ms() -> u64 {
    5_000
}

fn default_fallback_message() -> String {
    "Testimonials are unavailable right now.".to_owned()
}

fn default_caffeine_data_url() -> String {
    "caffeine.csv".to_owned()
}

fn default_survey_data_url() -> String {
    "Responses.csv".to_owned()
}

fn default_testimonial_data_url() -> String {
    "testimonials.csv".to_owned()
}

fn default_bean_glyph_url() -> String {
    "src/coffeeBean_You.svg".to_owned()
}

fn default_facet_breakpoint_px() -> f64 {
    600.0
}

fn default_resize_debounce_ms() -> u64 {
    200
}
