//! Chart catalogue for the caffeine survey page.
//!
//! Every chart pairs an immutable base spec with a [`SizingRule`]. Base
//! specs are grouped by where their data comes from:
//! - `caffeine`: the public caffeine/sleep dataset
//! - `survey`: the page's own questionnaire responses
//! - `inline`: small tables embedded directly in the spec

mod caffeine;
mod inline;
mod survey;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Dimensions, SizingRule};
use crate::error::{ChartError, ChartResult};
use crate::render::EmbedOptions;
use crate::spec::{ChartSpec, Palette};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    SleepHours,
    SleepQualityStacked,
    SleepQualityScatter,
    CoffeeByAge,
    StressCoffee,
    CoffeeActivityByAge,
    CoffeeReasons,
    AgeDistribution,
    GenderDistribution,
    GenderCoffee,
    WeekdayActivity,
    CoffeeSleepMean,
}

impl ChartId {
    /// Page order, which is also the initial render order.
    pub const ALL: [ChartId; 12] = [
        ChartId::SleepHours,
        ChartId::SleepQualityScatter,
        ChartId::SleepQualityStacked,
        ChartId::CoffeeByAge,
        ChartId::StressCoffee,
        ChartId::CoffeeActivityByAge,
        ChartId::CoffeeReasons,
        ChartId::AgeDistribution,
        ChartId::GenderDistribution,
        ChartId::GenderCoffee,
        ChartId::WeekdayActivity,
        ChartId::CoffeeSleepMean,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SleepHours => "sleep_hours",
            Self::SleepQualityStacked => "sleep_quality_stacked",
            Self::SleepQualityScatter => "sleep_quality_scatter",
            Self::CoffeeByAge => "coffee_by_age",
            Self::StressCoffee => "stress_coffee",
            Self::CoffeeActivityByAge => "coffee_activity_by_age",
            Self::CoffeeReasons => "coffee_reasons",
            Self::AgeDistribution => "age_distribution",
            Self::GenderDistribution => "gender_distribution",
            Self::GenderCoffee => "gender_coffee",
            Self::WeekdayActivity => "weekday_activity",
            Self::CoffeeSleepMean => "coffee_sleep_mean",
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartId {
    type Err = ChartError;

    fn from_str(value: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == value)
            .ok_or_else(|| ChartError::InvalidConfig(format!("unknown chart id `{value}`")))
    }
}

/// Horizontal gap between facet cells in the two-column layout.
pub const FACET_GAP_PX: f64 = 24.0;

/// Inputs that vary between deployments of the same catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogOptions {
    pub caffeine_data_url: String,
    pub survey_data_url: String,
    pub bean_glyph_url: String,
    pub stress_palette: Palette,
    pub facet_breakpoint_px: f64,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            caffeine_data_url: "caffeine.csv".to_owned(),
            survey_data_url: "Responses.csv".to_owned(),
            bean_glyph_url: "src/coffeeBean_You.svg".to_owned(),
            stress_palette: Palette::stress_levels(),
            facet_breakpoint_px: 600.0,
        }
    }
}

/// One chart on the page: what to draw, where, and how it sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDescriptor {
    pub id: ChartId,
    pub element_id: String,
    pub base: ChartSpec,
    pub sizing: SizingRule,
    pub embed: EmbedOptions,
    /// Whether the debounced resize pass re-renders this chart.
    pub resize: bool,
}

impl ChartDescriptor {
    #[must_use]
    pub fn new(
        id: ChartId,
        element_id: impl Into<String>,
        base: ChartSpec,
        sizing: SizingRule,
    ) -> Self {
        Self {
            id,
            element_id: element_id.into(),
            base,
            sizing,
            embed: EmbedOptions::chromeless(),
            resize: true,
        }
    }

    #[must_use]
    pub fn with_embed_options(mut self, embed: EmbedOptions) -> Self {
        self.embed = embed;
        self
    }

    #[must_use]
    pub fn with_resize(mut self, resize: bool) -> Self {
        self.resize = resize;
        self
    }

    #[must_use]
    pub fn dimensions(&self, observed_width: Option<f64>) -> Dimensions {
        self.sizing.resolve(observed_width)
    }

    /// Resolved spec for the observed container width.
    pub fn resolve(&self, observed_width: Option<f64>) -> ChartResult<ChartSpec> {
        self.base.resolve(&self.dimensions(observed_width))
    }
}

/// Builds every chart in page order.
pub fn catalog(options: &CatalogOptions) -> ChartResult<Vec<ChartDescriptor>> {
    ChartId::ALL
        .into_iter()
        .map(|id| descriptor(id, options))
        .collect()
}

/// Builds a single chart descriptor.
pub fn descriptor(id: ChartId, options: &CatalogOptions) -> ChartResult<ChartDescriptor> {
    match id {
        ChartId::SleepHours => caffeine::sleep_hours(options),
        ChartId::SleepQualityStacked => caffeine::sleep_quality_stacked(options),
        ChartId::SleepQualityScatter => caffeine::sleep_quality_scatter(options),
        ChartId::CoffeeByAge => caffeine::coffee_by_age(options),
        ChartId::StressCoffee => caffeine::stress_coffee(options),
        ChartId::CoffeeActivityByAge => caffeine::coffee_activity_by_age(options),
        ChartId::CoffeeReasons => inline::coffee_reasons(),
        ChartId::AgeDistribution => survey::age_distribution(options),
        ChartId::GenderDistribution => survey::gender_distribution(options),
        ChartId::GenderCoffee => survey::gender_coffee(options),
        ChartId::WeekdayActivity => inline::weekday_activity(),
        ChartId::CoffeeSleepMean => survey::coffee_sleep_mean(options),
    }
}
