pub mod scale;
pub mod sizing;
pub mod types;

pub use scale::{ScaledValue, scale_factor};
pub use sizing::{
    AspectSizing, BandStepSizing, Dimensions, DonutSizing, FacetSizing, NestedOverride,
    ScaledOverride, SizingRule, SpecTarget,
};
pub use types::{ChartHeight, ClampRange, effective_container_width};
