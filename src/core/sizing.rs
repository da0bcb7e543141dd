use crate::core::{ChartHeight, ClampRange, ScaledValue, effective_container_width, scale_factor};
use crate::error::{ChartError, ChartResult};

/// Location inside a chart spec that receives a derived value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecTarget {
    /// JSON pointer (`/layer/1/mark/fontSize`); the parent must exist.
    Pointer(String),
    /// `property` on the mark of every layer whose mark type is `mark_type`.
    LayerMark {
        mark_type: String,
        property: String,
    },
}

impl SpecTarget {
    #[must_use]
    pub fn pointer(pointer: impl Into<String>) -> Self {
        Self::Pointer(pointer.into())
    }

    #[must_use]
    pub fn layer_mark(mark_type: impl Into<String>, property: impl Into<String>) -> Self {
        Self::LayerMark {
            mark_type: mark_type.into(),
            property: property.into(),
        }
    }
}

/// Derived value written somewhere below the spec's top level.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedOverride {
    pub target: SpecTarget,
    pub value: f64,
}

/// Scaled secondary dimension bound to its spec location.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledOverride {
    pub target: SpecTarget,
    pub value: ScaledValue,
}

impl ScaledOverride {
    #[must_use]
    pub fn new(target: SpecTarget, value: ScaledValue) -> Self {
        Self { target, value }
    }
}

/// Fully resolved dimensions for one render pass.
///
/// For facet charts `width` and `height` describe a single cell and
/// `columns` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: ChartHeight,
    pub columns: Option<u32>,
    pub nested: Vec<NestedOverride>,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: f64, height: ChartHeight) -> Self {
        Self {
            width,
            height,
            columns: None,
            nested: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_nested(mut self, target: SpecTarget, value: f64) -> Self {
        self.nested.push(NestedOverride { target, value });
        self
    }

    /// Value of the first nested override aimed at `target`.
    #[must_use]
    pub fn nested_value(&self, target: &SpecTarget) -> Option<f64> {
        self.nested
            .iter()
            .find(|nested| &nested.target == target)
            .map(|nested| nested.value)
    }
}

/// Height follows width through a fixed aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectSizing {
    pub default_width: f64,
    pub max_width: Option<f64>,
    pub aspect: f64,
    pub height_range: Option<ClampRange>,
    pub extras: Vec<ScaledOverride>,
}

impl AspectSizing {
    #[must_use]
    pub fn new(default_width: f64, aspect: f64) -> Self {
        Self {
            default_width,
            max_width: None,
            aspect,
            height_range: None,
            extras: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = Some(max_width);
        self
    }

    #[must_use]
    pub fn with_height_range(mut self, min: f64, max: f64) -> Self {
        self.height_range = Some(ClampRange::new(min, max));
        self
    }

    #[must_use]
    pub fn with_extra(mut self, extra: ScaledOverride) -> Self {
        self.extras.push(extra);
        self
    }
}

/// Band charts: height is a per-category step scaled with width.
#[derive(Debug, Clone, PartialEq)]
pub struct BandStepSizing {
    pub default_width: f64,
    pub max_width: Option<f64>,
    pub step: ScaledValue,
    pub extras: Vec<ScaledOverride>,
}

/// Small multiples wrapped into one or two columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacetSizing {
    pub default_width: f64,
    pub max_width: f64,
    pub gap: f64,
    pub breakpoint: f64,
    pub wide_columns: u32,
    pub cell_aspect: f64,
    pub height_range: ClampRange,
}

impl FacetSizing {
    #[must_use]
    pub fn columns_for(&self, width: f64) -> u32 {
        if width < self.breakpoint {
            1
        } else {
            self.wide_columns
        }
    }
}

/// Square arc chart whose radii follow width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSizing {
    pub default_width: f64,
    pub max_width: f64,
    pub base_width: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub padding: f64,
}

/// Maps a container width to chart [`Dimensions`].
#[derive(Debug, Clone, PartialEq)]
pub enum SizingRule {
    Fixed { width: f64, height: f64 },
    Aspect(AspectSizing),
    BandStep(BandStepSizing),
    Facet(FacetSizing),
    Donut(DonutSizing),
}

impl SizingRule {
    /// Resolves dimensions for the observed container width.
    ///
    /// `None` (absent container) and zero widths fall back to the rule's
    /// default width. The result depends only on the input width.
    #[must_use]
    pub fn resolve(&self, observed: Option<f64>) -> Dimensions {
        match self {
            Self::Fixed { width, height } => Dimensions::new(*width, ChartHeight::Px(*height)),
            Self::Aspect(rule) => {
                let width = chart_width(observed, rule.default_width, rule.max_width);
                let raw = width * rule.aspect;
                let height = rule.height_range.map_or(raw, |range| range.clamp(raw));
                let mut dims = Dimensions::new(width, ChartHeight::Px(height));
                push_extras(&mut dims, &rule.extras, width);
                dims
            }
            Self::BandStep(rule) => {
                let width = chart_width(observed, rule.default_width, rule.max_width);
                let step = rule.step.resolve(width);
                let mut dims = Dimensions::new(width, ChartHeight::Step { step });
                push_extras(&mut dims, &rule.extras, width);
                dims
            }
            Self::Facet(rule) => {
                let total = chart_width(observed, rule.default_width, Some(rule.max_width));
                let columns = rule.columns_for(total);
                let gaps = rule.gap * f64::from(columns.saturating_sub(1));
                let cell_width = (total - gaps) / f64::from(columns.max(1));
                let cell_height = rule.height_range.clamp(cell_width * rule.cell_aspect);
                Dimensions {
                    width: cell_width,
                    height: ChartHeight::Px(cell_height),
                    columns: Some(columns),
                    nested: Vec::new(),
                }
            }
            Self::Donut(rule) => {
                let width = chart_width(observed, rule.default_width, Some(rule.max_width));
                let factor = scale_factor(width, rule.base_width);
                let mut outer = rule.outer_radius * factor;
                let mut inner = rule.inner_radius * factor;
                let max_radius = width / 2.0 - rule.padding;
                if outer > max_radius {
                    outer = max_radius.max(0.0);
                    inner = outer / 2.0;
                }
                Dimensions::new(width, ChartHeight::Px(width))
                    .with_nested(SpecTarget::pointer("/mark/innerRadius"), inner)
                    .with_nested(SpecTarget::pointer("/mark/outerRadius"), outer)
            }
        }
    }

    /// Range the resolved height (or band step) is guaranteed to stay in.
    #[must_use]
    pub fn height_range(&self) -> Option<ClampRange> {
        match self {
            Self::Fixed { height, .. } => Some(ClampRange::new(*height, *height)),
            Self::Aspect(rule) => rule.height_range,
            Self::BandStep(rule) => Some(rule.step.range),
            Self::Facet(rule) => Some(rule.height_range),
            Self::Donut(rule) => Some(ClampRange::new(0.0, rule.max_width)),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Fixed { width, height } => {
                positive("fixed width", *width)?;
                positive("fixed height", *height)?;
            }
            Self::Aspect(rule) => {
                positive("default width", rule.default_width)?;
                if let Some(max_width) = rule.max_width {
                    positive("max width", max_width)?;
                }
                positive("aspect ratio", rule.aspect)?;
                if let Some(range) = rule.height_range {
                    range.validate("height")?;
                }
                validate_extras(&rule.extras)?;
            }
            Self::BandStep(rule) => {
                positive("default width", rule.default_width)?;
                if let Some(max_width) = rule.max_width {
                    positive("max width", max_width)?;
                }
                rule.step.validate("band step")?;
                validate_extras(&rule.extras)?;
            }
            Self::Facet(rule) => {
                positive("default width", rule.default_width)?;
                positive("max width", rule.max_width)?;
                positive("facet breakpoint", rule.breakpoint)?;
                positive("cell aspect ratio", rule.cell_aspect)?;
                if !rule.gap.is_finite() || rule.gap < 0.0 {
                    return Err(ChartError::InvalidConfig(
                        "facet gap must be finite and >= 0".to_owned(),
                    ));
                }
                if rule.wide_columns == 0 {
                    return Err(ChartError::InvalidConfig(
                        "facet wide column count must be >= 1".to_owned(),
                    ));
                }
                let gaps = rule.gap * f64::from(rule.wide_columns - 1);
                if rule.breakpoint <= gaps {
                    return Err(ChartError::InvalidConfig(format!(
                        "facet breakpoint {} must exceed the {gaps} px of column gaps",
                        rule.breakpoint
                    )));
                }
                rule.height_range.validate("facet cell height")?;
            }
            Self::Donut(rule) => {
                positive("default width", rule.default_width)?;
                positive("max width", rule.max_width)?;
                positive("donut base width", rule.base_width)?;
                positive("donut outer radius", rule.outer_radius)?;
                if !rule.inner_radius.is_finite()
                    || rule.inner_radius < 0.0
                    || rule.inner_radius > rule.outer_radius
                {
                    return Err(ChartError::InvalidConfig(
                        "donut inner radius must be finite and within [0, outer radius]"
                            .to_owned(),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn chart_width(observed: Option<f64>, default_width: f64, max_width: Option<f64>) -> f64 {
    let width = effective_container_width(observed, default_width);
    max_width.map_or(width, |max_width| width.min(max_width))
}

fn push_extras(dims: &mut Dimensions, extras: &[ScaledOverride], width: f64) {
    for extra in extras {
        dims.nested.push(NestedOverride {
            target: extra.target.clone(),
            value: extra.value.resolve(width),
        });
    }
}

fn validate_extras(extras: &[ScaledOverride]) -> ChartResult<()> {
    for extra in extras {
        extra.value.validate("scaled override")?;
    }
    Ok(())
}

fn positive(label: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{label} must be finite and > 0"
        )));
    }
    Ok(())
}
