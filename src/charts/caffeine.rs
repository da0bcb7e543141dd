use serde_json::json;

use crate::charts::{CatalogOptions, ChartDescriptor, ChartId, FACET_GAP_PX};
use crate::core::{
    AspectSizing, ClampRange, FacetSizing, ScaledOverride, ScaledValue, SizingRule, SpecTarget,
};
use crate::error::ChartResult;
use crate::render::EmbedOptions;
use crate::spec::{ChartSpec, Palette, VEGA_LITE_SCHEMA_V5, colors};

const SLEEP_QUALITY_ORDER: [&str; 4] = ["Poor", "Fair", "Good", "Excellent"];
const STRESS_ORDER: [&str; 3] = ["Low", "Medium", "High"];

/// Caffeine vs. sleep duration scatter with a gender filter.
pub(super) fn sleep_hours(options: &CatalogOptions) -> ChartResult<ChartDescriptor> {
    let base = ChartSpec::from_value(json!({
        "data": { "url": options.caffeine_data_url },
        "mark": "circle",
        "autosize": { "type": "fit", "contains": "padding" },
        "selection": {
            "genderSel": {
                "type": "single",
                "fields": ["Gender"],
                "bind": {
                    "input": "select",
                    "options": [null, "Male", "Female"],
                    "name": "Gender (All/Male/Female): ",
                    "element": "genderFilter"
                }
            }
        },
        "encoding": {
            "x": { "field": "Caffeine_mg", "type": "quantitative", "title": "Caffeine Intake (mg)" },
            "y": { "field": "Sleep_Hours", "type": "quantitative", "title": "Sleep Duration (hours)" },
            "color": {
                "field": "Gender",
                "type": "nominal",
                "scale": { "domain": ["Male", "Female"], "range": [colors::ESPRESSO, colors::COFFEE] },
                "legend": { "title": "Gender" }
            },
            "opacity": {
                "condition": { "selection": "genderSel", "value": 1 },
                "value": 0.2
            },
            "tooltip": [
                { "field": "Gender", "type": "nominal" },
                { "field": "Country", "type": "nominal" },
                { "field": "Caffeine_mg", "type": "quantitative" },
                { "field": "Sleep_Hours", "type": "quantitative" }
            ]
        }
    }))?;

    let sizing = AspectSizing::new(600.0, 0.6).with_height_range(250.0, 600.0);
    Ok(ChartDescriptor::new(
        ChartId::SleepHours,
        "sleepHours",
        base,
        SizingRule::Aspect(sizing),
    ))
}

/// Share of each sleep-quality level per 100 mg caffeine bin.
pub(super) fn sleep_quality_stacked(options: &CatalogOptions) -> ChartResult<ChartDescriptor> {
    let base = ChartSpec::from_value(json!({
        "$schema": VEGA_LITE_SCHEMA_V5,
        "data": { "url": options.caffeine_data_url },
        "mark": "bar",
        "encoding": {
            "x": {
                "field": "Caffeine_mg",
                "type": "quantitative",
                "bin": { "step": 100 },
                "title": "Caffeine intake (mg, binned)"
            },
            "y": {
                "aggregate": "count",
                "stack": "normalize",
                "axis": { "format": "0%", "title": "Proportion" }
            },
            "color": {
                "field": "Sleep_Quality",
                "type": "nominal",
                "title": "Sleep quality",
                "sort": SLEEP_QUALITY_ORDER,
                "scale": { "range": Palette::sleep_quality().to_value() }
            },
            "tooltip": [
                {
                    "field": "Caffeine_mg",
                    "type": "quantitative",
                    "bin": { "step": 100 },
                    "title": "Caffeine intake (mg, bin)"
                },
                { "field": "Sleep_Quality", "type": "nominal", "title": "Sleep quality" },
                { "aggregate": "count", "field": "Sleep_Quality", "title": "Number of people" }
            ]
        }
    }))?;

    Ok(ChartDescriptor::new(
        ChartId::SleepQualityStacked,
        "sleepQuality",
        base,
        SizingRule::Aspect(tall_aspect(650.0 / 800.0)),
    ))
}

/// Jittered caffeine intake per sleep-quality level with a mean glyph.
pub(super) fn sleep_quality_scatter(options: &CatalogOptions) -> ChartResult<ChartDescriptor> {
    let base = ChartSpec::from_value(json!({
        "$schema": VEGA_LITE_SCHEMA_V5,
        "data": { "url": options.caffeine_data_url },
        "transform": [
            { "calculate": "random() * 0.8 - 0.4", "as": "jitter" }
        ],
        "layer": [
            {
                "mark": { "type": "point", "filled": true, "opacity": 0.4, "size": 28 },
                "encoding": {
                    "x": { "field": "Caffeine_mg", "type": "quantitative", "title": "Caffeine intake (mg)" },
                    "y": {
                        "field": "Sleep_Quality",
                        "type": "nominal",
                        "title": "Sleep quality",
                        "sort": SLEEP_QUALITY_ORDER
                    },
                    "yOffset": { "field": "jitter", "type": "quantitative" },
                    "color": {
                        "field": "Sleep_Quality",
                        "type": "nominal",
                        "sort": SLEEP_QUALITY_ORDER,
                        "scale": { "range": Palette::sleep_quality().to_value() },
                        "legend": { "title": "Sleep quality" }
                    }
                }
            },
            {
                "mark": { "type": "image", "width": 32, "height": 32 },
                "encoding": {
                    "x": { "field": "Caffeine_mg", "type": "quantitative", "aggregate": "mean" },
                    "y": { "field": "Sleep_Quality", "type": "nominal", "sort": SLEEP_QUALITY_ORDER },
                    "url": { "value": options.bean_glyph_url },
                    "tooltip": [
                        { "field": "Sleep_Quality", "title": "Sleep quality" },
                        {
                            "field": "Caffeine_mg",
                            "aggregate": "mean",
                            "title": "Average caffeine (mg)",
                            "format": ".1f"
                        }
                    ]
                }
            }
        ]
    }))?;

    // Glyph edge is width / 25, kept between 16 and 40 px.
    let glyph = ScaledValue::new(1.0, 25.0, ClampRange::new(16.0, 40.0));
    let sizing = tall_aspect(700.0 / 900.0)
        .with_extra(ScaledOverride::new(SpecTarget::layer_mark("image", "width"), glyph))
        .with_extra(ScaledOverride::new(SpecTarget::layer_mark("image", "height"), glyph));

    Ok(ChartDescriptor::new(
        ChartId::SleepQualityScatter,
        "sleepQualityScatter",
        base,
        SizingRule::Aspect(sizing),
    ))
}

/// Mean daily cups by age bin; fixed size with the default action menu.
pub(super) fn coffee_by_age(options: &CatalogOptions) -> ChartResult<ChartDescriptor> {
    let base = ChartSpec::from_value(json!({
        "data": { "url": options.caffeine_data_url },
        "mark": { "type": "line", "point": true },
        "encoding": {
            "x": {
                "field": "Age",
                "type": "quantitative",
                "bin": { "maxbins": 8 },
                "title": "Age",
                "axis": { "labelAngle": 0 }
            },
            "y": {
                "aggregate": "mean",
                "field": "Coffee_Intake",
                "type": "quantitative",
                "title": "Average coffee intake (cups/day)",
                "scale": { "domain": [1, 3.5] },
                "axis": { "tickCount": 6, "format": ".1f" }
            },
            "color": { "field": "Gender", "type": "nominal", "title": "Gender" },
            "tooltip": [
                { "field": "Age", "type": "quantitative", "bin": { "maxbins": 5 }, "title": "Age group" },
                { "field": "Gender", "type": "nominal" },
                { "aggregate": "mean", "field": "Coffee_Intake", "title": "Avg cups per day", "format": ".2f" },
                { "aggregate": "count", "field": "Coffee_Intake", "title": "Sample size" }
            ]
        }
    }))?;

    Ok(ChartDescriptor::new(
        ChartId::CoffeeByAge,
        "coffeeByAge",
        base,
        SizingRule::Fixed {
            width: 800.0,
            height: 650.0,
        },
    )
    .with_embed_options(EmbedOptions::default())
    .with_resize(false))
}

/// Coffee intake per stress level: boxplot plus jittered points.
pub(super) fn stress_coffee(options: &CatalogOptions) -> ChartResult<ChartDescriptor> {
    let range = options.stress_palette.to_value();
    let base = ChartSpec::from_value(json!({
        "$schema": VEGA_LITE_SCHEMA_V5,
        "data": { "url": options.caffeine_data_url },
        "layer": [
            {
                "mark": { "type": "boxplot", "size": 60 },
                "encoding": {
                    "x": {
                        "field": "Stress_Level",
                        "type": "nominal",
                        "sort": STRESS_ORDER,
                        "title": "Stress level",
                        "axis": { "labelAngle": 0 }
                    },
                    "y": { "field": "Coffee_Intake", "type": "quantitative", "title": "Coffee intake (cups/day)" },
                    "color": {
                        "field": "Stress_Level",
                        "type": "nominal",
                        "scale": { "range": range },
                        "legend": { "title": "Stress level" }
                    }
                }
            },
            {
                "mark": { "type": "point", "filled": true, "opacity": 0.4, "size": 20 },
                "encoding": {
                    "x": {
                        "field": "Stress_Level",
                        "type": "nominal",
                        "sort": STRESS_ORDER,
                        "title": "Stress level",
                        "axis": { "labelAngle": 0 },
                        "scale": { "bandPaddingInner": 0.1 }
                    },
                    "y": { "field": "Coffee_Intake", "type": "quantitative" },
                    "color": {
                        "field": "Stress_Level",
                        "type": "nominal",
                        "scale": { "range": range },
                        "legend": null
                    },
                    "tooltip": [
                        { "field": "Stress_Level", "type": "nominal", "title": "Stress level" },
                        {
                            "field": "Coffee_Intake",
                            "type": "quantitative",
                            "format": ".1f",
                            "title": "Coffee intake (cups/day)"
                        },
                        { "field": "Age", "type": "quantitative" },
                        { "field": "Gender", "type": "nominal" }
                    ]
                }
            }
        ]
    }))?;

    Ok(ChartDescriptor::new(
        ChartId::StressCoffee,
        "stressCoffee",
        base,
        SizingRule::Aspect(tall_aspect(650.0 / 800.0)),
    ))
}

/// Activity hours vs. binned coffee intake, one facet per age group.
pub(super) fn coffee_activity_by_age(options: &CatalogOptions) -> ChartResult<ChartDescriptor> {
    let base = ChartSpec::from_value(json!({
        "$schema": VEGA_LITE_SCHEMA_V5,
        "data": { "url": options.caffeine_data_url },
        "transform": [
            {
                "calculate": "datum.Age < 25 ? '18–24' : datum.Age < 35 ? '25–34' : datum.Age < 45 ? '35–44' : '45+'",
                "as": "Age_Group"
            },
            { "filter": "datum.Gender == 'Male' || datum.Gender == 'Female'" }
        ],
        "facet": {
            "field": "Age_Group",
            "type": "nominal",
            "title": "Age group",
            "sort": ["18–24", "25–34", "35–44", "45+"]
        },
        "spec": {
            "mark": { "type": "line", "point": true },
            "encoding": {
                "x": {
                    "field": "Coffee_Intake",
                    "type": "quantitative",
                    "bin": { "maxbins": 5 },
                    "title": "Coffee intake (cups/day, binned)"
                },
                "y": {
                    "aggregate": "mean",
                    "field": "Physical_Activity_Hours",
                    "type": "quantitative",
                    "title": "Avg activity hours",
                    "format": ".1f"
                },
                "color": {
                    "field": "Gender",
                    "type": "nominal",
                    "title": "Gender",
                    "scale": { "domain": ["Male", "Female"], "range": [colors::ESPRESSO, colors::COFFEE] }
                },
                "tooltip": [
                    { "field": "Age_Group", "type": "nominal", "title": "Age group" },
                    {
                        "field": "Coffee_Intake",
                        "type": "quantitative",
                        "bin": { "maxbins": 5 },
                        "title": "Coffee intake (binned)"
                    },
                    { "field": "Gender", "type": "nominal" },
                    {
                        "aggregate": "mean",
                        "field": "Physical_Activity_Hours",
                        "title": "Avg activity hours",
                        "format": ".2f"
                    },
                    { "aggregate": "count", "field": "Physical_Activity_Hours", "title": "Sample size" }
                ]
            }
        }
    }))?;

    let sizing = FacetSizing {
        default_width: 800.0,
        max_width: 900.0,
        gap: FACET_GAP_PX,
        breakpoint: options.facet_breakpoint_px,
        wide_columns: 2,
        cell_aspect: 280.0 / 320.0,
        height_range: ClampRange::new(140.0, 320.0),
    };
    Ok(ChartDescriptor::new(
        ChartId::CoffeeActivityByAge,
        "coffeeActivityByAgeSummary",
        base,
        SizingRule::Facet(sizing),
    ))
}

/// 900 px wide layout clamped to 300..700 px tall.
fn tall_aspect(aspect: f64) -> AspectSizing {
    AspectSizing::new(900.0, aspect)
        .with_max_width(900.0)
        .with_height_range(300.0, 700.0)
}
