use serde_json::json;

use crate::charts::{CatalogOptions, ChartDescriptor, ChartId};
use crate::core::{AspectSizing, DonutSizing, SizingRule};
use crate::error::ChartResult;
use crate::spec::{ChartSpec, Palette, VEGA_LITE_SCHEMA_V5, colors};

const AGE_COLUMN: &str = "datum['What\\'s your age?']";
const GENDER_COLUMN: &str = "datum['What\\'s your gender?']";
const CUPS_COLUMN: &str =
    "toNumber(datum['How many cups of coffee do you normally drink in a day? (1 cup ~ 300mL)'])";
const VALID_CUPS: &str = "isValid(datum.CoffeeCups) && !isNaN(datum.CoffeeCups)";

pub(super) fn age_distribution(options: &CatalogOptions) -> ChartResult<ChartDescriptor> {
    let base = ChartSpec::from_value(json!({
        "$schema": VEGA_LITE_SCHEMA_V5,
        "data": { "url": options.survey_data_url },
        "transform": [
            { "calculate": AGE_COLUMN, "as": "AgeGroup" }
        ],
        "mark": { "type": "arc" },
        "encoding": {
            "theta": { "aggregate": "count", "type": "quantitative" },
            "color": {
                "field": "AgeGroup",
                "type": "nominal",
                "title": "Age Group",
                "scale": { "range": Palette::age_groups().to_value() }
            },
            "tooltip": [
                { "field": "AgeGroup", "title": "Age Group" },
                { "aggregate": "count", "title": "Count" }
            ]
        }
    }))?;

    Ok(ChartDescriptor::new(
        ChartId::AgeDistribution,
        "ageChart",
        base,
        SizingRule::Donut(donut_sizing()),
    ))
}

pub(super) fn gender_distribution(options: &CatalogOptions) -> ChartResult<ChartDescriptor> {
    let base = ChartSpec::from_value(json!({
        "$schema": VEGA_LITE_SCHEMA_V5,
        "data": { "url": options.survey_data_url },
        "transform": [
            { "calculate": GENDER_COLUMN, "as": "Gender" }
        ],
        "mark": { "type": "arc" },
        "encoding": {
            "theta": { "aggregate": "count", "type": "quantitative" },
            "color": {
                "field": "Gender",
                "type": "nominal",
                "title": "Gender",
                "scale": { "range": Palette::gender().to_value() }
            },
            "tooltip": [
                { "field": "Gender", "title": "Gender" },
                { "aggregate": "count", "title": "Count" }
            ]
        }
    }))?;

    Ok(ChartDescriptor::new(
        ChartId::GenderDistribution,
        "genderChart",
        base,
        SizingRule::Donut(donut_sizing()),
    ))
}

/// Daily cups per gender, full min-max whiskers.
pub(super) fn gender_coffee(options: &CatalogOptions) -> ChartResult<ChartDescriptor> {
    let base = ChartSpec::from_value(json!({
        "$schema": VEGA_LITE_SCHEMA_V5,
        "data": { "url": options.survey_data_url },
        "transform": [
            { "calculate": GENDER_COLUMN, "as": "Gender" },
            { "calculate": CUPS_COLUMN, "as": "CoffeeCups" },
            { "filter": VALID_CUPS }
        ],
        "mark": { "type": "boxplot", "extent": "min-max", "size": 50 },
        "encoding": {
            "x": { "field": "Gender", "type": "nominal", "title": "Gender", "axis": { "labelAngle": 0 } },
            "y": { "field": "CoffeeCups", "type": "quantitative", "title": "Daily coffee intake (cups)" },
            "color": {
                "field": "Gender",
                "type": "nominal",
                "scale": { "range": Palette::gender().to_value() },
                "legend": { "title": "Gender" }
            },
            "tooltip": [
                { "field": "Gender", "title": "Gender" },
                { "field": "CoffeeCups", "title": "Coffee intake (cups)" }
            ]
        }
    }))?;

    let sizing = AspectSizing::new(420.0, 320.0 / 420.0).with_max_width(600.0);
    Ok(ChartDescriptor::new(
        ChartId::GenderCoffee,
        "genderCoffeeChart",
        base,
        SizingRule::Aspect(sizing),
    ))
}

/// Mean sleep duration (with stdev bars) per daily cup count.
pub(super) fn coffee_sleep_mean(options: &CatalogOptions) -> ChartResult<ChartDescriptor> {
    let base = ChartSpec::from_value(json!({
        "$schema": VEGA_LITE_SCHEMA_V5,
        "data": { "url": options.survey_data_url },
        "transform": [
            { "calculate": CUPS_COLUMN, "as": "CoffeeCups" },
            { "filter": VALID_CUPS },
            {
                "calculate": "toDate('2000-01-01 ' + datum['What time do you typically sleep on a weekday?'])",
                "as": "SleepTime"
            },
            {
                "calculate": "toDate('2000-01-02 ' + datum['What time do you typically wake up on a weekday?'])",
                "as": "WakeTime"
            },
            {
                "calculate": "((hours(datum.WakeTime) * 60 + minutes(datum.WakeTime)) - (hours(datum.SleepTime) * 60 + minutes(datum.SleepTime))) / 60",
                "as": "SleepDurationHours"
            },
            { "filter": "datum.SleepDurationHours > 0 && datum.SleepDurationHours < 16" }
        ],
        "layer": [
            {
                "mark": { "type": "errorbar", "ticks": true, "rule": true, "color": colors::ESPRESSO },
                "encoding": {
                    "x": {
                        "field": "CoffeeCups",
                        "type": "ordinal",
                        "sort": "ascending",
                        "title": "Daily coffee intake (cups)",
                        "axis": { "labelAngle": 0, "labelFontSize": 13, "labelColor": colors::LABEL_BROWN },
                        "scale": { "paddingInner": 0.3, "paddingOuter": 0.2 }
                    },
                    "y": {
                        "field": "SleepDurationHours",
                        "type": "quantitative",
                        "aggregate": "mean",
                        "title": "Sleep duration (hours)",
                        "axis": { "labelFontSize": 13, "labelColor": colors::LABEL_BROWN }
                    }
                }
            },
            {
                "mark": { "type": "point", "filled": true, "size": 90, "color": colors::ESPRESSO },
                "encoding": {
                    "x": { "field": "CoffeeCups", "type": "ordinal", "sort": "ascending", "axis": { "labelAngle": 0 } },
                    "y": { "field": "SleepDurationHours", "type": "quantitative", "aggregate": "mean" },
                    "tooltip": [
                        { "field": "CoffeeCups", "title": "Cups" },
                        {
                            "field": "SleepDurationHours",
                            "aggregate": "mean",
                            "title": "Avg Sleep (hrs)",
                            "format": ".2f"
                        }
                    ]
                }
            }
        ],
        "config": {
            "view": { "stroke": null },
            "axis": { "grid": false, "ticks": false, "domain": false }
        }
    }))?;

    let sizing = AspectSizing::new(520.0, 320.0 / 520.0).with_max_width(600.0);
    Ok(ChartDescriptor::new(
        ChartId::CoffeeSleepMean,
        "coffeeSleepMeanChart",
        base,
        SizingRule::Aspect(sizing),
    ))
}

fn donut_sizing() -> DonutSizing {
    DonutSizing {
        default_width: 320.0,
        max_width: 320.0,
        base_width: 320.0,
        outer_radius: 140.0,
        inner_radius: 70.0,
        padding: 5.0,
    }
}
