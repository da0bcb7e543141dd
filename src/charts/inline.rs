use serde_json::{Value, json};

use crate::charts::{ChartDescriptor, ChartId};
use crate::core::{BandStepSizing, ClampRange, ScaledOverride, ScaledValue, SizingRule, SpecTarget};
use crate::error::ChartResult;
use crate::spec::{ChartSpec, VEGA_LITE_SCHEMA_V5, colors};

const COFFEE_REASONS: [(&str, f64); 7] = [
    ("Enjoys the Taste", 83.1),
    ("Increases Energy", 67.1),
    ("Increases Productivity", 42.7),
    ("Healthy", 28.5),
    ("Suppresses Appetite", 20.2),
    ("Others", 10.0),
    ("None of the Above", 1.6),
];

const WEEKDAY_ACTIVITIES: [(&str, u32); 11] = [
    ("Doom scroll your phone", 29),
    ("Full-time Work", 25),
    ("Hang out with friends", 23),
    ("Make Dinner", 23),
    ("School Project", 22),
    ("Make Breakfest", 20),
    ("School Lecture", 20),
    ("Exercise", 20),
    ("Make Lunch", 19),
    ("Part-time Work", 11),
    ("Walk the Dog", 5),
];

/// Why respondents drink coffee, as labelled horizontal bars.
pub(super) fn coffee_reasons() -> ChartResult<ChartDescriptor> {
    let values: Vec<Value> = COFFEE_REASONS
        .iter()
        .map(|(reason, percent)| json!({ "Reason": reason, "Percent": percent }))
        .collect();

    let base = ChartSpec::from_value(json!({
        "$schema": VEGA_LITE_SCHEMA_V5,
        "data": { "values": values },
        "transform": [
            { "calculate": "datum.Percent + '%'", "as": "Percent_Label" }
        ],
        "layer": [
            {
                "mark": { "type": "bar", "cornerRadius": 3 },
                "encoding": {
                    "y": {
                        "field": "Reason",
                        "type": "nominal",
                        "sort": "-x",
                        "title": null,
                        "axis": category_axis()
                    },
                    "x": {
                        "field": "Percent",
                        "type": "quantitative",
                        "title": null,
                        "axis": { "grid": false, "ticks": false, "labels": false }
                    },
                    "color": { "value": colors::COFFEE },
                    "tooltip": [
                        { "field": "Reason", "title": "Reason" },
                        { "field": "Percent", "title": "Percent", "format": ".1f" }
                    ]
                }
            },
            {
                "mark": value_label_mark(),
                "encoding": {
                    "y": { "field": "Reason", "type": "nominal", "sort": "-x" },
                    "x": { "field": "Percent", "type": "quantitative" },
                    "text": { "field": "Percent_Label", "type": "nominal" }
                }
            }
        ],
        "config": bare_axis_config()
    }))?;

    let sizing = BandStepSizing {
        default_width: 800.0,
        max_width: Some(800.0),
        step: ScaledValue::new(48.0, 800.0, ClampRange::new(32.0, 64.0)),
        extras: Vec::new(),
    };
    Ok(ChartDescriptor::new(
        ChartId::CoffeeReasons,
        "chart_coffee_reasons",
        base,
        SizingRule::BandStep(sizing),
    ))
}

/// How often respondents do each weekday activity.
pub(super) fn weekday_activity() -> ChartResult<ChartDescriptor> {
    let values: Vec<Value> = WEEKDAY_ACTIVITIES
        .iter()
        .map(|(activity, count)| json!({ "Activity": activity, "Count": count }))
        .collect();

    let base = ChartSpec::from_value(json!({
        "$schema": VEGA_LITE_SCHEMA_V5,
        "data": { "values": values },
        "transform": [
            { "calculate": "datum.Count + ''", "as": "Count_Label" }
        ],
        "layer": [
            {
                "mark": { "type": "bar", "cornerRadius": 3 },
                "encoding": {
                    "y": {
                        "field": "Activity",
                        "type": "nominal",
                        "sort": "-x",
                        "title": null,
                        "axis": category_axis()
                    },
                    "x": {
                        "field": "Count",
                        "type": "quantitative",
                        "title": null,
                        "scale": { "domain": [0, 40] },
                        "axis": { "grid": false, "ticks": false, "labels": false }
                    },
                    "color": { "value": colors::COFFEE }
                }
            },
            {
                "mark": value_label_mark(),
                "encoding": {
                    "y": { "field": "Activity", "type": "nominal", "sort": "-x" },
                    "x": { "field": "Count", "type": "quantitative" },
                    "text": { "field": "Count_Label" }
                }
            }
        ],
        "config": bare_axis_config()
    }))?;

    let sizing = BandStepSizing {
        default_width: 520.0,
        max_width: None,
        step: ScaledValue::new(40.0, 520.0, ClampRange::new(28.0, 60.0)),
        extras: vec![
            ScaledOverride::new(
                SpecTarget::pointer("/layer/0/encoding/y/axis/labelFontSize"),
                ScaledValue::new(20.0, 520.0, ClampRange::new(12.0, 20.0)),
            ),
            ScaledOverride::new(
                SpecTarget::pointer("/layer/1/mark/fontSize"),
                ScaledValue::new(16.0, 520.0, ClampRange::new(12.0, 18.0)),
            ),
        ],
    };
    Ok(ChartDescriptor::new(
        ChartId::WeekdayActivity,
        "weekdayActivityChart",
        base,
        SizingRule::BandStep(sizing),
    ))
}

fn category_axis() -> Value {
    json!({
        "labelFont": "Calibri",
        "labelFontSize": 20,
        "labelFontWeight": "bold",
        "labelColor": colors::LABEL_BROWN,
        "labelPadding": 15,
        "labelLimit": 0
    })
}

fn value_label_mark() -> Value {
    json!({
        "type": "text",
        "align": "left",
        "baseline": "middle",
        "dx": 5,
        "font": "Calibri",
        "fontSize": 16,
        "fontWeight": "bold",
        "color": colors::ESPRESSO
    })
}

fn bare_axis_config() -> Value {
    json!({
        "view": { "stroke": null },
        "axis": { "domain": false, "grid": false, "ticks": false }
    })
}
