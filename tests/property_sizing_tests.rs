use proptest::prelude::*;
use survey_charts::charts::{CatalogOptions, ChartId, catalog, descriptor};
use survey_charts::core::{ChartHeight, SizingRule};

fn chart_id_strategy() -> impl Strategy<Value = ChartId> {
    prop::sample::select(ChartId::ALL.to_vec())
}

fn height_of(height: ChartHeight) -> f64 {
    match height {
        ChartHeight::Px(px) => px,
        ChartHeight::Step { step } => step,
    }
}

proptest! {
    #[test]
    fn resolved_height_stays_inside_rule_bounds(
        id in chart_id_strategy(),
        width in prop_oneof![Just(0.0f64), 1.0f64..3_000.0]
    ) {
        let chart = descriptor(id, &CatalogOptions::default()).expect("chart");
        let dims = chart.dimensions(Some(width));
        let height = height_of(dims.height);

        prop_assert!(height.is_finite() && height > 0.0);
        prop_assert!(dims.width.is_finite() && dims.width > 0.0);
        if let Some(range) = chart.sizing.height_range() {
            prop_assert!(range.contains(height), "{id}: height {height} outside {range:?}");
        }
        prop_assert!(chart.resolve(Some(width)).expect("resolve").validate().is_ok());
    }

    #[test]
    fn resolution_is_deterministic(
        id in chart_id_strategy(),
        width in 1.0f64..3_000.0
    ) {
        let chart = descriptor(id, &CatalogOptions::default()).expect("chart");
        let first = chart.resolve(Some(width)).expect("resolve");
        let second = chart.resolve(Some(width)).expect("resolve");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn width_never_exceeds_cap(
        id in chart_id_strategy(),
        width in 1.0f64..3_000.0
    ) {
        let chart = descriptor(id, &CatalogOptions::default()).expect("chart");
        let dims = chart.dimensions(Some(width));
        let cap = match &chart.sizing {
            SizingRule::Fixed { width, .. } => Some(*width),
            SizingRule::Aspect(rule) => rule.max_width,
            SizingRule::BandStep(rule) => rule.max_width,
            SizingRule::Facet(rule) => Some(rule.max_width),
            SizingRule::Donut(rule) => Some(rule.max_width),
        };
        match cap {
            Some(cap) => prop_assert!(dims.width <= cap + 1e-9),
            None => prop_assert_eq!(dims.width, width),
        }
    }

    #[test]
    fn facet_columns_follow_breakpoint(
        width in 1.0f64..2_000.0,
        breakpoint in 200.0f64..900.0
    ) {
        let options = CatalogOptions {
            facet_breakpoint_px: breakpoint,
            ..CatalogOptions::default()
        };
        let facet = descriptor(ChartId::CoffeeActivityByAge, &options).expect("facet");
        let dims = facet.dimensions(Some(width));
        let total = width.min(900.0);
        let expected = if total >= breakpoint { 2 } else { 1 };

        prop_assert_eq!(dims.columns, Some(expected));
        let gaps = 24.0 * f64::from(expected - 1);
        prop_assert!((dims.width * f64::from(expected) + gaps - total).abs() < 1e-6);
    }

    #[test]
    fn wider_containers_never_shrink_aspect_charts(
        narrow in 1.0f64..1_500.0,
        extra in 0.0f64..1_500.0
    ) {
        for chart in catalog(&CatalogOptions::default()).expect("catalogue") {
            if !matches!(chart.sizing, SizingRule::Aspect(_)) {
                continue;
            }
            let small = height_of(chart.dimensions(Some(narrow)).height);
            let large = height_of(chart.dimensions(Some(narrow + extra)).height);
            prop_assert!(large + 1e-9 >= small, "{}: {large} < {small}", chart.id);
        }
    }
}
