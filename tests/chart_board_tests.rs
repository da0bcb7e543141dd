use survey_charts::api::{ChartBoard, Page, RenderOutcome, RenderSummary, StaticPage};
use survey_charts::charts::{CatalogOptions, ChartDescriptor, ChartId, catalog};
use survey_charts::core::{AspectSizing, SizingRule};
use survey_charts::render::{EmbedOptions, NullRenderer, Renderer};
use survey_charts::spec::ChartSpec;
use survey_charts::{ChartError, ChartResult};

fn charts() -> Vec<ChartDescriptor> {
    catalog(&CatalogOptions::default()).expect("catalogue")
}

fn full_page(width: f64) -> StaticPage {
    StaticPage::uniform(charts().into_iter().map(|chart| chart.element_id), width)
}

fn board() -> ChartBoard<NullRenderer> {
    ChartBoard::new(NullRenderer::default(), charts()).expect("board")
}

/// Fails for one element and records the rest.
#[derive(Default)]
struct FlakyRenderer {
    broken: String,
    inner: NullRenderer,
}

impl Renderer for FlakyRenderer {
    fn embed(
        &mut self,
        element_id: &str,
        spec: &ChartSpec,
        options: EmbedOptions,
    ) -> ChartResult<()> {
        if element_id == self.broken {
            return Err(ChartError::Render {
                element_id: element_id.to_owned(),
                message: "embedding backend unavailable".to_owned(),
            });
        }
        self.inner.embed(element_id, spec, options)
    }
}

#[test]
fn catalogue_lists_twelve_charts_in_page_order() {
    let charts = charts();
    let ids: Vec<ChartId> = charts.iter().map(|chart| chart.id).collect();
    assert_eq!(ids, ChartId::ALL.to_vec());
    assert_eq!(charts.len(), 12);
    assert_eq!(charts.iter().filter(|chart| chart.resize).count(), 11);

    let mut element_ids: Vec<&str> = charts.iter().map(|chart| chart.element_id.as_str()).collect();
    element_ids.sort_unstable();
    element_ids.dedup();
    assert_eq!(element_ids.len(), 12);
}

#[test]
fn render_all_embeds_every_chart_on_a_full_page() {
    let mut board = board();
    let summary = board.render_all(&full_page(800.0));

    assert_eq!(
        summary,
        RenderSummary {
            rendered: 12,
            skipped: 0,
            failed: 0
        }
    );
    let renderer = board.renderer();
    assert_eq!(renderer.embed_count(), 12);

    let stacked = renderer.last_for("sleepQuality").expect("stacked bar embedded");
    assert_eq!(stacked.spec.get_f64("/width"), Some(800.0));
    assert_eq!(stacked.spec.get_f64("/height"), Some(650.0));
    assert!(!stacked.options.actions);

    let by_age = renderer.last_for("coffeeByAge").expect("fixed chart embedded");
    assert!(by_age.options.actions);
}

#[test]
fn missing_elements_are_skipped_without_touching_the_renderer() {
    let mut page = full_page(700.0);
    page.remove("genderChart");
    page.remove("chart_coffee_reasons");

    let mut board = board();
    let summary = board.render_all(&page);

    assert_eq!(summary.rendered, 10);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.failed, 0);
    assert_eq!(board.renderer().count_for("genderChart"), 0);
    assert_eq!(board.render_chart(ChartId::GenderDistribution, &page), RenderOutcome::Skipped);
    assert!(
        board
            .resolve_chart(ChartId::GenderDistribution, &page)
            .expect("resolve")
            .is_none()
    );
}

#[test]
fn unlaid_out_element_renders_at_default_width() {
    let page = StaticPage::new().with_element("weekdayActivityChart", 0.0);
    let mut board = board();

    assert_eq!(board.render_chart(ChartId::WeekdayActivity, &page), RenderOutcome::Rendered);
    let record = board
        .renderer()
        .last_for("weekdayActivityChart")
        .expect("embedded");
    assert_eq!(record.spec.get_f64("/width"), Some(520.0));
    assert_eq!(page.element_width("sleepHours"), None);
}

#[test]
fn one_failing_chart_does_not_stop_the_others() {
    let renderer = FlakyRenderer {
        broken: "ageChart".to_owned(),
        ..FlakyRenderer::default()
    };
    let mut board = ChartBoard::new(renderer, charts()).expect("board");
    let summary = board.render_all(&full_page(640.0));

    assert_eq!(summary.rendered, 11);
    assert_eq!(summary.failed, 1);
    let inner = &board.renderer().inner;
    assert_eq!(inner.count_for("ageChart"), 0);
    assert_eq!(inner.count_for("genderChart"), 1);
    assert_eq!(inner.count_for("coffeeSleepMeanChart"), 1);
}

#[test]
fn resize_pass_skips_fixed_size_chart() {
    let mut board = board();
    let mut page = full_page(900.0);
    board.render_all(&page);

    page.resize_all(480.0);
    let summary = board.rerender_resizable(&page);

    assert_eq!(summary.rendered, 11);
    let renderer = board.renderer();
    assert_eq!(renderer.embed_count(), 23);
    assert_eq!(renderer.count_for("coffeeByAge"), 1);
    assert_eq!(renderer.count_for("sleepHours"), 2);

    let reasons = renderer.last_for("chart_coffee_reasons").expect("embedded");
    assert_eq!(reasons.spec.get_f64("/width"), Some(480.0));
}

#[test]
fn resolve_chart_does_not_render() {
    let board = board();
    let page = full_page(600.0);

    let spec = board
        .resolve_chart(ChartId::CoffeeActivityByAge, &page)
        .expect("resolve")
        .expect("element present");
    assert_eq!(spec.get_f64("/spec/width"), Some(288.0));
    assert_eq!(board.renderer().embed_count(), 0);
}

#[test]
fn duplicate_chart_ids_are_rejected() {
    let mut charts = charts();
    charts.push(charts[0].clone());

    let err = ChartBoard::new(NullRenderer::default(), charts)
        .err()
        .expect("duplicate must fail");
    assert!(matches!(err, ChartError::InvalidConfig(message) if message.contains("sleep_hours")));
}

#[test]
fn facet_breakpoint_inside_the_column_gap_is_rejected() {
    let options = CatalogOptions {
        facet_breakpoint_px: 10.0,
        ..CatalogOptions::default()
    };
    let charts = catalog(&options).expect("catalogue");

    let err = ChartBoard::new(NullRenderer::default(), charts)
        .err()
        .expect("breakpoint below the gap must fail");
    assert!(matches!(err, ChartError::InvalidConfig(message) if message.contains("facet")));
}

#[test]
fn invalid_sizing_rule_is_rejected_up_front() {
    let mut charts = charts();
    charts[0].sizing = SizingRule::Aspect(AspectSizing::new(600.0, -1.0));

    assert!(ChartBoard::new(NullRenderer::default(), charts).is_err());
}
