use std::time::Duration;

use survey_charts::api::{NullCarouselView, RenderSummary, StaticPage};
use survey_charts::charts::{CatalogOptions, catalog};
use survey_charts::data::StaticDataSource;
use survey_charts::interaction::{Debouncer, ManualScheduler, Scheduler, TimerTask};
use survey_charts::render::NullRenderer;
use survey_charts::{Dashboard, DashboardConfig};

type TestDashboard = Dashboard<NullRenderer, NullCarouselView>;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn full_page(width: f64) -> StaticPage {
    let charts = catalog(&CatalogOptions::default()).expect("catalogue");
    StaticPage::uniform(charts.into_iter().map(|chart| chart.element_id), width)
}

fn started(page: &StaticPage, scheduler: &mut ManualScheduler) -> TestDashboard {
    let mut dashboard = Dashboard::new(
        DashboardConfig::default(),
        NullRenderer::default(),
        NullCarouselView::default(),
    )
    .expect("dashboard");
    let source = StaticDataSource::default()
        .with_file("testimonials.csv", "text,gender,age\nWorth it,Female,24\n");
    let summary = dashboard.start(page, &source, scheduler);
    assert_eq!(summary.rendered, 12);
    dashboard
}

/// Runs timers up to `until`, collecting every resize batch.
fn pump(
    dashboard: &mut TestDashboard,
    page: &StaticPage,
    scheduler: &mut ManualScheduler,
    until: Duration,
) -> Vec<(Duration, RenderSummary)> {
    let mut batches = Vec::new();
    scheduler.run_until(until, |sched, fired| {
        if let Some(summary) = dashboard.on_timer(fired, page, sched) {
            batches.push((fired.at, summary));
        }
    });
    batches
}

#[test]
fn burst_of_resizes_yields_one_batch_after_the_last_event() {
    let mut scheduler = ManualScheduler::new();
    let mut page = full_page(900.0);
    let mut dashboard = started(&page, &mut scheduler);
    let initial = dashboard.board().renderer().embed_count();

    let mut batches = Vec::new();
    for step in 0..10 {
        batches.extend(pump(&mut dashboard, &page, &mut scheduler, ms(step * 10)));
        page.resize_all(900.0 - step as f64 * 40.0);
        dashboard.on_resize(&mut scheduler);
        assert_eq!(scheduler.pending_for(TimerTask::ResizeFlush), 1);
    }
    assert!(batches.is_empty());
    assert!(dashboard.resize_pending());

    batches.extend(pump(&mut dashboard, &page, &mut scheduler, ms(289)));
    assert!(batches.is_empty());
    assert_eq!(dashboard.board().renderer().embed_count(), initial);

    batches.extend(pump(&mut dashboard, &page, &mut scheduler, ms(2_000)));
    assert_eq!(batches.len(), 1);
    let (at, summary) = batches[0];
    assert_eq!(at, ms(290));
    assert_eq!(summary.rendered, 11);
    assert!(!dashboard.resize_pending());

    let renderer = dashboard.board().renderer();
    assert_eq!(renderer.embed_count(), initial + 11);
    // Batch sees the width at flush time.
    let hours = renderer.last_for("sleepHours").expect("re-embedded");
    assert_eq!(hours.spec.get_f64("/width"), Some(540.0));
}

#[test]
fn separate_bursts_produce_separate_batches() {
    let mut scheduler = ManualScheduler::new();
    let page = full_page(700.0);
    let mut dashboard = started(&page, &mut scheduler);

    dashboard.on_resize(&mut scheduler);
    let first = pump(&mut dashboard, &page, &mut scheduler, ms(500));
    dashboard.on_resize(&mut scheduler);
    dashboard.on_resize(&mut scheduler);
    let second = pump(&mut dashboard, &page, &mut scheduler, ms(1_000));

    assert_eq!(first.len(), 1);
    assert_eq!(first[0].0, ms(200));
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].0, ms(700));
    assert_eq!(dashboard.board().renderer().count_for("coffeeByAge"), 1);
    assert_eq!(dashboard.board().renderer().count_for("ageChart"), 3);
}

#[test]
fn configured_quiet_period_is_honoured() {
    let mut scheduler = ManualScheduler::new();
    let page = full_page(700.0);
    let config = DashboardConfig::default().with_resize_debounce_ms(50);
    let mut dashboard = Dashboard::new(config, NullRenderer::default(), NullCarouselView::default())
        .expect("dashboard");

    dashboard.on_resize(&mut scheduler);
    let batches = pump(&mut dashboard, &page, &mut scheduler, ms(60));
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].0, ms(50));
}

#[test]
fn debouncer_only_honours_latest_handle() {
    let mut scheduler = ManualScheduler::new();
    let mut debouncer = Debouncer::new(TimerTask::ResizeFlush, ms(200));

    let first = debouncer.trigger(&mut scheduler);
    let second = debouncer.trigger(&mut scheduler);

    assert_ne!(first, second);
    assert!(!scheduler.is_pending(first));
    assert!(scheduler.is_pending(second));
    assert!(!debouncer.on_fired(first));
    assert!(debouncer.on_fired(second));
    assert!(!debouncer.is_pending());
    assert!(!debouncer.on_fired(second));
}

#[test]
fn cancel_pending_disarms_the_timer() {
    let mut scheduler = ManualScheduler::new();
    let mut debouncer = Debouncer::new(TimerTask::ResizeFlush, ms(200));

    debouncer.trigger(&mut scheduler);
    assert!(debouncer.cancel_pending(&mut scheduler));
    assert_eq!(scheduler.pending_count(), 0);
    assert!(!debouncer.cancel_pending(&mut scheduler));
    assert!(scheduler.next_due(ms(1_000)).is_none());
}

#[test]
fn host_scheduler_trait_object_is_usable() {
    let mut scheduler = ManualScheduler::new();
    let handle = {
        let sched: &mut dyn Scheduler = &mut scheduler;
        sched.schedule(TimerTask::ResizeFlush, ms(5))
    };
    assert!(scheduler.is_pending(handle));
}
