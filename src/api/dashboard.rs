use tracing::{debug, info};

use crate::charts::catalog;
use crate::data::DataSource;
use crate::error::ChartResult;
use crate::interaction::{Debouncer, FiredTimer, Scheduler, TimerTask};
use crate::render::Renderer;

use super::{
    CarouselController, CarouselView, ChartBoard, DashboardConfig, Page, RenderSummary,
};

/// Whole-page runtime: charts, debounced resize and the carousel.
///
/// Hosts forward browser events (`on_resize`, visibility, clicks) and every
/// fired timer to [`Dashboard::on_timer`].
pub struct Dashboard<R: Renderer, V: CarouselView> {
    config: DashboardConfig,
    board: ChartBoard<R>,
    resize: Debouncer,
    carousel: CarouselController<V>,
}

impl<R: Renderer, V: CarouselView> Dashboard<R, V> {
    pub fn new(config: DashboardConfig, renderer: R, view: V) -> ChartResult<Self> {
        config.validate()?;
        let board = ChartBoard::new(renderer, catalog(&config.catalog_options())?)?;
        let resize = Debouncer::new(TimerTask::ResizeFlush, config.resize_quiet_period());
        let carousel = CarouselController::new(view, &config.carousel)?;
        Ok(Self {
            config,
            board,
            resize,
            carousel,
        })
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &ChartBoard<R> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut ChartBoard<R> {
        &mut self.board
    }

    #[must_use]
    pub fn carousel(&self) -> &CarouselController<V> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut CarouselController<V> {
        &mut self.carousel
    }

    #[must_use]
    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    /// First paint plus testimonial load.
    pub fn start<P, D, S>(&mut self, page: &P, source: &D, scheduler: &mut S) -> RenderSummary
    where
        P: Page,
        D: DataSource,
        S: Scheduler,
    {
        let summary = self.board.render_all(page);
        let path = self.config.testimonial_data_url.clone();
        let loaded = self.carousel.load_from(source, &path, scheduler);
        info!(
            rendered = summary.rendered,
            skipped = summary.skipped,
            failed = summary.failed,
            testimonials_loaded = loaded,
            "dashboard started"
        );
        summary
    }

    pub fn on_resize<S: Scheduler>(&mut self, scheduler: &mut S) {
        self.resize.trigger(scheduler);
    }

    pub fn on_carousel_visibility<S: Scheduler>(&mut self, visible: bool, scheduler: &mut S) {
        self.carousel.on_visibility_change(visible, scheduler);
    }

    pub fn on_bean_click<S: Scheduler>(&mut self, slot: usize, scheduler: &mut S) {
        self.carousel.click(slot, scheduler);
    }

    /// Routes a fired timer. Returns the resize summary when the debounced
    /// re-render ran.
    pub fn on_timer<P, S>(
        &mut self,
        fired: FiredTimer,
        page: &P,
        scheduler: &mut S,
    ) -> Option<RenderSummary>
    where
        P: Page,
        S: Scheduler,
    {
        if fired.task == TimerTask::ResizeFlush {
            if !self.resize.on_fired(fired.handle) {
                debug!(handle = ?fired.handle, "stale resize flush ignored");
                return None;
            }
            return Some(self.board.rerender_resizable(page));
        }
        if !self.carousel.on_timer(fired, scheduler) {
            debug!(task = ?fired.task, handle = ?fired.handle, "stale carousel timer ignored");
        }
        None
    }
}
