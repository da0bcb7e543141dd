use std::time::Duration;

use tracing::{debug, warn};

use crate::data::{DataSource, Testimonial};
use crate::error::ChartResult;
use crate::interaction::{
    CarouselEffect, CarouselEffects, CarouselState, Direction, FiredTimer, Scheduler, TimerHandle,
    TimerTask,
};

use super::CarouselConfig;

/// Page-side surface of the testimonial carousel.
pub trait CarouselView {
    /// Starts the slide animation by `steps` beans.
    fn offset_window(&mut self, direction: Direction, steps: usize);
    /// Redraws the beans (left to right) and the centred quote.
    fn show_window(&mut self, window: &[&Testimonial], text: &str, attribution: &str);
    fn show_fallback(&mut self, message: &str);
}

/// Drives a [`CarouselState`]: applies its effects to timers and the view.
pub struct CarouselController<V: CarouselView> {
    state: CarouselState,
    view: V,
    transition_delay: Duration,
    auto_rotate_period: Duration,
    auto_rotate: Option<TimerHandle>,
    transition: Option<TimerHandle>,
}

impl<V: CarouselView> CarouselController<V> {
    pub fn new(view: V, config: &CarouselConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            state: CarouselState::new(config.window_size, config.fallback_message.clone())?,
            view,
            transition_delay: config.transition_delay(),
            auto_rotate_period: config.auto_rotate_period(),
            auto_rotate: None,
            transition: None,
        })
    }

    #[must_use]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn auto_rotate_handle(&self) -> Option<TimerHandle> {
        self.auto_rotate
    }

    #[must_use]
    pub fn transition_handle(&self) -> Option<TimerHandle> {
        self.transition
    }

    /// Loads testimonials; a failing source leaves the carousel inert with
    /// the fallback message. Returns whether items were loaded.
    pub fn load_from<D, S>(&mut self, source: &D, path: &str, scheduler: &mut S) -> bool
    where
        D: DataSource,
        S: Scheduler,
    {
        match source.load(path) {
            Ok(rows) => {
                let items = rows.iter().map(Testimonial::from_row).collect();
                self.load_items(items, scheduler);
                true
            }
            Err(err) => {
                warn!(path, error = %err, "testimonials unavailable, showing fallback");
                self.cancel_transition(scheduler);
                let effects = self.state.load_failed();
                self.apply(effects, scheduler);
                false
            }
        }
    }

    /// Replaces the items; a slide in flight is dropped.
    pub fn load_items<S: Scheduler>(&mut self, items: Vec<Testimonial>, scheduler: &mut S) {
        self.cancel_transition(scheduler);
        let effects = self.state.load(items);
        self.apply(effects, scheduler);
    }

    pub fn advance<S: Scheduler>(&mut self, direction: Direction, steps: usize, scheduler: &mut S) {
        let effects = self.state.advance(direction, steps);
        self.apply(effects, scheduler);
    }

    pub fn click<S: Scheduler>(&mut self, slot: usize, scheduler: &mut S) {
        let effects = self.state.click(slot);
        self.apply(effects, scheduler);
    }

    pub fn on_visibility_change<S: Scheduler>(&mut self, visible: bool, scheduler: &mut S) {
        let effects = self.state.on_visibility_change(visible);
        self.apply(effects, scheduler);
    }

    /// Handles a fired timer; `false` when the timer is not ours or stale.
    pub fn on_timer<S: Scheduler>(&mut self, fired: FiredTimer, scheduler: &mut S) -> bool {
        match fired.task {
            TimerTask::CarouselTransitionEnd if self.transition == Some(fired.handle) => {
                self.transition = None;
                let effects = self.state.complete_transition();
                self.apply(effects, scheduler);
                true
            }
            TimerTask::CarouselAutoRotate if self.auto_rotate == Some(fired.handle) => {
                let effects = self.state.on_auto_rotate_tick();
                self.apply(effects, scheduler);
                true
            }
            _ => false,
        }
    }

    fn cancel_transition<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.transition.take() {
            scheduler.cancel(handle);
        }
    }

    fn apply<S: Scheduler>(&mut self, effects: CarouselEffects, scheduler: &mut S) {
        for effect in effects {
            match effect {
                CarouselEffect::StopAutoRotate => {
                    if let Some(handle) = self.auto_rotate.take() {
                        scheduler.cancel(handle);
                    }
                }
                CarouselEffect::StartAutoRotate => {
                    if let Some(handle) = self.auto_rotate.take() {
                        scheduler.cancel(handle);
                    }
                    self.auto_rotate = Some(scheduler.schedule_repeating(
                        TimerTask::CarouselAutoRotate,
                        self.auto_rotate_period,
                    ));
                }
                CarouselEffect::OffsetWindow { direction, steps } => {
                    self.view.offset_window(direction, steps);
                }
                CarouselEffect::ScheduleTransitionEnd => {
                    if let Some(handle) = self.transition.take() {
                        scheduler.cancel(handle);
                    }
                    self.transition = Some(
                        scheduler.schedule(TimerTask::CarouselTransitionEnd, self.transition_delay),
                    );
                }
                CarouselEffect::Refresh => {
                    let window = self.state.current_window();
                    let attribution = self
                        .state
                        .current_item()
                        .map(Testimonial::attribution)
                        .unwrap_or_default();
                    self.view
                        .show_window(&window, self.state.displayed_text(), &attribution);
                }
                CarouselEffect::ShowFallback => {
                    debug!("carousel fallback shown");
                    self.view.show_fallback(self.state.displayed_text());
                }
            }
        }
    }
}

/// View that records what it was asked to show.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NullCarouselView {
    pub offsets: Vec<(Direction, usize)>,
    pub window_texts: Vec<String>,
    pub text: String,
    pub attribution: String,
    pub fallback: Option<String>,
    pub refresh_count: usize,
}

impl CarouselView for NullCarouselView {
    fn offset_window(&mut self, direction: Direction, steps: usize) {
        self.offsets.push((direction, steps));
    }

    fn show_window(&mut self, window: &[&Testimonial], text: &str, attribution: &str) {
        self.window_texts = window.iter().map(|item| item.text.clone()).collect();
        self.text = text.to_owned();
        self.attribution = attribution.to_owned();
        self.refresh_count += 1;
    }

    fn show_fallback(&mut self, message: &str) {
        self.window_texts.clear();
        self.text = message.to_owned();
        self.fallback = Some(message.to_owned());
    }
}
