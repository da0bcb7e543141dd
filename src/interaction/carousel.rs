use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::data::Testimonial;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarouselPhase {
    Idle,
    /// A slide is animating; input is locked until it completes.
    Transitioning { direction: Direction, steps: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadState {
    Pending,
    Loaded,
    Failed,
}

/// Side effect requested by a state transition, applied by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEffect {
    StopAutoRotate,
    StartAutoRotate,
    /// Slide the visible beans by `steps` positions.
    OffsetWindow { direction: Direction, steps: usize },
    ScheduleTransitionEnd,
    /// Window or displayed text changed.
    Refresh,
    ShowFallback,
}

pub type CarouselEffects = SmallVec<[CarouselEffect; 4]>;

/// Window of item indices; sized for the usual handful of beans.
pub type WindowIndices = SmallVec<[usize; 8]>;

/// Headless testimonial carousel.
///
/// Holds the items, the centred index, the visible window and the animation
/// lock. It never touches timers or the page: every mutation returns the
/// effects the caller must apply.
#[derive(Debug, Clone)]
pub struct CarouselState {
    items: Vec<Testimonial>,
    current_index: usize,
    window_size: usize,
    phase: CarouselPhase,
    section_visible: bool,
    load_state: LoadState,
    fallback_message: String,
}

impl CarouselState {
    pub fn new(window_size: usize, fallback_message: impl Into<String>) -> ChartResult<Self> {
        if window_size == 0 || window_size % 2 == 0 {
            return Err(ChartError::InvalidConfig(format!(
                "carousel window size must be odd and >= 1, got {window_size}"
            )));
        }
        Ok(Self {
            items: Vec::new(),
            current_index: 0,
            window_size,
            phase: CarouselPhase::Idle,
            section_visible: false,
            load_state: LoadState::Pending,
            fallback_message: fallback_message.into(),
        })
    }

    #[must_use]
    pub fn items(&self) -> &[Testimonial] {
        &self.items
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Slot of the centred bean inside the window.
    #[must_use]
    pub fn center_slot(&self) -> usize {
        self.window_size / 2
    }

    #[must_use]
    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, CarouselPhase::Transitioning { .. })
    }

    #[must_use]
    pub fn is_section_visible(&self) -> bool {
        self.section_visible
    }

    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Text under the centred bean: empty before load, fallback once a
    /// load left no items.
    #[must_use]
    pub fn displayed_text(&self) -> &str {
        match (self.load_state, self.current_item()) {
            (LoadState::Pending, _) => "",
            (_, Some(item)) => &item.text,
            (_, None) => &self.fallback_message,
        }
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&Testimonial> {
        self.items.get(self.current_index)
    }

    /// Item indices of the visible window, left to right, wrapping around.
    #[must_use]
    pub fn window_indices(&self) -> WindowIndices {
        let len = self.items.len();
        if len == 0 {
            return WindowIndices::new();
        }
        let center = self.center_slot() as isize;
        let current = self.current_index as isize;
        (0..self.window_size as isize)
            .map(|slot| (current - center + slot).rem_euclid(len as isize) as usize)
            .collect()
    }

    #[must_use]
    pub fn current_window(&self) -> Vec<&Testimonial> {
        self.window_indices()
            .into_iter()
            .map(|index| &self.items[index])
            .collect()
    }

    pub fn load(&mut self, items: Vec<Testimonial>) -> CarouselEffects {
        debug!(items = items.len(), "carousel items loaded");
        self.items = items;
        self.current_index = 0;
        self.phase = CarouselPhase::Idle;
        self.load_state = LoadState::Loaded;
        if self.items.is_empty() {
            return smallvec::smallvec![
                CarouselEffect::StopAutoRotate,
                CarouselEffect::ShowFallback
            ];
        }
        let mut effects: CarouselEffects = smallvec::smallvec![CarouselEffect::Refresh];
        if self.section_visible {
            effects.push(CarouselEffect::StartAutoRotate);
        }
        effects
    }

    /// Data source failed: show the fallback and never populate the window.
    pub fn load_failed(&mut self) -> CarouselEffects {
        self.items.clear();
        self.current_index = 0;
        self.phase = CarouselPhase::Idle;
        self.load_state = LoadState::Failed;
        smallvec::smallvec![CarouselEffect::StopAutoRotate, CarouselEffect::ShowFallback]
    }

    /// Starts a slide unless one is running or there is nothing to show.
    pub fn advance(&mut self, direction: Direction, steps: usize) -> CarouselEffects {
        if self.is_animating() || self.items.is_empty() || steps == 0 {
            trace!(?direction, steps, phase = ?self.phase, "carousel advance ignored");
            return CarouselEffects::new();
        }
        self.phase = CarouselPhase::Transitioning { direction, steps };
        smallvec::smallvec![
            CarouselEffect::StopAutoRotate,
            CarouselEffect::OffsetWindow { direction, steps },
            CarouselEffect::ScheduleTransitionEnd,
        ]
    }

    /// Lands the running slide on its new centre.
    pub fn complete_transition(&mut self) -> CarouselEffects {
        let CarouselPhase::Transitioning { direction, steps } = self.phase else {
            return CarouselEffects::new();
        };
        self.phase = CarouselPhase::Idle;

        let len = self.items.len();
        if len > 0 {
            let shift = steps % len;
            self.current_index = match direction {
                Direction::Right => (self.current_index + shift) % len,
                Direction::Left => (self.current_index + len - shift) % len,
            };
        }
        debug!(current_index = self.current_index, "carousel transition complete");

        let mut effects = CarouselEffects::new();
        effects.push(CarouselEffect::Refresh);
        if self.section_visible {
            effects.push(CarouselEffect::StartAutoRotate);
        }
        effects
    }

    pub fn on_visibility_change(&mut self, visible: bool) -> CarouselEffects {
        if self.section_visible == visible {
            return CarouselEffects::new();
        }
        self.section_visible = visible;
        match (visible, self.is_animating()) {
            (false, _) => smallvec::smallvec![CarouselEffect::StopAutoRotate],
            // The running slide restarts the timer when it lands.
            (true, true) => CarouselEffects::new(),
            (true, false) if self.items.is_empty() => CarouselEffects::new(),
            (true, false) => smallvec::smallvec![CarouselEffect::StartAutoRotate],
        }
    }

    pub fn on_auto_rotate_tick(&mut self) -> CarouselEffects {
        if !self.section_visible || self.is_animating() {
            return CarouselEffects::new();
        }
        self.advance(Direction::Right, 1)
    }

    /// Click on the bean at `slot` (0-based, left to right).
    pub fn click(&mut self, slot: usize) -> CarouselEffects {
        let center = self.center_slot();
        if slot >= self.window_size || slot == center {
            return CarouselEffects::new();
        }
        if slot < center {
            self.advance(Direction::Left, center - slot)
        } else {
            self.advance(Direction::Right, slot - center)
        }
    }
}
