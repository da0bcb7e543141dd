//! Timer-driven interaction state.
//!
//! Everything here is single-threaded and pure with respect to the page:
//! timers go through [`Scheduler`], and the carousel reports the effects it
//! needs instead of performing them.

mod carousel;
mod debounce;
mod scheduler;

pub use carousel::{
    CarouselEffect, CarouselEffects, CarouselPhase, CarouselState, Direction, LoadState,
    WindowIndices,
};
pub use debounce::Debouncer;
pub use scheduler::{FiredTimer, ManualScheduler, Scheduler, TimerHandle, TimerTask};
