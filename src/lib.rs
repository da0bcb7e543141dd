//! survey-charts: responsive chart layout for a caffeine survey page.
//!
//! The crate turns container widths into fully resolved Vega-Lite specs,
//! re-renders them behind a resize debounce, and runs the testimonial
//! carousel as a headless state machine. Drawing, the DOM and timers are
//! host concerns reached through small traits.

pub mod api;
pub mod charts;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod spec;
pub mod telemetry;

pub use api::{Dashboard, DashboardConfig};
pub use error::{ChartError, ChartResult};
