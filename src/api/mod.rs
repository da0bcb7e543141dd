mod carousel_controller;
mod chart_board;
mod config;
mod config_validation;
mod dashboard;
mod json_contract;
mod page;

pub use carousel_controller::{CarouselController, CarouselView, NullCarouselView};
pub use chart_board::{ChartBoard, RenderOutcome, RenderSummary};
pub use config::{CarouselConfig, DashboardConfig};
pub use dashboard::Dashboard;
pub use json_contract::{DASHBOARD_CONFIG_JSON_SCHEMA_V1, DashboardConfigJsonContractV1};
pub use page::{Page, StaticPage};
