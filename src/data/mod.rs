//! Row-based data loading.
//!
//! The layout engine never parses data itself; the only consumer of rows is
//! the testimonial carousel. Sources return plain header → cell maps.

mod csv_source;
mod testimonial;

pub use csv_source::{CsvDataSource, StaticDataSource, parse_csv_rows};
pub use testimonial::Testimonial;

use indexmap::IndexMap;

use crate::error::ChartResult;

/// One record keyed by header name, in column order.
pub type Row = IndexMap<String, String>;

/// Loads the rows behind a path or URL.
pub trait DataSource {
    fn load(&self, path: &str) -> ChartResult<Vec<Row>>;
}
