use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid chart spec: {0}")]
    InvalidSpec(String),

    #[error("failed to load data source `{path}`: {message}")]
    DataSource { path: String, message: String },

    #[error("failed to render chart into `#{element_id}`: {message}")]
    Render { element_id: String, message: String },
}
