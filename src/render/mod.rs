mod null_renderer;

pub use null_renderer::{EmbedRecord, NullRenderer};

use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::spec::ChartSpec;

/// Options forwarded to the embedding call alongside the spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedOptions {
    /// Shows the export/source action menu next to the chart.
    pub actions: bool,
}

impl EmbedOptions {
    /// Embed without UI chrome.
    #[must_use]
    pub const fn chromeless() -> Self {
        Self { actions: false }
    }
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self { actions: true }
    }
}

/// Contract implemented by whatever draws a resolved spec.
///
/// Implementations receive a fully resolved, deterministic `ChartSpec` for
/// the element identified by `element_id`. Embedding is fire-and-forget from
/// the layout engine's point of view.
pub trait Renderer {
    fn embed(
        &mut self,
        element_id: &str,
        spec: &ChartSpec,
        options: EmbedOptions,
    ) -> ChartResult<()>;
}
