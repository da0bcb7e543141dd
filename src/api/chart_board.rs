use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::charts::{ChartDescriptor, ChartId};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;
use crate::spec::ChartSpec;

use super::Page;

/// Outcome of rendering one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderOutcome {
    Rendered,
    /// The target element is not on the page.
    Skipped,
    Failed,
}

/// Counts for one batch pass over the catalogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSummary {
    pub rendered: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RenderSummary {
    fn record(&mut self, outcome: RenderOutcome) {
        match outcome {
            RenderOutcome::Rendered => self.rendered += 1,
            RenderOutcome::Skipped => self.skipped += 1,
            RenderOutcome::Failed => self.failed += 1,
        }
    }
}

/// The page's charts plus the renderer they are embedded with.
pub struct ChartBoard<R: Renderer> {
    renderer: R,
    charts: Vec<ChartDescriptor>,
}

impl<R: Renderer> ChartBoard<R> {
    /// Validates every sizing rule and rejects duplicate chart ids.
    pub fn new(renderer: R, charts: Vec<ChartDescriptor>) -> ChartResult<Self> {
        for (index, chart) in charts.iter().enumerate() {
            chart.sizing.validate().map_err(|err| {
                ChartError::InvalidConfig(format!("chart `{}`: {err}", chart.id))
            })?;
            if charts[..index].iter().any(|other| other.id == chart.id) {
                return Err(ChartError::InvalidConfig(format!(
                    "chart `{}` registered twice",
                    chart.id
                )));
            }
        }
        Ok(Self { renderer, charts })
    }

    #[must_use]
    pub fn charts(&self) -> &[ChartDescriptor] {
        &self.charts
    }

    #[must_use]
    pub fn chart(&self, id: ChartId) -> Option<&ChartDescriptor> {
        self.charts.iter().find(|chart| chart.id == id)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Resolved spec for `id` at the page's current layout, without
    /// rendering. `Ok(None)` when the chart or its element is absent.
    pub fn resolve_chart<P: Page>(&self, id: ChartId, page: &P) -> ChartResult<Option<ChartSpec>> {
        let Some(chart) = self.chart(id) else {
            return Ok(None);
        };
        let Some(width) = page.element_width(&chart.element_id) else {
            return Ok(None);
        };
        chart.resolve(Some(width)).map(Some)
    }

    /// Sizes and embeds one chart.
    pub fn render_chart<P: Page>(&mut self, id: ChartId, page: &P) -> RenderOutcome {
        let Some(index) = self.charts.iter().position(|chart| chart.id == id) else {
            trace!(chart = %id, "chart not registered");
            return RenderOutcome::Skipped;
        };
        self.render_at(index, page)
    }

    /// First paint: every chart in page order.
    pub fn render_all<P: Page>(&mut self, page: &P) -> RenderSummary {
        let mut summary = RenderSummary::default();
        for index in 0..self.charts.len() {
            summary.record(self.render_at(index, page));
        }
        debug!(?summary, "initial render pass");
        summary
    }

    /// Resize pass: every chart that tracks its container width.
    pub fn rerender_resizable<P: Page>(&mut self, page: &P) -> RenderSummary {
        let mut summary = RenderSummary::default();
        for index in 0..self.charts.len() {
            if self.charts[index].resize {
                summary.record(self.render_at(index, page));
            }
        }
        debug!(?summary, "resize render pass");
        summary
    }

    fn render_at<P: Page>(&mut self, index: usize, page: &P) -> RenderOutcome {
        let chart = &self.charts[index];
        let Some(width) = page.element_width(&chart.element_id) else {
            trace!(
                chart = %chart.id,
                element_id = %chart.element_id,
                "container missing, skipping"
            );
            return RenderOutcome::Skipped;
        };

        let result = chart
            .resolve(Some(width))
            .and_then(|spec| self.renderer.embed(&chart.element_id, &spec, chart.embed));
        match result {
            Ok(()) => {
                trace!(chart = %chart.id, container_width = width, "chart embedded");
                RenderOutcome::Rendered
            }
            Err(err) => {
                warn!(chart = %chart.id, error = %err, "chart render failed");
                RenderOutcome::Failed
            }
        }
    }
}
