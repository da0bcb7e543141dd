use crate::error::{ChartError, ChartResult};
use crate::render::{EmbedOptions, Renderer};
use crate::spec::ChartSpec;

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedRecord {
    pub element_id: String,
    pub spec: ChartSpec,
    pub options: EmbedOptions,
}

/// Recording renderer used by tests and headless hosts.
///
/// It still validates the spec dimensions so tests catch broken layouts
/// before a real embedding backend sees them.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub history: Vec<EmbedRecord>,
}

impl NullRenderer {
    #[must_use]
    pub fn embed_count(&self) -> usize {
        self.history.len()
    }

    /// Most recent spec embedded into `element_id`.
    #[must_use]
    pub fn last_for(&self, element_id: &str) -> Option<&EmbedRecord> {
        self.history
            .iter()
            .rev()
            .find(|record| record.element_id == element_id)
    }

    #[must_use]
    pub fn count_for(&self, element_id: &str) -> usize {
        self.history
            .iter()
            .filter(|record| record.element_id == element_id)
            .count()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Renderer for NullRenderer {
    fn embed(
        &mut self,
        element_id: &str,
        spec: &ChartSpec,
        options: EmbedOptions,
    ) -> ChartResult<()> {
        if element_id.is_empty() {
            return Err(ChartError::Render {
                element_id: element_id.to_owned(),
                message: "empty element id".to_owned(),
            });
        }
        spec.validate()?;
        self.history.push(EmbedRecord {
            element_id: element_id.to_owned(),
            spec: spec.clone(),
            options,
        });
        Ok(())
    }
}
