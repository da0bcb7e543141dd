use indexmap::IndexMap;

/// Read-only view of the host page's layout.
pub trait Page {
    /// Rendered width of the element with `element_id`.
    ///
    /// `None` means the element does not exist on this page, which is a
    /// normal condition for optional sections. A present element may report
    /// `Some(0.0)` before layout; sizing then falls back to its default.
    fn element_width(&self, element_id: &str) -> Option<f64>;
}

/// Page with fixed element widths, for tests and offline spec export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticPage {
    widths: IndexMap<String, f64>,
}

impl StaticPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every listed element at the same width.
    #[must_use]
    pub fn uniform<I, S>(element_ids: I, width: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            widths: element_ids
                .into_iter()
                .map(|id| (id.into(), width))
                .collect(),
        }
    }

    #[must_use]
    pub fn with_element(mut self, element_id: impl Into<String>, width: f64) -> Self {
        self.widths.insert(element_id.into(), width);
        self
    }

    pub fn set_width(&mut self, element_id: &str, width: f64) {
        if let Some(slot) = self.widths.get_mut(element_id) {
            *slot = width;
        }
    }

    /// Simulates a window resize: every element takes `width`.
    pub fn resize_all(&mut self, width: f64) {
        for slot in self.widths.values_mut() {
            *slot = width;
        }
    }

    pub fn remove(&mut self, element_id: &str) -> Option<f64> {
        self.widths.shift_remove(element_id)
    }
}

impl Page for StaticPage {
    fn element_width(&self, element_id: &str) -> Option<f64> {
        self.widths.get(element_id).copied()
    }
}
