use crate::section::SectionId;

/// Read-only geometry of the scrollable page, as of one frame or event.
///
/// Frontends implement this over whatever surface they render to
/// (pixels in a window, rows in a terminal), and all lengths share that
/// surface's unit. Tests implement it with a fixed table.
pub trait ViewportQuery {
    /// Current scroll offset from the document origin.
    fn scroll_top(&self) -> f64;

    /// Height of the visible viewport.
    fn viewport_height(&self) -> f64;

    /// Total height of the document content.
    fn document_height(&self) -> f64;

    /// Top edge of a section's anchor relative to the viewport top, or
    /// `None` if the section currently has no rendered anchor.
    fn section_top(&self, id: SectionId) -> Option<f64>;
}

/// Fixed-table [`ViewportQuery`] for deterministic tests.
#[derive(Debug, Clone, Default)]
pub struct FakeViewport {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
    pub tops: Vec<(SectionId, f64)>,
}

impl FakeViewport {
    pub fn new(scroll_top: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_top,
            viewport_height,
            document_height,
            tops: Vec::new(),
        }
    }

    /// Register a section anchor at a viewport-relative top offset.
    pub fn with_top(mut self, id: SectionId, top: f64) -> Self {
        self.tops.push((id, top));
        self
    }
}

impl ViewportQuery for FakeViewport {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn section_top(&self, id: SectionId) -> Option<f64> {
        self.tops
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, top)| *top)
    }
}
