use serde::Serialize;

use crate::section::{SectionDescriptor, SectionId};
use crate::viewport::ViewportQuery;

/// Fraction of the viewport height, measured from the top, where the
/// anchor line sits. A section counts as reached once its top edge is at
/// or above this line.
pub const ANCHOR_FRACTION: f64 = 0.35;

/// Distance from the absolute document bottom within which the last
/// section is forced active, covering final sections too short to ever
/// cross the anchor line.
pub const BOTTOM_SLACK: f64 = 2.0;

/// Scroll offset past which the "back to top" affordance appears.
pub const SHOW_TOP_AFTER: f64 = 400.0;

/// Whether the "back to top" affordance should be visible at the given
/// raw scroll offset.
pub fn show_scroll_to_top(scroll_top: f64) -> bool {
    scroll_top > SHOW_TOP_AFTER
}

/// Snapshot of the navigation-relevant scroll state.
///
/// Recomputed from scratch on every sample; only the latest value
/// matters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollState {
    /// Scroll progress through the document, `0.0..=100.0`.
    pub progress_percent: f64,
    /// Section currently in focus. `None` only when the registry is
    /// empty.
    pub active: Option<SectionId>,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            progress_percent: 0.0,
            active: None,
        }
    }
}

/// Computes [`ScrollState`] from viewport geometry.
///
/// Owns a copy of the descriptor registry; sampling is pure and
/// O(sections), cheap enough to run at native event frequency.
pub struct ScrollTelemetry {
    sections: Vec<SectionDescriptor>,
    pub anchor_fraction: f64,
    pub bottom_slack: f64,
}

impl ScrollTelemetry {
    pub fn new(sections: Vec<SectionDescriptor>) -> Self {
        Self {
            sections,
            anchor_fraction: ANCHOR_FRACTION,
            bottom_slack: BOTTOM_SLACK,
        }
    }

    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    /// Compute the current scroll state.
    ///
    /// Progress is 0 when the content is shorter than the viewport.
    /// The active section is the last one, in registry order, whose top
    /// edge sits at or above the anchor line; sections without rendered
    /// anchors are skipped. Within [`Self::bottom_slack`] of the
    /// document bottom the last section wins regardless.
    pub fn sample(&self, vp: &dyn ViewportQuery) -> ScrollState {
        let max_scrollable = vp.document_height() - vp.viewport_height();
        let progress_percent = if max_scrollable > 0.0 {
            (vp.scroll_top() / max_scrollable * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        let anchor_line = vp.viewport_height() * self.anchor_fraction;
        let mut active = self.sections.first().map(|s| s.id);
        for section in &self.sections {
            if let Some(top) = vp.section_top(section.id)
                && top <= anchor_line
            {
                active = Some(section.id);
            }
        }

        let near_bottom =
            vp.scroll_top() + vp.viewport_height() >= vp.document_height() - self.bottom_slack;
        if near_bottom && let Some(last) = self.sections.last() {
            active = Some(last.id);
        }

        ScrollState {
            progress_percent,
            active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::FakeViewport;

    fn registry(ids: &[&'static str]) -> Vec<SectionDescriptor> {
        ids.iter().map(|id| SectionDescriptor::new(id, id)).collect()
    }

    #[test]
    fn progress_is_linear_and_clamped() {
        let telemetry = ScrollTelemetry::new(registry(&["a"]));
        // documentHeight=3000, viewportHeight=1000, scrollY=1000 → 50%.
        let vp = FakeViewport::new(1000.0, 1000.0, 3000.0);
        let state = telemetry.sample(&vp);
        assert!((state.progress_percent - 50.0).abs() < f64::EPSILON);

        let vp = FakeViewport::new(-50.0, 1000.0, 3000.0);
        assert_eq!(telemetry.sample(&vp).progress_percent, 0.0);

        let vp = FakeViewport::new(9000.0, 1000.0, 3000.0);
        assert_eq!(telemetry.sample(&vp).progress_percent, 100.0);
    }

    #[test]
    fn short_content_yields_zero_progress() {
        let telemetry = ScrollTelemetry::new(registry(&["a"]));
        // Content shorter than the viewport: no division, no NaN.
        let vp = FakeViewport::new(0.0, 1000.0, 600.0);
        let state = telemetry.sample(&vp);
        assert_eq!(state.progress_percent, 0.0);
        assert!(state.progress_percent.is_finite());
    }

    #[test]
    fn last_section_at_or_above_anchor_line_wins() {
        let telemetry = ScrollTelemetry::new(registry(&["a", "b", "c", "d", "e"]));
        // Viewport 1000 → anchor line at 350. C sits exactly on the
        // line (300 ≤ 350), so it wins over B.
        let vp = FakeViewport::new(1000.0, 1000.0, 10000.0)
            .with_top(SectionId("a"), -500.0)
            .with_top(SectionId("b"), -50.0)
            .with_top(SectionId("c"), 300.0)
            .with_top(SectionId("d"), 900.0)
            .with_top(SectionId("e"), 1500.0);
        assert_eq!(telemetry.sample(&vp).active, Some(SectionId("c")));
    }

    #[test]
    fn no_qualifying_section_defaults_to_first() {
        let telemetry = ScrollTelemetry::new(registry(&["a", "b"]));
        let vp = FakeViewport::new(0.0, 1000.0, 10000.0)
            .with_top(SectionId("a"), 600.0)
            .with_top(SectionId("b"), 1400.0);
        assert_eq!(telemetry.sample(&vp).active, Some(SectionId("a")));
    }

    #[test]
    fn missing_anchors_are_skipped() {
        let telemetry = ScrollTelemetry::new(registry(&["a", "ghost", "c"]));
        // "ghost" never reports geometry; telemetry carries on.
        let vp = FakeViewport::new(500.0, 1000.0, 10000.0)
            .with_top(SectionId("a"), -200.0)
            .with_top(SectionId("c"), 200.0);
        assert_eq!(telemetry.sample(&vp).active, Some(SectionId("c")));
    }

    #[test]
    fn bottom_proximity_forces_last_section() {
        let telemetry = ScrollTelemetry::new(registry(&["a", "b", "c"]));
        // scrollY + viewport = 2999 ≥ 3000 − 2; anchors all say "a".
        let vp = FakeViewport::new(1999.0, 1000.0, 3000.0)
            .with_top(SectionId("a"), -100.0)
            .with_top(SectionId("b"), 600.0)
            .with_top(SectionId("c"), 1200.0);
        assert_eq!(telemetry.sample(&vp).active, Some(SectionId("c")));

        // One unit shy of the slack window: anchors decide.
        let vp = FakeViewport::new(1990.0, 1000.0, 3000.0)
            .with_top(SectionId("a"), -100.0)
            .with_top(SectionId("b"), 600.0)
            .with_top(SectionId("c"), 1200.0);
        assert_eq!(telemetry.sample(&vp).active, Some(SectionId("a")));
    }

    #[test]
    fn back_to_top_threshold() {
        assert!(!show_scroll_to_top(399.0));
        assert!(!show_scroll_to_top(400.0));
        assert!(show_scroll_to_top(401.0));
    }

    #[test]
    fn empty_registry_has_no_active_section() {
        let telemetry = ScrollTelemetry::new(Vec::new());
        let vp = FakeViewport::new(0.0, 1000.0, 3000.0);
        let state = telemetry.sample(&vp);
        assert_eq!(state.active, None);
        assert_eq!(state.progress_percent, 0.0);
    }
}
