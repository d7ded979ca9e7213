//! Integration test: sweep a fake viewport through the real page
//! registry and verify progress monotonicity, in-order active-section
//! transitions, the bottom override, reveal latching, and theme
//! round-trips.

use folio_core::content;
use folio_core::reveal::{RevealSet, visible_fraction};
use folio_core::section::SectionId;
use folio_core::telemetry::ScrollTelemetry;
use folio_core::theme::{MemoryStore, PreferenceStore, ThemeMode, initial_mode};
use folio_core::viewport::FakeViewport;

const SECTION_HEIGHT: f64 = 700.0;
const VIEWPORT_HEIGHT: f64 = 900.0;

/// Build the viewport for a given scroll offset over a page whose
/// sections are stacked `SECTION_HEIGHT` apart.
fn viewport_at(scroll_top: f64, ids: &[SectionId]) -> FakeViewport {
    let document_height = ids.len() as f64 * SECTION_HEIGHT;
    let mut vp = FakeViewport::new(scroll_top, VIEWPORT_HEIGHT, document_height);
    for (i, id) in ids.iter().enumerate() {
        vp = vp.with_top(*id, i as f64 * SECTION_HEIGHT - scroll_top);
    }
    vp
}

#[test]
fn full_page_scroll_sweep() {
    let descriptors = content::descriptors();
    let ids: Vec<SectionId> = descriptors.iter().map(|d| d.id).collect();
    let telemetry = ScrollTelemetry::new(descriptors);
    let mut reveals = RevealSet::new();

    let document_height = ids.len() as f64 * SECTION_HEIGHT;
    let max_scrollable = document_height - VIEWPORT_HEIGHT;
    assert!(max_scrollable > 0.0, "test page must be scrollable");

    let index_of = |id: SectionId| ids.iter().position(|candidate| *candidate == id);

    let mut last_progress = -1.0_f64;
    let mut last_active_index = 0usize;
    let mut last_revealed = 0usize;

    let mut scroll = 0.0;
    while scroll <= max_scrollable {
        let vp = viewport_at(scroll, &ids);
        let state = telemetry.sample(&vp);

        // Progress is monotone, bounded, finite.
        assert!(state.progress_percent >= last_progress - f64::EPSILON);
        assert!((0.0..=100.0).contains(&state.progress_percent));
        last_progress = state.progress_percent;

        // Active section only ever moves forward in document order on a
        // forward sweep.
        let active = state.active.and_then(index_of).unwrap_or(0);
        assert!(
            active >= last_active_index,
            "active went backwards at scroll {scroll}: {active} < {last_active_index}"
        );
        last_active_index = active;

        // Reveal flags accumulate, never reset.
        for (i, id) in ids.iter().enumerate() {
            let top = i as f64 * SECTION_HEIGHT - scroll;
            reveals.observe(*id, visible_fraction(top, SECTION_HEIGHT, VIEWPORT_HEIGHT));
        }
        assert!(reveals.revealed_count() >= last_revealed);
        last_revealed = reveals.revealed_count();

        scroll += 60.0;
    }

    // At the very bottom: full progress, last section forced active.
    let vp = viewport_at(max_scrollable, &ids);
    let state = telemetry.sample(&vp);
    assert!((state.progress_percent - 100.0).abs() < 1e-9);
    assert_eq!(state.active, ids.last().copied());

    // Every section crossed the viewport during the sweep.
    assert_eq!(reveals.revealed_count(), ids.len());
    println!(
        "swept {} sections over {max_scrollable} units, all revealed",
        ids.len()
    );
}

#[test]
fn anchor_line_selection_matches_document_order() {
    // Five sections, viewport 1000 → anchor line 350. C sits at exactly
    // 300 ≤ 350, so C is active even though D and E are on screen.
    let descriptors: Vec<_> = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|id| folio_core::SectionDescriptor::new(id, id))
        .collect();
    let telemetry = ScrollTelemetry::new(descriptors);

    let vp = FakeViewport::new(2000.0, 1000.0, 10_000.0)
        .with_top(SectionId("a"), -500.0)
        .with_top(SectionId("b"), -50.0)
        .with_top(SectionId("c"), 300.0)
        .with_top(SectionId("d"), 900.0)
        .with_top(SectionId("e"), 1500.0);
    assert_eq!(telemetry.sample(&vp).active, Some(SectionId("c")));
}

#[test]
fn theme_preference_survives_a_reload() {
    let mut store = MemoryStore::default();

    // First visit: nothing stored, ambient dark wins.
    let mode = initial_mode(&store, Some(true));
    assert_eq!(mode, ThemeMode::Dark);

    // User toggles to light; the choice is persisted.
    let mode = mode.toggled();
    store.save(mode.as_str()).unwrap();

    // "Reload": stored value beats a dark ambient signal.
    let reloaded = initial_mode(&store, Some(true));
    assert_eq!(reloaded, ThemeMode::Light);

    // Toggling twice lands back where we started and persists it.
    let twice = reloaded.toggled().toggled();
    store.save(twice.as_str()).unwrap();
    assert_eq!(initial_mode(&store, None), ThemeMode::Light);
}
