//! Core navigation state engine for folio.page.
//!
//! Everything here is pure: geometry comes in through the
//! [`viewport::ViewportQuery`] capability, preferences through
//! [`theme::PreferenceStore`], and the engine computes plain values that
//! the frontends render. No drawing, no platform calls.

pub mod content;
pub mod reveal;
pub mod section;
pub mod telemetry;
pub mod theme;
pub mod viewport;

pub use reveal::RevealSet;
pub use section::{SectionDescriptor, SectionId};
pub use telemetry::{ScrollState, ScrollTelemetry};
pub use theme::{PreferenceStore, ThemeMode, ThemeToken};
pub use viewport::ViewportQuery;
