//! Preference persistence and ambient platform queries for the egui
//! frontend.
//!
//! Native builds read and write the preference through eframe's own
//! storage (loaded at startup, flushed by the host's save hook). The
//! web build talks to `window.localStorage` directly so the value is
//! durable the moment the user toggles, and falls back to the
//! `prefers-color-scheme` media query for the ambient signal.

use folio_core::theme::THEME_KEY;

#[cfg(target_arch = "wasm32")]
use folio_core::theme::{PreferenceStore, StoreError, ThemeMode};

/// Raw stored preference value, if any.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_raw(storage: Option<&dyn eframe::Storage>) -> Option<String> {
    storage.and_then(|s| s.get_string(THEME_KEY))
}

#[cfg(target_arch = "wasm32")]
pub fn load_raw(_storage: Option<&dyn eframe::Storage>) -> Option<String> {
    LocalStorage.load()
}

/// Ambient "prefers dark" signal, if the platform reports one.
#[cfg(not(target_arch = "wasm32"))]
pub fn ambient_prefers_dark(ctx: &egui::Context) -> Option<bool> {
    // eframe seeds the context visuals from the system theme.
    Some(ctx.style().visuals.dark_mode)
}

#[cfg(target_arch = "wasm32")]
pub fn ambient_prefers_dark(_ctx: &egui::Context) -> Option<bool> {
    let window = web_sys::window()?;
    let query = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    Some(query.matches())
}

/// Write the preference immediately where the backend allows it.
///
/// A failed write is logged and otherwise swallowed; the preference
/// stays in-memory for the session.
#[cfg(target_arch = "wasm32")]
pub fn persist_now(mode: ThemeMode) {
    let mut store = LocalStorage;
    if let Err(err) = store.save(mode.as_str()) {
        web_sys::console::warn_1(&format!("folio: {err}").into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn persist_now(_mode: folio_core::theme::ThemeMode) {
    // Flushed by `PageApp::save` on eframe's auto-save schedule.
}

/// `window.localStorage` store under the reserved key.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn load(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(THEME_KEY).ok().flatten()
    }

    fn save(&mut self, value: &str) -> Result<(), StoreError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))?;
        storage
            .set_item(THEME_KEY, value)
            .map_err(|_| StoreError::Unavailable("write rejected".into()))
    }
}
