//! File-backed preference store for the terminal frontend.

use std::fs;
use std::path::PathBuf;

use folio_core::theme::{PreferenceStore, StoreError, THEME_KEY};

/// JSON config file holding the single display preference.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store under the platform config directory, or the working
    /// directory when the platform reports none.
    pub fn default_path() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("folio").join("preferences.json"))
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let value: serde_json::Value = serde_json::from_str(&raw).ok()?;
        value.get(THEME_KEY)?.as_str().map(str::to_owned)
    }

    fn save(&mut self, value: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        }
        let mut payload = serde_json::Map::new();
        payload.insert(
            THEME_KEY.to_owned(),
            serde_json::Value::String(value.to_owned()),
        );
        fs::write(&self.path, serde_json::Value::Object(payload).to_string())
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::theme::{initial_mode, ThemeMode};

    fn scratch_store(name: &str) -> FileStore {
        let path = std::env::temp_dir()
            .join(format!("folio-tui-test-{}-{name}", std::process::id()))
            .join("preferences.json");
        let _ = fs::remove_file(&path);
        FileStore::new(path)
    }

    #[test]
    fn round_trips_through_the_filesystem() {
        let mut store = scratch_store("roundtrip");
        assert_eq!(store.load(), None);

        store.save("dark").unwrap();
        assert_eq!(initial_mode(&store, None), ThemeMode::Dark);

        store.save("light").unwrap();
        assert_eq!(initial_mode(&store, None), ThemeMode::Light);
    }

    #[test]
    fn corrupt_payload_reads_as_absent() {
        let mut store = scratch_store("corrupt");
        store.save("dark").unwrap();
        fs::write(&store.path, "not json").unwrap();

        assert_eq!(store.load(), None);
        // The ambient signal takes over exactly as with no file at all.
        assert_eq!(initial_mode(&store, Some(true)), ThemeMode::Dark);
    }
}
