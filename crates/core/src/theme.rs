use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reserved storage key for the display preference.
pub const THEME_KEY: &str = "theme";

/// Light/dark display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Strict parse of a stored value. Anything but `"light"`/`"dark"`
    /// is treated as absent.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Resolve the initial mode: the stored value if valid, else the
    /// ambient platform signal, else light.
    pub fn from_raw(stored: Option<&str>, ambient_dark: Option<bool>) -> Self {
        match stored.and_then(Self::parse) {
            Some(mode) => mode,
            None if ambient_dark == Some(true) => Self::Dark,
            None => Self::Light,
        }
    }
}

/// Failure writing the durable preference. Callers swallow this; the
/// preference stays in-memory for the rest of the session.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable storage for the single display preference, keyed by
/// [`THEME_KEY`].
pub trait PreferenceStore {
    /// Raw stored value, if any.
    fn load(&self) -> Option<String>;

    /// Persist a new raw value.
    fn save(&mut self, value: &str) -> Result<(), StoreError>;
}

/// Initial mode from a store plus the ambient signal.
pub fn initial_mode(store: &dyn PreferenceStore, ambient_dark: Option<bool>) -> ThemeMode {
    ThemeMode::from_raw(store.load().as_deref(), ambient_dark)
}

/// In-memory [`PreferenceStore`] for tests and storage-less sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) -> Result<(), StoreError> {
        self.value = Some(value.to_owned());
        Ok(())
    }
}

/// Semantic color tokens resolved by each renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    Card,
    Border,

    TextPrimary,
    TextSecondary,
    TextMuted,

    Accent,

    NavBackground,
    NavText,
    NavTextActive,
    NavUnderline,

    ProgressTrack,
    ProgressFill,

    ChipBorder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_a_store() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let mut store = MemoryStore::default();
            store.save(mode.as_str()).unwrap();
            assert_eq!(initial_mode(&store, None), mode);
        }
    }

    #[test]
    fn invalid_stored_value_falls_back_to_ambient() {
        let mut store = MemoryStore::default();
        store.save("solarized").unwrap();
        assert_eq!(initial_mode(&store, Some(true)), ThemeMode::Dark);
        assert_eq!(initial_mode(&store, Some(false)), ThemeMode::Light);
        assert_eq!(initial_mode(&store, None), ThemeMode::Light);
    }

    #[test]
    fn ambient_signal_decides_when_nothing_is_stored() {
        let store = MemoryStore::default();
        assert_eq!(initial_mode(&store, Some(true)), ThemeMode::Dark);
        assert_eq!(initial_mode(&store, Some(false)), ThemeMode::Light);
        assert_eq!(initial_mode(&store, None), ThemeMode::Light);
    }

    #[test]
    fn double_toggle_persists_the_original_value() {
        let mut store = MemoryStore::default();
        let initial = ThemeMode::Dark;

        let once = initial.toggled();
        store.save(once.as_str()).unwrap();
        let twice = once.toggled();
        store.save(twice.as_str()).unwrap();

        assert_eq!(twice, initial);
        assert_eq!(store.load().as_deref(), Some("dark"));
    }

    #[test]
    fn parse_is_strict() {
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("Dark"), None);
        assert_eq!(ThemeMode::parse(""), None);
    }
}
