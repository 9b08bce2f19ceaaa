//! Preference sources: where the theme preference lives.
//!
//! A [`PreferenceSource`] bundles the two ambient capabilities the theme
//! store needs — persistent storage and the OS color-scheme signal — into
//! one injectable interface, so the store can be tested with a fake.

use std::fs;
use std::io;
use std::path::PathBuf;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use super::error::StorageError;
use super::preference::{ColorMode, ThemePreference};

/// The key under which the preference is stored.
pub const STORAGE_KEY: &str = "theme";

/// Access to persisted preference state and the OS color-scheme signal.
///
/// Implementations must treat `get` returning `Ok(None)` as "no stored
/// preference" — callers fall back to [`ThemePreference::Auto`]. Errors
/// from `get`/`set` are tolerated by [`ThemeStore`](super::ThemeStore):
/// a failing source degrades the store to session-only state.
pub trait PreferenceSource {
    /// Reads the stored preference, if any.
    fn get(&self) -> Result<Option<ThemePreference>, StorageError>;

    /// Persists a preference.
    fn set(&mut self, preference: ThemePreference) -> Result<(), StorageError>;

    /// Whether the operating environment prefers a dark appearance.
    ///
    /// Only consulted when resolving or toggling an `Auto` preference.
    fn prefers_dark(&self) -> bool;
}

/// Wire form of the preference file: `{"theme": "dark"}`.
#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    theme: ThemePreference,
}

/// File-backed preference storage.
///
/// Persists the preference as a small JSON object (`{"theme": "dark"}`)
/// at a caller-supplied path. A missing, unreadable-as-JSON, or
/// unrecognized value counts as "no stored preference" rather than an
/// error; only I/O failures surface as [`StorageError`].
///
/// # Example
///
/// ```rust
/// use sitechrome::{FilePreferences, PreferenceSource, ThemePreference};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut prefs = FilePreferences::new(dir.path().join("theme.json"));
///
/// assert_eq!(prefs.get().unwrap(), None);
/// prefs.set(ThemePreference::Dark).unwrap();
/// assert_eq!(prefs.get().unwrap(), Some(ThemePreference::Dark));
/// ```
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Creates file-backed storage at the given path.
    ///
    /// The file is not created until the first [`set`](PreferenceSource::set).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this source reads and writes.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PreferenceSource for FilePreferences {
    fn get(&self) -> Result<Option<ThemePreference>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    reason: err.to_string(),
                })
            }
        };

        // A corrupt or foreign file must never break theme resolution;
        // it reads as "nothing stored".
        match serde_json::from_str::<StoredPreference>(&raw) {
            Ok(stored) => Ok(Some(stored.theme)),
            Err(_) => Ok(None),
        }
    }

    fn set(&mut self, preference: ThemePreference) -> Result<(), StorageError> {
        let stored = StoredPreference { theme: preference };
        let body = serde_json::to_string(&stored).map_err(|err| StorageError::Write {
            path: self.path.clone(),
            reason: err.to_string(),
        })?;

        fs::write(&self.path, body).map_err(|err| StorageError::Write {
            path: self.path.clone(),
            reason: err.to_string(),
        })
    }

    fn prefers_dark(&self) -> bool {
        detect_os_color_mode() == ColorMode::Dark
    }
}

/// Session-only preference storage.
///
/// Holds the preference in memory for the life of the value. This is
/// both a usable source in its own right (embedders without a writable
/// location) and the shape the store degrades to when persistence fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    theme: Option<ThemePreference>,
}

impl MemoryPreferences {
    /// Creates empty session-only storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates session-only storage seeded with a preference.
    pub fn with_preference(preference: ThemePreference) -> Self {
        Self {
            theme: Some(preference),
        }
    }
}

impl PreferenceSource for MemoryPreferences {
    fn get(&self) -> Result<Option<ThemePreference>, StorageError> {
        Ok(self.theme)
    }

    fn set(&mut self, preference: ThemePreference) -> Result<(), StorageError> {
        self.theme = Some(preference);
        Ok(())
    }

    fn prefers_dark(&self) -> bool {
        detect_os_color_mode() == ColorMode::Dark
    }
}

type OsModeDetector = fn() -> ColorMode;

static OS_MODE_DETECTOR: Lazy<Mutex<OsModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used for the OS color-scheme signal.
///
/// This is useful for testing or when the host application already knows
/// the environment's appearance and wants to pin it.
pub fn set_os_mode_detector(detector: OsModeDetector) {
    let mut guard = OS_MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

pub(crate) fn detect_os_color_mode() -> ColorMode {
    let detector = OS_MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
