//! Theme preference and resolved color mode types.

use serde::{Deserialize, Serialize};

/// The user's persisted theme preference.
///
/// A preference is tri-state: an explicit `Light` or `Dark` choice, or
/// `Auto`, meaning "follow the operating system". `Auto` is what a user
/// has until they interact with the theme toggle; after the first toggle
/// the preference is always concrete.
///
/// The serialized form matches the storage wire format exactly:
/// `"light"`, `"dark"`, `"auto"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    Auto,
}

/// A resolved, concrete color mode.
///
/// This is what the document presentation attribute holds: always
/// `Light` or `Dark`, never `Auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ThemePreference {
    /// Resolves the preference to a concrete color mode.
    ///
    /// `prefers_dark` is the OS color-scheme signal; it is only relevant
    /// for `Auto`, which resolves to whatever the system prefers.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sitechrome::{ColorMode, ThemePreference};
    ///
    /// assert_eq!(ThemePreference::Dark.resolve(false), ColorMode::Dark);
    /// assert_eq!(ThemePreference::Auto.resolve(true), ColorMode::Dark);
    /// assert_eq!(ThemePreference::Auto.resolve(false), ColorMode::Light);
    /// ```
    pub fn resolve(self, prefers_dark: bool) -> ColorMode {
        match self {
            ThemePreference::Light => ColorMode::Light,
            ThemePreference::Dark => ColorMode::Dark,
            ThemePreference::Auto => {
                if prefers_dark {
                    ColorMode::Dark
                } else {
                    ColorMode::Light
                }
            }
        }
    }

    /// Returns the next preference after a user toggle.
    ///
    /// The result is the flip of whatever the preference currently
    /// renders as: `Dark` becomes `Light`, `Light` becomes `Dark`, and
    /// `Auto` flips away from the system default. The result is never
    /// `Auto` — once a user toggles, the preference is explicit.
    pub fn toggled(self, prefers_dark: bool) -> ThemePreference {
        match self.resolve(prefers_dark) {
            ColorMode::Dark => ThemePreference::Light,
            ColorMode::Light => ThemePreference::Dark,
        }
    }

    /// The storage wire string for this preference.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::Auto => "auto",
        }
    }
}

impl ColorMode {
    /// The presentation attribute value for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ColorMode> for ThemePreference {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => ThemePreference::Light,
            ColorMode::Dark => ThemePreference::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_concrete_ignores_os_signal() {
        assert_eq!(ThemePreference::Light.resolve(true), ColorMode::Light);
        assert_eq!(ThemePreference::Light.resolve(false), ColorMode::Light);
        assert_eq!(ThemePreference::Dark.resolve(true), ColorMode::Dark);
        assert_eq!(ThemePreference::Dark.resolve(false), ColorMode::Dark);
    }

    #[test]
    fn test_resolve_auto_follows_os_signal() {
        assert_eq!(ThemePreference::Auto.resolve(true), ColorMode::Dark);
        assert_eq!(ThemePreference::Auto.resolve(false), ColorMode::Light);
    }

    #[test]
    fn test_toggled_flips_concrete_preferences() {
        assert_eq!(ThemePreference::Dark.toggled(false), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled(false), ThemePreference::Dark);
    }

    #[test]
    fn test_toggled_auto_flips_away_from_system_default() {
        // System renders dark by default, so toggling means "give me light".
        assert_eq!(ThemePreference::Auto.toggled(true), ThemePreference::Light);
        assert_eq!(ThemePreference::Auto.toggled(false), ThemePreference::Dark);
    }

    #[test]
    fn test_wire_strings() {
        assert_eq!(ThemePreference::Auto.as_str(), "auto");
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
        assert_eq!(ColorMode::Light.as_str(), "light");
    }

    #[test]
    fn test_serde_wire_format() {
        let json = serde_json::to_string(&ThemePreference::Auto).unwrap();
        assert_eq!(json, "\"auto\"");

        let parsed: ThemePreference = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, ThemePreference::Dark);

        assert!(serde_json::from_str::<ThemePreference>("\"dim\"").is_err());
    }
}
