//! The theme store: resolve and toggle with consistent side effects.

use super::document::Document;
use super::preference::{ColorMode, ThemePreference};
use super::source::PreferenceSource;

/// Resolves, persists, and toggles the theme preference.
///
/// The store owns a [`PreferenceSource`] (storage plus the OS
/// color-scheme signal) and a [`Document`] (the presentation attribute
/// the styling layer reads). Every mutation updates both before
/// returning, so the stored preference and the rendered theme never
/// diverge within a session.
///
/// Storage failure is tolerated: a source that errors on read resolves
/// as if nothing were stored, and a source that errors on write leaves
/// the session running on in-memory state. Neither surfaces to the
/// caller — the feature is cosmetic and must never break the page.
///
/// # Example
///
/// ```rust
/// use sitechrome::{ColorMode, MemoryPreferences, ThemePreference, ThemeStore};
///
/// let source = MemoryPreferences::with_preference(ThemePreference::Dark);
/// let mut store = ThemeStore::new(source);
///
/// assert_eq!(store.resolve(), ThemePreference::Dark);
/// assert_eq!(store.document().attribute(), Some("dark"));
///
/// assert_eq!(store.toggle(), ThemePreference::Light);
/// assert_eq!(store.color_mode(), Some(ColorMode::Light));
/// ```
#[derive(Debug)]
pub struct ThemeStore<S: PreferenceSource> {
    source: S,
    document: Document,
    preference: ThemePreference,
}

impl<S: PreferenceSource> ThemeStore<S> {
    /// Creates a store over the given source.
    ///
    /// Nothing is read or applied until [`resolve`](Self::resolve) runs;
    /// until then the in-memory preference is `Auto` and the document
    /// attribute is unset.
    pub fn new(source: S) -> Self {
        Self {
            source,
            document: Document::new(),
            preference: ThemePreference::Auto,
        }
    }

    /// Resolves the effective preference at page load.
    ///
    /// A stored preference is used verbatim; with nothing stored (or an
    /// unreadable source) the preference defaults to `Auto`. The
    /// resolved concrete mode is applied to the document before
    /// returning, so `Auto` reaches the attribute as whatever the OS
    /// currently prefers.
    pub fn resolve(&mut self) -> ThemePreference {
        let preference = match self.source.get() {
            Ok(Some(stored)) => stored,
            Ok(None) | Err(_) => ThemePreference::Auto,
        };

        self.preference = preference;
        self.document.apply(self.concrete_mode(preference));
        preference
    }

    /// Toggles the preference in response to a user action.
    ///
    /// The next preference is the flip of whatever currently renders
    /// (see [`ThemePreference::toggled`]); it is persisted and applied
    /// to the document before this returns. A failed persist is
    /// swallowed — the in-memory preference and the document still
    /// update, and the new preference is still returned.
    pub fn toggle(&mut self) -> ThemePreference {
        // The OS signal only matters when flipping away from Auto.
        let prefers_dark =
            self.preference == ThemePreference::Auto && self.source.prefers_dark();
        let next = self.preference.toggled(prefers_dark);

        // Persist first; a failure here is non-fatal and the session
        // carries on with the in-memory value.
        let _ = self.source.set(next);
        self.preference = next;
        self.document.apply(next.resolve(prefers_dark));
        next
    }

    /// The current in-memory preference.
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// The document's concrete color mode, once resolved.
    pub fn color_mode(&self) -> Option<ColorMode> {
        self.document.color_mode()
    }

    /// The document holding the presentation attribute.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The underlying preference source.
    pub fn source(&self) -> &S {
        &self.source
    }

    fn concrete_mode(&self, preference: ThemePreference) -> ColorMode {
        match preference {
            ThemePreference::Auto => preference.resolve(self.source.prefers_dark()),
            ThemePreference::Light => ColorMode::Light,
            ThemePreference::Dark => ColorMode::Dark,
        }
    }
}
