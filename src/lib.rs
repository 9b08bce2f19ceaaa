//! Presentational chrome for a static content site.
//!
//! `sitechrome` provides the two things a content page's shell needs:
//!
//! - A **theme preference store** ([`ThemeStore`]) that resolves a
//!   persisted `light`/`dark`/`auto` preference against the OS
//!   color-scheme signal, toggles it on user action, and keeps the
//!   stored value and the document's `data-theme` attribute in sync.
//! - A **chrome renderer** ([`ChromeRenderer`]) that turns the host
//!   page's nav links and headings into themed navigation bar, footer,
//!   and table-of-contents markup via pre-compiled minijinja templates.
//!
//! Storage and the OS signal are injected through the
//! [`PreferenceSource`] capability, so the store runs unchanged against
//! a preference file, in-memory state, or a test fake. Persistence
//! failure never surfaces: the store degrades to session-only state.
//!
//! # Example
//!
//! ```rust
//! use sitechrome::{
//!     ChromeRenderer, MemoryPreferences, NavLink, ThemePreference, ThemeStore,
//! };
//!
//! // Page load: resolve the persisted preference and stamp the document.
//! let source = MemoryPreferences::with_preference(ThemePreference::Dark);
//! let mut store = ThemeStore::new(source);
//! store.resolve();
//!
//! // Render chrome that carries the resolved theme.
//! let renderer = ChromeRenderer::new().unwrap();
//! let links = [NavLink::new("Home", "/"), NavLink::new("Blog", "/blog")];
//! let nav = renderer.navbar(store.document(), &links).unwrap();
//! assert!(nav.contains(r#"data-theme="dark""#));
//!
//! // User clicks the toggle: storage and document move together.
//! store.toggle();
//! assert_eq!(store.document().attribute(), Some("light"));
//! ```

pub mod page;
pub mod render;
pub mod theme;
mod util;

pub use page::{Heading, NavLink};
pub use render::ChromeRenderer;
pub use theme::{
    set_os_mode_detector, ColorMode, Document, FilePreferences, MemoryPreferences,
    PreferenceSource, StorageError, ThemePreference, ThemeStore, STORAGE_KEY, THEME_ATTRIBUTE,
};
pub use util::truncate_to_width;
