//! Theme preference resolution, persistence, and toggling.
//!
//! This module provides:
//!
//! - [`ThemePreference`]: The tri-state `light`/`dark`/`auto` preference
//! - [`ColorMode`]: A resolved, concrete light/dark mode
//! - [`ThemeStore`]: Resolve-and-toggle with storage and document kept in sync
//! - [`PreferenceSource`]: The injected storage + OS-signal capability
//! - [`Document`]: Holder of the presentation attribute the styling layer reads
//!
//! The decision logic (what the next preference is) lives in pure
//! functions on [`ThemePreference`]; the store applies the side effects.

mod document;
mod error;
mod preference;
mod source;
mod store;

pub use document::{Document, THEME_ATTRIBUTE};
pub use error::StorageError;
pub use preference::{ColorMode, ThemePreference};
pub use source::{
    set_os_mode_detector, FilePreferences, MemoryPreferences, PreferenceSource, STORAGE_KEY,
};
pub use store::ThemeStore;
