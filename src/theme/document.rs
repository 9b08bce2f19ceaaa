//! The document presentation attribute.

use super::preference::ColorMode;

/// The attribute name the styling layer reads to pick a visual theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Holder of the document-level presentation attribute.
///
/// The attribute is always a concrete mode (`"light"` or `"dark"`);
/// `"auto"` is never written here — an `Auto` preference is resolved to
/// a concrete mode before it reaches the document. Until the store has
/// resolved once, the attribute is unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Document {
    color_mode: Option<ColorMode>,
}

impl Document {
    /// Creates a document with no presentation attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the presentation attribute to the given mode.
    pub fn apply(&mut self, mode: ColorMode) {
        self.color_mode = Some(mode);
    }

    /// The current concrete color mode, if resolved.
    pub fn color_mode(&self) -> Option<ColorMode> {
        self.color_mode
    }

    /// The current attribute value (`"light"` or `"dark"`), if resolved.
    pub fn attribute(&self) -> Option<&'static str> {
        self.color_mode.map(ColorMode::as_str)
    }
}
