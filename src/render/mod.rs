//! Template-driven rendering of the site chrome.
//!
//! The chrome fragments (navigation bar, footer, table-of-contents
//! widgets) are minijinja templates compiled once into a
//! [`ChromeRenderer`] and fed the host page's data plus the document's
//! theme attribute.

mod filters;
mod renderer;

pub use renderer::ChromeRenderer;
