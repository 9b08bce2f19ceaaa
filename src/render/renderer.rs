//! Pre-compiled chrome renderer.

use minijinja::{context, Environment, Error};
use serde::Serialize;

use super::filters::register_filters;
use crate::page::{Heading, NavLink};
use crate::theme::{ColorMode, Document};

/// Heading title shown above both table-of-contents widgets.
const TOC_TITLE: &str = "Table of Contents";

/// Display width budget for labels in the dropdown TOC.
const DROPDOWN_LABEL_WIDTH: usize = 40;

/// Headings deeper than this are left out of the TOC widgets.
const DEFAULT_MAX_TOC_DEPTH: u8 = 3;

/// Built-in chrome templates, compiled at renderer construction.
///
/// Names carry an `.html` suffix so minijinja applies HTML escaping to
/// interpolated titles and slugs.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("navbar.html", include_str!("templates/navbar.html.j2")),
    ("footer.html", include_str!("templates/footer.html.j2")),
    ("toc_sidebar.html", include_str!("templates/toc_sidebar.html.j2")),
    ("toc_dropdown.html", include_str!("templates/toc_dropdown.html.j2")),
];

/// A renderer with the site's chrome templates pre-registered.
///
/// Templates are compiled once at construction and reused for every
/// page. Each fragment carries the document's presentation attribute
/// value so the styling layer can theme it.
///
/// # Example
///
/// ```rust
/// use sitechrome::{ChromeRenderer, MemoryPreferences, NavLink, ThemePreference, ThemeStore};
///
/// let mut store = ThemeStore::new(MemoryPreferences::with_preference(ThemePreference::Dark));
/// store.resolve();
///
/// let renderer = ChromeRenderer::new().unwrap();
/// let links = [NavLink::new("Home", "/"), NavLink::new("Blog", "/blog")];
/// let nav = renderer.navbar(store.document(), &links).unwrap();
///
/// assert!(nav.contains(r#"data-theme="dark""#));
/// assert!(nav.contains(r#"href="/blog""#));
/// ```
pub struct ChromeRenderer {
    env: Environment<'static>,
    max_toc_depth: u8,
}

impl ChromeRenderer {
    /// Creates a renderer with the built-in chrome templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        register_filters(&mut env);
        for &(name, source) in BUILTIN_TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self {
            env,
            max_toc_depth: DEFAULT_MAX_TOC_DEPTH,
        })
    }

    /// Sets the deepest heading level included in the TOC widgets.
    pub fn with_max_toc_depth(mut self, depth: u8) -> Self {
        self.max_toc_depth = depth;
        self
    }

    /// Registers a caller-supplied template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }

    /// Renders the navigation bar.
    pub fn navbar(&self, document: &Document, links: &[NavLink]) -> Result<String, Error> {
        self.render(
            "navbar.html",
            &context! {
                theme => theme_value(document),
                links => links,
            },
        )
    }

    /// Renders the footer with the given copyright notice.
    pub fn footer(&self, document: &Document, notice: &str) -> Result<String, Error> {
        self.render(
            "footer.html",
            &context! {
                theme => theme_value(document),
                notice => notice,
            },
        )
    }

    /// Renders the sidebar table of contents.
    ///
    /// Headings deeper than the configured maximum are left out; an
    /// empty heading list renders an empty list group.
    pub fn toc_sidebar(&self, document: &Document, headings: &[Heading]) -> Result<String, Error> {
        self.render(
            "toc_sidebar.html",
            &context! {
                theme => theme_value(document),
                title => TOC_TITLE,
                headings => self.visible_headings(headings),
            },
        )
    }

    /// Renders the dropdown table of contents shown under the top bar.
    ///
    /// Long heading labels are clipped to a fixed display width.
    pub fn toc_dropdown(&self, document: &Document, headings: &[Heading]) -> Result<String, Error> {
        self.render(
            "toc_dropdown.html",
            &context! {
                theme => theme_value(document),
                title => TOC_TITLE,
                label_width => DROPDOWN_LABEL_WIDTH,
                headings => self.visible_headings(headings),
            },
        )
    }

    fn visible_headings<'h>(&self, headings: &'h [Heading]) -> Vec<&'h Heading> {
        headings
            .iter()
            .filter(|h| h.depth <= self.max_toc_depth)
            .collect()
    }
}

/// The theme attribute value a fragment is rendered with.
///
/// An unresolved document renders light; the store rewrites the
/// attribute as soon as it resolves.
fn theme_value(document: &Document) -> &'static str {
    document
        .attribute()
        .unwrap_or_else(|| ColorMode::Light.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    fn dark_document() -> Document {
        let mut doc = Document::new();
        doc.apply(ColorMode::Dark);
        doc
    }

    #[derive(Serialize)]
    struct SimpleData {
        message: String,
    }

    #[test]
    fn test_navbar_lists_links_in_order() {
        let renderer = ChromeRenderer::new().unwrap();
        let links = [
            NavLink::new("Home", "/"),
            NavLink::new("Blog", "/blog"),
            NavLink::new("Contact", "/contact"),
        ];

        let html = renderer.navbar(&dark_document(), &links).unwrap();
        assert!(html.contains(r#"data-theme="dark""#));
        assert!(html.contains(r#"<a class="nav-link" href="/blog">Blog</a>"#));

        let home = html.find(r#"href="/""#).unwrap();
        let contact = html.find(r#"href="/contact""#).unwrap();
        assert!(home < contact);
    }

    #[test]
    fn test_navbar_escapes_titles() {
        let renderer = ChromeRenderer::new().unwrap();
        let links = [NavLink::new("Q&A", "/qa")];

        let html = renderer.navbar(&dark_document(), &links).unwrap();
        assert!(html.contains("Q&amp;A"));
    }

    #[test]
    fn test_unresolved_document_renders_light() {
        let renderer = ChromeRenderer::new().unwrap();
        let html = renderer.footer(&Document::new(), "Copyright 2023").unwrap();
        assert!(html.contains(r#"data-theme="light""#));
        assert!(html.contains("Copyright 2023"));
    }

    #[test]
    fn test_toc_sidebar_links_headings_to_anchors() {
        let renderer = ChromeRenderer::new().unwrap();
        let headings = [
            Heading::new("Introduction", "introduction", 2),
            Heading::new("Usage", "usage", 2),
        ];

        let html = renderer.toc_sidebar(&dark_document(), &headings).unwrap();
        assert!(html.contains("Table of Contents"));
        assert!(html.contains(r##"href="#introduction""##));
        assert!(html.contains(r##"href="#usage""##));
        assert!(html.contains("toc-depth-2"));
    }

    #[test]
    fn test_toc_clips_deep_headings() {
        let renderer = ChromeRenderer::new().unwrap();
        let headings = [
            Heading::new("Section", "section", 2),
            Heading::new("Fine print", "fine-print", 4),
        ];

        let html = renderer.toc_sidebar(&dark_document(), &headings).unwrap();
        assert!(html.contains(r##"href="#section""##));
        assert!(!html.contains("fine-print"));

        let html = renderer
            .with_max_toc_depth(4)
            .toc_sidebar(&dark_document(), &headings)
            .unwrap();
        assert!(html.contains("fine-print"));
    }

    #[test]
    fn test_toc_dropdown_truncates_long_labels() {
        let renderer = ChromeRenderer::new().unwrap();
        let headings = [Heading::new(
            "A heading title that is far too long to fit in the dropdown menu",
            "long",
            2,
        )];

        let html = renderer.toc_dropdown(&dark_document(), &headings).unwrap();
        assert!(html.contains('…'));
        assert!(!html.contains("dropdown menu</a>"));
    }

    #[test]
    fn test_toc_with_no_headings_renders_empty_list() {
        let renderer = ChromeRenderer::new().unwrap();
        let html = renderer.toc_sidebar(&dark_document(), &[]).unwrap();
        assert!(html.contains("Table of Contents"));
        assert!(!html.contains("list-group-item toc-depth"));
    }

    #[test]
    fn test_caller_templates_render_alongside_builtins() {
        let mut renderer = ChromeRenderer::new().unwrap();
        renderer
            .add_template("banner", "** {{ message }} **")
            .unwrap();

        let html = renderer
            .render(
                "banner",
                &SimpleData {
                    message: "hello".into(),
                },
            )
            .unwrap();
        assert_eq!(html, "** hello **");
    }

    #[test]
    fn test_unknown_template_error() {
        let renderer = ChromeRenderer::new().unwrap();
        let result = renderer.render(
            "nonexistent",
            &SimpleData {
                message: "x".into(),
            },
        );
        assert!(result.is_err());
    }
}
