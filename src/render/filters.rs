//! MiniJinja filter registration.

use minijinja::{Environment, Value};

use crate::util::truncate_to_width;

/// Registers all built-in filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    // Filter to turn a heading slug into a fragment href.
    // Usage: {{ heading.slug | anchor }} outputs #the-slug
    env.add_filter("anchor", |value: Value| -> String { format!("#{}", value) });

    // Filter to clip a label to a display width, ellipsis included.
    // Usage: {{ heading.text | truncate_at(40) }}
    env.add_filter("truncate_at", |value: Value, width: usize| -> String {
        truncate_to_width(&value.to_string(), width)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_one(template: &str) -> String {
        let mut env = Environment::new();
        register_filters(&mut env);
        env.add_template_owned("t".to_string(), template.to_string())
            .unwrap();
        env.get_template("t")
            .unwrap()
            .render(minijinja::context! {})
            .unwrap()
    }

    #[test]
    fn test_anchor_filter_prefixes_hash() {
        assert_eq!(render_one(r#"{{ "intro" | anchor }}"#), "#intro");
    }

    #[test]
    fn test_truncate_at_filter_clips_long_labels() {
        assert_eq!(
            render_one(r#"{{ "A very long heading" | truncate_at(6) }}"#),
            "A ver…"
        );
    }

    #[test]
    fn test_truncate_at_filter_keeps_short_labels() {
        assert_eq!(render_one(r#"{{ "Intro" | truncate_at(10) }}"#), "Intro");
    }
}
