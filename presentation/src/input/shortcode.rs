//! Shortcode attribute parsing
//!
//! Attribute values arrive as author-written text. Everything except `id`
//! goes through [`sanitize_text_field`] before it is interpreted; the `id` is
//! cleaned and validated later by the use case.

use finds_domain::ShortcodeAttributes;
use finds_domain::shortcode::attributes::{
    ATTR_CAPTION_OPTION, ATTR_CAPTION_TEXT, ATTR_FIGURE_SIZE, ATTR_ID,
};
use scraper::{ElementRef, Html, Node};

/// Tags whose entire subtree is dropped
const SKIP_TAGS: [&str; 4] = ["script", "style", "noscript", "svg"];

/// Strip markup from an attribute value.
///
/// Removes every tag together with the contents of `script` and `style`,
/// decodes entities, collapses whitespace runs (line breaks and tabs
/// included) into a single space and trims both ends. Adjacent text nodes are
/// joined without a separator, so inline tags never split a word.
pub fn sanitize_text_field(value: &str) -> String {
    let fragment = Html::parse_fragment(value);
    let mut text = String::with_capacity(value.len());
    collect_text(fragment.root_element(), &mut text);
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(element: ElementRef, out: &mut String) {
    if SKIP_TAGS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
            }
            _ => {}
        }
    }
}

/// Apply `(key, value)` pairs as written in a shortcode on top of `base`.
///
/// Unknown keys are ignored and a repeated key keeps its last value. A
/// caption option or figure size that does not parse leaves the value from
/// `base` in place.
pub fn parse_attributes<I, K, V>(base: ShortcodeAttributes, pairs: I) -> ShortcodeAttributes
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    pairs.into_iter().fold(base, |attrs, (key, value)| {
        let value = value.as_ref();
        match key.as_ref() {
            ATTR_ID => attrs.with_id(value),
            ATTR_CAPTION_OPTION => {
                let option = sanitize_text_field(value)
                    .parse()
                    .unwrap_or(attrs.caption_option());
                attrs.with_caption_option(option)
            }
            ATTR_CAPTION_TEXT => attrs.with_caption_text(sanitize_text_field(value)),
            ATTR_FIGURE_SIZE => {
                let size = sanitize_text_field(value)
                    .parse()
                    .unwrap_or(attrs.figure_size());
                attrs.with_figure_size(size)
            }
            _ => attrs,
        }
    })
}
