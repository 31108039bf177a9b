use super::*;
use crate::util::component_library::ComponentKind;
use crate::util::theme_palette::ThemeKind;

fn element(id: &str, kind: ComponentKind, content: &str) -> ElementInstance {
    ElementInstance { id: id.to_owned(), kind, content: content.to_owned(), theme: ThemeKind::Cosmic }
}

// =============================================================
// escape
// =============================================================

#[test]
fn escape_replaces_all_special_characters() {
    assert_eq!(escape(r#"<a href="x">Tom & 'Jerry'</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
}

#[test]
fn escape_leaves_plain_text_and_unicode_alone() {
    assert_eq!(escape("✨ Enchanted Words"), "✨ Enchanted Words");
    assert_eq!(escape(""), "");
}

// =============================================================
// safe_url
// =============================================================

#[test]
fn safe_url_accepts_http_https_and_relative() {
    assert_eq!(safe_url("https://example.com/a.png"), "https://example.com/a.png");
    assert_eq!(safe_url("HTTP://example.com"), "HTTP://example.com");
    assert_eq!(safe_url("//cdn.example.com/v.mp4"), "//cdn.example.com/v.mp4");
    assert_eq!(safe_url("images/cat.png"), "images/cat.png");
    assert_eq!(safe_url("/watch?t=1:30"), "/watch?t=1:30");
}

#[test]
fn safe_url_blocks_script_and_data_schemes() {
    assert_eq!(safe_url("javascript:alert(1)"), BLOCKED_URL);
    assert_eq!(safe_url("  JavaScript:alert(1)"), BLOCKED_URL);
    assert_eq!(safe_url("java\tscript:alert(1)"), BLOCKED_URL);
    assert_eq!(safe_url("data:text/html,<b>x</b>"), BLOCKED_URL);
}

#[test]
fn safe_url_escapes_query_separators() {
    assert_eq!(safe_url("https://x.test/?a=1&b=2"), "https://x.test/?a=1&amp;b=2");
}

// =============================================================
// generate_markup
// =============================================================

#[test]
fn generate_markup_is_empty_without_elements() {
    assert_eq!(generate_markup(&[]), "");
    assert!(markup_segments(&[]).is_empty());
}

#[test]
fn segment_count_matches_element_count() {
    let elements = vec![
        element("a", ComponentKind::TextBlock, "one"),
        element("b", ComponentKind::VideoEmbed, "https://v.test"),
        element("c", ComponentKind::InteractiveSection, "three"),
    ];
    assert_eq!(markup_segments(&elements).len(), elements.len());
}

#[test]
fn generate_markup_preserves_sequence_order() {
    let elements = vec![
        element("a", ComponentKind::TextBlock, "first"),
        element("b", ComponentKind::TextBlock, "second"),
    ];
    let html = generate_markup(&elements);
    let first = html.find("first").expect("first segment present");
    let second = html.find("second").expect("second segment present");
    assert!(first < second);
}

#[test]
fn generate_markup_joins_with_separator() {
    let elements = vec![
        element("a", ComponentKind::TextBlock, "first"),
        element("b", ComponentKind::ImageCanvas, "https://i.test/x.png"),
    ];
    let segments = markup_segments(&elements);
    assert_eq!(generate_markup(&elements), format!("{}{SEGMENT_SEPARATOR}{}", segments[0], segments[1]));
}

#[test]
fn generate_markup_uses_each_elements_own_theme() {
    let mut retro = element("b", ComponentKind::TextBlock, "two");
    retro.theme = ThemeKind::Retro;
    let elements = vec![element("a", ComponentKind::TextBlock, "one"), retro];
    let segments = markup_segments(&elements);
    assert!(segments[0].contains(ThemeKind::Cosmic.style_class()));
    assert!(segments[1].contains(ThemeKind::Retro.style_class()));
}
