//! Markup generation for the export panel and static previews.
//!
//! TRADE-OFFS
//! ==========
//! Templates are plain `format!` strings, not a DOM builder. Every value that
//! originates from user input passes through `escape` or `safe_url` before
//! interpolation, because preview mode injects the result as live HTML.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use crate::state::builder::ElementInstance;

/// Separator placed between the markup of consecutive elements.
pub const SEGMENT_SEPARATOR: &str = "\n";

/// URL substituted for any value whose scheme is not allowed.
pub const BLOCKED_URL: &str = "about:blank";

/// Escape text for use in element content or a quoted attribute value.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a URL for a `src` attribute, replacing disallowed schemes.
///
/// Accepts `http:`, `https:`, protocol-relative (`//host`) and relative
/// URLs. Anything else with a scheme (`javascript:`, `data:`, ...) becomes
/// [`BLOCKED_URL`].
pub fn safe_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if is_allowed_url(trimmed) {
        escape(trimmed)
    } else {
        BLOCKED_URL.to_owned()
    }
}

fn is_allowed_url(url: &str) -> bool {
    // Browsers drop ASCII whitespace and control characters inside schemes,
    // so "java\tscript:" must be judged on its compacted form.
    let compact: String = url.chars().filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control()).collect();
    let Some(colon) = compact.find(':') else {
        return true;
    };
    let head = &compact[..colon];
    if head.contains(['/', '?', '#']) {
        // Colon belongs to a path, query or fragment, not a scheme.
        return true;
    }
    let scheme = head.to_ascii_lowercase();
    scheme == "http" || scheme == "https"
}

/// Markup for each element in sequence order.
pub fn markup_segments(elements: &[ElementInstance]) -> Vec<String> {
    elements
        .iter()
        .map(|el| el.kind.descriptor().render(&el.content, el.theme))
        .collect()
}

/// Concatenated markup for the whole canvas. Empty when there are no elements.
pub fn generate_markup(elements: &[ElementInstance]) -> String {
    markup_segments(elements).join(SEGMENT_SEPARATOR)
}
