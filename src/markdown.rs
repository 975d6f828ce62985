//! Story Markdown
//!
//! Stories are written in markdown and stored as HTML. Raw HTML in the
//! source is escaped, apart from `<u>` which the toolbar emits for underline.
//! Link and image targets are limited to web, mail and relative URLs.
//!
//! Toolbar formatting works on textarea selections, which the browser
//! reports in UTF-16 code units.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

/// Inline tags passed through unescaped
const ALLOWED_INLINE_HTML: &[&str] = &["<u>", "</u>"];

/// URL schemes allowed in links and images
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Render story markdown to HTML
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(sanitize_event);
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_SMART_PUNCTUATION
}

fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::InlineHtml(html) if ALLOWED_INLINE_HTML.contains(&html.as_ref()) => Event::InlineHtml(html),
        Event::InlineHtml(html) | Event::Html(html) => Event::Text(html),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

/// Replace targets with a disallowed scheme (`javascript:`, `data:`, ...) by `#`
fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

fn is_safe_url(url: &str) -> bool {
    // Browsers ignore whitespace and control characters inside the scheme
    let cleaned: String = url.chars().filter(|c| !c.is_whitespace() && !c.is_control()).collect();
    let scheme_end = cleaned.find(|c| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if cleaned[i..].starts_with(':') => {
            let scheme = cleaned[..i].to_ascii_lowercase();
            ALLOWED_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

/// Toolbar actions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Bold,
    Italic,
    Underline,
}

impl Format {
    fn markers(self) -> (&'static str, &'static str) {
        match self {
            Format::Bold => ("**", "**"),
            Format::Italic => ("*", "*"),
            Format::Underline => ("<u>", "</u>"),
        }
    }

    /// Ctrl/Cmd shortcut key
    pub fn from_shortcut(key: &str) -> Option<Format> {
        match key {
            "b" | "B" => Some(Format::Bold),
            "i" | "I" => Some(Format::Italic),
            "u" | "U" => Some(Format::Underline),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Format::Bold => "Bold (Ctrl+B)",
            Format::Italic => "Italic (Ctrl+I)",
            Format::Underline => "Underline (Ctrl+U)",
        }
    }
}

/// Result of wrapping a selection; offsets are UTF-16 like the input
#[derive(Debug, PartialEq, Eq)]
pub struct Formatted {
    pub text: String,
    pub selection_start: u32,
    pub selection_end: u32,
}

/// Wrap the selected range in the markers for `format`. The new selection
/// covers the same words, now inside the markers.
pub fn apply_format(text: &str, start: u32, end: u32, format: Format) -> Formatted {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let start_byte = utf16_to_byte(text, start);
    let end_byte = utf16_to_byte(text, end);
    let (open, close) = format.markers();

    let mut out = String::with_capacity(text.len() + open.len() + close.len());
    out.push_str(&text[..start_byte]);
    out.push_str(open);
    out.push_str(&text[start_byte..end_byte]);
    out.push_str(close);
    out.push_str(&text[end_byte..]);

    let open_len = open.encode_utf16().count() as u32;
    let selected_len = text[start_byte..end_byte].encode_utf16().count() as u32;
    let selection_start = byte_to_utf16(text, start_byte) + open_len;

    Formatted {
        text: out,
        selection_start,
        selection_end: selection_start + selected_len,
    }
}

/// Byte index of a UTF-16 offset, clamped to the text and to char boundaries
fn utf16_to_byte(text: &str, offset: u32) -> usize {
    let mut units = 0u32;
    for (idx, ch) in text.char_indices() {
        if units >= offset {
            return idx;
        }
        units += ch.len_utf16() as u32;
    }
    text.len()
}

fn byte_to_utf16(text: &str, byte: usize) -> u32 {
    text[..byte].encode_utf16().count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let html = render_markdown("Hello **friends**\n\nSecond *paragraph*");
        assert!(html.contains("<p>Hello <strong>friends</strong></p>"));
        assert!(html.contains("<em>paragraph</em>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let inline = render_markdown("click <img src=x onerror=alert(1)> here");
        assert!(!inline.contains("<img"));
    }

    #[test]
    fn test_script_links_are_neutralized() {
        let html = render_markdown("[x](javascript:alert(1)) and [y](JavaScript&#58;alert(1))");
        assert!(!html.to_lowercase().contains("javascript"));
        assert!(html.contains(r##"<a href="#">x</a>"##));

        let img = render_markdown("![pic](data:text/html;base64,PHNjcmlwdD4=)");
        assert!(!img.contains("data:"));
    }

    #[test]
    fn test_web_and_relative_links_kept() {
        let html = render_markdown("[a](https://example.com/x) [b](mailto:me@example.com) [c](/stories/1) [d](#top)");
        assert!(html.contains(r#"href="https://example.com/x""#));
        assert!(html.contains(r#"href="mailto:me@example.com""#));
        assert!(html.contains(r#"href="/stories/1""#));
        assert!(html.contains(r##"href="#top""##));
    }

    #[test]
    fn test_underline_passes_through() {
        let html = render_markdown("a <u>line</u> here");
        assert!(html.contains("<u>line</u>"));
    }

    #[test]
    fn test_apply_bold_to_selection() {
        let out = apply_format("we went hiking", 8, 14, Format::Bold);
        assert_eq!(out.text, "we went **hiking**");
        assert_eq!((out.selection_start, out.selection_end), (10, 16));
    }

    #[test]
    fn test_apply_with_empty_selection_and_reversed_range() {
        let out = apply_format("abc", 1, 1, Format::Italic);
        assert_eq!(out.text, "a**bc");
        assert_eq!((out.selection_start, out.selection_end), (2, 2));

        let out = apply_format("abc", 3, 0, Format::Underline);
        assert_eq!(out.text, "<u>abc</u>");
    }

    #[test]
    fn test_apply_uses_utf16_offsets() {
        // "é" is one UTF-16 unit, the emoji is two
        let text = "é😀 sun";
        let out = apply_format(text, 4, 7, Format::Bold);
        assert_eq!(out.text, "é😀 **sun**");

        let out = apply_format(text, 99, 120, Format::Bold);
        assert_eq!(out.text, "é😀 sun****");
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(Format::from_shortcut("b"), Some(Format::Bold));
        assert_eq!(Format::from_shortcut("U"), Some(Format::Underline));
        assert_eq!(Format::from_shortcut("x"), None);
    }
}
