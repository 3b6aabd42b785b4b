//! Markup - HTML fragment rendering for debug pages

use std::borrow::Cow;

/// Render the debug fragment for an error.
///
/// `text` and `message` are HTML-escaped; inputs without markup characters
/// render unchanged.
pub(crate) fn render(code: u16, text: &str, message: &str) -> String {
    format!(
        "<div style=\"font-family:monospace;font-size:1.2em;margin:1em\">\
         <p><strong>{} ({})</strong></p><p>{}</p></div>",
        code,
        escape(text),
        escape(message),
    )
}

/// Escape `& < > "` for use in HTML text content.
///
/// ## Examples
/// ```rust
/// use https_error::error::markup::escape;
/// assert_eq!(escape("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
/// assert_eq!(escape("plain"), "plain");
/// ```
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template() {
        assert_eq!(
            render(500, "Internal Server Error", "oops"),
            "<div style=\"font-family:monospace;font-size:1.2em;margin:1em\">\
             <p><strong>500 (Internal Server Error)</strong></p><p>oops</p></div>"
        );
    }

    #[test]
    fn test_render_escapes_message() {
        let html = render(400, "Bad Request", "<script>alert('x')</script>");
        assert!(html.contains("<p>&lt;script&gt;alert('x')&lt;/script&gt;</p>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_escapes_double_quote() {
        let html = render(400, "Bad Request", "it's \"x\"");
        assert!(html.ends_with("<p>it's &quot;x&quot;</p></div>"));
    }

    #[test]
    fn test_render_keeps_apostrophe() {
        let html = render(418, "I'm a teapot", "short & stout");
        assert!(html.contains("<strong>418 (I'm a teapot)</strong>"));
        assert!(html.contains("<p>short &amp; stout</p>"));
    }

    #[test]
    fn test_escape_borrows_plain_input() {
        assert!(matches!(escape("nothing to do"), Cow::Borrowed(_)));
        assert!(matches!(escape("a & b"), Cow::Owned(_)));
    }
}
