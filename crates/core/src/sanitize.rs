//! Markup sanitizing for user-supplied meal instructions.
//!
//! Instructions are stored already escaped so the presentation layer can
//! inject them as raw HTML. Line breaks are kept as plain `\n` and are only
//! turned into `<br />` tags by [`render_line_breaks`] at display time.

/// Longest named/numeric character reference body accepted as already
/// escaped (e.g. `&CounterClockwiseContourIntegral;`).
const MAX_REFERENCE_LEN: usize = 32;

/// Escape user-supplied text so it is safe to render directly as HTML.
///
/// - `<`, `>`, `"` and `'` become character references.
/// - `&` is escaped unless it already starts a well-formed character
///   reference (`&amp;`, `&#39;`, `&#x27;`), which keeps the function
///   idempotent.
/// - Control characters other than `\n`, `\r` and `\t` are removed.
pub fn sanitize_instructions(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for (idx, c) in input.char_indices() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '&' if starts_with_reference(&input[idx..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '\n' | '\r' | '\t' => out.push(c),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }

    out
}

/// Convert `\r\n`, `\r` and `\n` line breaks to `<br />` tags.
///
/// Expects text that already went through [`sanitize_instructions`].
pub fn render_line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "<br />")
}

/// Whether `s` (which starts with `&`) begins with `&name;`, `&#123;` or
/// `&#x1F;`.
fn starts_with_reference(s: &str) -> bool {
    let Some(body_end) = s
        .char_indices()
        .skip(1)
        .take(MAX_REFERENCE_LEN + 1)
        .find(|(_, c)| *c == ';')
        .map(|(i, _)| i)
    else {
        return false;
    };

    let body = &s[1..body_end];
    if let Some(numeric) = body.strip_prefix('#') {
        if let Some(hex) = numeric
            .strip_prefix('x')
            .or_else(|| numeric.strip_prefix('X'))
        {
            return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
        }
        return !numeric.is_empty() && numeric.chars().all(|c| c.is_ascii_digit());
    }

    let mut chars = body.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}
