//! HTML helpers for rendering user input into email bodies

/// Escapes `&`, `<`, `>`, `"` and `'` so user text renders literally in HTML.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escapes `input` and turns each newline into a `<br>` line break.
#[must_use]
pub fn escape_multiline(input: &str) -> String {
    escape_html(input).replace('\n', "<br>")
}
