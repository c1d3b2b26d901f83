//! HTML escaping helpers for the rendered form markup
//!
//! Every interpolated value must pass through one of these before it lands
//! in markup.

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text interpolated into element content.
pub fn esc_html(input: &str) -> String {
    escape(input)
}

/// Escape text interpolated into an attribute value.
pub fn esc_attr(input: &str) -> String {
    escape(input)
}
