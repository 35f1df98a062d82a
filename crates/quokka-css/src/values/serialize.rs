//! [CSSOM § 6.7.2 Serializing CSS Values](https://drafts.csswg.org/cssom/#serializing-css-values)
//!
//! Low-level text helpers shared by every value kind.

use crate::style::color::Rgba32;

/// Format a number with the fewest digits that round-trip at six decimal
/// places: no trailing zeros, no exponent, and no `-0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let mut text = format!("{value:.6}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        return "0".to_string();
    }
    text
}

/// "To serialize a color": `rgb(r, g, b)` when opaque, otherwise
/// `rgba(r, g, b, a)` with the alpha channel divided by 256 and printed
/// with two decimals.
#[must_use]
pub fn format_color(color: Rgba32) -> String {
    let (r, g, b) = (color.red(), color.green(), color.blue());
    if color.has_alpha() {
        format!("rgba({r}, {g}, {b}, {:.2})", f64::from(color.alpha()) / 256.0)
    } else {
        format!("rgb({r}, {g}, {b})")
    }
}

/// [§ 4.3.10 Check if three code points would start an identifier](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
///
/// Whether `text` tokenizes as a single identifier: an optional `-`, a name
/// start code point, then name code points.
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    if chars.peek() == Some(&'-') {
        let _ = chars.next();
    }
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first == '_' || !first.is_ascii() || first.is_ascii_alphabetic()) {
        return false;
    }
    chars.all(|c| c == '_' || c == '-' || !c.is_ascii() || c.is_ascii_alphanumeric())
}

/// Whether `text` can appear unquoted inside `url(...)`.
fn is_unquoted_url(text: &str) -> bool {
    text.chars().all(|c| match c {
        '!' | '#' | '$' | '%' | '&' => true,
        c if c < '*' => false,
        c if c <= '~' => true,
        c => !c.is_ascii(),
    })
}

/// "To serialize a string means to create a string represented by '"',
/// followed by the result of applying the rules below to each character of
/// the given string, followed by '"'."
///
/// Single quotes are used here. Quotes and backslashes are escaped with a
/// backslash; control characters become hex escapes, followed by a space
/// when the next character would otherwise extend the escape.
#[must_use]
pub fn quote_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    let mut after_escape = false;
    for c in text.chars() {
        if c == '\\' || c == '\'' {
            out.push('\\');
            out.push(c);
            after_escape = false;
        } else if c < '\u{20}' || c == '\u{7f}' {
            out.push_str(&format!("\\{:x}", u32::from(c)));
            after_escape = true;
        } else {
            if after_escape && (c.is_ascii_hexdigit() || c == ' ') {
                out.push(' ');
            }
            out.push(c);
            after_escape = false;
        }
    }
    out.push('\'');
    out
}

/// Emit `text` bare if it is an identifier, quoted otherwise.
#[must_use]
pub fn quote_string_if_needed(text: &str) -> String {
    if is_identifier(text) {
        text.to_string()
    } else {
        quote_string(text)
    }
}

/// Emit `url(...)`, quoting the URL only when it cannot stand unquoted.
#[must_use]
pub fn format_url(url: &str) -> String {
    if is_unquoted_url(url) {
        format!("url({url})")
    } else {
        format!("url({})", quote_string(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_is_minimal() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.000_000_1), "0");
        assert_eq!(format_number(1.0 / 3.0), "0.333333");
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_format_color() {
        assert_eq!(format_color(Rgba32::rgb(255, 0, 0)), "rgb(255, 0, 0)");
        assert_eq!(format_color(Rgba32::rgba(255, 0, 0, 128)), "rgba(255, 0, 0, 0.50)");
        assert_eq!(format_color(Rgba32::TRANSPARENT), "rgba(0, 0, 0, 0.00)");
    }

    #[test]
    fn test_identifiers_stay_bare() {
        assert_eq!(quote_string_if_needed("Helvetica"), "Helvetica");
        assert_eq!(quote_string_if_needed("-webkit-x"), "-webkit-x");
        assert_eq!(quote_string_if_needed("Times New Roman"), "'Times New Roman'");
        assert_eq!(quote_string_if_needed("3d"), "'3d'");
        assert_eq!(quote_string_if_needed(""), "''");
    }

    #[test]
    fn test_quote_string_escapes() {
        assert_eq!(quote_string("it's"), "'it\\'s'");
        assert_eq!(quote_string("a\\b"), "'a\\\\b'");
        assert_eq!(quote_string("a\nb"), "'a\\a b'");
        assert_eq!(quote_string("a\nz"), "'a\\az'");
    }

    #[test]
    fn test_url_quoting() {
        assert_eq!(format_url("http://x.test/a.png"), "url(http://x.test/a.png)");
        assert_eq!(format_url("a b.png"), "url('a b.png')");
    }
}
