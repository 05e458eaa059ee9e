//! Numeric literal grammar for `number` and `port` fields.
//!
//! Accepts what a dynamic-language `Number("...")` conversion accepts:
//! surrounding whitespace is ignored, blank means zero, decimals take an
//! optional sign, fraction and exponent, and `0x`/`0o`/`0b` integers and
//! `Infinity` are recognized. Everything else is not a number.

use std::sync::LazyLock;

use regex::Regex;

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("decimal literal pattern is valid")
});

/// Parse `raw`, returning `None` where the conversion would yield NaN.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(n) = parse_radix(trimmed) {
        return n;
    }

    if !DECIMAL.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Whitespace and line terminators as the `Number()` conversion trims them.
/// Differs from `char::is_whitespace`: includes U+FEFF, excludes U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Prefixed integer literal. Outer `None` means no prefix; inner `None`
/// means a prefix with bad digits.
fn parse_radix(s: &str) -> Option<Option<f64>> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return Some(None);
    }
    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * f64::from(radix) + f64::from(d),
            None => return Some(None),
        }
    }
    Some(Some(value))
}
