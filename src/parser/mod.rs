//! Price parsing module
//!
//! This module turns formatted price strings back into numbers. The main
//! entry point is the [`parse`] function.

mod combinators;

use crate::input::PriceText;

pub use combinators::parse_number_prefix;

/// Currency token stripped before parsing
const CURRENCY_TOKEN: &str = "EUR";

/// Parse a formatted price into a number.
///
/// The currency code, whitespace and dot group separators are removed and the
/// decimal comma becomes a dot before the leading numeric prefix is read.
/// Text without a numeric prefix and non-textual input give `0.0`.
///
/// Dots are always treated as group separators, so a dot used as decimal
/// separator is lost: `"12.50"` parses as `1250.0`.
///
/// # Examples
/// ```
/// use price_format::parse;
///
/// assert_eq!(parse("45 000,00 EUR"), 45000.0);
/// assert_eq!(parse("45.000,50"), 45000.5);
/// assert_eq!(parse("not a number"), 0.0);
/// assert_eq!(parse(42), 0.0);
/// ```
pub fn parse(formatted_price: impl PriceText) -> f64 {
    parse_price(formatted_price.as_price_text())
}

pub(crate) fn parse_price(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        tracing::debug!("formatted price is not text, using fallback");
        return 0.0;
    };

    let cleaned = clean_price_text(text);
    tracing::trace!(input = text, cleaned = %cleaned, "cleaned price text");

    let value = parse_leading_float(&cleaned);
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Apply the cleanup steps in order: drop the currency token, drop
/// whitespace, drop dots, turn commas into dots.
fn clean_price_text(text: &str) -> String {
    text.replace(CURRENCY_TOKEN, "")
        .chars()
        .filter(|&c| !is_price_whitespace(c) && c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// Whitespace as understood by regex `\s`: Unicode White_Space without NEL,
/// plus the byte order mark.
fn is_price_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Read the leading numeric prefix of `text`, NaN when there is none
fn parse_leading_float(text: &str) -> f64 {
    let mut input = text;
    let Ok(number) = parse_number_prefix(&mut input) else {
        return f64::NAN;
    };

    let (negative, unsigned) = match number.as_bytes().first() {
        Some(b'-') => (true, &number[1..]),
        Some(b'+') => (false, &number[1..]),
        _ => (false, number),
    };

    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else {
        unsigned.parse::<f64>().unwrap_or(f64::NAN)
    };

    if negative { -magnitude } else { magnitude }
}
