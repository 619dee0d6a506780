use crate::types::{CurrencyDisplay, LocaleSettings};

/// Number of fractional digits every price is rendered with
const FRACTION_DIGITS: usize = 2;

/// Render `value` with two fractional digits and the locale's separators.
///
/// Rounding is half up on the shortest decimal form of the `f64` (the digits
/// `Display` prints), so `1.005` gives `1,01` even though it is stored as
/// `1.00499...`.
/// The sign follows the sign bit, so `-0.0` and negatives rounding to zero
/// keep their minus sign.
pub(crate) fn format_fixed(value: f64, locale: &LocaleSettings) -> String {
    let mut result = String::new();
    if value.is_sign_negative() {
        result.push(locale.minus_sign);
    }

    if value.is_infinite() {
        result.push_str(&locale.infinity_symbol);
        return result;
    }

    let (integer_digits, decimal_digits) = round_digits(value.abs());

    let mut formatted_integer_part_vec: Vec<char> =
        Vec::with_capacity(integer_digits.len() + integer_digits.len() / 3);
    for (i, digit) in integer_digits.iter().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            formatted_integer_part_vec.push(locale.thousands_separator);
        }
        formatted_integer_part_vec.push(char::from(b'0' + digit));
    }
    formatted_integer_part_vec.reverse();

    result.extend(formatted_integer_part_vec);
    result.push(locale.decimal_point);
    result.extend(decimal_digits.iter().map(|d| char::from(b'0' + d)));
    result
}

/// Append the locale's currency label to an already formatted number
pub(crate) fn append_currency(mut formatted: String, locale: &LocaleSettings) -> String {
    match locale.currency_display {
        CurrencyDisplay::None => {}
        CurrencyDisplay::CodeSuffix => {
            formatted.push_str(&locale.currency_spacing);
            formatted.push_str(&locale.currency_code);
        }
    }
    formatted
}

/// Split a finite, non-negative value into integer digits and exactly
/// [`FRACTION_DIGITS`] rounded fractional digits (values `0..=9`).
fn round_digits(abs_value: f64) -> (Vec<u8>, Vec<u8>) {
    // Display never switches to exponent notation for f64
    let expansion = format!("{}", abs_value);
    let (int_str, frac_str) = expansion
        .split_once('.')
        .unwrap_or((expansion.as_str(), ""));

    let mut integer_digits: Vec<u8> = int_str.bytes().map(|b| b - b'0').collect();
    let frac: Vec<u8> = frac_str.bytes().map(|b| b - b'0').collect();

    let mut decimal_digits: Vec<u8> = (0..FRACTION_DIGITS)
        .map(|i| frac.get(i).copied().unwrap_or(0))
        .collect();

    let round_up = frac.get(FRACTION_DIGITS).is_some_and(|&d| d >= 5);
    if round_up {
        let mut carry = true;
        for digit in decimal_digits.iter_mut().rev() {
            if !carry {
                break;
            }
            *digit += 1;
            if *digit == 10 {
                *digit = 0;
            } else {
                carry = false;
            }
        }
        for digit in integer_digits.iter_mut().rev() {
            if !carry {
                break;
            }
            *digit += 1;
            if *digit == 10 {
                *digit = 0;
            } else {
                carry = false;
            }
        }
        if carry {
            integer_digits.insert(0, 1);
        }
    }

    (integer_digits, decimal_digits)
}
