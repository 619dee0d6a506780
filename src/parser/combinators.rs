use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::token::{literal, one_of};
use winnow::{ModalResult, Parser};

/// Parse an optional sign
fn parse_sign(input: &mut &str) -> ModalResult<Option<char>> {
    opt(one_of(['+', '-'])).parse_next(input)
}

/// Parse digits with an optional fraction, requiring at least one digit
fn parse_mantissa(input: &mut &str) -> ModalResult<()> {
    alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())).parse_next(input)
}

/// Parse an exponent such as `e5` or `E-3`
fn parse_exponent(input: &mut &str) -> ModalResult<()> {
    (one_of(['e', 'E']), parse_sign, digit1)
        .void()
        .parse_next(input)
}

/// Parse the longest numeric prefix of `input` and return its text.
///
/// An incomplete exponent (`1e`, `2e+`) is left unconsumed, so `1e` yields
/// `1`.
pub fn parse_number_prefix<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    (
        parse_sign,
        alt((
            literal("Infinity").void(),
            (parse_mantissa, opt(parse_exponent)).void(),
        )),
    )
        .take()
        .parse_next(input)
}
