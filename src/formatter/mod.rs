//! Price formatting module
//!
//! This module renders prices as French-locale strings. The main entry points
//! are [`format_standard`], [`format_custom`] and [`format_number_only`]; each
//! is total and returns a fallback string for inputs that are not numbers.

mod render;

use std::sync::OnceLock;

use crate::input::{PriceInput, PriceText};
use crate::locale;
use crate::parser;
use crate::types::LocaleSettings;

use self::render::{append_currency, format_fixed};

/// Suffix appended by [`format_custom`].
///
/// This is the placeholder text carried over from the storefront this
/// formatter serves; it is not a currency label. Integrators that need a real
/// label should build a [`PriceFormatter`] with
/// [`PriceFormatter::with_custom_suffix`] until product confirms the wording.
pub const PLACEHOLDER_CUSTOM_SUFFIX: &str = "guegue solita";

/// Returned by the currency formats for non-numeric input
pub const FALLBACK_WITH_CURRENCY: &str = "0,00 EUR";

/// Returned by [`format_number_only`] for non-numeric input
pub const FALLBACK_NUMBER: &str = "0,00";

static DEFAULT_FORMATTER: OnceLock<PriceFormatter> = OnceLock::new();

/// Formats and parses EUR prices.
///
/// The default instance uses the embedded `fr_MA` settings for the standard
/// format, `fr_FR` for the number-only and custom formats, and
/// [`PLACEHOLDER_CUSTOM_SUFFIX`] as custom suffix.
///
/// # Examples
/// ```
/// use price_format::PriceFormatter;
///
/// let formatter = PriceFormatter::new().with_custom_suffix("euros");
/// assert_eq!(formatter.format_custom(45000.0), "45.000,00 euros");
/// assert_eq!(formatter.parse("45.000,00"), 45000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PriceFormatter {
    standard_locale: LocaleSettings,
    number_locale: LocaleSettings,
    custom_suffix: String,
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self {
            standard_locale: locale::standard_locale(),
            number_locale: locale::number_locale(),
            custom_suffix: PLACEHOLDER_CUSTOM_SUFFIX.to_string(),
        }
    }
}

impl PriceFormatter {
    /// Create a formatter with the embedded locale settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared default instance used by the free functions
    pub fn shared() -> &'static Self {
        DEFAULT_FORMATTER.get_or_init(Self::default)
    }

    /// Replace the suffix appended by [`PriceFormatter::format_custom`]
    pub fn with_custom_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.custom_suffix = suffix.into();
        self
    }

    /// Replace the settings used by [`PriceFormatter::format_standard`]
    pub fn with_standard_locale(mut self, settings: LocaleSettings) -> Self {
        self.standard_locale = settings;
        self
    }

    /// Replace the settings used by the number-only and custom formats
    pub fn with_number_locale(mut self, settings: LocaleSettings) -> Self {
        self.number_locale = settings;
        self
    }

    /// The suffix appended by [`PriceFormatter::format_custom`]
    pub fn custom_suffix(&self) -> &str {
        &self.custom_suffix
    }

    /// Format with grouped thousands, two decimals and the currency code
    pub fn format_standard(&self, price: impl PriceInput) -> String {
        match valid_price(&price) {
            Some(value) => append_currency(
                format_fixed(value, &self.standard_locale),
                &self.standard_locale,
            ),
            None => FALLBACK_WITH_CURRENCY.to_string(),
        }
    }

    /// Format with dot-grouped thousands followed by the custom suffix
    pub fn format_custom(&self, price: impl PriceInput) -> String {
        match valid_price(&price) {
            Some(value) => {
                let mut formatted = format_fixed(value, &self.number_locale);
                formatted.push(' ');
                formatted.push_str(&self.custom_suffix);
                formatted
            }
            None => FALLBACK_WITH_CURRENCY.to_string(),
        }
    }

    /// Format with dot-grouped thousands and no currency label
    pub fn format_number_only(&self, price: impl PriceInput) -> String {
        match valid_price(&price) {
            Some(value) => format_fixed(value, &self.number_locale),
            None => FALLBACK_NUMBER.to_string(),
        }
    }

    /// Parse a formatted price back into a number, `0.0` when unparseable
    pub fn parse(&self, formatted_price: impl PriceText) -> f64 {
        parser::parse_price(formatted_price.as_price_text())
    }
}

/// The numeric value of `price`, or `None` when it must take the fallback
fn valid_price<P: PriceInput>(price: &P) -> Option<f64> {
    match price.as_price() {
        Some(value) if !value.is_nan() => Some(value),
        Some(_) => {
            tracing::debug!("price is NaN, using fallback");
            None
        }
        None => {
            tracing::debug!("price is not numeric, using fallback");
            None
        }
    }
}

/// Format a price in the standard EUR format, e.g. `45 000,00 EUR`.
///
/// Digits are grouped with a narrow no-break space and the code is separated
/// by a no-break space. Non-numeric input and NaN give `"0,00 EUR"`.
///
/// # Examples
/// ```
/// use price_format::format_standard;
///
/// assert_eq!(format_standard(45000.0), "45\u{202F}000,00\u{A0}EUR");
/// assert_eq!(format_standard(f64::NAN), "0,00 EUR");
/// ```
pub fn format_standard(price: impl PriceInput) -> String {
    PriceFormatter::shared().format_standard(price)
}

/// Format a price with dot grouping and [`PLACEHOLDER_CUSTOM_SUFFIX`].
///
/// Non-numeric input and NaN give `"0,00 EUR"`.
pub fn format_custom(price: impl PriceInput) -> String {
    PriceFormatter::shared().format_custom(price)
}

/// Format a price without currency, e.g. `45.000,00`.
///
/// Non-numeric input and NaN give `"0,00"`.
///
/// # Examples
/// ```
/// use price_format::format_number_only;
///
/// assert_eq!(format_number_only(1234567.891), "1.234.567,89");
/// assert_eq!(format_number_only(None::<f64>), "0,00");
/// ```
pub fn format_number_only(price: impl PriceInput) -> String {
    PriceFormatter::shared().format_number_only(price)
}
