//! Type definitions for price formatting
//!
//! This module defines the locale settings that drive the renderer. Values are
//! normally loaded from the embedded locale table (see [`crate::locale`]), but
//! the constructors here carry the same data so formatting stays deterministic
//! even when the table is unavailable.

/// How the currency is shown next to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyDisplay {
    /// No currency label
    #[default]
    None,
    /// ISO code after the number, e.g. `45 000,00 EUR`
    CodeSuffix,
}

impl CurrencyDisplay {
    /// Parse the `currency_display` value used in locale data
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(CurrencyDisplay::None),
            "code" => Some(CurrencyDisplay::CodeSuffix),
            _ => None,
        }
    }
}

/// Locale-specific settings used when rendering a price
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
    /// Decimal separator
    pub decimal_point: char,
    /// Digit group separator
    pub thousands_separator: char,
    /// Sign placed before negative values
    pub minus_sign: char,
    /// Symbol rendered for infinite values
    pub infinity_symbol: String,
    /// ISO currency code
    pub currency_code: String,
    /// Text between the number and the currency label
    pub currency_spacing: String,
    /// Currency display style
    pub currency_display: CurrencyDisplay,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            decimal_point: ',',
            thousands_separator: '.',
            minus_sign: '-',
            infinity_symbol: "∞".to_string(),
            currency_code: "EUR".to_string(),
            currency_spacing: " ".to_string(),
            currency_display: CurrencyDisplay::None,
        }
    }
}

impl LocaleSettings {
    /// French (Morocco) settings used by the standard currency format
    pub fn fr_ma() -> Self {
        Self {
            thousands_separator: '\u{202F}',
            currency_spacing: "\u{A0}".to_string(),
            currency_display: CurrencyDisplay::CodeSuffix,
            ..Self::default()
        }
    }

    /// French (France) settings used by the number-only and custom formats
    pub fn fr_fr() -> Self {
        Self::default()
    }

    /// Set the decimal separator
    pub fn with_decimal_point(mut self, decimal_point: char) -> Self {
        self.decimal_point = decimal_point;
        self
    }

    /// Set the group separator
    pub fn with_thousands_separator(mut self, separator: char) -> Self {
        self.thousands_separator = separator;
        self
    }

    /// Set the currency code
    pub fn with_currency_code(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    /// Set the currency display style
    pub fn with_currency_display(mut self, display: CurrencyDisplay) -> Self {
        self.currency_display = display;
        self
    }
}
