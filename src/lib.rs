pub mod formatter;
pub mod input;
pub mod locale;
pub mod parser;
pub mod types;

// Main API
pub use formatter::{
    FALLBACK_NUMBER, FALLBACK_WITH_CURRENCY, PLACEHOLDER_CUSTOM_SUFFIX, PriceFormatter,
    format_custom, format_number_only, format_standard,
};
pub use input::{PriceInput, PriceText};
pub use locale::LocaleError;
pub use parser::parse;
pub use types::*;

#[cfg(test)]
mod tests;
