//! Locale support for price formatting
//!
//! This module loads the locale-specific settings used by the formatters
//! from embedded TOML data. Only the two locales the formatters need are
//! shipped: `fr_MA` for the standard currency format and `fr_FR` for the
//! dot-grouped number format.

use std::collections::HashMap;
use std::sync::OnceLock;

use thiserror::Error;

use crate::types::{CurrencyDisplay, LocaleSettings};

/// Locale used by the standard currency format
pub const STANDARD_LOCALE: &str = "fr_MA";

/// Locale used by the number-only and custom formats
pub const NUMBER_LOCALE: &str = "fr_FR";

/// Error type for locale operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocaleError {
    /// The specified locale was not found
    #[error("Locale not found: {0}")]
    NotFound(String),
    /// An error occurred while parsing locale data
    #[error("Error parsing locale data: {0}")]
    ParseError(String),
}

type Result<T> = std::result::Result<T, LocaleError>;

/// A set of locale settings keyed by locale identifier
#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
    locale_settings: HashMap<String, LocaleSettings>,
}

// Global table built from the embedded data
static LOCALE_TABLE: OnceLock<LocaleTable> = OnceLock::new();

impl LocaleTable {
    /// Build a table from TOML text in the embedded locale format.
    ///
    /// The optional `[base]` table provides defaults; every other top-level
    /// table is a locale whose keys override the base.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        let mut base_settings = LocaleSettings::default();
        if let Some(base) = table.get("base") {
            apply_locale_settings(&mut base_settings, "base", base)?;
        }

        let mut locale_settings = HashMap::new();
        for (locale_id, value) in table {
            if locale_id == "base" {
                continue;
            }

            let mut settings = base_settings.clone();
            apply_locale_settings(&mut settings, locale_id, value)?;
            locale_settings.insert(locale_id.to_string(), settings);
        }

        Ok(Self { locale_settings })
    }

    /// Load the embedded locale data
    fn embedded() -> Self {
        let locales_toml = include_str!("locale/locales.toml");
        match Self::from_toml_str(locales_toml) {
            Ok(table) => table,
            Err(e) => {
                tracing::error!("Failed to load embedded locale data: {}", e);
                Self::default()
            }
        }
    }

    /// Get the global table instance
    fn get() -> &'static Self {
        LOCALE_TABLE.get_or_init(Self::embedded)
    }

    /// Get locale settings by identifier
    pub fn settings(&self, locale_id: &str) -> Result<&LocaleSettings> {
        self.locale_settings
            .get(locale_id)
            .ok_or_else(|| LocaleError::NotFound(locale_id.to_string()))
    }

    /// Identifiers of all locales in the table, sorted
    pub fn locale_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.locale_settings.keys().cloned().collect();
        ids.sort();
        ids
    }
}

/// Apply the keys of one TOML locale table onto `settings`
fn apply_locale_settings(
    settings: &mut LocaleSettings,
    locale_id: &str,
    value: &toml::Value,
) -> Result<()> {
    let table = value.as_table().ok_or_else(|| {
        LocaleError::ParseError(format!("Locale setting {} is not a table", locale_id))
    })?;

    let single_char = |key: &str| -> Result<Option<char>> {
        match table.get(key) {
            None => Ok(None),
            Some(v) => {
                let s = v.as_str().ok_or_else(|| {
                    LocaleError::ParseError(format!("{}.{} is not a string", locale_id, key))
                })?;
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Some(c)),
                    _ => Err(LocaleError::ParseError(format!(
                        "{}.{} must be a single character",
                        locale_id, key
                    ))),
                }
            }
        }
    };

    let string = |key: &str| -> Result<Option<String>> {
        match table.get(key) {
            None => Ok(None),
            Some(v) => v.as_str().map(|s| Some(s.to_string())).ok_or_else(|| {
                LocaleError::ParseError(format!("{}.{} is not a string", locale_id, key))
            }),
        }
    };

    if let Some(c) = single_char("decimal")? {
        settings.decimal_point = c;
    }
    if let Some(c) = single_char("group")? {
        settings.thousands_separator = c;
    }
    if let Some(c) = single_char("minus")? {
        settings.minus_sign = c;
    }
    if let Some(s) = string("infinity")? {
        settings.infinity_symbol = s;
    }
    if let Some(s) = string("currency_code")? {
        settings.currency_code = s;
    }
    if let Some(s) = string("currency_spacing")? {
        settings.currency_spacing = s;
    }
    if let Some(s) = string("currency_display")? {
        settings.currency_display = CurrencyDisplay::from_name(&s).ok_or_else(|| {
            LocaleError::ParseError(format!(
                "Unknown currency_display '{}' in {}",
                s, locale_id
            ))
        })?;
    }

    Ok(())
}

/// Get locale settings by locale identifier (e.g., "fr_MA", "fr_FR")
pub fn get_locale_settings(locale_id: &str) -> Option<LocaleSettings> {
    LocaleTable::get().settings(locale_id).ok().cloned()
}

/// List all available locale identifiers
pub fn list_available_locales() -> Vec<String> {
    LocaleTable::get().locale_ids()
}

/// Settings for the standard currency format
pub(crate) fn standard_locale() -> LocaleSettings {
    get_locale_settings(STANDARD_LOCALE).unwrap_or_else(LocaleSettings::fr_ma)
}

/// Settings for the number-only and custom formats
pub(crate) fn number_locale() -> LocaleSettings {
    get_locale_settings(NUMBER_LOCALE).unwrap_or_else(LocaleSettings::fr_fr)
}
