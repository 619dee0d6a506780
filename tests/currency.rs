#[cfg(test)]
mod tests {
    use price_format::locale::{LocaleTable, get_locale_settings, list_available_locales};
    use price_format::{LocaleError, PriceFormatter, parse};

    // Helper building a formatter whose standard locale comes from TOML text
    fn formatter_from_toml(toml: &str, locale_id: &str) -> Result<PriceFormatter, LocaleError> {
        let table = LocaleTable::from_toml_str(toml)?;
        let settings = table.settings(locale_id)?.clone();
        Ok(PriceFormatter::new().with_standard_locale(settings))
    }

    #[test]
    fn test_embedded_locales() {
        assert_eq!(list_available_locales(), vec!["fr_FR", "fr_MA"]);
        let fr_ma = get_locale_settings("fr_MA").unwrap();
        assert_eq!(fr_ma.currency_code, "EUR");
        assert_eq!(fr_ma.thousands_separator, '\u{202F}');
        assert_eq!(fr_ma.currency_spacing, "\u{A0}");
    }

    #[test]
    fn test_currency_code_from_locale_data() -> Result<(), LocaleError> {
        let formatter = formatter_from_toml(
            r#"
            [fr_MA]
            group = " "
            currency_code = "EUR"
            currency_display = "code"
            "#,
            "fr_MA",
        )?;
        assert_eq!(formatter.format_standard(45000.0), "45 000,00 EUR");
        assert_eq!(parse(formatter.format_standard(45000.0)), 45000.0);
        Ok(())
    }

    #[test]
    fn test_locale_without_currency() -> Result<(), LocaleError> {
        let formatter = formatter_from_toml("[plain]\ncurrency_display = \"none\"", "plain")?;
        assert_eq!(formatter.format_standard(1234.5), "1.234,50");
        Ok(())
    }

    #[test]
    fn test_missing_locale() {
        let result = formatter_from_toml("[fr_FR]", "fr_MA");
        assert_eq!(result, Err(LocaleError::NotFound("fr_MA".to_string())));
        assert_eq!(
            LocaleError::NotFound("fr_MA".to_string()).to_string(),
            "Locale not found: fr_MA"
        );
    }

    #[test]
    fn test_fallback_ignores_locale() -> Result<(), LocaleError> {
        let formatter = formatter_from_toml(
            "[x]\ncurrency_code = \"CHF\"\ncurrency_display = \"code\"",
            "x",
        )?;
        assert_eq!(formatter.format_standard(f64::NAN), "0,00 EUR");
        assert_eq!(formatter.format_standard(1.0), "1,00 CHF");
        Ok(())
    }
}
