use crate::formatter::*;
use crate::parser::parse;
use serde_json::{Value, json};

#[test]
fn test_fallbacks_for_non_numeric_inputs() {
    let inputs: Vec<Value> = vec![
        Value::Null,
        json!("45000"),
        json!(true),
        json!({ "price": 45000 }),
        json!([45000]),
    ];
    for input in &inputs {
        assert_eq!(format_standard(input), "0,00 EUR", "input: {input}");
        assert_eq!(format_custom(input), "0,00 EUR", "input: {input}");
        assert_eq!(format_number_only(input), "0,00", "input: {input}");
    }

    assert_eq!(format_standard(None::<f64>), "0,00 EUR");
    assert_eq!(format_custom(()), "0,00 EUR");
    assert_eq!(format_number_only(f32::NAN), "0,00");
}

#[test]
fn test_parse_non_string_inputs() {
    assert_eq!(parse(45000), 0.0);
    assert_eq!(parse(45000.5_f64), 0.0);
    assert_eq!(parse(Value::Null), 0.0);
    assert_eq!(parse(json!(12)), 0.0);
    assert_eq!(parse(json!({ "price": "12,00" })), 0.0);
    assert_eq!(parse(None::<String>), 0.0);
    assert_eq!(parse(()), 0.0);
}

#[test]
fn test_standard_output_shape() {
    let formatted = format_standard(45000);
    assert!(formatted.starts_with("45"));
    assert!(formatted.contains(",00"));
    assert!(formatted.ends_with("EUR"));
    assert_ne!(formatted, "45000,00 EUR", "thousands must be grouped");
}

#[test]
fn test_number_only_round_trip() {
    for value in [0.0, 45000.0, 45000.5, 1234567.89, -12.75, -1234567.89, 0.01] {
        let formatted = format_number_only(value);
        let parsed = parse(&formatted);
        assert!(
            (parsed - value).abs() < 1e-9,
            "{value} -> {formatted} -> {parsed}"
        );
    }
}

#[test]
fn test_standard_round_trip() {
    for value in [45000.0, 1.5, -999999.99] {
        assert_eq!(parse(format_standard(value)), value);
    }
}

#[test]
fn test_repeated_round_trips_are_stable() {
    for value in [19.99, 1234.5, 45000.0, 0.1] {
        let once = parse(format_number_only(value));
        let twice = parse(format_number_only(once));
        assert_eq!(once, twice);
    }
}

#[test]
fn test_parse_examples() {
    assert_eq!(parse("45 000,00 EUR"), 45000.0);
    assert_eq!(parse("45.000,50"), 45000.5);
    assert_eq!(parse("not a number"), 0.0);
    assert_eq!(parse(""), 0.0);
}
