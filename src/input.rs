//! Inputs accepted at the formatting boundary
//!
//! Prices often arrive from loosely typed sources (JSON payloads, optional
//! form fields). [`PriceInput`] and [`PriceText`] describe which of those
//! values count as a number or as text; everything else takes the fallback
//! path of the operation instead of producing an error.

use std::borrow::Cow;

use serde_json::Value;

/// A value that may carry a numeric price
pub trait PriceInput {
    /// The numeric value, or `None` when the input is not numeric-typed.
    ///
    /// NaN is returned as-is; the formatters treat it as invalid.
    fn as_price(&self) -> Option<f64>;
}

/// A value that may carry a formatted price string
pub trait PriceText {
    /// The text, or `None` when the input is not textual
    fn as_price_text(&self) -> Option<&str>;
}

macro_rules! impl_price_input_for_numbers {
    ($($t:ty),*) => {
        $(
            impl PriceInput for $t {
                fn as_price(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }

            impl PriceText for $t {
                fn as_price_text(&self) -> Option<&str> {
                    None
                }
            }
        )*
    };
}

impl_price_input_for_numbers!(
    f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<T: PriceInput + ?Sized> PriceInput for &T {
    fn as_price(&self) -> Option<f64> {
        (**self).as_price()
    }
}

impl<T: PriceInput> PriceInput for Option<T> {
    fn as_price(&self) -> Option<f64> {
        self.as_ref().and_then(PriceInput::as_price)
    }
}

impl PriceInput for Value {
    fn as_price(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }
}

impl PriceInput for str {
    fn as_price(&self) -> Option<f64> {
        None
    }
}

impl PriceInput for String {
    fn as_price(&self) -> Option<f64> {
        None
    }
}

impl PriceInput for bool {
    fn as_price(&self) -> Option<f64> {
        None
    }
}

impl PriceInput for () {
    fn as_price(&self) -> Option<f64> {
        None
    }
}

impl<T: PriceText + ?Sized> PriceText for &T {
    fn as_price_text(&self) -> Option<&str> {
        (**self).as_price_text()
    }
}

impl<T: PriceText> PriceText for Option<T> {
    fn as_price_text(&self) -> Option<&str> {
        self.as_ref().and_then(PriceText::as_price_text)
    }
}

impl PriceText for str {
    fn as_price_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl PriceText for String {
    fn as_price_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl PriceText for Cow<'_, str> {
    fn as_price_text(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl PriceText for Value {
    fn as_price_text(&self) -> Option<&str> {
        self.as_str()
    }
}

impl PriceText for bool {
    fn as_price_text(&self) -> Option<&str> {
        None
    }
}

impl PriceText for () {
    fn as_price_text(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_inputs() {
        assert_eq!(45000.5_f64.as_price(), Some(45000.5));
        assert_eq!(12_i32.as_price(), Some(12.0));
        assert_eq!(Some(3_u8).as_price(), Some(3.0));
        assert_eq!(json!(19.99).as_price(), Some(19.99));
        assert!(f64::NAN.as_price().unwrap().is_nan());
    }

    #[test]
    fn test_non_numeric_inputs() {
        assert_eq!(None::<f64>.as_price(), None);
        assert_eq!("45000".as_price(), None);
        assert_eq!(String::from("12").as_price(), None);
        assert_eq!(true.as_price(), None);
        assert_eq!(().as_price(), None);
        assert_eq!(Value::Null.as_price(), None);
        assert_eq!(json!("45000").as_price(), None);
        assert_eq!(json!({ "amount": 10 }).as_price(), None);
        assert_eq!(json!([1, 2]).as_price(), None);
    }

    #[test]
    fn test_text_inputs() {
        assert_eq!("1,00".as_price_text(), Some("1,00"));
        assert_eq!(Some(String::from("2,00")).as_price_text(), Some("2,00"));
        assert_eq!(Cow::Borrowed("3,00").as_price_text(), Some("3,00"));
        assert_eq!(json!("4,00").as_price_text(), Some("4,00"));
        assert_eq!(42_i64.as_price_text(), None);
        assert_eq!(None::<&str>.as_price_text(), None);
        assert_eq!(Value::Null.as_price_text(), None);
        assert_eq!(json!(4.0).as_price_text(), None);
    }
}
