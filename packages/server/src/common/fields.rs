//! Field deserializers for request bodies.
//!
//! Clients (the browser pages, curl users) are loose about JSON types, so
//! numeric fields accept numeric strings and nullable fields tell "absent"
//! apart from "null".

use serde::{de, Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Default for numeric body fields.
pub fn zero() -> Number {
    Number::from(0)
}

/// A number, or a string holding one (`"20"`, `" 2.5 "`). `null` reads as 0.
pub fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Number, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => Ok(n),
        Value::String(s) => serde_json::from_str::<Number>(s.trim())
            .map_err(|_| de::Error::custom(format!("expected a number, got \"{}\"", s))),
        Value::Null => Ok(Number::from(0)),
        other => Err(de::Error::custom(format!("expected a number, got {}", other))),
    }
}

/// [`lenient_number`] for optional fields; pair with `#[serde(default)]`.
pub fn lenient_number_opt<'de, D>(deserializer: D) -> std::result::Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_number(deserializer).map(Some)
}

/// Marks a field as present, keeping an explicit `null` as `Some(None)`.
/// Pair with `#[serde(default)]` so an absent field stays `None`.
pub fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default = "zero", deserialize_with = "lenient_number")]
        count: Number,
        #[serde(default, deserialize_with = "lenient_number_opt")]
        weight: Option<Number>,
        #[serde(default, deserialize_with = "present")]
        title: Option<Option<String>>,
    }

    fn parse(json: &str) -> std::result::Result<Body, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_numbers_keep_their_form() {
        let body = parse(r#"{"count": 3, "weight": 2.5}"#).unwrap();
        assert_eq!(body.count, Number::from(3));
        assert_eq!(body.weight.and_then(|w| w.as_f64()), Some(2.5));
    }

    #[test]
    fn test_numeric_strings_and_null() {
        let body = parse(r#"{"count": " 20 ", "weight": null}"#).unwrap();
        assert_eq!(body.count, Number::from(20));
        assert_eq!(body.weight, Some(Number::from(0)));
    }

    #[test]
    fn test_absent_fields_use_defaults() {
        let body = parse("{}").unwrap();
        assert_eq!(body.count, Number::from(0));
        assert_eq!(body.weight, None);
        assert_eq!(body.title, None);
    }

    #[test]
    fn test_null_is_present() {
        assert_eq!(parse(r#"{"title": null}"#).unwrap().title, Some(None));
        assert_eq!(
            parse(r#"{"title": "x"}"#).unwrap().title,
            Some(Some("x".to_string()))
        );
    }

    #[test]
    fn test_non_numeric_text_is_rejected() {
        let err = parse(r#"{"count": "lots"}"#).unwrap_err();
        assert!(err.to_string().contains("expected a number"));
    }
}
