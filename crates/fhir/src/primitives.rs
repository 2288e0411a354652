//! FHIR primitive types as Rust values.
//!
//! | FHIR | Rust |
//! |------|------|
//! | string, code, uri, url, canonical, id, oid, uuid, markdown, base64Binary, date, dateTime, instant, time, xhtml | `String` |
//! | boolean | `bool` |
//! | integer | `i32` |
//! | positiveInt, unsignedInt | `u32` |
//! | decimal | [`rust_decimal::Decimal`] (textual precision preserved) |
//! | integer64 (R5) | [`Integer64`] (a JSON string on the wire) |
//!
//! Date and time primitives stay textual: FHIR allows partial precision
//! (`2024`, `2024-05`) that no fixed chrono type represents.

use std::fmt;
use std::str::FromStr;

pub use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::{FhirError, Result};
use crate::layer::{FhirValue, decode_primitive};

macro_rules! serde_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FhirValue for $ty {
                fn from_json(value: Value) -> Result<Self> {
                    decode_primitive(value)
                }

                fn to_json(&self) -> Result<Value> {
                    Ok(serde_json::to_value(self)?)
                }
            }
        )*
    };
}

serde_primitive!(String, bool, i32, u32);

impl FhirValue for Decimal {
    fn from_json(value: Value) -> Result<Self> {
        rust_decimal::serde::arbitrary_precision::deserialize(value)
            .map_err(|e| FhirError::decode(e))
    }

    fn to_json(&self) -> Result<Value> {
        Ok(rust_decimal::serde::arbitrary_precision::serialize(
            self,
            serde_json::value::Serializer,
        )?)
    }
}

/// Parses an `instant` (RFC 3339 with a zone) into UTC.
pub fn parse_instant(text: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|instant| instant.with_timezone(&chrono::Utc))
}

/// A signed 64-bit integer, serialized as a JSON string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer64(pub i64);

impl From<i64> for Integer64 {
    fn from(value: i64) -> Self {
        Integer64(value)
    }
}

impl From<Integer64> for i64 {
    fn from(value: Integer64) -> Self {
        value.0
    }
}

impl fmt::Display for Integer64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Integer64 {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse().map(Integer64)
    }
}

impl FhirValue for Integer64 {
    fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => text.parse().map_err(|_| FhirError::InvalidInteger64 {
                path: String::new(),
                value: text,
            }),
            // Lenient: some producers emit integer64 as a bare number.
            Value::Number(number) => {
                number
                    .as_i64()
                    .map(Integer64)
                    .ok_or_else(|| FhirError::InvalidInteger64 {
                        path: String::new(),
                        value: number.to_string(),
                    })
            }
            other => Err(FhirError::decode(format!(
                "expected an integer64 string, found {}",
                crate::layer::json_kind(&other)
            ))),
        }
    }

    fn to_json(&self) -> Result<Value> {
        Ok(Value::String(self.0.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn decimal_keeps_trailing_zeros() {
        let value = Decimal::from_json(json!(1.50)).unwrap();
        assert_eq!(value, dec!(1.5));
        let raw: Value = serde_json::from_str("1.50").unwrap();
        let value = Decimal::from_json(raw).unwrap();
        assert_eq!(serde_json::to_string(&value.to_json().unwrap()).unwrap(), "1.50");
    }

    #[test]
    fn instants_are_normalized_to_utc() {
        let at = parse_instant("2024-05-01T12:00:00+02:00").unwrap();
        assert_eq!(at.timestamp(), 1_714_557_600);
        assert_eq!(parse_instant("2024-05-01"), None);
    }

    #[test]
    fn integer64_is_a_string_on_the_wire() {
        let value = Integer64::from_json(json!("9007199254740993")).unwrap();
        assert_eq!(value, Integer64(9_007_199_254_740_993));
        assert_eq!(value.to_json().unwrap(), json!("9007199254740993"));
    }

    #[test]
    fn integer64_rejects_garbage() {
        let err = Integer64::from_json(json!("12a")).unwrap_err();
        assert!(matches!(err, FhirError::InvalidInteger64 { .. }));
    }

    #[test]
    fn strings_reject_numbers() {
        let err = String::from_json(json!(5)).unwrap_err();
        assert!(matches!(err, FhirError::Decode { .. }));
    }
}
