//! JSON serialization wrapper functions for FHIR models.
//!
//! Thin wrappers around `serde_json`. Every model's `Serialize` and
//! `Deserialize` impls go through its ordered layer reader and writer, so
//! these functions produce canonical property order for any model type.
use std::io::{Read, Write};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Deserialize a FHIR model from a JSON string.
///
/// # Examples
///
/// ```ignore
/// use meridian_serde::json::from_json_str;
/// use meridian_fhir::r4::Patient;
///
/// let json = r#"{"resourceType": "Patient", "id": "example"}"#;
/// let patient: Patient = from_json_str(json)?;
/// ```
pub fn from_json_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_str(s)?)
}

/// Deserialize a FHIR model from a JSON byte slice.
pub fn from_json_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_slice(v)?)
}

/// Deserialize a FHIR model from a `serde_json::Value`.
///
/// # Examples
///
/// ```ignore
/// use meridian_serde::json::from_json_value;
/// use meridian_fhir::r4::Patient;
/// use serde_json::json;
///
/// let json_value = json!({"resourceType": "Patient", "id": "example"});
/// let patient: Patient = from_json_value(json_value)?;
/// ```
pub fn from_json_value<T>(value: serde_json::Value) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(value)?)
}

/// Deserialize a FHIR model from any reader (a file, stdin).
pub fn from_json_reader<T, R>(reader: R) -> Result<T>
where
    T: DeserializeOwned,
    R: Read,
{
    Ok(serde_json::from_reader(reader)?)
}

/// Serialize a FHIR model to a compact JSON string.
///
/// # Examples
///
/// ```ignore
/// use meridian_serde::json::to_json_string;
/// use meridian_fhir::r4::Patient;
///
/// let patient = Patient::default();
/// let json = to_json_string(&patient)?;
/// assert_eq!(json, r#"{"resourceType":"Patient"}"#);
/// ```
pub fn to_json_string<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(value)?)
}

/// Serialize a FHIR model to a pretty-printed JSON string.
pub fn to_json_string_pretty<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize a FHIR model to a JSON byte vector.
pub fn to_json_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_vec(value)?)
}

/// Serialize a FHIR model to a `serde_json::Value`.
pub fn to_json_value<T>(value: &T) -> Result<serde_json::Value>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_value(value)?)
}

/// Serialize a FHIR model into a writer, optionally pretty-printed.
pub fn to_json_writer<T, W>(writer: W, value: &T, pretty: bool) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    if pretty {
        serde_json::to_writer_pretty(writer, value)?;
    } else {
        serde_json::to_writer(writer, value)?;
    }
    Ok(())
}
