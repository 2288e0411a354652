//! Ordered, layer-by-layer construction and serialization.
//!
//! Every FHIR type is a stack of layers: `Element` → `BackboneElement` →
//! concrete backbone, or `Resource` → `DomainResource` → concrete resource.
//! Each layer knows only its own properties. Reading hands the raw JSON
//! object to the parent first, which removes the keys it owns; writing asks
//! the parent to append its keys first. The result is the FHIR-mandated key
//! order (base properties first, then each level's declared order) without
//! any layer knowing the properties of another.
//!
//! Keys left over once every layer has read are dropped and reported at
//! `debug` level by [`Layer::from_object`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{FhirError, Result};

/// JSON object with insertion-ordered keys.
pub type JsonObject = Map<String, Value>;

/// Name of the resource discriminant property.
pub const RESOURCE_TYPE_KEY: &str = "resourceType";

/// One level of the element/resource hierarchy.
pub trait Layer: Sized {
    /// Wire names of the properties this level declares, in FHIR order.
    /// Choice groups are listed as `name[x]`.
    const PROPERTIES: &'static [&'static str];

    /// Every property of the full chain, base level first.
    fn property_names() -> Vec<&'static str> {
        Self::PROPERTIES.to_vec()
    }

    /// Removes this level's properties (and its parents') from `raw`.
    fn read_layer(raw: &mut JsonObject) -> Result<Self>;

    /// Appends this level's properties (after its parents') to `out`.
    fn write_layer(&self, out: &mut JsonObject) -> Result<()>;

    /// Builds a complete value, dropping anything no level claimed.
    fn from_object(mut raw: JsonObject) -> Result<Self> {
        let value = Self::read_layer(&mut raw)?;
        if !raw.is_empty() {
            debug!(
                model = std::any::type_name::<Self>(),
                dropped = ?raw.keys().collect::<Vec<_>>(),
                "dropping properties not declared by any layer"
            );
        }
        Ok(value)
    }

    fn to_object(&self) -> Result<JsonObject> {
        let mut out = JsonObject::new();
        self.write_layer(&mut out)?;
        Ok(out)
    }
}

/// A value that can stand on its own in a JSON document.
pub trait FhirValue: Sized {
    fn from_json(value: Value) -> Result<Self>;
    fn to_json(&self) -> Result<Value>;
}

/// A struct field bound to one (or, for choice groups, several) JSON keys.
pub trait Property: Sized {
    fn take(raw: &mut JsonObject, key: &str) -> Result<Self>;
    fn put(&self, key: &str, out: &mut JsonObject) -> Result<()>;
}

impl<T: FhirValue> Property for Option<T> {
    fn take(raw: &mut JsonObject, key: &str) -> Result<Self> {
        match raw.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::from_json(value).map(Some).map_err(|e| e.within(key)),
        }
    }

    fn put(&self, key: &str, out: &mut JsonObject) -> Result<()> {
        if let Some(value) = self {
            let json = value.to_json().map_err(|e| e.within(key))?;
            out.insert(key.to_owned(), json);
        }
        Ok(())
    }
}

impl<T: FhirValue> FhirValue for Vec<T> {
    fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| T::from_json(item).map_err(|e| e.at_index(index)))
                .collect(),
            other => Err(FhirError::ExpectedArray {
                path: String::new(),
                found: json_kind(&other),
            }),
        }
    }

    fn to_json(&self) -> Result<Value> {
        self.iter()
            .enumerate()
            .map(|(index, item)| item.to_json().map_err(|e| e.at_index(index)))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }
}

impl<T: FhirValue> FhirValue for Box<T> {
    fn from_json(value: Value) -> Result<Self> {
        T::from_json(value).map(Box::new)
    }

    fn to_json(&self) -> Result<Value> {
        (**self).to_json()
    }
}

/// Unwraps a JSON object or reports what was found instead.
pub fn expect_object(value: Value) -> Result<JsonObject> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(FhirError::ExpectedObject {
            path: String::new(),
            found: json_kind(&other),
        }),
    }
}

/// Emits the `resourceType` discriminant; concrete resources call this
/// before any other property is written.
pub fn write_resource_type(out: &mut JsonObject, resource_type: &str) {
    out.insert(
        RESOURCE_TYPE_KEY.to_owned(),
        Value::String(resource_type.to_owned()),
    );
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// `serde::Serialize` in terms of [`FhirValue::to_json`].
pub fn serialize_value<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: FhirValue,
    S: serde::Serializer,
{
    let json = value.to_json().map_err(serde::ser::Error::custom)?;
    serde::Serialize::serialize(&json, serializer)
}

/// `serde::Deserialize` in terms of [`FhirValue::from_json`].
pub fn deserialize_value<'de, T, D>(deserializer: D) -> std::result::Result<T, D::Error>
where
    T: FhirValue,
    D: serde::Deserializer<'de>,
{
    let json = <Value as serde::Deserialize>::deserialize(deserializer)?;
    T::from_json(json).map_err(serde::de::Error::custom)
}

/// Decodes a primitive through its serde implementation.
pub(crate) fn decode_primitive<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| FhirError::decode(e))
}
