//! Version-aware parsing into [`FhirResource`] and canonical re-encoding.

use meridian_fhir::{FhirResource, FhirVersion};
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Parses a JSON document as a resource of `version`.
///
/// Unlike going through `serde::Deserialize`, model errors keep their
/// structured form, including the JSON path of the offending property.
///
/// ```rust
/// # #[cfg(feature = "R4")]
/// # {
/// use meridian_fhir::FhirVersion;
/// use meridian_serde::{SerdeError, parse_resource};
///
/// let resource = parse_resource(FhirVersion::R4, r#"{"resourceType":"Basic","id":"b"}"#).unwrap();
/// assert_eq!(resource.resource_type(), "Basic");
///
/// let err = parse_resource(FhirVersion::R4, r#"{"resourceType":"Basic","id":7}"#).unwrap_err();
/// assert!(matches!(err, SerdeError::Fhir(_)));
/// # }
/// ```
pub fn parse_resource(version: FhirVersion, text: &str) -> Result<FhirResource> {
    let raw: Value = serde_json::from_str(text)?;
    let resource = FhirResource::from_json(version, raw)?;
    debug!(
        fhir_version = %version,
        resource_type = resource.resource_type(),
        id = resource.id().unwrap_or_default(),
        "parsed resource"
    );
    Ok(resource)
}

/// Writes a resource in canonical property order.
pub fn to_canonical_string(resource: &FhirResource, pretty: bool) -> Result<String> {
    let value = resource.to_json()?;
    let text = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

/// Parses `text` and writes it back in canonical property order.
///
/// Properties the version does not declare are dropped along the way.
pub fn canonicalize(version: FhirVersion, text: &str, pretty: bool) -> Result<String> {
    let resource = parse_resource(version, text)?;
    to_canonical_string(&resource, pretty)
}
