//! # Meridian FHIR JSON helpers
//!
//! Version-agnostic reading and writing of FHIR JSON on top of the
//! `meridian-fhir` object model.
//!
//! - **Typed models**: [`json`] wraps `serde_json` for any model type
//!   (`r4::Patient`, `r5::AnyResource`, ...). Output is always in FHIR
//!   property order, base levels first.
//! - **Runtime version**: [`parse_resource`] reads into a
//!   [`FhirResource`](meridian_fhir::FhirResource) when the version is only
//!   known at runtime, keeping the JSON path of any model error.
//!
//! ## Examples
//!
//! ```ignore
//! use meridian_serde::{from_json_str, to_json_string};
//! use meridian_fhir::r4::Patient;
//!
//! let patient: Patient = from_json_str(r#"{"id":"p","resourceType":"Patient"}"#)?;
//! assert_eq!(to_json_string(&patient)?, r#"{"resourceType":"Patient","id":"p"}"#);
//! ```

pub mod error;
pub mod json;
mod resource;

pub use error::{Result, SerdeError};

pub use json::{
    from_json_reader, from_json_slice, from_json_str, from_json_value, to_json_string,
    to_json_string_pretty, to_json_value, to_json_vec, to_json_writer,
};
pub use resource::{canonicalize, parse_resource, to_canonical_string};
