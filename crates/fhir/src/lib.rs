//! # Meridian FHIR object model
//!
//! Strongly typed Rust representations of FHIR R4, R4B and R5 built around
//! a small, generic core:
//!
//! - [`base`]: the four base levels (`Element`, `BackboneElement`,
//!   `Resource`, `DomainResource`), generic over each version's types.
//! - [`layer`]: ordered, level-by-level reading and writing of raw JSON.
//!   Output always lists base-level properties first, then each level's own
//!   properties in FHIR order.
//! - [`choice`]: `name[x]` choice groups as single sum-typed fields.
//! - [`builder`]: fluent builders over an owned staging model.
//! - [`r4`], [`r4b`], [`r5`]: one instantiation of the shared pattern per
//!   version. Types from different versions never mix.
//!
//! ## Feature Flags
//!
//! Each FHIR version is a Cargo feature (`R4`, `R4B`, `R5`); all three are
//! enabled by default.
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "R4")]
//! # {
//! use meridian_fhir::FhirValue;
//! use meridian_fhir::r4::Basic;
//! use serde_json::json;
//!
//! let basic = Basic::from_json(json!({
//!     "code": { "text": "demo" },
//!     "extension": [{ "url": "http://e", "valueBoolean": true }],
//!     "resourceType": "Basic"
//! }))
//! .unwrap();
//!
//! let keys: Vec<String> = basic
//!     .to_json()
//!     .unwrap()
//!     .as_object()
//!     .unwrap()
//!     .keys()
//!     .cloned()
//!     .collect();
//! assert_eq!(keys, ["resourceType", "extension", "code"]);
//! # }
//! ```

#[cfg(not(any(feature = "R4", feature = "R4B", feature = "R5")))]
compile_error!("enable at least one FHIR version feature: R4, R4B or R5");

// Generated code names this crate by its absolute path.
extern crate self as meridian_fhir;

pub mod base;
pub mod builder;
pub mod choice;
mod common;
pub mod error;
pub mod fields;
pub mod layer;
pub mod primitives;

#[cfg(feature = "R4")]
pub mod r4;
#[cfg(feature = "R4B")]
pub mod r4b;
#[cfg(feature = "R5")]
pub mod r5;

pub use error::{FhirError, Result};
pub use layer::{FhirValue, JsonObject, Layer};
pub use meridian_fhir_macro::{FhirChoice, FhirModel};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}

/// Multi-version FHIR resource container.
///
/// Wraps one version's [`AnyResource`](r4::AnyResource) so applications can
/// carry resources of different versions side by side while keeping the
/// version-specific types intact.
///
/// ```rust
/// # #[cfg(feature = "R5")]
/// # {
/// use meridian_fhir::{FhirResource, FhirVersion};
/// use serde_json::json;
///
/// let resource = FhirResource::from_json(
///     FhirVersion::R5,
///     json!({ "resourceType": "Patient", "id": "p1" }),
/// )
/// .unwrap();
/// assert_eq!(resource.version(), FhirVersion::R5);
/// assert_eq!(resource.resource_type(), "Patient");
/// assert_eq!(resource.id(), Some("p1"));
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FhirResource {
    /// FHIR 4.0.1 resource
    #[cfg(feature = "R4")]
    R4(Box<r4::AnyResource>),
    /// FHIR 4.3.0 resource
    #[cfg(feature = "R4B")]
    R4B(Box<r4b::AnyResource>),
    /// FHIR 5.0.0 resource
    #[cfg(feature = "R5")]
    R5(Box<r5::AnyResource>),
}

impl FhirResource {
    /// Reads a resource of the given version from raw JSON.
    pub fn from_json(version: FhirVersion, value: serde_json::Value) -> Result<Self> {
        match version {
            #[cfg(feature = "R4")]
            FhirVersion::R4 => {
                r4::AnyResource::from_json(value).map(|r| FhirResource::R4(Box::new(r)))
            }
            #[cfg(feature = "R4B")]
            FhirVersion::R4B => {
                r4b::AnyResource::from_json(value).map(|r| FhirResource::R4B(Box::new(r)))
            }
            #[cfg(feature = "R5")]
            FhirVersion::R5 => {
                r5::AnyResource::from_json(value).map(|r| FhirResource::R5(Box::new(r)))
            }
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        match self {
            #[cfg(feature = "R4")]
            FhirResource::R4(r) => r.to_json(),
            #[cfg(feature = "R4B")]
            FhirResource::R4B(r) => r.to_json(),
            #[cfg(feature = "R5")]
            FhirResource::R5(r) => r.to_json(),
        }
    }

    /// Returns the FHIR specification version of this resource.
    pub fn version(&self) -> FhirVersion {
        match self {
            #[cfg(feature = "R4")]
            FhirResource::R4(_) => FhirVersion::R4,
            #[cfg(feature = "R4B")]
            FhirResource::R4B(_) => FhirVersion::R4B,
            #[cfg(feature = "R5")]
            FhirResource::R5(_) => FhirVersion::R5,
        }
    }

    pub fn resource_type(&self) -> &str {
        match self {
            #[cfg(feature = "R4")]
            FhirResource::R4(r) => r.resource_type(),
            #[cfg(feature = "R4B")]
            FhirResource::R4B(r) => r.resource_type(),
            #[cfg(feature = "R5")]
            FhirResource::R5(r) => r.resource_type(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            #[cfg(feature = "R4")]
            FhirResource::R4(r) => r.id(),
            #[cfg(feature = "R4B")]
            FhirResource::R4B(r) => r.id(),
            #[cfg(feature = "R5")]
            FhirResource::R5(r) => r.id(),
        }
    }

    /// `meta.lastUpdated` as a UTC timestamp, if present and well formed.
    pub fn last_updated(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        match self {
            #[cfg(feature = "R4")]
            FhirResource::R4(r) => r.last_updated(),
            #[cfg(feature = "R4B")]
            FhirResource::R4B(r) => r.last_updated(),
            #[cfg(feature = "R5")]
            FhirResource::R5(r) => r.last_updated(),
        }
    }
}

impl serde::Serialize for FhirResource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            #[cfg(feature = "R4")]
            FhirResource::R4(r) => serde::Serialize::serialize(&**r, serializer),
            #[cfg(feature = "R4B")]
            FhirResource::R4B(r) => serde::Serialize::serialize(&**r, serializer),
            #[cfg(feature = "R5")]
            FhirResource::R5(r) => serde::Serialize::serialize(&**r, serializer),
        }
    }
}

/// Enumeration of supported FHIR specification versions.
///
/// - **R4** (4.0.1): normative, the default
/// - **R4B** (4.3.0)
/// - **R5** (5.0.0)
///
/// Implements `clap::ValueEnum`, so it can be used directly as a command line
/// argument type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FhirVersion {
    #[cfg(feature = "R4")]
    R4,
    #[cfg(feature = "R4B")]
    R4B,
    #[cfg(feature = "R5")]
    R5,
}

impl FhirVersion {
    /// Every version compiled into this build.
    pub const ALL: &'static [FhirVersion] = &[
        #[cfg(feature = "R4")]
        FhirVersion::R4,
        #[cfg(feature = "R4B")]
        FhirVersion::R4B,
        #[cfg(feature = "R5")]
        FhirVersion::R5,
    ];

    /// The short identifier (`"R4"`, `"R4B"`, `"R5"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            #[cfg(feature = "R4")]
            FhirVersion::R4 => "R4",
            #[cfg(feature = "R4B")]
            FhirVersion::R4B => "R4B",
            #[cfg(feature = "R5")]
            FhirVersion::R5 => "R5",
        }
    }

    /// The published release number (`"4.0.1"`, `"4.3.0"`, `"5.0.0"`).
    pub fn release(&self) -> &'static str {
        match self {
            #[cfg(feature = "R4")]
            FhirVersion::R4 => r4::FHIR_VERSION_STRING,
            #[cfg(feature = "R4B")]
            FhirVersion::R4B => r4b::FHIR_VERSION_STRING,
            #[cfg(feature = "R5")]
            FhirVersion::R5 => r5::FHIR_VERSION_STRING,
        }
    }
}

impl std::fmt::Display for FhirVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accepts the short identifier or the release number, case-insensitively.
impl std::str::FromStr for FhirVersion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        FhirVersion::ALL
            .iter()
            .copied()
            .find(|version| version.as_str().eq_ignore_ascii_case(s) || version.release() == s)
            .ok_or_else(|| format!("unsupported FHIR version `{s}`"))
    }
}

#[cfg(feature = "R4")]
impl Default for FhirVersion {
    fn default() -> Self {
        FhirVersion::R4
    }
}

impl clap::ValueEnum for FhirVersion {
    fn value_variants<'a>() -> &'a [Self] {
        FhirVersion::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()).alias(self.release()))
    }
}

/// Lists the resource types a version's catalog models.
pub trait FhirResourceTypeProvider {
    fn get_resource_type_names() -> Vec<&'static str>;

    fn is_resource_type(type_name: &str) -> bool {
        Self::get_resource_type_names()
            .iter()
            .any(|&resource_type| resource_type.eq_ignore_ascii_case(type_name))
    }
}
