//! FHIR R5 (5.0.0).
//!
//! Differences from R4/R4B carried here: the explicit [`DataType`] marker,
//! `integer64` extension values, the reshaped `Attachment` and
//! `SampledData`, and the extended `Observation`.

use crate::FhirVersion;
use crate::base;

mod datatypes;
mod extension;
mod observation;

pub use datatypes::{Attachment, AttachmentBuilder, DataType, SampledData, SampledDataBuilder};
pub use extension::ExtensionValue;
pub use observation::*;

pub const FHIR_VERSION: FhirVersion = FhirVersion::R5;
pub const FHIR_VERSION_STRING: &str = "5.0.0";

pub type Element = base::Element<Extension>;
pub type BackboneElement = base::BackboneElement<Extension>;
pub type Resource = base::Resource<Meta>;
pub type DomainResource = base::DomainResource<Meta, Narrative, AnyResource, Extension>;

crate::common::common_datatypes!();
crate::common::r4b_datatypes!();
crate::common::common_resources!();
crate::common::any_resource!(Basic, Binary, Observation, Patient);
