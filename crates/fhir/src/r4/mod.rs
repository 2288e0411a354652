//! FHIR R4 (4.0.1).

use crate::FhirVersion;
use crate::base;

mod extension;

pub use extension::ExtensionValue;

pub const FHIR_VERSION: FhirVersion = FhirVersion::R4;
pub const FHIR_VERSION_STRING: &str = "4.0.1";

pub type Element = base::Element<Extension>;
pub type BackboneElement = base::BackboneElement<Extension>;
pub type Resource = base::Resource<Meta>;
pub type DomainResource = base::DomainResource<Meta, Narrative, AnyResource, Extension>;

crate::common::common_datatypes!();
crate::common::pre_r5_datatypes!();
crate::common::common_resources!();
crate::common::pre_r5_observation!();
crate::common::any_resource!(Basic, Binary, Observation, Patient);
