use crate::fields::ElementFields;
use crate::primitives::{Decimal, Integer64};

use super::{
    Address, Annotation, CodeableConcept, CodeableReference, Coding, ContactPoint, Element,
    Extension, HumanName, Identifier, Meta, Money, Narrative, Period, Quantity, Range, Ratio,
    RatioRange, Reference, Timing,
};

/// Marker for the R5 `DataType` abstract type: every reusable datatype, as
/// opposed to backbone elements local to one resource.
pub trait DataType: ElementFields {
    /// The FHIR type name (`"Quantity"`, `"Attachment"`, ...).
    const TYPE_NAME: &'static str;
}

macro_rules! data_types {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl DataType for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);
            }
        )+
    };
}

data_types!(
    Address,
    Annotation,
    Attachment,
    CodeableConcept,
    CodeableReference,
    Coding,
    ContactPoint,
    Extension,
    HumanName,
    Identifier,
    Meta,
    Money,
    Narrative,
    Period,
    Quantity,
    Range,
    Ratio,
    RatioRange,
    Reference,
    SampledData,
    Timing,
);

/// Content in a format defined elsewhere. R5 widens `size` to `integer64`
/// and adds the media dimensions.
#[derive(Debug, Clone, Default, PartialEq, crate::FhirModel)]
#[fhir(kind = "element")]
pub struct Attachment {
    #[fhir(base)]
    pub element: Element,
    pub content_type: Option<String>,
    pub language: Option<String>,
    pub data: Option<String>,
    pub url: Option<String>,
    pub size: Option<Integer64>,
    pub hash: Option<String>,
    pub title: Option<String>,
    pub creation: Option<String>,
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub frames: Option<u32>,
    pub duration: Option<Decimal>,
    pub pages: Option<u32>,
}

/// A series of measurements taken by a device. R5 replaces `period` with
/// `interval` + `intervalUnit` and adds `codeMap` and `offsets`.
#[derive(Debug, Clone, Default, PartialEq, crate::FhirModel)]
#[fhir(kind = "element")]
pub struct SampledData {
    #[fhir(base)]
    pub element: Element,
    pub origin: Option<Quantity>,
    pub interval: Option<Decimal>,
    pub interval_unit: Option<String>,
    pub factor: Option<Decimal>,
    pub lower_limit: Option<Decimal>,
    pub upper_limit: Option<Decimal>,
    pub dimensions: Option<u32>,
    pub code_map: Option<String>,
    pub offsets: Option<String>,
    pub data: Option<String>,
}
