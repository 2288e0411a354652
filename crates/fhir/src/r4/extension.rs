use crate::choice::UnmodeledValue;
use crate::primitives::Decimal;

use super::{
    Address, Annotation, Attachment, CodeableConcept, Coding, ContactPoint, HumanName,
    Identifier, Meta, Money, Period, Quantity, Range, Ratio, Reference, SampledData, Timing,
};

/// `Extension.value[x]` as allowed by R4.
///
/// The Quantity profiles (Age, Count, Distance, Duration) keep their own
/// variants so they round-trip under their own wire names. Datatypes not
/// modelled here (Signature, UsageContext, Dosage, ...) are kept verbatim
/// in [`ExtensionValue::Unmodeled`].
#[derive(Debug, Clone, PartialEq, crate::FhirChoice)]
pub enum ExtensionValue {
    Base64Binary(String),
    Boolean(bool),
    Canonical(String),
    Code(String),
    Date(String),
    DateTime(String),
    Decimal(Decimal),
    Id(String),
    Instant(String),
    Integer(i32),
    Markdown(String),
    Oid(String),
    PositiveInt(u32),
    String(String),
    Time(String),
    UnsignedInt(u32),
    Uri(String),
    Url(String),
    Uuid(String),
    Address(Address),
    Age(Quantity),
    Annotation(Annotation),
    Attachment(Attachment),
    CodeableConcept(CodeableConcept),
    Coding(Coding),
    ContactPoint(ContactPoint),
    Count(Quantity),
    Distance(Quantity),
    Duration(Quantity),
    HumanName(HumanName),
    Identifier(Identifier),
    Money(Money),
    Period(Period),
    Quantity(Quantity),
    Range(Range),
    Ratio(Ratio),
    Reference(Reference),
    SampledData(SampledData),
    Timing(Timing),
    Meta(Meta),
    #[fhir(fallback)]
    Unmodeled(UnmodeledValue),
}
