use super::{
    Annotation, Attachment, BackboneElement, CodeableConcept, DomainResource, Identifier, Period,
    Quantity, Range, Ratio, Reference, SampledData, Timing,
};

/// Measurements and simple assertions made about a patient, device or other
/// subject.
#[derive(Debug, Clone, Default, PartialEq, crate::FhirModel)]
#[fhir(kind = "domain_resource", resource_type = "Observation")]
pub struct Observation {
    #[fhir(base)]
    pub domain: DomainResource,
    pub identifier: Option<Vec<Identifier>>,
    #[fhir(choice)]
    pub instantiates: Option<ObservationInstantiates>,
    pub based_on: Option<Vec<Reference>>,
    pub triggered_by: Option<Vec<ObservationTriggeredBy>>,
    pub part_of: Option<Vec<Reference>>,
    pub status: Option<String>,
    pub category: Option<Vec<CodeableConcept>>,
    pub code: Option<CodeableConcept>,
    pub subject: Option<Reference>,
    pub focus: Option<Vec<Reference>>,
    pub encounter: Option<Reference>,
    #[fhir(choice)]
    pub effective: Option<ObservationEffective>,
    pub issued: Option<String>,
    pub performer: Option<Vec<Reference>>,
    #[fhir(choice)]
    pub value: Option<ObservationValue>,
    pub data_absent_reason: Option<CodeableConcept>,
    pub interpretation: Option<Vec<CodeableConcept>>,
    pub note: Option<Vec<Annotation>>,
    pub body_site: Option<CodeableConcept>,
    pub body_structure: Option<Reference>,
    pub method: Option<CodeableConcept>,
    pub specimen: Option<Reference>,
    pub device: Option<Reference>,
    pub reference_range: Option<Vec<ObservationReferenceRange>>,
    pub has_member: Option<Vec<Reference>>,
    pub derived_from: Option<Vec<Reference>>,
    pub component: Option<Vec<ObservationComponent>>,
}

/// `Observation.instantiates[x]`.
#[derive(Debug, Clone, PartialEq, crate::FhirChoice)]
pub enum ObservationInstantiates {
    Canonical(String),
    Reference(Reference),
}

/// `Observation.effective[x]`.
#[derive(Debug, Clone, PartialEq, crate::FhirChoice)]
pub enum ObservationEffective {
    DateTime(String),
    Period(Period),
    Timing(Timing),
    Instant(String),
}

/// `Observation.value[x]`, also used by `Observation.component.value[x]`.
#[derive(Debug, Clone, PartialEq, crate::FhirChoice)]
pub enum ObservationValue {
    Quantity(Quantity),
    CodeableConcept(CodeableConcept),
    String(String),
    Boolean(bool),
    Integer(i32),
    Range(Range),
    Ratio(Ratio),
    SampledData(SampledData),
    Time(String),
    DateTime(String),
    Period(Period),
    Attachment(Attachment),
    Reference(Reference),
}

/// `Observation.triggeredBy`: the observation that prompted this one.
#[derive(Debug, Clone, Default, PartialEq, crate::FhirModel)]
#[fhir(kind = "backbone")]
pub struct ObservationTriggeredBy {
    #[fhir(base)]
    pub backbone: BackboneElement,
    pub observation: Option<Reference>,
    pub r#type: Option<String>,
    pub reason: Option<String>,
}

/// `Observation.referenceRange`.
#[derive(Debug, Clone, Default, PartialEq, crate::FhirModel)]
#[fhir(kind = "backbone")]
pub struct ObservationReferenceRange {
    #[fhir(base)]
    pub backbone: BackboneElement,
    pub low: Option<Quantity>,
    pub high: Option<Quantity>,
    pub normal_value: Option<CodeableConcept>,
    pub r#type: Option<CodeableConcept>,
    pub applies_to: Option<Vec<CodeableConcept>>,
    pub age: Option<Range>,
    pub text: Option<String>,
}

/// `Observation.component`.
#[derive(Debug, Clone, Default, PartialEq, crate::FhirModel)]
#[fhir(kind = "backbone")]
pub struct ObservationComponent {
    #[fhir(base)]
    pub backbone: BackboneElement,
    pub code: Option<CodeableConcept>,
    #[fhir(choice)]
    pub value: Option<ObservationValue>,
    pub data_absent_reason: Option<CodeableConcept>,
    pub interpretation: Option<Vec<CodeableConcept>>,
    pub reference_range: Option<Vec<ObservationReferenceRange>>,
}
