//! Resources whose shape is identical across several versions.

/// Basic, Binary and Patient, unchanged in shape from R4 through R5.
macro_rules! common_resources {
    () => {
        /// Basic is used for handling concepts not yet defined in FHIR.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "domain_resource", resource_type = "Basic")]
        pub struct Basic {
            #[fhir(base)]
            pub domain: DomainResource,
            pub identifier: Option<Vec<Identifier>>,
            pub code: Option<CodeableConcept>,
            pub subject: Option<Reference>,
            pub created: Option<String>,
            pub author: Option<Reference>,
        }

        /// Raw bytes with a content type. A Resource, not a DomainResource:
        /// it has no narrative, contained resources or extensions.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "resource", resource_type = "Binary")]
        pub struct Binary {
            #[fhir(base)]
            pub resource: Resource,
            pub content_type: Option<String>,
            pub security_context: Option<Reference>,
            pub data: Option<String>,
        }

        /// Demographics and other administrative information about an
        /// individual receiving care.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "domain_resource", resource_type = "Patient")]
        pub struct Patient {
            #[fhir(base)]
            pub domain: DomainResource,
            pub identifier: Option<Vec<Identifier>>,
            pub active: Option<bool>,
            pub name: Option<Vec<HumanName>>,
            pub telecom: Option<Vec<ContactPoint>>,
            pub gender: Option<String>,
            pub birth_date: Option<String>,
            #[fhir(choice)]
            pub deceased: Option<PatientDeceased>,
            pub address: Option<Vec<Address>>,
            pub marital_status: Option<CodeableConcept>,
            #[fhir(choice)]
            pub multiple_birth: Option<PatientMultipleBirth>,
            pub photo: Option<Vec<Attachment>>,
            pub contact: Option<Vec<PatientContact>>,
            pub communication: Option<Vec<PatientCommunication>>,
            pub general_practitioner: Option<Vec<Reference>>,
            pub managing_organization: Option<Reference>,
            pub link: Option<Vec<PatientLink>>,
        }

        /// `Patient.deceased[x]`.
        #[derive(Debug, Clone, PartialEq, $crate::FhirChoice)]
        pub enum PatientDeceased {
            Boolean(bool),
            DateTime(String),
        }

        /// `Patient.multipleBirth[x]`.
        #[derive(Debug, Clone, PartialEq, $crate::FhirChoice)]
        pub enum PatientMultipleBirth {
            Boolean(bool),
            Integer(i32),
        }

        /// `Patient.contact`: a contact party for the patient.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "backbone")]
        pub struct PatientContact {
            #[fhir(base)]
            pub backbone: BackboneElement,
            pub relationship: Option<Vec<CodeableConcept>>,
            pub name: Option<HumanName>,
            pub telecom: Option<Vec<ContactPoint>>,
            pub address: Option<Address>,
            pub gender: Option<String>,
            pub organization: Option<Reference>,
            pub period: Option<Period>,
        }

        /// `Patient.communication`.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "backbone")]
        pub struct PatientCommunication {
            #[fhir(base)]
            pub backbone: BackboneElement,
            pub language: Option<CodeableConcept>,
            pub preferred: Option<bool>,
        }

        /// `Patient.link`: another patient resource about the same person.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "backbone")]
        pub struct PatientLink {
            #[fhir(base)]
            pub backbone: BackboneElement,
            pub other: Option<Reference>,
            pub r#type: Option<String>,
        }
    };
}

/// Observation as published in R4 and R4B.
macro_rules! pre_r5_observation {
    () => {
        /// Measurements and simple assertions made about a patient, device or
        /// other subject.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "domain_resource", resource_type = "Observation")]
        pub struct Observation {
            #[fhir(base)]
            pub domain: DomainResource,
            pub identifier: Option<Vec<Identifier>>,
            pub based_on: Option<Vec<Reference>>,
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
            pub method: Option<CodeableConcept>,
            pub specimen: Option<Reference>,
            pub device: Option<Reference>,
            pub reference_range: Option<Vec<ObservationReferenceRange>>,
            pub has_member: Option<Vec<Reference>>,
            pub derived_from: Option<Vec<Reference>>,
            pub component: Option<Vec<ObservationComponent>>,
        }

        /// `Observation.effective[x]`.
        #[derive(Debug, Clone, PartialEq, $crate::FhirChoice)]
        pub enum ObservationEffective {
            DateTime(String),
            Period(Period),
            Timing(Timing),
            Instant(String),
        }

        /// `Observation.value[x]`, also used by `Observation.component.value[x]`.
        #[derive(Debug, Clone, PartialEq, $crate::FhirChoice)]
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
        }

        /// `Observation.referenceRange`.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "backbone")]
        pub struct ObservationReferenceRange {
            #[fhir(base)]
            pub backbone: BackboneElement,
            pub low: Option<Quantity>,
            pub high: Option<Quantity>,
            pub r#type: Option<CodeableConcept>,
            pub applies_to: Option<Vec<CodeableConcept>>,
            pub age: Option<Range>,
            pub text: Option<String>,
        }

        /// `Observation.component`.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
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
    };
}

pub(crate) use common_resources;
pub(crate) use pre_r5_observation;
