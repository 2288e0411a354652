//! Datatypes whose shape is identical across several versions.
//!
//! Each macro is expanded inside a version module and resolves `Element`,
//! `BackboneElement` and `ExtensionValue` to that version's types.

/// Datatypes shared by R4, R4B and R5.
macro_rules! common_datatypes {
    () => {
        /// Optional extension element: a `url` plus one `value[x]`.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct Extension {
            #[fhir(base)]
            pub element: Element,
            pub url: Option<String>,
            #[fhir(choice)]
            pub value: Option<ExtensionValue>,
        }

        impl Extension {
            pub fn new(url: impl Into<String>, value: ExtensionValue) -> Self {
                Extension {
                    url: Some(url.into()),
                    value: Some(value),
                    ..Default::default()
                }
            }
        }

        impl $crate::fields::ExtensionUrl for Extension {
            fn url(&self) -> Option<&str> {
                self.url.as_deref()
            }
        }

        /// A reference to a code defined by a terminology system.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct Coding {
            #[fhir(base)]
            pub element: Element,
            pub system: Option<String>,
            pub version: Option<String>,
            pub code: Option<String>,
            pub display: Option<String>,
            pub user_selected: Option<bool>,
        }

        /// Concept that may be defined by a formal reference to a terminology or
        /// ontology or may be provided by text.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct CodeableConcept {
            #[fhir(base)]
            pub element: Element,
            pub coding: Option<Vec<Coding>>,
            pub text: Option<String>,
        }

        /// A reference from one resource to another.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct Reference {
            #[fhir(base)]
            pub element: Element,
            pub reference: Option<String>,
            pub r#type: Option<String>,
            pub identifier: Option<Identifier>,
            pub display: Option<String>,
        }

        /// An identifier intended for computation.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct Identifier {
            #[fhir(base)]
            pub element: Element,
            pub r#use: Option<String>,
            pub r#type: Option<CodeableConcept>,
            pub system: Option<String>,
            pub value: Option<String>,
            pub period: Option<Period>,
            pub assigner: Option<Box<Reference>>,
        }

        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct Period {
            #[fhir(base)]
            pub element: Element,
            pub start: Option<String>,
            pub end: Option<String>,
        }

        /// A measured amount. Also carries the Age, Count, Distance, Duration,
        /// MoneyQuantity and SimpleQuantity profiles.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct Quantity {
            #[fhir(base)]
            pub element: Element,
            pub value: Option<$crate::primitives::Decimal>,
            pub comparator: Option<String>,
            pub unit: Option<String>,
            pub system: Option<String>,
            pub code: Option<String>,
        }

        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct Range {
            #[fhir(base)]
            pub element: Element,
            pub low: Option<Quantity>,
            pub high: Option<Quantity>,
        }

        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct Ratio {
            #[fhir(base)]
            pub element: Element,
            pub numerator: Option<Quantity>,
            pub denominator: Option<Quantity>,
        }

        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct Money {
            #[fhir(base)]
            pub element: Element,
            pub value: Option<$crate::primitives::Decimal>,
            pub currency: Option<String>,
        }

        /// A text note which also contains information about who made the
        /// statement and when.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct Annotation {
            #[fhir(base)]
            pub element: Element,
            #[fhir(choice)]
            pub author: Option<AnnotationAuthor>,
            pub time: Option<String>,
            pub text: Option<String>,
        }

        /// `Annotation.author[x]`.
        #[derive(Debug, Clone, PartialEq, $crate::FhirChoice)]
        pub enum AnnotationAuthor {
            Reference(Reference),
            String(String),
        }

        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct HumanName {
            #[fhir(base)]
            pub element: Element,
            pub r#use: Option<String>,
            pub text: Option<String>,
            pub family: Option<String>,
            pub given: Option<Vec<String>>,
            pub prefix: Option<Vec<String>>,
            pub suffix: Option<Vec<String>>,
            pub period: Option<Period>,
        }

        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct ContactPoint {
            #[fhir(base)]
            pub element: Element,
            pub system: Option<String>,
            pub value: Option<String>,
            pub r#use: Option<String>,
            pub rank: Option<u32>,
            pub period: Option<Period>,
        }

        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct Address {
            #[fhir(base)]
            pub element: Element,
            pub r#use: Option<String>,
            pub r#type: Option<String>,
            pub text: Option<String>,
            pub line: Option<Vec<String>>,
            pub city: Option<String>,
            pub district: Option<String>,
            pub state: Option<String>,
            pub postal_code: Option<String>,
            pub country: Option<String>,
            pub period: Option<Period>,
        }

        /// Metadata about a resource.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct Meta {
            #[fhir(base)]
            pub element: Element,
            pub version_id: Option<String>,
            pub last_updated: Option<String>,
            pub source: Option<String>,
            pub profile: Option<Vec<String>>,
            pub security: Option<Vec<Coding>>,
            pub tag: Option<Vec<Coding>>,
        }

        impl Meta {
            /// `lastUpdated` as a UTC timestamp, if present and well formed.
            pub fn last_updated_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
                self.last_updated
                    .as_deref()
                    .and_then($crate::primitives::parse_instant)
            }
        }

        /// Human-readable summary of the resource (XHTML in `div`).
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct Narrative {
            #[fhir(base)]
            pub element: Element,
            pub status: Option<String>,
            pub div: Option<String>,
        }

        /// Specifies an event that may occur multiple times.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "backbone")]
        pub struct Timing {
            #[fhir(base)]
            pub backbone: BackboneElement,
            pub event: Option<Vec<String>>,
            pub repeat: Option<TimingRepeat>,
            pub code: Option<CodeableConcept>,
        }

        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct TimingRepeat {
            #[fhir(base)]
            pub element: Element,
            #[fhir(choice)]
            pub bounds: Option<TimingRepeatBounds>,
            pub count: Option<u32>,
            pub count_max: Option<u32>,
            pub duration: Option<$crate::primitives::Decimal>,
            pub duration_max: Option<$crate::primitives::Decimal>,
            pub duration_unit: Option<String>,
            pub frequency: Option<u32>,
            pub frequency_max: Option<u32>,
            pub period: Option<$crate::primitives::Decimal>,
            pub period_max: Option<$crate::primitives::Decimal>,
            pub period_unit: Option<String>,
            pub day_of_week: Option<Vec<String>>,
            pub time_of_day: Option<Vec<String>>,
            pub when: Option<Vec<String>>,
            pub offset: Option<u32>,
        }

        /// `Timing.repeat.bounds[x]`.
        #[derive(Debug, Clone, PartialEq, $crate::FhirChoice)]
        pub enum TimingRepeatBounds {
            Duration(Quantity),
            Range(Range),
            Period(Period),
        }
    };
}

/// Datatypes whose R4/R4B shape changed in R5.
macro_rules! pre_r5_datatypes {
    () => {
        /// Content in a format defined elsewhere.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct Attachment {
            #[fhir(base)]
            pub element: Element,
            pub content_type: Option<String>,
            pub language: Option<String>,
            pub data: Option<String>,
            pub url: Option<String>,
            pub size: Option<u32>,
            pub hash: Option<String>,
            pub title: Option<String>,
            pub creation: Option<String>,
        }

        /// A series of measurements taken by a device.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct SampledData {
            #[fhir(base)]
            pub element: Element,
            pub origin: Option<Quantity>,
            pub period: Option<$crate::primitives::Decimal>,
            pub factor: Option<$crate::primitives::Decimal>,
            pub lower_limit: Option<$crate::primitives::Decimal>,
            pub upper_limit: Option<$crate::primitives::Decimal>,
            pub dimensions: Option<u32>,
            pub data: Option<String>,
        }
    };
}

/// Datatypes introduced in R4B and kept in R5.
macro_rules! r4b_datatypes {
    () => {
        /// A reference to a resource or a concept.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct CodeableReference {
            #[fhir(base)]
            pub element: Element,
            pub concept: Option<CodeableConcept>,
            pub reference: Option<Reference>,
        }

        /// A range of ratios expressed as a low and high numerator and a
        /// denominator.
        #[derive(Debug, Clone, Default, PartialEq, $crate::FhirModel)]
        #[fhir(kind = "element")]
        pub struct RatioRange {
            #[fhir(base)]
            pub element: Element,
            pub low_numerator: Option<Quantity>,
            pub high_numerator: Option<Quantity>,
            pub denominator: Option<Quantity>,
        }
    };
}

pub(crate) use common_datatypes;
pub(crate) use pre_r5_datatypes;
pub(crate) use r4b_datatypes;
