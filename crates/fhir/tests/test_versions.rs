//! Per-version divergences and the multi-version container.
use meridian_fhir::builder::ModelBuilder;
use meridian_fhir::choice::UnmodeledValue;
use meridian_fhir::fields::ElementFields;
use meridian_fhir::primitives::Integer64;
use meridian_fhir::{FhirResource, FhirResourceTypeProvider, FhirValue, FhirVersion};
use serde_json::json;

#[test]
fn test_attachment_size_is_a_string_in_r5_only() {
    let r4 = meridian_fhir::r4::Attachment::from_json(json!({ "size": 2048 })).unwrap();
    assert_eq!(r4.size, Some(2048));
    assert_eq!(r4.to_json().unwrap(), json!({ "size": 2048 }));

    let r5 = meridian_fhir::r5::Attachment::from_json(json!({
        "contentType": "image/png",
        "size": "5000000000",
        "height": 480,
        "width": 640
    }))
    .unwrap();
    assert_eq!(r5.size, Some(Integer64(5_000_000_000)));
    assert_eq!(
        r5.to_json().unwrap(),
        json!({ "contentType": "image/png", "size": "5000000000", "height": 480, "width": 640 })
    );
}

#[test]
fn test_r5_attachment_size_rejects_non_numeric_text() {
    let err = meridian_fhir::r5::Attachment::from_json(json!({ "size": "big" })).unwrap_err();
    assert_eq!(err.path(), Some("size"));
    assert_eq!(err.to_string(), "invalid integer64 `big` at `size`");
}

#[test]
fn test_sampled_data_shape_per_version() {
    let input = json!({
        "origin": { "value": 0 },
        "period": 10,
        "interval": 10,
        "intervalUnit": "ms",
        "dimensions": 1,
        "data": "1 2 3"
    });

    let r4 = meridian_fhir::r4::SampledData::from_json(input.clone()).unwrap();
    assert_eq!(
        r4.to_json().unwrap(),
        json!({ "origin": { "value": 0 }, "period": 10, "dimensions": 1, "data": "1 2 3" })
    );

    let r5 = meridian_fhir::r5::SampledData::from_json(input).unwrap();
    assert_eq!(
        r5.to_json().unwrap(),
        json!({ "origin": { "value": 0 }, "interval": 10, "intervalUnit": "ms", "dimensions": 1, "data": "1 2 3" })
    );
}

#[test]
fn test_integer64_extension_value_is_r5_only() {
    use meridian_fhir::r5::{Extension, ExtensionValue};

    let ext = Extension::from_json(json!({ "url": "http://e", "valueInteger64": "-42" })).unwrap();
    assert_eq!(ext.value, Some(ExtensionValue::Integer64(Integer64(-42))));
    assert_eq!(
        ext.to_json().unwrap(),
        json!({ "url": "http://e", "valueInteger64": "-42" })
    );

    // R4 has no such variant; the value is carried as raw JSON.
    let r4 = meridian_fhir::r4::Extension::from_json(json!({ "url": "http://e", "valueInteger64": "-42" }))
        .unwrap();
    assert_eq!(
        r4.value,
        Some(meridian_fhir::r4::ExtensionValue::Unmodeled(UnmodeledValue {
            suffix: "Integer64".to_owned(),
            value: json!("-42"),
        }))
    );
    assert_eq!(r4.to_json().unwrap(), json!({ "url": "http://e", "valueInteger64": "-42" }));
}

#[test]
fn test_unmodeled_extension_values_round_trip() {
    let input = json!({
        "resourceType": "Patient",
        "extension": [
            {
                "url": "http://example.org/ctx",
                "valueUsageContext": {
                    "code": { "system": "http://terminology.hl7.org/CodeSystem/usage-context-type", "code": "focus" },
                    "valueCodeableConcept": { "text": "adults" }
                }
            },
            {
                "url": "http://example.org/sig",
                "valueSignature": {
                    "type": [{ "system": "urn:iso-astm:E1762-95:2013", "code": "1.2.840.10065.1.12.1.1" }],
                    "when": "2024-05-01T10:00:00Z",
                    "who": { "reference": "Practitioner/xcda" }
                }
            }
        ]
    });

    let r4 = meridian_fhir::r4::Patient::from_json(input.clone()).unwrap();
    assert_eq!(r4.to_json().unwrap(), input);

    let r4b = meridian_fhir::r4b::Patient::from_json(input.clone()).unwrap();
    assert_eq!(r4b.to_json().unwrap(), input);

    let r5 = meridian_fhir::r5::Patient::from_json(input.clone()).unwrap();
    assert_eq!(r5.to_json().unwrap(), input);

    let r5_only = json!({
        "url": "http://example.org/hours",
        "valueAvailability": { "availableTime": [{ "allDay": true }] }
    });
    let ext = meridian_fhir::r5::Extension::from_json(r5_only.clone()).unwrap();
    assert!(matches!(
        &ext.value,
        Some(meridian_fhir::r5::ExtensionValue::Unmodeled(raw)) if raw.suffix == "Availability"
    ));
    assert_eq!(ext.to_json().unwrap(), r5_only);
}

#[test]
fn test_declared_extension_value_wins_over_unmodeled_sibling() {
    let ext = meridian_fhir::r4::Extension::from_json(json!({
        "url": "http://e",
        "valueDosage": { "text": "once daily" },
        "valueString": "kept"
    }))
    .unwrap();
    assert_eq!(
        ext.to_json().unwrap(),
        json!({ "url": "http://e", "valueString": "kept" })
    );
}

#[test]
fn test_only_extension_values_keep_unmodeled_types() {
    // Observation.value[x] is a closed group: an undeclared type is dropped.
    let obs = meridian_fhir::r4::Observation::from_json(json!({
        "resourceType": "Observation",
        "status": "final",
        "valueSignature": { "when": "2024" }
    }))
    .unwrap();
    assert_eq!(
        obs.to_json().unwrap(),
        json!({ "resourceType": "Observation", "status": "final" })
    );
}

#[test]
fn test_r4b_extension_values() {
    use meridian_fhir::r4b::{CodeableConcept, CodeableReference, Extension, ExtensionValue};

    let concept = CodeableConcept::builder().set_text("headache").build();
    let ext = Extension::new(
        "http://e",
        ExtensionValue::CodeableReference(CodeableReference::builder().set_concept(concept).build()),
    );
    assert_eq!(
        ext.to_json().unwrap(),
        json!({ "url": "http://e", "valueCodeableReference": { "concept": { "text": "headache" } } })
    );
}

#[test]
fn test_r5_observation_additions() {
    use meridian_fhir::r5::{AnyResource, Observation, ObservationInstantiates, ObservationValue};

    let input = json!({
        "resourceType": "Observation",
        "instantiatesCanonical": "http://example.org/ObservationDefinition/bp",
        "status": "final",
        "bodyStructure": { "reference": "BodyStructure/1" },
        "valueAttachment": { "size": "12" }
    });
    let obs = Observation::from_json(input.clone()).unwrap();
    assert!(matches!(obs.instantiates, Some(ObservationInstantiates::Canonical(_))));
    assert!(matches!(obs.value, Some(ObservationValue::Attachment(_))));
    assert_eq!(obs.to_json().unwrap(), input);

    let any = AnyResource::from_json(input.clone()).unwrap();
    assert_eq!(any.resource_type(), "Observation");

    // The R4 Observation has neither property.
    let r4 = meridian_fhir::r4::Observation::from_json(input).unwrap();
    assert_eq!(
        r4.to_json().unwrap(),
        json!({ "resourceType": "Observation", "status": "final" })
    );
}

#[test]
fn test_r5_data_type_names() {
    use meridian_fhir::r5::{Attachment, DataType, Quantity};

    fn type_name<T: DataType>(_: &T) -> &'static str {
        T::TYPE_NAME
    }

    assert_eq!(type_name(&Quantity::default()), "Quantity");
    assert_eq!(Attachment::TYPE_NAME, "Attachment");

    let attachment = Attachment::builder().set_title("scan").build();
    assert_eq!(attachment.id(), None);
}

#[test]
fn test_fhir_version_parsing() {
    assert_eq!("R4".parse::<FhirVersion>(), Ok(FhirVersion::R4));
    assert_eq!("r4b".parse::<FhirVersion>(), Ok(FhirVersion::R4B));
    assert_eq!("5.0.0".parse::<FhirVersion>(), Ok(FhirVersion::R5));
    assert!("R6".parse::<FhirVersion>().is_err());

    assert_eq!(FhirVersion::default(), FhirVersion::R4);
    assert_eq!(FhirVersion::R4B.release(), "4.3.0");
    assert_eq!(FhirVersion::R5.to_string(), "R5");
    assert_eq!(FhirVersion::ALL.len(), 3);
}

#[test]
fn test_fhir_resource_dispatches_on_version() {
    let raw = json!({
        "resourceType": "Patient",
        "id": "p1",
        "meta": { "lastUpdated": "2024-05-01T10:00:00Z" }
    });

    for &version in FhirVersion::ALL {
        let resource = FhirResource::from_json(version, raw.clone()).unwrap();
        assert_eq!(resource.version(), version);
        assert_eq!(resource.resource_type(), "Patient");
        assert_eq!(resource.id(), Some("p1"));
        assert_eq!(
            resource.last_updated().map(|at| at.timestamp()),
            Some(1_714_557_600)
        );
        assert_eq!(resource.to_json().unwrap(), raw);
        assert_eq!(serde_json::to_value(&resource).unwrap(), raw);
    }
}

#[test]
fn test_malformed_last_updated_is_none() {
    let resource = FhirResource::from_json(
        FhirVersion::R4,
        json!({ "resourceType": "Basic", "meta": { "lastUpdated": "yesterday" } }),
    )
    .unwrap();
    assert_eq!(resource.last_updated(), None);
}

#[test]
fn test_resource_type_catalog() {
    assert!(meridian_fhir::r4::AnyResource::is_resource_type("Observation"));
    assert!(meridian_fhir::r5::AnyResource::is_resource_type("patient"));
    assert!(!meridian_fhir::r4b::AnyResource::is_resource_type("Medication"));
    assert_eq!(
        meridian_fhir::r4::AnyResource::get_resource_type_names(),
        ["Basic", "Binary", "Observation", "Patient"]
    );
}
