//! `contained` resources: recursion through the per-version `AnyResource`
//! union, stack behaviour on small threads, and unrecognized types.
use meridian_fhir::FhirValue;
use meridian_fhir::fields::DomainResourceFields;
use meridian_fhir::r4::*;
use serde_json::json;

const OBSERVATION_WITH_CONTAINED: &str = r##"{
  "resourceType": "Observation",
  "contained": [
    {
      "resourceType": "Patient",
      "id": "db2b7000-672c-43e3-8447-e43dcc166950"
    }
  ],
  "text": {
    "status": "generated",
    "div": "<div xmlns=\"http://www.w3.org/1999/xhtml\">Complete Resource Test</div>"
  },
  "status": "final",
  "code": {
    "coding": [{
      "system": "http://loinc.org",
      "code": "29463-7",
      "display": "Body Weight"
    }]
  },
  "subject": {
    "reference": "#db2b7000-672c-43e3-8447-e43dcc166950"
  },
  "valueQuantity": {
    "value": 85.5,
    "unit": "kg"
  }
}"##;

/// Every variant is boxed, so the union is a tag plus a pointer.
#[test]
fn test_any_resource_is_two_words() {
    let size = std::mem::size_of::<AnyResource>();
    assert!(
        size <= 2 * std::mem::size_of::<usize>(),
        "AnyResource is {} bytes, expected boxed variants",
        size
    );
    assert!(std::mem::size_of::<meridian_fhir::r5::AnyResource>() <= 2 * std::mem::size_of::<usize>());
}

/// Deserialize on a thread with a 2MB stack (Tokio worker default).
#[test]
fn test_deserialize_contained_resource_small_stack() {
    let stack_size = 2 * 1024 * 1024;

    let handle = std::thread::Builder::new()
        .name("small-stack-test".into())
        .stack_size(stack_size)
        .spawn(|| {
            let resource: AnyResource = serde_json::from_str(OBSERVATION_WITH_CONTAINED)
                .expect("Failed to deserialize Observation with contained Patient");

            let AnyResource::Observation(obs) = &resource else {
                panic!("Expected Observation resource, got {:?}", resource);
            };
            let contained = obs.contained();
            assert_eq!(contained.len(), 1);
            assert!(matches!(&contained[0], AnyResource::Patient(_)));
            assert_eq!(contained[0].id(), Some("db2b7000-672c-43e3-8447-e43dcc166950"));
        })
        .expect("Failed to spawn thread");

    handle
        .join()
        .expect("Thread panicked, likely a stack overflow deserializing contained resources");
}

#[test]
fn test_contained_nests_recursively() {
    let input = json!({
        "resourceType": "Basic",
        "id": "outer",
        "contained": [{
            "resourceType": "Basic",
            "id": "middle",
            "contained": [{ "resourceType": "Patient", "id": "inner", "active": true }]
        }]
    });

    let outer = Basic::from_json(input.clone()).unwrap();
    let AnyResource::Basic(middle) = &outer.contained()[0] else {
        panic!("expected a contained Basic");
    };
    let AnyResource::Patient(inner) = &middle.contained()[0] else {
        panic!("expected a nested Patient");
    };
    assert_eq!(inner.active, Some(true));

    assert_eq!(outer.to_json().unwrap(), input);
}

#[test]
fn test_unrecognized_contained_resource_is_kept_verbatim() {
    let input = json!({
        "resourceType": "Basic",
        "contained": [{ "resourceType": "Medication", "id": "med", "code": { "text": "aspirin" } }]
    });

    let basic = Basic::from_json(input.clone()).unwrap();
    let contained = &basic.contained()[0];
    assert!(matches!(contained, AnyResource::Unrecognized(_)));
    assert_eq!(contained.resource_type(), "Medication");
    assert_eq!(contained.id(), Some("med"));
    assert_eq!(basic.to_json().unwrap(), input);
}

#[test]
fn test_unrecognized_resource_reports_last_updated() {
    let raw = json!({
        "resourceType": "Medication",
        "meta": { "lastUpdated": "2024-05-01T10:00:00Z" }
    });

    let resource = meridian_fhir::FhirResource::from_json(meridian_fhir::FhirVersion::R4, raw).unwrap();
    assert_eq!(resource.resource_type(), "Medication");
    assert_eq!(
        resource.last_updated().map(|at| at.timestamp()),
        Some(1_714_557_600)
    );

    let any = AnyResource::from_json(json!({ "resourceType": "Medication", "meta": { "lastUpdated": "soon" } }))
        .unwrap();
    assert_eq!(any.meta(), None);
    assert_eq!(any.last_updated(), None);
}

#[test]
fn test_contained_without_resource_type_is_an_error() {
    let err = Basic::from_json(json!({
        "resourceType": "Basic",
        "contained": [{ "id": "anonymous" }]
    }))
    .unwrap_err();
    assert_eq!(err.path(), Some("contained[0].resourceType"));
}

#[test]
fn test_decode_errors_point_into_contained() {
    let err = Basic::from_json(json!({
        "resourceType": "Basic",
        "contained": [{
            "resourceType": "Basic",
            "code": { "coding": [{ "system": "http://loinc.org" }, { "system": 5 }] }
        }]
    }))
    .unwrap_err();
    assert_eq!(err.path(), Some("contained[0].code.coding[1].system"));
}
