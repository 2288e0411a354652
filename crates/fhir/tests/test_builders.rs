//! Builders: staging, base-level setters, arrays and choice groups.
use meridian_fhir::builder::{
    BackboneElementBuilder, DomainResourceBuilder, ElementBuilder, ModelBuilder, ResourceBuilder,
};
use meridian_fhir::fields::{BackboneElementFields, DomainResourceFields, ElementFields};
use meridian_fhir::r4::*;
use meridian_fhir::{FhirValue, Layer};
use serde_json::json;

fn loinc(code: &str) -> Coding {
    Coding::builder()
        .set_system("http://loinc.org")
        .set_code(code)
        .build()
}

#[test]
fn test_builder_produces_ordered_output() {
    let basic = Basic::builder()
        .set_code(CodeableConcept::builder().set_text("demo").build())
        .add_extension(Extension::new("http://e", ExtensionValue::Boolean(true)))
        .set_id("b1")
        .build();

    assert_eq!(
        basic.to_json().unwrap(),
        json!({
            "resourceType": "Basic",
            "id": "b1",
            "extension": [{ "url": "http://e", "valueBoolean": true }],
            "code": { "text": "demo" }
        })
    );
}

#[test]
fn test_array_setters_append_in_call_order() {
    let concept = CodeableConcept::builder()
        .add_coding(loinc("1"))
        .add_coding(loinc("2"))
        .add_coding(loinc("3"))
        .build();

    let codes: Vec<_> = concept
        .coding
        .iter()
        .flatten()
        .filter_map(|c| c.code.as_deref())
        .collect();
    assert_eq!(codes, ["1", "2", "3"]);
}

fn flag(url: &str) -> Extension {
    Extension::new(url, ExtensionValue::Boolean(true))
}

#[test]
fn test_extension_arrays_ignore_interleaved_setters() {
    let patient = Patient::builder()
        .add_extension(flag("http://e1"))
        .set_active(true)
        .add_extension(flag("http://e2"))
        .add_modifier_extension(flag("http://m1"))
        .build();

    assert_eq!(patient.extensions(), [flag("http://e1"), flag("http://e2")]);
    assert_eq!(patient.modifier_extensions(), [flag("http://m1")]);

    let contact = PatientContact::builder()
        .add_extension(flag("http://e1"))
        .set_gender("female")
        .add_extension(flag("http://e2"))
        .add_modifier_extension(flag("http://m1"))
        .build();

    assert_eq!(contact.extensions(), [flag("http://e1"), flag("http://e2")]);
    assert_eq!(contact.modifier_extensions(), [flag("http://m1")]);
    assert_eq!(
        contact.to_json().unwrap(),
        json!({
            "extension": [
                { "url": "http://e1", "valueBoolean": true },
                { "url": "http://e2", "valueBoolean": true }
            ],
            "modifierExtension": [{ "url": "http://m1", "valueBoolean": true }],
            "gender": "female"
        })
    );
}

#[test]
fn test_choice_setter_replaces_previous_variant() {
    let quantity = Quantity::builder().set_value(rust_decimal::Decimal::new(855, 1)).build();

    let obs = Observation::builder()
        .set_value(ObservationValue::String("pending".into()))
        .set_value(ObservationValue::Quantity(quantity.clone()))
        .build();
    assert_eq!(obs.value, Some(ObservationValue::Quantity(quantity)));
    let out = obs.to_json().unwrap();
    assert!(out.get("valueString").is_none());
    assert_eq!(out["valueQuantity"], json!({ "value": 85.5 }));

    let obs = Observation::builder()
        .set_value(ObservationValue::Boolean(false))
        .set_value(ObservationValue::String("done".into()))
        .build();
    assert_eq!(
        obs.to_json().unwrap(),
        json!({ "resourceType": "Observation", "valueString": "done" })
    );
}

#[test]
fn test_first_declared_choice_sibling_wins_on_read() {
    let ext = Extension::from_json(json!({
        "url": "http://e",
        "valueString": "text",
        "valueBoolean": true
    }))
    .unwrap();

    // Boolean is declared before String.
    assert_eq!(ext.value, Some(ExtensionValue::Boolean(true)));
    assert_eq!(
        ext.to_json().unwrap(),
        json!({ "url": "http://e", "valueBoolean": true })
    );
}

#[test]
fn test_build_is_repeatable_and_independent() {
    let builder = Patient::builder().set_active(true).set_gender("female");
    let mut first = builder.build();
    let second = builder.build();
    assert_eq!(first, second);

    first.active = Some(false);
    assert_eq!(builder.build().active, Some(true));

    let extended = builder.clone().add_identifier(Identifier::builder().set_value("x").build());
    assert!(builder.build().identifier.is_none());
    assert_eq!(extended.build().identifier.map(|ids| ids.len()), Some(1));
}

#[test]
fn test_builder_from_existing_model() {
    let original = Patient::builder().set_id("p1").set_active(true).build();
    let edited = PatientBuilder::from(original.clone())
        .set_active(false)
        .build();

    assert_eq!(original.active, Some(true));
    assert_eq!(edited.active, Some(false));
    assert_eq!(edited.domain.resource.id.as_deref(), Some("p1"));
}

#[test]
fn test_resource_level_setters() {
    let meta = Meta::builder()
        .set_version_id("3")
        .set_last_updated("2024-05-01T10:00:00+02:00")
        .build();
    let binary = Binary::builder()
        .set_id("bin")
        .set_meta(meta)
        .set_language("en")
        .set_content_type("text/plain")
        .set_data("aGVsbG8=")
        .build();

    assert_eq!(
        binary.to_json().unwrap(),
        json!({
            "resourceType": "Binary",
            "id": "bin",
            "meta": { "versionId": "3", "lastUpdated": "2024-05-01T10:00:00+02:00" },
            "language": "en",
            "contentType": "text/plain",
            "data": "aGVsbG8="
        })
    );
    let any = AnyResource::from(binary);
    assert_eq!(
        any.last_updated().map(|at| at.to_rfc3339()),
        Some("2024-05-01T08:00:00+00:00".to_owned())
    );
}

#[test]
fn test_domain_resource_setters_and_contained() {
    let patient = Patient::builder().set_id("p1").build();
    let obs = Observation::builder()
        .set_status("final")
        .add_contained(patient)
        .set_subject(Reference::builder().set_reference("#p1").build())
        .set_text(
            Narrative::builder()
                .set_status("generated")
                .set_div("<div xmlns=\"http://www.w3.org/1999/xhtml\">weight</div>")
                .build(),
        )
        .add_modifier_extension(Extension::new("http://m", ExtensionValue::Code("x".into())))
        .build();

    assert_eq!(obs.contained().len(), 1);
    assert_eq!(obs.contained()[0].id(), Some("p1"));
    assert_eq!(obs.modifier_extensions().len(), 1);

    let out = obs.to_json().unwrap();
    let keys: Vec<_> = out.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        ["resourceType", "text", "contained", "modifierExtension", "status", "subject"]
    );
}

#[test]
fn test_element_and_backbone_setters() {
    let period = Period::builder()
        .set_id("p")
        .add_extension(Extension::new("http://e", ExtensionValue::Integer(1)))
        .set_start("2024")
        .build();
    assert_eq!(period.id(), Some("p"));
    assert_eq!(
        period.to_json().unwrap(),
        json!({ "id": "p", "extension": [{ "url": "http://e", "valueInteger": 1 }], "start": "2024" })
    );

    let link = PatientLink::builder()
        .add_modifier_extension(Extension::new("http://m", ExtensionValue::Boolean(true)))
        .set_type("seealso")
        .build();
    assert_eq!(
        link.to_json().unwrap(),
        json!({ "modifierExtension": [{ "url": "http://m", "valueBoolean": true }], "type": "seealso" })
    );
}

#[test]
fn test_extensions_by_url_keeps_insertion_order() {
    let patient = Patient::builder()
        .add_extension(Extension::new("http://a", ExtensionValue::Integer(1)))
        .add_extension(Extension::new("http://b", ExtensionValue::Integer(2)))
        .add_extension(Extension::new("http://a", ExtensionValue::Integer(3)))
        .build();

    let values: Vec<_> = patient
        .extensions_by_url("http://a")
        .filter_map(|ext| match ext.value {
            Some(ExtensionValue::Integer(n)) => Some(n),
            _ => None,
        })
        .collect();
    assert_eq!(values, [1, 3]);
    assert_eq!(patient.extensions_by_url("http://missing").count(), 0);
}

#[test]
fn test_nested_extensions() {
    let ext = Extension::builder()
        .set_url("http://hl7.org/fhir/StructureDefinition/patient-nationality")
        .add_extension(Extension::new(
            "code",
            ExtensionValue::CodeableConcept(CodeableConcept::builder().add_coding(loinc("x")).build()),
        ))
        .add_extension(Extension::new(
            "period",
            ExtensionValue::Period(Period::builder().set_start("2020").build()),
        ))
        .build();

    let out = ext.to_json().unwrap();
    assert_eq!(
        out,
        json!({
            "extension": [
                { "url": "code", "valueCodeableConcept": { "coding": [{ "system": "http://loinc.org", "code": "x" }] } },
                { "url": "period", "valuePeriod": { "start": "2020" } }
            ],
            "url": "http://hl7.org/fhir/StructureDefinition/patient-nationality"
        })
    );
    assert_eq!(Extension::from_json(out).unwrap(), ext);
    assert_eq!(Extension::property_names()[0], "id");
}
