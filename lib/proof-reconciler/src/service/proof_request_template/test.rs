use std::collections::HashMap;

use rstest::rstest;
use serde_json::json;
use similar_asserts::assert_eq;

use super::*;
use crate::error::{MalformedProofDefinitionError, ReconcileError};
use crate::model::proof_request::{
    GroupedAttributeRequest, PredicateType, RequestedAttribute, SingleAttributeRequest,
};
use crate::model::proof_request_template::{
    AnonCredsRequestTemplateData, ProofRequestTemplate, ProofRequestTemplatePayload,
    TemplateRequestedAttribute, TemplateRequestedPredicate,
};

fn full_name_template() -> ProofRequestTemplate {
    serde_json::from_value(json!({
        "id": "8a83675e-f864-4e5a-9c4d-9787f1034c04",
        "name": "Full name",
        "description": "Verify the full name of a person",
        "version": "0.0.1",
        "payload": {
            "type": "anoncreds",
            "data": [
                {
                    "schema": "Verified Person Schema",
                    "requestedAttributes": [
                        {"name": "given_names"},
                        {"name": "family_name"},
                        {"names": ["issued", "country"]}
                    ],
                    "requestedPredicates": [
                        {"name": "age", "predicateType": ">=", "predicateValue": 17, "parameterizable": true}
                    ]
                },
                {
                    "schema": "Student Card",
                    "requestedAttributes": [{"name": "student_first_name"}],
                    "requestedPredicates": [
                        {"name": "expiry_date", "predicateType": ">=", "predicateValue": 20240101}
                    ]
                }
            ]
        }
    }))
    .unwrap()
}

#[test]
fn test_build_proof_request_for_template() {
    let request = build_proof_request_for_template(&full_name_template(), None, "1234")
        .unwrap()
        .unwrap();

    assert_eq!(request.name, "Full name");
    assert_eq!(request.version, "0.0.1");
    assert_eq!(request.nonce, "1234");

    let attribute_referents: Vec<_> = request
        .requested_attributes
        .keys()
        .map(|referent| referent.as_str())
        .collect();
    assert_eq!(
        attribute_referents,
        vec!["referent_0", "referent_1", "referent_2", "referent_4"]
    );
    let predicate_referents: Vec<_> = request
        .requested_predicates
        .keys()
        .map(|referent| referent.as_str())
        .collect();
    assert_eq!(predicate_referents, vec!["referent_3", "referent_5"]);

    assert_eq!(
        request.requested_attributes["referent_0"],
        RequestedAttribute::Single(SingleAttributeRequest {
            name: "given_names".into(),
            restrictions: None,
            non_revoked: None,
        })
    );
    assert_eq!(
        request.requested_attributes["referent_2"],
        RequestedAttribute::Group(GroupedAttributeRequest {
            names: vec!["issued".into(), "country".into()],
            restrictions: None,
            non_revoked: None,
        })
    );

    let age = &request.requested_predicates["referent_3"];
    assert_eq!(age.predicate_type, PredicateType::GreaterThanOrEqualTo);
    assert_eq!(age.predicate_value, 17);
}

#[test]
fn test_build_proof_request_applies_custom_values() {
    let custom_values = HashMap::from([
        (
            "Verified Person Schema".to_string(),
            HashMap::from([("age".to_string(), 21)]),
        ),
        (
            "Student Card".to_string(),
            HashMap::from([("expiry_date".to_string(), 20300101)]),
        ),
    ]);

    let request =
        build_proof_request_for_template(&full_name_template(), Some(&custom_values), "1234")
            .unwrap()
            .unwrap();

    // only parameterizable predicates take the custom value
    assert_eq!(request.requested_predicates["referent_3"].predicate_value, 21);
    assert_eq!(
        request.requested_predicates["referent_5"].predicate_value,
        20240101
    );

    let zero_values = HashMap::from([(
        "Verified Person Schema".to_string(),
        HashMap::from([("age".to_string(), 0)]),
    )]);

    let request =
        build_proof_request_for_template(&full_name_template(), Some(&zero_values), "1234")
            .unwrap()
            .unwrap();

    // an explicit zero still overrides the template value
    assert_eq!(request.requested_predicates["referent_3"].predicate_value, 0);
}

fn template_with_predicates(
    predicates: Vec<TemplateRequestedPredicate>,
    indy: bool,
) -> ProofRequestTemplate {
    let data = vec![
        AnonCredsRequestTemplateData {
            schema: "Verified Person Schema".into(),
            requested_attributes: vec![TemplateRequestedAttribute {
                name: Some("given_names".into()),
                ..Default::default()
            }],
            requested_predicates: vec![],
        },
        AnonCredsRequestTemplateData {
            schema: "Student Card".into(),
            requested_attributes: vec![],
            requested_predicates: predicates,
        },
    ];

    ProofRequestTemplate {
        id: "id".into(),
        name: "Template".into(),
        description: None,
        version: "0.0.1".into(),
        payload: if indy {
            ProofRequestTemplatePayload::Indy(data)
        } else {
            ProofRequestTemplatePayload::AnonCreds(data)
        },
    }
}

fn predicate(parameterizable: bool) -> TemplateRequestedPredicate {
    TemplateRequestedPredicate {
        name: "age".into(),
        predicate_type: PredicateType::GreaterThanOrEqualTo,
        predicate_value: 18,
        parameterizable,
        restrictions: None,
        non_revoked: None,
    }
}

#[rstest]
#[case::anoncreds_without_predicates(template_with_predicates(vec![], false), false, false)]
#[case::anoncreds_fixed_predicate(template_with_predicates(vec![predicate(false)], false), true, false)]
#[case::anoncreds_parameterizable(
    template_with_predicates(vec![predicate(false), predicate(true)], false),
    true,
    true
)]
#[case::indy_without_predicates(template_with_predicates(vec![], true), false, false)]
#[case::indy_parameterizable(template_with_predicates(vec![predicate(true)], true), true, true)]
#[case::dif(
    ProofRequestTemplate {
        id: "id".into(),
        name: "DIF".into(),
        description: None,
        version: "0.0.1".into(),
        payload: ProofRequestTemplatePayload::Dif(json!({"input_descriptors": []})),
    },
    false,
    false
)]
fn test_template_predicate_checks(
    #[case] template: ProofRequestTemplate,
    #[case] has_predicates: bool,
    #[case] is_parameterizable: bool,
) {
    assert_eq!(template.has_predicates(), has_predicates);
    assert_eq!(template.is_parameterizable(), is_parameterizable);
}

#[test]
fn test_full_name_template_predicate_checks() {
    let template = full_name_template();
    assert!(template.has_predicates());
    assert!(template.is_parameterizable());
}

#[test]
fn test_get_proof_request_template() {
    let templates = vec![
        template_with_predicates(vec![], false),
        full_name_template(),
    ];

    let template =
        get_proof_request_template(&templates, "8a83675e-f864-4e5a-9c4d-9787f1034c04").unwrap();
    assert_eq!(template.name, "Full name");

    assert!(get_proof_request_template(&templates, "unknown").is_none());
    assert!(get_proof_request_template(&[], "id").is_none());
}

#[test]
fn test_build_proof_request_for_template_id() {
    let templates = vec![full_name_template()];

    let request = build_proof_request_for_template_id(
        &templates,
        "8a83675e-f864-4e5a-9c4d-9787f1034c04",
        None,
        "1234",
    )
    .unwrap()
    .unwrap();
    assert_eq!(request.name, "Full name");
    assert_eq!(request.requested_attributes.len(), 4);
    assert_eq!(request.requested_predicates.len(), 2);

    assert_eq!(
        build_proof_request_for_template_id(&templates, "unknown", None, "1234").unwrap(),
        None
    );
}

#[test]
fn test_build_proof_request_for_legacy_indy_template() {
    let template = ProofRequestTemplate {
        id: "id".into(),
        name: "Over 19 years of age".into(),
        description: None,
        version: "0.0.1".into(),
        payload: ProofRequestTemplatePayload::Indy(vec![AnonCredsRequestTemplateData {
            schema: "Verified Person Schema".into(),
            requested_attributes: vec![],
            requested_predicates: vec![TemplateRequestedPredicate {
                name: "age".into(),
                predicate_type: PredicateType::GreaterThanOrEqualTo,
                predicate_value: 19,
                parameterizable: false,
                restrictions: Some(json!([{"schema_name": "Verified Person Schema"}])),
                non_revoked: None,
            }],
        }]),
    };

    let request = build_proof_request_for_template(&template, None, "1")
        .unwrap()
        .unwrap();

    assert!(request.requested_attributes.is_empty());
    assert_eq!(
        request.requested_predicates["referent_0"].restrictions,
        Some(json!([{"schema_name": "Verified Person Schema"}]))
    );
}

#[test]
fn test_build_proof_request_for_dif_template() {
    let template = ProofRequestTemplate {
        id: "id".into(),
        name: "DIF".into(),
        description: None,
        version: "0.0.1".into(),
        payload: ProofRequestTemplatePayload::Dif(json!({})),
    };

    assert_eq!(
        build_proof_request_for_template(&template, None, "1").unwrap(),
        None
    );
}

#[test]
fn test_build_proof_request_rejects_ambiguous_template_attribute() {
    let template = ProofRequestTemplate {
        id: "id".into(),
        name: "Broken".into(),
        description: None,
        version: "0.0.1".into(),
        payload: ProofRequestTemplatePayload::AnonCreds(vec![AnonCredsRequestTemplateData {
            schema: "Schema".into(),
            requested_attributes: vec![
                TemplateRequestedAttribute {
                    name: Some("ok".into()),
                    ..Default::default()
                },
                TemplateRequestedAttribute {
                    name: Some("name".into()),
                    names: Some(vec!["name".into()]),
                    ..Default::default()
                },
            ],
            requested_predicates: vec![],
        }]),
    };

    let result = build_proof_request_for_template(&template, None, "1");

    assert!(matches!(
        result,
        Err(ReconcileError::MalformedProofDefinition(
            MalformedProofDefinitionError::AmbiguousAttribute { referent }
        )) if referent.as_str() == "referent_1"
    ));
}

#[test]
fn test_generate_nonce_is_numeric() {
    let nonce = generate_nonce();
    assert!(!nonce.is_empty());
    assert!(nonce.chars().all(|c| c.is_ascii_digit()));
}
