use indexmap::IndexMap;
use shared_types::Referent;
use time::OffsetDateTime;

use crate::error::ReconcileError;
use crate::mapper::requested_attribute_from_dto;
use crate::model::proof_request::{ProofRequest, RequestedPredicate};
use crate::model::proof_request_template::{CustomPredicateValues, ProofRequestTemplate};

pub fn get_proof_request_template<'a>(
    templates: &'a [ProofRequestTemplate],
    id: &str,
) -> Option<&'a ProofRequestTemplate> {
    templates.iter().find(|template| template.id == id)
}

/// Same as [`build_proof_request_for_template`], `None` when no template has the given id
pub fn build_proof_request_for_template_id(
    templates: &[ProofRequestTemplate],
    id: &str,
    custom_values: Option<&CustomPredicateValues>,
    nonce: impl Into<String>,
) -> Result<Option<ProofRequest>, ReconcileError> {
    let Some(template) = get_proof_request_template(templates, id) else {
        tracing::debug!(%id, "Proof request template not found");
        return Ok(None);
    };

    build_proof_request_for_template(template, custom_values, nonce)
}

/// Builds an AnonCreds proof request out of a template
///
/// Referents are numbered `referent_{n}` with one counter shared by attributes and
/// predicates of all template entries. Predicates marked `parameterizable` take their
/// value from `custom_values` when one is provided for the entry schema.
///
/// Returns `None` for DIF templates.
#[tracing::instrument(level = "debug", skip_all, fields(template_id = %template.id), err(Debug))]
pub fn build_proof_request_for_template(
    template: &ProofRequestTemplate,
    custom_values: Option<&CustomPredicateValues>,
    nonce: impl Into<String>,
) -> Result<Option<ProofRequest>, ReconcileError> {
    let Some(data) = template.anoncreds_data() else {
        tracing::debug!("DIF templates are not turned into AnonCreds requests");
        return Ok(None);
    };

    let mut requested_attributes = IndexMap::new();
    let mut requested_predicates = IndexMap::new();
    let mut index = 0;

    for entry in data {
        for attribute in &entry.requested_attributes {
            let referent = Referent::indexed(index);
            let attribute = requested_attribute_from_dto(&referent, attribute.clone().into())?;
            requested_attributes.insert(referent, attribute);
            index += 1;
        }

        for predicate in &entry.requested_predicates {
            let custom_value = custom_values
                .and_then(|values| values.get(&entry.schema))
                .and_then(|values| values.get(&predicate.name))
                .copied();

            let predicate_value = match custom_value {
                Some(value) if predicate.parameterizable => value,
                _ => predicate.predicate_value,
            };

            requested_predicates.insert(
                Referent::indexed(index),
                RequestedPredicate {
                    name: predicate.name.to_owned(),
                    predicate_type: predicate.predicate_type,
                    predicate_value,
                    restrictions: predicate.restrictions.clone(),
                    non_revoked: predicate.non_revoked,
                },
            );
            index += 1;
        }
    }

    Ok(Some(ProofRequest {
        name: template.name.to_owned(),
        version: template.version.to_owned(),
        nonce: nonce.into(),
        requested_attributes,
        requested_predicates,
        non_revoked: None,
    }))
}

/// Current unix time in milliseconds
pub fn generate_nonce() -> String {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).to_string()
}
