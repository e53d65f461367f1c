use shared_types::Referent;

use crate::error::ReconcileError;
use crate::model::parsed_proof::{
    GroupedSharedProofData, GroupedSharedProofDataItem, MissingAttribute, ParsedProof,
    SharedGroupedAttribute,
};
use crate::model::proof::{Proof, ProofIdentifiers, RevealedAttributeGroup};

/// Proofs without an `identifiers` section resolve to `None`
pub(super) fn get_proof_identifiers(
    proof: &Proof,
    referent: &Referent,
    sub_proof_index: u32,
) -> Result<Option<ProofIdentifiers>, ReconcileError> {
    if proof.identifiers.is_empty() {
        return Ok(None);
    }

    proof
        .identifiers
        .get(sub_proof_index as usize)
        .cloned()
        .map(Some)
        .ok_or_else(|| ReconcileError::InvalidSubProofIndex {
            referent: referent.to_owned(),
            index: sub_proof_index,
        })
}

pub(super) fn shared_group_attributes(
    group: &RevealedAttributeGroup,
) -> Vec<SharedGroupedAttribute> {
    group
        .values
        .iter()
        .map(|(name, value)| SharedGroupedAttribute {
            name: name.to_owned(),
            value: value.raw.to_owned(),
        })
        .collect()
}

pub(super) fn missing_attributes(names: &[String]) -> Vec<MissingAttribute> {
    names
        .iter()
        .map(|name| MissingAttribute {
            name: name.to_owned(),
        })
        .collect()
}

/// Groups shared items of a parsed proof by credential definition, in first-seen order
///
/// Items without identifiers cannot be attributed to a credential and are left out.
pub fn group_shared_proof_data_by_credential(data: &ParsedProof) -> GroupedSharedProofData {
    let mut result = GroupedSharedProofData::new();

    for item in &data.shared_attributes {
        if let Some(identifiers) = &item.identifiers {
            credential_entry(&mut result, identifiers)
                .data
                .shared_attributes
                .push(item.clone());
        }
    }
    for item in &data.shared_attribute_groups {
        if let Some(identifiers) = &item.identifiers {
            credential_entry(&mut result, identifiers)
                .data
                .shared_attribute_groups
                .push(item.clone());
        }
    }
    for item in &data.resolved_predicates {
        if let Some(identifiers) = &item.identifiers {
            credential_entry(&mut result, identifiers)
                .data
                .resolved_predicates
                .push(item.clone());
        }
    }

    result
}

fn credential_entry<'a>(
    result: &'a mut GroupedSharedProofData,
    identifiers: &ProofIdentifiers,
) -> &'a mut GroupedSharedProofDataItem {
    result
        .entry(identifiers.cred_def_id.clone())
        .or_insert_with(|| GroupedSharedProofDataItem {
            data: Default::default(),
            identifiers: identifiers.clone(),
        })
}
