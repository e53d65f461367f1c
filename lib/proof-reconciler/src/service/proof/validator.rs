use shared_types::Referent;

use crate::config::OrphanedReferentPolicy;
use crate::error::{ProofSection, ReconcileError};
use crate::model::proof::Proof;
use crate::model::proof_request::{ProofRequest, RequestedAttribute};

/// Every disclosed referent must join to a request entry of the same kind
pub(super) fn validate_proof_referents(
    request: &ProofRequest,
    proof: &Proof,
    policy: OrphanedReferentPolicy,
) -> Result<(), ReconcileError> {
    let requested_proof = &proof.requested_proof;

    let orphaned_attributes = requested_proof
        .revealed_attrs
        .keys()
        .filter(|referent| {
            !matches!(
                request.requested_attributes.get(*referent),
                Some(RequestedAttribute::Single(_))
            )
        })
        .map(|referent| (referent, ProofSection::RevealedAttributes));

    let orphaned_groups = requested_proof
        .revealed_attr_groups
        .keys()
        .filter(|referent| {
            !matches!(
                request.requested_attributes.get(*referent),
                Some(RequestedAttribute::Group(_))
            )
        })
        .map(|referent| (referent, ProofSection::RevealedAttributeGroups));

    let orphaned_predicates = requested_proof
        .predicates
        .keys()
        .filter(|referent| !request.requested_predicates.contains_key(*referent))
        .map(|referent| (referent, ProofSection::Predicates));

    for (referent, section) in orphaned_attributes
        .chain(orphaned_groups)
        .chain(orphaned_predicates)
    {
        handle_orphaned_referent(referent, section, policy)?;
    }

    Ok(())
}

fn handle_orphaned_referent(
    referent: &Referent,
    section: ProofSection,
    policy: OrphanedReferentPolicy,
) -> Result<(), ReconcileError> {
    match policy {
        OrphanedReferentPolicy::Reject => Err(ReconcileError::OrphanedReferent {
            referent: referent.to_owned(),
            section,
        }),
        OrphanedReferentPolicy::Ignore => {
            tracing::warn!(%referent, %section, "Ignoring proof entry without matching request");
            Ok(())
        }
    }
}
