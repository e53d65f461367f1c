use super::ProofService;
use super::mapper::{get_proof_identifiers, missing_attributes, shared_group_attributes};
use super::validator::validate_proof_referents;
use crate::error::ReconcileError;
use crate::model::parsed_proof::{
    MissingAttribute, ParsedProof, ResolvedPredicate, SharedAttribute, SharedAttributesGroup,
    UnresolvedPredicate,
};
use crate::model::proof::Proof;
use crate::model::proof_format::{ProofFormat, ProofFormatData};
use crate::model::proof_request::{ProofRequest, RequestedAttribute};

impl ProofService {
    /// Splits every requested attribute, attribute group and predicate into
    /// disclosed and missing items
    ///
    /// Request order is preserved; shared group members follow the order of the proof.
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    pub fn parse_proof(
        &self,
        request: &ProofRequest,
        proof: &Proof,
    ) -> Result<ParsedProof, ReconcileError> {
        validate_proof_referents(request, proof, self.config.orphaned_referents)?;

        let requested_proof = &proof.requested_proof;
        let mut result = ParsedProof::default();

        for (referent, requested_attribute) in &request.requested_attributes {
            match requested_attribute {
                RequestedAttribute::Single(requested) => {
                    match requested_proof.revealed_attrs.get(referent) {
                        Some(shared) => result.shared_attributes.push(SharedAttribute {
                            name: requested.name.to_owned(),
                            value: shared.raw.to_owned(),
                            identifiers: get_proof_identifiers(
                                proof,
                                referent,
                                shared.sub_proof_index,
                            )?,
                        }),
                        None => result.unresolved_attributes.push(MissingAttribute {
                            name: requested.name.to_owned(),
                        }),
                    }
                }
                RequestedAttribute::Group(requested) => {
                    match requested_proof.revealed_attr_groups.get(referent) {
                        Some(shared) => {
                            result.shared_attribute_groups.push(SharedAttributesGroup {
                                attributes: shared_group_attributes(shared),
                                identifiers: get_proof_identifiers(
                                    proof,
                                    referent,
                                    shared.sub_proof_index,
                                )?,
                            })
                        }
                        None => result
                            .unresolved_attribute_groups
                            .push(missing_attributes(&requested.names)),
                    }
                }
            }
        }

        for (referent, requested_predicate) in &request.requested_predicates {
            match requested_proof.predicates.get(referent) {
                Some(shared) => result.resolved_predicates.push(ResolvedPredicate {
                    name: requested_predicate.name.to_owned(),
                    predicate_type: requested_predicate.predicate_type,
                    predicate_value: requested_predicate.predicate_value,
                    identifiers: get_proof_identifiers(proof, referent, shared.sub_proof_index)?,
                }),
                None => result.unresolved_predicates.push(UnresolvedPredicate {
                    name: requested_predicate.name.to_owned(),
                    predicate_type: requested_predicate.predicate_type,
                    predicate_value: requested_predicate.predicate_value,
                }),
            }
        }

        tracing::debug!(
            shared_attributes = result.shared_attributes.len(),
            shared_attribute_groups = result.shared_attribute_groups.len(),
            resolved_predicates = result.resolved_predicates.len(),
            unresolved_attributes = result.unresolved_attributes.len(),
            unresolved_attribute_groups = result.unresolved_attribute_groups.len(),
            unresolved_predicates = result.unresolved_predicates.len(),
            "Parsed proof"
        );

        Ok(result)
    }

    /// Parses the first format present on both the request and the presentation
    ///
    /// Returns `None` when no format is complete on both sides.
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    pub fn parse_proof_format_data(
        &self,
        data: &ProofFormatData,
    ) -> Result<Option<ParsedProof>, ReconcileError> {
        let (Some(request), Some(presentation)) = (&data.request, &data.presentation) else {
            return Ok(None);
        };

        for format in ProofFormat::PREFERENCE {
            if let (Some(request), Some(proof)) = (request.get(format), presentation.get(format)) {
                tracing::debug!(%format, "Parsing proof format data");
                return self.parse_proof(request, proof).map(Some);
            }
        }

        Ok(None)
    }
}
