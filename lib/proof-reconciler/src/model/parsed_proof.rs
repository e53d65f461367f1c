use indexmap::IndexMap;
use serde::Serialize;
use serde_with::skip_serializing_none;
use shared_types::CredentialDefinitionId;

use super::proof::ProofIdentifiers;
use super::proof_request::PredicateType;

/// Proof request items split by whether the proof disclosed them
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedProof {
    pub shared_attributes: Vec<SharedAttribute>,
    pub shared_attribute_groups: Vec<SharedAttributesGroup>,
    pub resolved_predicates: Vec<ResolvedPredicate>,
    pub unresolved_attributes: Vec<MissingAttribute>,
    pub unresolved_attribute_groups: Vec<Vec<MissingAttribute>>,
    pub unresolved_predicates: Vec<UnresolvedPredicate>,
}

impl ParsedProof {
    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved_attributes.is_empty()
            && self.unresolved_attribute_groups.is_empty()
            && self.unresolved_predicates.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MissingAttribute {
    pub name: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SharedAttribute {
    pub name: String,
    pub value: String,
    pub identifiers: Option<ProofIdentifiers>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SharedGroupedAttribute {
    pub name: String,
    pub value: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SharedAttributesGroup {
    pub attributes: Vec<SharedGroupedAttribute>,
    pub identifiers: Option<ProofIdentifiers>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPredicate {
    pub name: String,
    pub predicate_type: PredicateType,
    pub predicate_value: i32,
    pub identifiers: Option<ProofIdentifiers>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedPredicate {
    pub name: String,
    pub predicate_type: PredicateType,
    pub predicate_value: i32,
}

/// Shared items disclosed from a single credential
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSharedProofData {
    pub shared_attributes: Vec<SharedAttribute>,
    pub shared_attribute_groups: Vec<SharedAttributesGroup>,
    pub resolved_predicates: Vec<ResolvedPredicate>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupedSharedProofDataItem {
    pub data: CredentialSharedProofData,
    pub identifiers: ProofIdentifiers,
}

pub type GroupedSharedProofData = IndexMap<CredentialDefinitionId, GroupedSharedProofDataItem>;
