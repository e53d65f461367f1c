use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use shared_types::{CredentialDefinitionId, Referent, RevocationRegistryId, SchemaId};

use crate::error::ReconcileError;

/// Disclosed part of an AnonCreds/Indy proof
///
/// The cryptographic sub-proofs are not modelled, verification happens upstream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub requested_proof: RequestedProof,
    #[serde(default)]
    pub identifiers: Vec<ProofIdentifiers>,
}

impl Proof {
    pub fn from_json(value: &str) -> Result<Self, ReconcileError> {
        Ok(serde_json::from_str(value)?)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedProof {
    #[serde(default)]
    pub revealed_attrs: IndexMap<Referent, RevealedAttribute>,
    #[serde(default)]
    pub revealed_attr_groups: IndexMap<Referent, RevealedAttributeGroup>,
    #[serde(default)]
    pub predicates: IndexMap<Referent, SubProofReference>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedAttribute {
    pub sub_proof_index: u32,
    pub raw: String,
    pub encoded: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedAttributeGroup {
    pub sub_proof_index: u32,
    pub values: IndexMap<String, RevealedValue>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedValue {
    pub raw: String,
    pub encoded: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubProofReference {
    pub sub_proof_index: u32,
}

/// Ledger identifiers of the credential a sub-proof was derived from
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofIdentifiers {
    pub schema_id: SchemaId,
    pub cred_def_id: CredentialDefinitionId,
    pub rev_reg_id: Option<RevocationRegistryId>,
    pub timestamp: Option<u64>,
}
