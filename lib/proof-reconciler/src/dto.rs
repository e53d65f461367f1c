use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use shared_types::Referent;

use crate::model::proof_request::{NonRevokedInterval, RequestedPredicate};

/// Wire form of [`crate::model::proof_request::ProofRequest`]
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProofRequestDTO {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub nonce: String,
    #[serde(default)]
    pub requested_attributes: IndexMap<Referent, RequestedAttributeDTO>,
    #[serde(default)]
    pub requested_predicates: IndexMap<Referent, RequestedPredicate>,
    pub non_revoked: Option<NonRevokedInterval>,
}

/// `name` and `names` are mutually exclusive, one of them must be set
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RequestedAttributeDTO {
    pub name: Option<String>,
    pub names: Option<Vec<String>>,
    pub restrictions: Option<Value>,
    pub non_revoked: Option<NonRevokedInterval>,
}
