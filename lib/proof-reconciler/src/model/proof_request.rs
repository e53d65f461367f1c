use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use shared_types::Referent;
use strum::{Display, EnumString};

use crate::dto::ProofRequestDTO;
use crate::error::ReconcileError;

/// AnonCreds/Indy proof request
///
/// Attribute entries are checked on deserialization, see [`RequestedAttribute`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProofRequestDTO", into = "ProofRequestDTO")]
pub struct ProofRequest {
    pub name: String,
    pub version: String,
    pub nonce: String,
    pub requested_attributes: IndexMap<Referent, RequestedAttribute>,
    pub requested_predicates: IndexMap<Referent, RequestedPredicate>,
    pub non_revoked: Option<NonRevokedInterval>,
}

impl ProofRequest {
    pub fn from_json(value: &str) -> Result<Self, ReconcileError> {
        let dto: ProofRequestDTO = serde_json::from_str(value)?;
        Ok(dto.try_into()?)
    }

    pub fn from_value(value: Value) -> Result<Self, ReconcileError> {
        let dto: ProofRequestDTO = serde_json::from_value(value)?;
        Ok(dto.try_into()?)
    }
}

/// A requested attribute is either a single name or a group of names that
/// must be disclosed together from one credential
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestedAttribute {
    Single(SingleAttributeRequest),
    Group(GroupedAttributeRequest),
}

impl RequestedAttribute {
    pub fn non_revoked(&self) -> Option<&NonRevokedInterval> {
        match self {
            Self::Single(request) => request.non_revoked.as_ref(),
            Self::Group(request) => request.non_revoked.as_ref(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingleAttributeRequest {
    pub name: String,
    pub restrictions: Option<Value>,
    pub non_revoked: Option<NonRevokedInterval>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupedAttributeRequest {
    /// Never empty
    pub names: Vec<String>,
    pub restrictions: Option<Value>,
    pub non_revoked: Option<NonRevokedInterval>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedPredicate {
    pub name: String,
    #[serde(rename = "p_type")]
    pub predicate_type: PredicateType,
    #[serde(rename = "p_value")]
    pub predicate_value: i32,
    pub restrictions: Option<Value>,
    pub non_revoked: Option<NonRevokedInterval>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum PredicateType {
    #[serde(rename = ">=")]
    #[strum(serialize = ">=")]
    GreaterThanOrEqualTo,
    #[serde(rename = ">")]
    #[strum(serialize = ">")]
    GreaterThan,
    #[serde(rename = "<=")]
    #[strum(serialize = "<=")]
    LessThanOrEqualTo,
    #[serde(rename = "<")]
    #[strum(serialize = "<")]
    LessThan,
}

#[skip_serializing_none]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonRevokedInterval {
    pub from: Option<u64>,
    pub to: Option<u64>,
}
