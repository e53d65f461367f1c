use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::proof_request::{NonRevokedInterval, PredicateType};

/// Predicate values overriding template defaults, keyed by schema name then predicate name
pub type CustomPredicateValues = HashMap<String, HashMap<String, i32>>;

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofRequestTemplate {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub version: String,
    pub payload: ProofRequestTemplatePayload,
}

impl ProofRequestTemplate {
    /// Entries of AnonCreds and legacy Indy payloads, `None` for DIF
    pub fn anoncreds_data(&self) -> Option<&[AnonCredsRequestTemplateData]> {
        match &self.payload {
            ProofRequestTemplatePayload::AnonCreds(data)
            | ProofRequestTemplatePayload::Indy(data) => Some(data),
            ProofRequestTemplatePayload::Dif(_) => None,
        }
    }

    pub fn has_predicates(&self) -> bool {
        self.anoncreds_data().is_some_and(|data| {
            data.iter()
                .any(|entry| !entry.requested_predicates.is_empty())
        })
    }

    /// At least one predicate value can be overridden by the verifier
    pub fn is_parameterizable(&self) -> bool {
        self.anoncreds_data().is_some_and(|data| {
            data.iter().any(|entry| {
                entry
                    .requested_predicates
                    .iter()
                    .any(|predicate| predicate.parameterizable)
            })
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ProofRequestTemplatePayload {
    #[serde(rename = "anoncreds")]
    AnonCreds(Vec<AnonCredsRequestTemplateData>),
    /// Legacy alias, same structure as AnonCreds
    #[serde(rename = "indy")]
    Indy(Vec<AnonCredsRequestTemplateData>),
    #[serde(rename = "dif")]
    Dif(Value),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnonCredsRequestTemplateData {
    pub schema: String,
    #[serde(default)]
    pub requested_attributes: Vec<TemplateRequestedAttribute>,
    #[serde(default)]
    pub requested_predicates: Vec<TemplateRequestedPredicate>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequestedAttribute {
    pub name: Option<String>,
    pub names: Option<Vec<String>>,
    pub restrictions: Option<Value>,
    pub non_revoked: Option<NonRevokedInterval>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequestedPredicate {
    pub name: String,
    pub predicate_type: PredicateType,
    pub predicate_value: i32,
    #[serde(default)]
    pub parameterizable: bool,
    pub restrictions: Option<Value>,
    pub non_revoked: Option<NonRevokedInterval>,
}
