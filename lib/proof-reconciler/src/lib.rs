//! Reconciliation of AnonCreds/Indy proof requests with the proofs presented for them
//!
//! [`ProofService::parse_proof`] joins the requested attributes, attribute groups and
//! predicates of a [`ProofRequest`] with the disclosed items of a [`Proof`] by referent,
//! producing a [`ParsedProof`] that lists what was shared and what is missing.

pub mod config;
pub mod dto;
pub mod error;
mod mapper;
pub mod model;
pub mod service;

pub use config::ReconcilerConfig;
pub use error::{ErrorCode, MalformedProofDefinitionError, ReconcileError};
pub use model::parsed_proof::ParsedProof;
pub use model::proof::Proof;
pub use model::proof_request::ProofRequest;
pub use service::proof::{ProofService, group_shared_proof_data_by_credential};
pub use service::proof_request_template::{
    build_proof_request_for_template, build_proof_request_for_template_id, generate_nonce,
    get_proof_request_template,
};

/// Parses a proof with the default configuration, rejecting orphaned referents
pub fn parse_proof(request: &ProofRequest, proof: &Proof) -> Result<ParsedProof, ReconcileError> {
    ProofService::default().parse_proof(request, proof)
}
