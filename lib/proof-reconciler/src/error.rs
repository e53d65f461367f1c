use shared_types::Referent;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error(transparent)]
    MalformedProofDefinition(#[from] MalformedProofDefinitionError),
    #[error("Referent `{referent}` in proof section `{section}` is not requested")]
    OrphanedReferent {
        referent: Referent,
        section: ProofSection,
    },
    #[error("Invalid sub proof index {index} for referent `{referent}`")]
    InvalidSubProofIndex { referent: Referent, index: u32 },
    #[error("JSON error: `{0}`")]
    Json(#[from] serde_json::Error),
}

/// Request entries that cannot be classified as exactly one kind of request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedProofDefinitionError {
    #[error("Requested attribute `{referent}` has both `name` and `names`")]
    AmbiguousAttribute { referent: Referent },
    #[error("Requested attribute `{referent}` has neither `name` nor `names`")]
    MissingAttributeName { referent: Referent },
    #[error("Requested attribute group `{referent}` has no names")]
    EmptyAttributeGroup { referent: Referent },
}

impl MalformedProofDefinitionError {
    pub fn referent(&self) -> &Referent {
        match self {
            Self::AmbiguousAttribute { referent }
            | Self::MissingAttributeName { referent }
            | Self::EmptyAttributeGroup { referent } => referent,
        }
    }
}

/// Sections of `requested_proof` that are joined against the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ProofSection {
    #[strum(serialize = "revealed_attrs")]
    RevealedAttributes,
    #[strum(serialize = "revealed_attr_groups")]
    RevealedAttributeGroups,
    #[strum(serialize = "predicates")]
    Predicates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Proof001,
    Proof002,
    Proof003,
    Proof004,
    Proof005,

    Json,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::Proof001 => "Ambiguous requested attribute",
            ErrorCode::Proof002 => "Requested attribute without name",
            ErrorCode::Proof003 => "Empty requested attribute group",
            ErrorCode::Proof004 => "Orphaned proof referent",
            ErrorCode::Proof005 => "Invalid sub proof index",

            ErrorCode::Json => "JSON error",
        }
    }
}

impl ReconcileError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ReconcileError::MalformedProofDefinition(error) => error.error_code(),
            ReconcileError::OrphanedReferent { .. } => ErrorCode::Proof004,
            ReconcileError::InvalidSubProofIndex { .. } => ErrorCode::Proof005,
            ReconcileError::Json(_) => ErrorCode::Json,
        }
    }
}

impl MalformedProofDefinitionError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            MalformedProofDefinitionError::AmbiguousAttribute { .. } => ErrorCode::Proof001,
            MalformedProofDefinitionError::MissingAttributeName { .. } => ErrorCode::Proof002,
            MalformedProofDefinitionError::EmptyAttributeGroup { .. } => ErrorCode::Proof003,
        }
    }
}
