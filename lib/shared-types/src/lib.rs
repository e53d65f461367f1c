//! Identifier newtypes shared between proof requests, proofs and their parsed form

mod ledger_id;
mod macros;
mod referent;

pub use ledger_id::{CredentialDefinitionId, RevocationRegistryId, SchemaId};
pub use referent::Referent;
