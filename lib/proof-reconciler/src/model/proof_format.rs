use serde::{Deserialize, Serialize};
use strum::Display;

use super::proof::Proof;
use super::proof_request::ProofRequest;

/// Format-keyed request and presentation attachments of a proof exchange
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofFormatData {
    pub request: Option<ProofFormats<ProofRequest>>,
    pub presentation: Option<ProofFormats<Proof>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofFormats<T> {
    pub anoncreds: Option<T>,
    pub indy: Option<T>,
}

impl<T> ProofFormats<T> {
    pub fn get(&self, format: ProofFormat) -> Option<&T> {
        match format {
            ProofFormat::AnonCreds => self.anoncreds.as_ref(),
            ProofFormat::Indy => self.indy.as_ref(),
        }
    }
}

/// Both formats share the same request/proof structure, in order of preference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum ProofFormat {
    #[strum(serialize = "anoncreds")]
    AnonCreds,
    #[strum(serialize = "indy")]
    Indy,
}

impl ProofFormat {
    pub const PREFERENCE: [ProofFormat; 2] = [ProofFormat::AnonCreds, ProofFormat::Indy];
}
