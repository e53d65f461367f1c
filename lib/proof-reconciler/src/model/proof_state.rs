use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Present-proof exchange states
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ProofState {
    ProposalSent,
    ProposalReceived,
    RequestSent,
    RequestReceived,
    PresentationSent,
    PresentationReceived,
    Declined,
    Abandoned,
    Done,
}

impl ProofState {
    pub fn is_presentation_received(&self) -> bool {
        matches!(self, Self::PresentationReceived | Self::Done)
    }

    pub fn is_presentation_failed(&self) -> bool {
        matches!(self, Self::Abandoned)
    }
}
