use std::sync::Arc;

use crate::config::ReconcilerConfig;

mod mapper;
pub mod service;
mod validator;

pub use mapper::group_shared_proof_data_by_credential;

#[derive(Clone, Default)]
pub struct ProofService {
    config: Arc<ReconcilerConfig>,
}

impl ProofService {
    pub fn new(config: Arc<ReconcilerConfig>) -> Self {
        Self { config }
    }
}
