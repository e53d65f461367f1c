use thiserror::Error;

pub mod reconciler_config;

pub use reconciler_config::{InputFormat, OrphanedReferentPolicy, ReconcilerConfig};

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Config parsing error: {0}")]
    GeneralParsingError(String),
}
