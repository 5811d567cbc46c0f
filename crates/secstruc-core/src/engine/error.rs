use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::chain_breaks::ModelError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input model: {source}")]
    Model {
        #[from]
        source: ModelError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Chain breaks describe {found} residues but {expected} residues were supplied")]
    ResidueCountMismatch { expected: usize, found: usize },
}
