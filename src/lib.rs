pub mod bio;
pub mod cli;
pub mod core;
pub mod model;
pub mod report;
pub mod storage;

pub use crate::bio::{
    clean_sequence, extract_kmers, gc_content, kmer_string, nucleotide_frequency, parse_fasta,
    statistics, validate_sequence, Sequence, SequenceStatistics, SequenceValidator,
    ValidationOutcome,
};
pub use crate::core::predictor::{PredictionContext, PredictionResult};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DnaRiskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid sequence: {0}")]
    Validation(#[from] crate::bio::ValidationError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Model not loaded. Train a model first with `dnarisk train`")]
    ModelNotReady,

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for DnaRiskError {
    fn from(err: serde_json::Error) -> Self {
        DnaRiskError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DnaRiskError>;
