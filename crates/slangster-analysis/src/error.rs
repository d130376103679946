use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a lexicon or glossary dataset from CSV.
///
/// These can only occur at construction time; analysis calls themselves
/// never fail. The caller decides whether to fall back to the builtin
/// tables.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset {path} contains no usable rows")]
    Empty { path: PathBuf },

    #[error("confidence {value} for token {token:?} emotion {emotion:?} is outside [0, 1]")]
    InvalidConfidence {
        token: String,
        emotion: String,
        value: f64,
    },

    #[error("token {token:?} has no emotion entry with confidence > 0")]
    DeadToken { token: String },
}
