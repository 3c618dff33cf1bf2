//! Crate Error Types
//!
//! One enum for the whole pipeline. Callers branch on the kind instead of
//! relying on panics or string matching.

use std::fmt;

/// Errors surfaced by the detection pipeline.
#[derive(Debug, Clone)]
pub enum DetectorError {
    /// No trained artifact in memory and none persisted on disk.
    ModelUnavailable,
    /// A required field was present but unparseable (e.g. a bad timestamp).
    MalformedRecord(String),
    /// Artifact save/load failed at the I/O or serialization layer.
    PersistenceFailure(String),
    /// Neither a corpus file nor the synthetic generator could supply data.
    CorpusUnavailable(String),
}

impl fmt::Display for DetectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectorError::ModelUnavailable => {
                write!(f, "no trained model available")
            }
            DetectorError::MalformedRecord(msg) => {
                write!(f, "malformed record: {}", msg)
            }
            DetectorError::PersistenceFailure(msg) => {
                write!(f, "artifact persistence failure: {}", msg)
            }
            DetectorError::CorpusUnavailable(msg) => {
                write!(f, "corpus unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for DetectorError {}

pub type Result<T> = std::result::Result<T, DetectorError>;
