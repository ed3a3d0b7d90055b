//! Error types shared across the record pipeline.

use thiserror::Error;

use crate::Record;

/// Errors surfaced while driving a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The reader could not parse the input, or the CSV writer failed.
    #[error("{0}")]
    Csv(#[from] csv::Error),

    /// A sink failed writing to its underlying stream.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A projection referenced a column the record does not have.
    #[error("index {index} out of range for record {record:?}")]
    IndexOutOfRange { index: usize, record: Record },

    /// A transform stage rejected a record.
    #[error("{stage} stage failed: {source}")]
    Transform {
        stage: &'static str,
        source: Box<PipelineError>,
    },
}

impl PipelineError {
    /// Attach the name of the failing stage to a transform error.
    pub(crate) fn stage(stage: &'static str, source: PipelineError) -> Self {
        Self::Transform {
            stage,
            source: Box::new(source),
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
