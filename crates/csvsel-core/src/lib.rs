//! Streaming record pipeline for delimited text.
//!
//! The pipeline is a pull loop over three small abstractions:
//!
//! - [`RecordSource`] produces records until end of stream
//! - [`Transform`] maps one record to the next, or fails
//! - [`Sink`] serializes records to an output format
//!
//! [`pipeline::run`] wires them together: read one record, apply the
//! transform chain in order, write the result, repeat. Apart from the
//! aligned table sink, nothing ever holds more than the current record,
//! so input size does not affect memory use.

pub mod error;
pub mod pipeline;
pub mod sink;
pub mod source;
pub mod transform;

pub use error::{PipelineError, Result};
pub use sink::{CsvSink, RawSink, Sink, TableSink};
pub use source::{CsvSource, RecordSource};
pub use transform::{ExcludeIndices, HeaderTracker, IncludeIndices, Transform};

/// One parsed input line: an ordered sequence of field values.
///
/// Field counts may vary between records; the pipeline imposes no schema.
pub type Record = Vec<String>;
