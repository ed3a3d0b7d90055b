//! The pipeline driver: pull a record, transform it, write it, repeat.

use std::time::Instant;

use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::sink::Sink;
use crate::source::RecordSource;
use crate::transform::Transform;

/// Drive `source` to exhaustion through `transforms` into `sink`.
///
/// Records flow one at a time in input order; nothing upstream of the sink
/// buffers more than the current record. The first failure, whether from
/// the source, a transform stage, or the sink, stops the run and is
/// returned. Records already written stay written, and the sink is flushed
/// on every exit path so buffered output survives a failed run.
pub fn run(
    source: &mut dyn RecordSource,
    sink: &mut dyn Sink,
    transforms: &mut [&mut dyn Transform],
) -> Result<()> {
    let start = Instant::now();
    let mut read = 0u64;
    let mut written = 0u64;
    let outcome = drive(source, sink, transforms, &mut read, &mut written);
    sink.flush();
    debug!(
        records_read = read,
        records_written = written,
        duration_ms = start.elapsed().as_millis(),
        ok = outcome.is_ok(),
        "pipeline finished"
    );
    outcome
}

fn drive(
    source: &mut dyn RecordSource,
    sink: &mut dyn Sink,
    transforms: &mut [&mut dyn Transform],
    read: &mut u64,
    written: &mut u64,
) -> Result<()> {
    while let Some(next) = source.read_next() {
        let mut record = next?;
        *read += 1;
        for stage in transforms.iter_mut() {
            record = stage
                .transform(record)
                .map_err(|error| PipelineError::stage(stage.name(), error))?;
        }
        sink.write_record(&record)?;
        *written += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{RawSink, TableSink};
    use crate::source::CsvSource;
    use crate::transform::{ExcludeIndices, HeaderTracker, IncludeIndices};

    #[test]
    fn empty_input_produces_empty_output() {
        let mut source = CsvSource::new("".as_bytes(), b',');
        let mut out = Vec::new();
        {
            let mut sink = RawSink::new(&mut out);
            run(&mut source, &mut sink, &mut []).unwrap();
        }
        assert!(out.is_empty());
    }

    #[test]
    fn records_pass_through_an_empty_chain() {
        let mut source = CsvSource::new("a,b\nc,d\n".as_bytes(), b',');
        let mut out = Vec::new();
        {
            let mut sink = RawSink::new(&mut out);
            run(&mut source, &mut sink, &mut []).unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "a,b\nc,d\n");
    }

    #[test]
    fn stages_apply_in_chain_order() {
        // Include first widens the view the exclude stage sees.
        let mut source = CsvSource::new("a,b,c\n".as_bytes(), b',');
        let mut include = IncludeIndices::new(vec![2, 1, 0], true);
        let mut exclude = ExcludeIndices::new(vec![0]);
        let mut out = Vec::new();
        {
            let mut sink = RawSink::new(&mut out);
            run(
                &mut source,
                &mut sink,
                &mut [&mut include, &mut exclude],
            )
            .unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "b,a\n");
    }

    #[test]
    fn transform_failure_stops_the_run_and_names_the_stage() {
        let mut source = CsvSource::new("a,b\nc\n".as_bytes(), b',');
        let mut include = IncludeIndices::new(vec![1], true);
        let mut out = Vec::new();
        let error = {
            let mut sink = RawSink::new(&mut out);
            run(&mut source, &mut sink, &mut [&mut include]).unwrap_err()
        };
        // The first record was already written before the failure.
        assert_eq!(String::from_utf8(out).unwrap(), "b\n");
        let message = error.to_string();
        assert!(message.contains("include"), "message: {message}");
        assert!(message.contains("index 1"), "message: {message}");
    }

    #[test]
    fn buffered_sink_is_flushed_when_a_run_fails() {
        let mut source = CsvSource::new("a,b\nc\n".as_bytes(), b',');
        let mut include = IncludeIndices::new(vec![1], true);
        let mut out = Vec::new();
        {
            let mut sink = TableSink::new(&mut out);
            run(&mut source, &mut sink, &mut [&mut include]).unwrap_err();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "b\n");
    }

    #[test]
    fn tracker_sees_records_before_projection() {
        let mut source = CsvSource::new("h1,h2\n1,2\n".as_bytes(), b',');
        let mut tracker = HeaderTracker::new();
        let mut include = IncludeIndices::new(vec![1], true);
        let mut out = Vec::new();
        {
            let mut sink = RawSink::new(&mut out);
            run(
                &mut source,
                &mut sink,
                &mut [&mut tracker, &mut include],
            )
            .unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "h2\n2\n");
        assert_eq!(tracker.into_headers(), Some(vec!["h1".to_string(), "h2".to_string()]));
    }
}
