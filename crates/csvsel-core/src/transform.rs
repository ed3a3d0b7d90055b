//! Transform stages: record-to-record mappings composed into a chain.

use std::collections::BTreeSet;

use crate::Record;
use crate::error::{PipelineError, Result};

/// One pipeline stage mapping an input record to an output record.
///
/// Stages consume their input and produce a fresh value, so a stage never
/// observes mutations made by stages downstream of it. Returning an error
/// aborts the run.
pub trait Transform {
    fn transform(&mut self, record: Record) -> Result<Record>;

    /// Short stage name used when wrapping errors and in logs.
    fn name(&self) -> &'static str;
}

/// Projects a record onto an explicit ordered list of column indices.
///
/// The index list drives the output: order is output order, and a repeated
/// index repeats the column. An empty list is the identity, which lets the
/// stage sit in a chain unconditionally.
///
/// In strict mode an index beyond the record's width fails the run; in
/// non-strict mode it is skipped, so the output can be narrower than the
/// index list.
#[derive(Debug)]
pub struct IncludeIndices {
    indices: Vec<usize>,
    strict: bool,
}

impl IncludeIndices {
    pub fn new(indices: Vec<usize>, strict: bool) -> Self {
        Self { indices, strict }
    }
}

impl Transform for IncludeIndices {
    fn transform(&mut self, record: Record) -> Result<Record> {
        if self.indices.is_empty() {
            return Ok(record);
        }
        let mut output = Vec::with_capacity(self.indices.len());
        for &index in &self.indices {
            if index < record.len() {
                output.push(record[index].clone());
            } else if self.strict {
                return Err(PipelineError::IndexOutOfRange { index, record });
            }
        }
        Ok(output)
    }

    fn name(&self) -> &'static str {
        "include"
    }
}

/// Drops the columns at the given indices, keeping the rest in order.
///
/// Indices beyond the record's width are ignored; exclusion never fails and
/// duplicates in the list are harmless. An empty list is the identity.
#[derive(Debug)]
pub struct ExcludeIndices {
    indices: Vec<usize>,
    // Built from `indices` on first use, then reused for every record.
    set: Option<BTreeSet<usize>>,
}

impl ExcludeIndices {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, set: None }
    }
}

impl Transform for ExcludeIndices {
    fn transform(&mut self, record: Record) -> Result<Record> {
        if self.indices.is_empty() {
            return Ok(record);
        }
        let set = self
            .set
            .get_or_insert_with(|| self.indices.iter().copied().collect());
        Ok(record
            .into_iter()
            .enumerate()
            .filter(|(index, _)| !set.contains(index))
            .map(|(_, field)| field)
            .collect())
    }

    fn name(&self) -> &'static str {
        "exclude"
    }
}

/// Pass-through stage that snapshots the first record it observes.
///
/// Installed ahead of the projections, the snapshot is the raw first input
/// record. One snapshot per instance; build a fresh tracker for each run.
#[derive(Debug, Default)]
pub struct HeaderTracker {
    headers: Option<Record>,
}

impl HeaderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first record seen, or `None` when no record arrived.
    pub fn headers(&self) -> Option<&Record> {
        self.headers.as_ref()
    }

    /// Consume the tracker, yielding the snapshot.
    pub fn into_headers(self) -> Option<Record> {
        self.headers
    }
}

impl Transform for HeaderTracker {
    fn transform(&mut self, record: Record) -> Result<Record> {
        if self.headers.is_none() {
            self.headers = Some(record.clone());
        }
        Ok(record)
    }

    fn name(&self) -> &'static str {
        "headers"
    }
}
