//! Output-format registry mapping format names to sink constructors.
//!
//! The registry is plain data built by the caller and handed to the glue
//! code, so adding a format means adding one entry here and nothing else.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::{Result, anyhow};

use csvsel_core::{CsvSink, RawSink, Sink, TableSink};

/// Constructor for one output format. Every constructor receives the
/// configured field delimiter; formats that do not join on a delimiter
/// ignore it.
pub type SinkCtor = fn(Box<dyn Write>, u8) -> Box<dyn Sink>;

/// Named sink constructors, iterated in name order.
pub struct SinkRegistry {
    entries: BTreeMap<&'static str, SinkCtor>,
}

impl SinkRegistry {
    /// Registry holding the built-in formats: `csv`, `raw` and `table`.
    pub fn builtin() -> Self {
        let mut entries: BTreeMap<&'static str, SinkCtor> = BTreeMap::new();
        entries.insert("csv", |out, delimiter| {
            Box::new(CsvSink::new(out, delimiter))
        });
        entries.insert("raw", |out, _| Box::new(RawSink::new(out)));
        entries.insert("table", |out, _| Box::new(TableSink::new(out)));
        Self { entries }
    }

    /// Known format names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    /// Build the sink registered under `name`, writing to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error listing the known formats when `name` is not
    /// registered.
    pub fn create(&self, name: &str, out: Box<dyn Write>, delimiter: u8) -> Result<Box<dyn Sink>> {
        let ctor = self.entries.get(name).ok_or_else(|| {
            anyhow!(
                "unknown output format {name:?}, expected one of: {}",
                self.names().join(", ")
            )
        })?;
        Ok(ctor(out, delimiter))
    }
}
