//! Record sources: where the pipeline pulls its records from.

use std::io;

use crate::Record;
use crate::error::Result;

/// Produces records until the input is exhausted.
///
/// `None` means clean end of stream; `Some(Err(_))` is a real failure such
/// as malformed input. The two are never conflated.
pub trait RecordSource {
    fn read_next(&mut self) -> Option<Result<Record>>;
}

/// Delimited-text source backed by a [`csv::Reader`].
///
/// The reader runs headerless and in flexible mode: every line is a data
/// record, and field counts may vary between records. Quoting follows the
/// usual CSV rules, so delimiters inside quoted fields are preserved.
pub struct CsvSource<R: io::Read> {
    reader: csv::Reader<R>,
    buffer: csv::StringRecord,
}

impl<R: io::Read> CsvSource<R> {
    /// Build a source over `input`, splitting fields on `delimiter`.
    pub fn new(input: R, delimiter: u8) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(input);
        Self {
            reader,
            buffer: csv::StringRecord::new(),
        }
    }
}

impl<R: io::Read> RecordSource for CsvSource<R> {
    fn read_next(&mut self) -> Option<Result<Record>> {
        match self.reader.read_record(&mut self.buffer) {
            Ok(true) => Some(Ok(self.buffer.iter().map(str::to_string).collect())),
            Ok(false) => None,
            Err(error) => Some(Err(error.into())),
        }
    }
}
