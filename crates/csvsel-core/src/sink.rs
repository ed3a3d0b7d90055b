//! Output sinks: serialize transformed records to a stream.

use std::io::{self, Write};

use tracing::warn;

use crate::Record;
use crate::error::Result;

/// Serializes records to an output stream.
///
/// `flush` is best-effort: buffering sinks log a flush failure instead of
/// returning it, so the driver can flush unconditionally on every exit path.
pub trait Sink {
    fn write_record(&mut self, record: &Record) -> Result<()>;
    fn flush(&mut self);
}

/// Standard CSV output with the usual quoting rules.
///
/// Fields are quoted only when they contain the delimiter, a quote, or a
/// line break; embedded quotes are doubled.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(out: W, delimiter: u8) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(out);
        Self { writer }
    }
}

impl<W: Write> Sink for CsvSink<W> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        self.writer.write_record(record)?;
        Ok(())
    }

    fn flush(&mut self) {
        if let Err(error) = self.writer.flush() {
            warn!(%error, "csv sink flush failed");
        }
    }
}

/// Comma-joined lines with no quoting or escaping.
///
/// A field containing a comma produces output that cannot be parsed back;
/// that is the contract, not a bug. Lines are written through immediately,
/// so `flush` has nothing to do.
pub struct RawSink<W: Write> {
    out: W,
}

impl<W: Write> RawSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Sink for RawSink<W> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        writeln!(self.out, "{}", record.join(","))?;
        Ok(())
    }

    fn flush(&mut self) {}
}

/// Spaces between columns in aligned table output.
const TABLE_GUTTER: usize = 2;

/// Column-aligned plain-text output.
///
/// Rows buffer until `flush`, when each column is padded to its widest
/// value seen since the previous flush; widths cannot be known sooner.
/// The last field of a row is never padded, so lines carry no trailing
/// spaces.
pub struct TableSink<W: Write> {
    out: W,
    rows: Vec<Record>,
}

impl<W: Write> TableSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            rows: Vec::new(),
        }
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            if widths.len() < row.len() {
                widths.resize(row.len(), 0);
            }
            for (index, field) in row.iter().enumerate() {
                widths[index] = widths[index].max(field.chars().count());
            }
        }
        widths
    }

    fn render(&mut self) -> io::Result<()> {
        let widths = self.column_widths();
        for row in &self.rows {
            for (index, field) in row.iter().enumerate() {
                if index + 1 == row.len() {
                    write!(self.out, "{field}")?;
                } else {
                    let width = widths[index] + TABLE_GUTTER;
                    write!(self.out, "{field:<width$}")?;
                }
            }
            writeln!(self.out)?;
        }
        self.rows.clear();
        self.out.flush()
    }
}

impl<W: Write> Sink for TableSink<W> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        self.rows.push(record.clone());
        Ok(())
    }

    fn flush(&mut self) {
        if let Err(error) = self.render() {
            warn!(%error, "table sink flush failed");
        }
    }
}
