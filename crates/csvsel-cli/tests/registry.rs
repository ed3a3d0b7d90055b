//! Integration tests for the output-format registry.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use csvsel_cli::registry::SinkRegistry;
use csvsel_core::Record;

/// Clonable in-memory writer so tests can hand ownership to a sink and
/// still inspect what it wrote.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("lock").clone()).expect("utf8")
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("lock").write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn record(fields: &[&str]) -> Record {
    fields.iter().map(|field| field.to_string()).collect()
}

#[test]
fn builtin_formats_are_csv_raw_table() {
    assert_eq!(SinkRegistry::builtin().names(), vec!["csv", "raw", "table"]);
}

#[test]
fn unknown_format_error_lists_the_alternatives() {
    let registry = SinkRegistry::builtin();
    let error = registry
        .create("yaml", Box::new(io::sink()), b',')
        .err()
        .expect("unknown format");
    let message = error.to_string();
    assert!(message.contains("yaml"), "message: {message}");
    assert!(message.contains("csv, raw, table"), "message: {message}");
}

#[test]
fn csv_constructor_applies_the_delimiter() {
    let registry = SinkRegistry::builtin();
    let buf = SharedBuf::default();
    let mut sink = registry
        .create("csv", Box::new(buf.clone()), b';')
        .expect("create");
    sink.write_record(&record(&["a", "b"])).expect("write");
    sink.flush();
    assert_eq!(buf.contents(), "a;b\n");
}

#[test]
fn raw_constructor_ignores_the_delimiter() {
    let registry = SinkRegistry::builtin();
    let buf = SharedBuf::default();
    let mut sink = registry
        .create("raw", Box::new(buf.clone()), b';')
        .expect("create");
    sink.write_record(&record(&["a", "b"])).expect("write");
    sink.flush();
    assert_eq!(buf.contents(), "a,b\n");
}

#[test]
fn table_constructor_defers_output_until_flush() {
    let registry = SinkRegistry::builtin();
    let buf = SharedBuf::default();
    let mut sink = registry
        .create("table", Box::new(buf.clone()), b',')
        .expect("create");
    sink.write_record(&record(&["a", "bb"])).expect("write");
    sink.write_record(&record(&["ccc", "d"])).expect("write");
    assert_eq!(buf.contents(), "");
    sink.flush();
    insta::assert_snapshot!(buf.contents(), @r"
    a    bb
    ccc  d
    ");
}
