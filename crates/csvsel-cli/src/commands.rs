//! Pipeline assembly for the csvsel binary.

use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use csvsel_cli::registry::SinkRegistry;
use csvsel_core::{CsvSource, ExcludeIndices, HeaderTracker, IncludeIndices, Transform, pipeline};

use crate::cli::Cli;
use crate::summary::print_headers;

/// Run one pipeline pass configured by the parsed arguments.
pub fn run(args: &Cli) -> Result<()> {
    let registry = SinkRegistry::builtin();
    let input = open_input(args.file.as_deref(), io::stdin().is_terminal())?;
    let mut source = CsvSource::new(input, args.delimiter);
    let mut sink = registry.create(&args.output, Box::new(io::stdout().lock()), args.delimiter)?;

    let mut tracker = HeaderTracker::new();
    let mut include = IncludeIndices::new(args.include.clone(), !args.no_strict);
    let mut exclude = ExcludeIndices::new(args.exclude.clone());
    let mut transforms: Vec<&mut dyn Transform> = Vec::new();
    if args.print_headers {
        // First in the chain so the snapshot predates any projection.
        transforms.push(&mut tracker);
    }
    transforms.push(&mut include);
    transforms.push(&mut exclude);

    let delimiter = char::from(args.delimiter);
    debug!(
        include = ?args.include,
        exclude = ?args.exclude,
        %delimiter,
        output = %args.output,
        strict = !args.no_strict,
        "starting pipeline"
    );
    let outcome = pipeline::run(&mut source, sink.as_mut(), &mut transforms);
    drop(transforms);
    outcome?;

    if args.print_headers {
        print_headers(tracker.headers());
    }
    Ok(())
}

/// Pick the input stream: the FILE argument, or piped standard input, but
/// never both and never an interactive terminal.
fn open_input(file: Option<&Path>, stdin_is_terminal: bool) -> Result<Box<dyn Read>> {
    match (file, stdin_is_terminal) {
        (Some(_), false) => {
            bail!("both FILE and piped standard input were given; pass exactly one input")
        }
        (Some(path), true) => {
            debug!(path = %path.display(), "reading from file");
            let file = File::open(path)
                .with_context(|| format!("open input file {}", path.display()))?;
            Ok(Box::new(file))
        }
        (None, false) => {
            debug!("reading from standard input");
            Ok(Box::new(io::stdin().lock()))
        }
        (None, true) => bail!("no input: pass FILE or pipe standard input"),
    }
}
