//! Library half of the csvsel binary: logging setup and the output-format
//! registry the glue code wires sinks from.

pub mod logging;
pub mod registry;
