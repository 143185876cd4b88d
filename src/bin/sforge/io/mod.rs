mod infer;
mod spec;

pub use infer::output as infer_output_format;
pub use spec::OutputSpec;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

/// Opens the skeleton graph at `path`, or stdin when `None`.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    let Some(p) = path else {
        return Ok(Box::new(BufReader::new(io::stdin().lock())));
    };
    let file =
        File::open(p).with_context(|| format!("Failed to open skeleton graph: {}", p.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Creates the output at `path`, or locks stdout when `None`.
///
/// Writers flush before returning; the handle is released when dropped.
pub fn create_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let Some(p) = path else {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    };
    let file = File::create(p)
        .with_context(|| format!("Failed to create output file: {}", p.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}
