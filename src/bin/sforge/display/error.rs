use std::io::{self, Write};

use anyhow::Error;

use skeleton_forge::BuildError;
use skeleton_forge::io::Error as IoError;

use crate::util::text::wrap;

const RULE: &str = "   ╟──────────────────────────────────────────────────────────────╢";

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "{RULE}");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "{RULE}");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = hints_for(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "{RULE}");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn hints_for(err: &Error) -> Vec<String> {
    if let Some(build_err) = err.downcast_ref::<BuildError>() {
        return build_hints(build_err);
    }
    if let Some(io_err) = err.downcast_ref::<IoError>() {
        return io_hints(io_err);
    }
    if let Some(std_err) = err.downcast_ref::<io::Error>() {
        return std_io_hints(std_err);
    }
    Vec::new()
}

fn build_hints(err: &BuildError) -> Vec<String> {
    match err {
        BuildError::InvalidValence { atom, degree } => vec![
            format!("Atom '{atom}' has {degree} skeleton neighbor(s)"),
            "Every skeleton atom needs 2 or 3 neighbors (trigonal carbon)".to_string(),
            "Check the edge list for missing or extra bonds".to_string(),
        ],
        BuildError::DegenerateGeometry { .. } => vec![
            "Layout positions make a construction undefined".to_string(),
            "The first two nodes must not share a position".to_string(),
            "A divalent atom must not sit on a straight line between its neighbors".to_string(),
        ],
        BuildError::MalformedGraph { .. } => vec![
            "Every edge must name two distinct, declared nodes".to_string(),
            "Node names must be unique".to_string(),
        ],
        BuildError::ParameterParse(_) => vec![
            "Geometry parameter file has invalid TOML syntax".to_string(),
            "Expected sections: [bonds] cc/ch, [naming] hydrogen_prefix".to_string(),
        ],
        BuildError::InvalidParameter { name, .. } => vec![format!(
            "'{name}' must be a positive finite length or a non-empty prefix"
        )],
    }
}

fn io_hints(err: &IoError) -> Vec<String> {
    match err {
        IoError::Io { source } => std_io_hints(source),
        IoError::Parse { line, .. } => vec![
            format!("Inspect the skeleton graph around line {line}"),
            "Nodes: [[node]] with name and pos = [x, y]; optional element".to_string(),
            "Edges: [[edge]] with source and target".to_string(),
        ],
        IoError::CapacityExceeded { format, .. } => vec![
            format!("{format} index fields are three characters wide"),
            "Write XYZ output for larger molecules (-o out.xyz)".to_string(),
        ],
        IoError::UnsupportedReadFormat(_) | IoError::UnsupportedWriteFormat(_) => vec![
            "Supported input: skeleton graph (TOML)".to_string(),
            "Supported output: xyz, sdf".to_string(),
        ],
    }
}

fn std_io_hints(err: &io::Error) -> Vec<String> {
    let hints: &[&str] = match err.kind() {
        io::ErrorKind::NotFound => &["Check that the file path is correct"],
        io::ErrorKind::PermissionDenied => &["Check file permissions with `ls -la`"],
        io::ErrorKind::BrokenPipe => &["Output consumer terminated early"],
        io::ErrorKind::InvalidData => &["Input is not valid UTF-8 text"],
        _ => &["Check file path, permissions, and disk space"],
    };
    hints.iter().map(|h| h.to_string()).collect()
}
