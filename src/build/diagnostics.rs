//! Structured diagnostic records emitted by the pipeline.
//!
//! Pipeline stages never log through global state. They report to an
//! injected [`DiagnosticSink`]; callers decide where the records go:
//!
//! - [`NullSink`] — Discards everything
//! - [`CollectingSink`] — Keeps records in memory (tests, batch drivers)
//! - [`LogSink`] — Forwards records to the [`log`] facade

use std::fmt;

/// Pipeline stage a record originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Assemble,
    Center,
    Scale,
    Complete,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Assemble => write!(f, "assemble"),
            Stage::Center => write!(f, "center"),
            Stage::Scale => write!(f, "scale"),
            Stage::Complete => write!(f, "complete"),
        }
    }
}

/// A single structured record.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A skeleton node was placed at its planar position.
    NodePlaced { name: String, x: f64, y: f64 },
    /// An edge repeated an existing bond and was dropped.
    DuplicateEdge { source: String, target: String },
    /// The molecule arena was built from the graph.
    Assembled { atoms: usize, bonds: usize },
    /// The barycenter was moved to the origin.
    Centered { barycenter: [f64; 3] },
    /// Positions were scaled so the reference bond has canonical length.
    Scaled {
        reference: (String, String),
        distance: f64,
        factor: f64,
    },
    /// Fewer than two atoms; no reference bond to scale against.
    ScaleSkipped { atoms: usize },
    /// A hydrogen was synthesized on a divalent atom.
    HydrogenAdded {
        name: String,
        parent: String,
        position: [f64; 3],
    },
    /// A stage failed; the run is about to abort.
    Failure {
        stage: Stage,
        kind: &'static str,
        atom: Option<String>,
        degree: Option<usize>,
        message: String,
    },
}

impl Diagnostic {
    pub fn is_failure(&self) -> bool {
        matches!(self, Diagnostic::Failure { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NodePlaced { name, x, y } => write!(f, "node {name} at ({x}, {y})"),
            Diagnostic::DuplicateEdge { source, target } => {
                write!(f, "ignoring repeated edge {source} -- {target}")
            }
            Diagnostic::Assembled { atoms, bonds } => {
                write!(f, "assembled {atoms} skeleton atoms and {bonds} bonds")
            }
            Diagnostic::Centered { barycenter } => write!(
                f,
                "removed barycenter ({:.6}, {:.6}, {:.6})",
                barycenter[0], barycenter[1], barycenter[2]
            ),
            Diagnostic::Scaled {
                reference,
                distance,
                factor,
            } => write!(
                f,
                "reference bond {}-{} measured {:.6}, scale factor {:.6}",
                reference.0, reference.1, distance, factor
            ),
            Diagnostic::ScaleSkipped { atoms } => {
                write!(f, "no reference bond among {atoms} atom(s), scaling skipped")
            }
            Diagnostic::HydrogenAdded {
                name,
                parent,
                position,
            } => write!(
                f,
                "added {name} on {parent} at ({:.6}, {:.6}, {:.6})",
                position[0], position[1], position[2]
            ),
            Diagnostic::Failure {
                stage,
                kind,
                atom,
                degree,
                message,
            } => {
                write!(f, "[{stage}] {kind}: {message}")?;
                if let Some(atom) = atom {
                    write!(f, " (atom {atom}")?;
                    if let Some(degree) = degree {
                        write!(f, ", degree {degree}")?;
                    }
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

/// Destination for pipeline diagnostics.
pub trait DiagnosticSink {
    fn record(&mut self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn record(&mut self, diagnostic: Diagnostic) {
        (**self).record(diagnostic);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _diagnostic: Diagnostic) {}
}

#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    pub records: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter().filter(|d| d.is_failure())
    }
}

impl DiagnosticSink for CollectingSink {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.records.push(diagnostic);
    }
}

/// Forwards records to the `log` facade under the `skeleton_forge` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::Failure { .. } => log::error!(target: "skeleton_forge", "{diagnostic}"),
            Diagnostic::DuplicateEdge { .. } | Diagnostic::ScaleSkipped { .. } => {
                log::warn!(target: "skeleton_forge", "{diagnostic}")
            }
            Diagnostic::NodePlaced { .. } | Diagnostic::HydrogenAdded { .. } => {
                log::trace!(target: "skeleton_forge", "{diagnostic}")
            }
            _ => log::debug!(target: "skeleton_forge", "{diagnostic}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_display_includes_atom_and_degree() {
        let record = Diagnostic::Failure {
            stage: Stage::Complete,
            kind: "invalid-valence",
            atom: Some("c1".to_string()),
            degree: Some(1),
            message: "expected 2 or 3 neighbors".to_string(),
        };
        assert!(record.is_failure());
        assert_eq!(
            record.to_string(),
            "[complete] invalid-valence: expected 2 or 3 neighbors (atom c1, degree 1)"
        );
    }

    #[test]
    fn collecting_sink_keeps_order_and_filters_failures() {
        let mut sink = CollectingSink::new();
        sink.record(Diagnostic::Assembled { atoms: 2, bonds: 1 });
        sink.record(Diagnostic::ScaleSkipped { atoms: 1 });
        sink.record(Diagnostic::Failure {
            stage: Stage::Scale,
            kind: "degenerate-geometry",
            atom: None,
            degree: None,
            message: "zero".to_string(),
        });
        assert_eq!(sink.records.len(), 3);
        assert_eq!(sink.failures().count(), 1);
        assert_eq!(sink.records[0], Diagnostic::Assembled { atoms: 2, bonds: 1 });
    }

    #[test]
    fn sink_by_mutable_reference_forwards() {
        fn emit<S: DiagnosticSink>(mut sink: S) {
            sink.record(Diagnostic::ScaleSkipped { atoms: 0 });
        }

        let mut inner = CollectingSink::new();
        emit(&mut inner);
        assert_eq!(inner.records.len(), 1);
    }

    #[test]
    fn log_and_null_sinks_accept_records() {
        LogSink.record(Diagnostic::Centered {
            barycenter: [0.0, 0.0, 0.0],
        });
        NullSink.record(Diagnostic::ScaleSkipped { atoms: 1 });
    }
}
