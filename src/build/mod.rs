mod assemble;
mod config;
mod diagnostics;
mod error;
pub(crate) mod geometry;
mod normalize;
mod params;
mod valence;

pub use assemble::assemble;
pub use config::BuildConfig;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, LogSink, NullSink, Stage};
pub use error::Error;
pub use normalize::{center, scale};
pub use params::{
    BondLengths, GeometryParams, NamingParams, get_default_parameters, load_parameters,
};
pub use valence::complete_valence;

use crate::model::graph::SkeletonGraph;
use crate::model::molecule::Molecule;

/// Runs the full reconstruction: assemble, center, scale, complete valences.
///
/// Nothing is returned on failure; the failing stage has already written a
/// [`Diagnostic::Failure`] record to `sink`.
pub fn build(
    graph: &SkeletonGraph,
    config: &BuildConfig,
    sink: &mut dyn DiagnosticSink,
) -> Result<Molecule, Error> {
    let params = load_parameters(config.params.as_deref())?;

    let mut molecule = assemble(graph, sink)?;

    center(&mut molecule, sink);

    scale(&mut molecule, params.bonds.cc, sink)?;

    complete_valence(&mut molecule, &params, sink)?;

    Ok(molecule)
}

pub(crate) fn report(sink: &mut dyn DiagnosticSink, stage: Stage, err: Error) -> Error {
    report_on(sink, stage, None, err)
}

/// Like [`report`], naming the atom the failure is about.
pub(crate) fn report_on(
    sink: &mut dyn DiagnosticSink,
    stage: Stage,
    atom: Option<&str>,
    err: Error,
) -> Error {
    let (atom, degree) = match &err {
        Error::InvalidValence { atom, degree } => (Some(atom.clone()), Some(*degree)),
        _ => (atom.map(str::to_string), None),
    };
    sink.record(Diagnostic::Failure {
        stage,
        kind: err.kind(),
        atom,
        degree,
        message: err.to_string(),
    });
    err
}
