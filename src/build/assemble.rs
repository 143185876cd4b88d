//! Builds the atom arena from a planar skeleton graph.

use super::diagnostics::{Diagnostic, DiagnosticSink, Stage};
use super::{Error, report};
use crate::model::atom::Atom;
use crate::model::graph::{SkeletonEdge, SkeletonGraph};
use crate::model::molecule::Molecule;

/// Creates one atom per node at `(x, y, 0)` and records every edge as a
/// symmetric bond, in edge order.
///
/// # Errors
///
/// Returns [`Error::MalformedGraph`] if the graph has no nodes, repeats a
/// node name, has a non-finite node position, or contains an edge that
/// references an unknown node or loops back onto its source.
pub fn assemble(graph: &SkeletonGraph, sink: &mut dyn DiagnosticSink) -> Result<Molecule, Error> {
    if graph.nodes.is_empty() {
        return Err(report(
            sink,
            Stage::Assemble,
            Error::malformed_graph("graph contains no nodes"),
        ));
    }

    let mut molecule = Molecule::with_capacity(graph.node_count());

    for node in &graph.nodes {
        if molecule.contains(&node.name) {
            return Err(report(
                sink,
                Stage::Assemble,
                Error::malformed_graph(format!("node '{}' is declared twice", node.name)),
            ));
        }
        let [x, y] = node.position;
        if !x.is_finite() || !y.is_finite() {
            return Err(report(
                sink,
                Stage::Assemble,
                Error::malformed_graph(format!(
                    "node '{}' has a non-finite position ({x}, {y})",
                    node.name
                )),
            ));
        }
        molecule.push(Atom::new(node.name.clone(), node.element, [x, y, 0.0]));
        sink.record(Diagnostic::NodePlaced {
            name: node.name.clone(),
            x,
            y,
        });
    }

    for edge in &graph.edges {
        let i = endpoint(&molecule, edge, &edge.source)
            .map_err(|e| report(sink, Stage::Assemble, e))?;
        let j = endpoint(&molecule, edge, &edge.target)
            .map_err(|e| report(sink, Stage::Assemble, e))?;

        if i == j {
            return Err(report(
                sink,
                Stage::Assemble,
                Error::malformed_graph(format!("edge '{0} -- {0}' is a self loop", edge.source)),
            ));
        }

        if !molecule.link(i, j) {
            sink.record(Diagnostic::DuplicateEdge {
                source: edge.source.clone(),
                target: edge.target.clone(),
            });
        }
    }

    sink.record(Diagnostic::Assembled {
        atoms: molecule.atom_count(),
        bonds: molecule.bond_count(),
    });

    Ok(molecule)
}

fn endpoint(molecule: &Molecule, edge: &SkeletonEdge, name: &str) -> Result<usize, Error> {
    molecule.index_of(name).ok_or_else(|| {
        Error::malformed_graph(format!(
            "edge '{} -- {}' references unknown node '{}'",
            edge.source, edge.target, name
        ))
    })
}
