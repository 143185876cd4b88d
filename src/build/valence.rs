//! Valence completion for trigonal (sp2) skeleton atoms.
//!
//! Every skeleton atom must end up with three substituents. Atoms with two
//! skeleton neighbors receive one hydrogen along the trigonal-planar
//! bisector: the three bond vectors of an ideal sp2 center sum to zero, so
//! the missing one is the negated sum of the two known ones.

use super::diagnostics::{Diagnostic, DiagnosticSink, Stage};
use super::geometry::{add, norm, scaled, sub};
use super::params::GeometryParams;
use super::{Error, report, report_on};
use crate::model::atom::Atom;
use crate::model::molecule::Molecule;
use std::collections::HashSet;

const MIN_DEGREE: usize = 2;
const MAX_DEGREE: usize = 3;

/// Residual of the summed bond vectors, relative to their total length,
/// below which the neighbors count as collinear.
const COLLINEAR_TOLERANCE: f64 = 1e-8;

/// Appends one hydrogen to every divalent skeleton atom.
///
/// Atoms are visited in arena order; hydrogens are named
/// `{prefix}1`, `{prefix}2`, … in that order, skipping names already used by
/// skeleton nodes. Atoms that already carry a synthesized hydrogen are
/// skipped, so a second pass adds nothing. Existing atoms are never modified.
///
/// Returns the number of hydrogens added.
///
/// # Errors
///
/// - [`Error::InvalidValence`] if a skeleton atom has fewer than two or more
///   than three skeleton neighbors. The molecule is left unmodified.
/// - [`Error::DegenerateGeometry`] if the two bond vectors of a divalent atom
///   cancel out up to rounding, leaving no direction for the hydrogen.
pub fn complete_valence(
    molecule: &mut Molecule,
    params: &GeometryParams,
    sink: &mut dyn DiagnosticSink,
) -> Result<usize, Error> {
    let skeleton = molecule.skeleton_count();

    for atom in &molecule.atoms()[..skeleton] {
        let degree = atom.degree();
        if !(MIN_DEGREE..=MAX_DEGREE).contains(&degree) {
            return Err(report(
                sink,
                Stage::Complete,
                Error::invalid_valence(&atom.name, degree),
            ));
        }
    }

    let completed: HashSet<usize> = molecule.atoms().iter().filter_map(|a| a.parent).collect();
    let mut counter = 0usize;
    let mut added = 0usize;

    for idx in 0..skeleton {
        let &[b, c] = molecule.neighbors(idx) else {
            continue;
        };
        if completed.contains(&idx) {
            continue;
        }

        let position = hydrogen_position(molecule, idx, b, c, params.bonds.ch).map_err(|e| {
            report_on(sink, Stage::Complete, Some(&molecule.atoms()[idx].name), e)
        })?;

        let name = next_free_name(molecule, &params.naming.hydrogen_prefix, &mut counter);
        sink.record(Diagnostic::HydrogenAdded {
            name: name.clone(),
            parent: molecule.atoms()[idx].name.clone(),
            position,
        });
        molecule.push(Atom::hydrogen(name, position, idx));
        added += 1;
    }

    Ok(added)
}

fn hydrogen_position(
    molecule: &Molecule,
    a: usize,
    b: usize,
    c: usize,
    bond_length: f64,
) -> Result<[f64; 3], Error> {
    let atoms = molecule.atoms();
    let origin = atoms[a].position;

    let to_b = sub(atoms[b].position, origin);
    let to_c = sub(atoms[c].position, origin);
    let direction = scaled(add(to_b, to_c), -1.0);
    let length = norm(direction);

    // Negated comparison so NaN lengths are rejected too.
    if !(length > COLLINEAR_TOLERANCE * (norm(to_b) + norm(to_c))) || !length.is_finite() {
        return Err(Error::degenerate_geometry(format!(
            "bonds {}-{} and {}-{} are collinear, hydrogen direction on '{}' is undefined",
            atoms[a].name, atoms[b].name, atoms[a].name, atoms[c].name, atoms[a].name
        )));
    }

    Ok(add(origin, scaled(direction, bond_length / length)))
}

fn next_free_name(molecule: &Molecule, prefix: &str, counter: &mut usize) -> String {
    loop {
        *counter += 1;
        let name = format!("{prefix}{counter}");
        if !molecule.contains(&name) {
            return name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::assemble::assemble;
    use crate::build::diagnostics::{CollectingSink, NullSink};
    use crate::build::geometry::distance;
    use crate::build::params::get_default_parameters;
    use crate::model::graph::SkeletonGraph;
    use crate::model::types::Element;

    const EPS: f64 = 1e-9;

    fn complete(graph: &SkeletonGraph) -> Result<Molecule, Error> {
        let mut mol = assemble(graph, &mut NullSink)?;
        complete_valence(&mut mol, get_default_parameters(), &mut NullSink)?;
        Ok(mol)
    }

    fn make_triangle_with_tail() -> SkeletonGraph {
        // Fused 3- and 4-rings sharing the a-c bond.
        let mut graph = SkeletonGraph::new();
        graph
            .add_node("a", 0.0, 0.0)
            .add_node("b", 1.4, 0.0)
            .add_node("c", 0.7, 1.2)
            .add_node("d", 0.7, 2.6)
            .add_node("e", -0.7, 1.2)
            .add_edge("a", "b")
            .add_edge("b", "c")
            .add_edge("c", "a")
            .add_edge("c", "d")
            .add_edge("d", "e")
            .add_edge("e", "a");
        graph
    }

    #[test]
    fn divalent_atom_gets_hydrogen_on_negated_bisector() {
        let mut graph = SkeletonGraph::new();
        graph
            .add_node("a", 0.0, 0.0)
            .add_node("b", 1.0, 1.0)
            .add_node("c", -1.0, 1.0)
            .add_node("d", 0.0, 2.0)
            .add_edge("a", "b")
            .add_edge("a", "c")
            .add_edge("b", "d")
            .add_edge("c", "d");
        let mol = complete(&graph).unwrap();

        assert_eq!(mol.atom_count(), 8);
        let h = &mol.atoms()[4];
        assert_eq!(h.name, "H1");
        assert_eq!(h.element, Element::H);
        assert_eq!(h.parent, Some(0));
        assert!(h.neighbors.is_empty());
        assert!(h.position[0].abs() < EPS);
        assert!((h.position[1] + 1.1).abs() < EPS);
        assert!(h.position[2].abs() < EPS);
    }

    #[test]
    fn trivalent_atoms_receive_no_hydrogen() {
        let mol = complete(&make_triangle_with_tail()).unwrap();
        let parents: Vec<_> = mol.atoms().iter().filter_map(|a| a.parent).collect();
        // a and c are trivalent; b, d, e are divalent.
        assert_eq!(parents, vec![1, 3, 4]);
        assert_eq!(mol.hydrogen_count(), 3);
    }

    #[test]
    fn every_hydrogen_sits_at_canonical_distance() {
        let mol = complete(&make_triangle_with_tail()).unwrap();
        for atom in mol.atoms().iter().filter(|a| a.is_synthesized()) {
            let parent = &mol.atoms()[atom.parent.unwrap()];
            let d = distance(atom.position, parent.position);
            assert!((d - 1.1).abs() < EPS, "{} is {d} from {}", atom.name, parent.name);
        }
    }

    #[test]
    fn monovalent_atom_is_invalid_and_molecule_untouched() {
        let mut graph = make_triangle_with_tail();
        graph.add_node("f", 3.0, 3.0).add_edge("d", "f");
        let mut mol = assemble(&graph, &mut NullSink).unwrap();
        let before = mol.clone();
        let mut sink = CollectingSink::new();

        let err = complete_valence(&mut mol, get_default_parameters(), &mut sink).unwrap_err();
        match err {
            Error::InvalidValence { atom, degree } => {
                assert_eq!(atom, "f");
                assert_eq!(degree, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(mol, before);

        let failure = sink.failures().next().expect("failure recorded");
        match failure {
            Diagnostic::Failure { atom, degree, .. } => {
                assert_eq!(atom.as_deref(), Some("f"));
                assert_eq!(*degree, Some(1));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn tetravalent_atom_is_invalid() {
        let mut graph = SkeletonGraph::new();
        graph.add_node("x", 0.0, 0.0);
        for (i, (dx, dy)) in [(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0)]
            .into_iter()
            .enumerate()
        {
            let name = format!("r{i}");
            graph.add_node(name.clone(), dx, dy).add_edge("x", name);
        }
        assert!(matches!(
            complete(&graph),
            Err(Error::InvalidValence { degree: 4, .. })
        ));
    }

    #[test]
    fn collinear_neighbors_are_degenerate() {
        let mut graph = SkeletonGraph::new();
        graph
            .add_node("a", 0.0, 0.0)
            .add_node("b", 1.0, 0.0)
            .add_node("c", -1.0, 0.0)
            .add_node("d", 0.0, 5.0)
            .add_edge("a", "b")
            .add_edge("a", "c")
            .add_edge("b", "d")
            .add_edge("c", "d");
        match complete(&graph) {
            Err(Error::DegenerateGeometry { detail }) => assert!(detail.contains("'a'")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn slightly_bent_neighbors_still_get_hydrogen() {
        let mut graph = SkeletonGraph::new();
        graph
            .add_node("a", 0.0, 0.0)
            .add_node("b", 1.0, 0.0)
            .add_node("c", -1.0, 1e-3)
            .add_node("d", 0.0, 5.0)
            .add_edge("a", "b")
            .add_edge("a", "c")
            .add_edge("b", "d")
            .add_edge("c", "d");
        let mol = complete(&graph).unwrap();
        let h = &mol.atoms()[4];
        assert_eq!(h.parent, Some(0));
        assert!(h.position[0].abs() < EPS);
        assert!((h.position[1] + 1.1).abs() < EPS);
    }

    #[test]
    fn hydrogen_names_skip_taken_skeleton_names() {
        let mut graph = SkeletonGraph::new();
        graph
            .add_node("H1", 0.0, 0.0)
            .add_node("H3", 1.4, 0.0)
            .add_node("c", 0.7, 1.2)
            .add_edge("H1", "H3")
            .add_edge("H3", "c")
            .add_edge("c", "H1");
        let mol = complete(&graph).unwrap();
        let names: Vec<_> = mol.atoms()[3..].iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["H2", "H4", "H5"]);
    }

    #[test]
    fn second_pass_adds_nothing() {
        let mut mol = assemble(&make_triangle_with_tail(), &mut NullSink).unwrap();
        let params = get_default_parameters();
        assert_eq!(complete_valence(&mut mol, params, &mut NullSink).unwrap(), 3);
        let once = mol.clone();
        assert_eq!(complete_valence(&mut mol, params, &mut NullSink).unwrap(), 0);
        assert_eq!(mol, once);
    }

    #[test]
    fn custom_prefix_and_length_are_honored() {
        let params = crate::build::params::load_parameters(Some(
            "[bonds]\nch = 1.09\n[naming]\nhydrogen_prefix = \"HX\"\n",
        ))
        .unwrap();
        let mut mol = assemble(&make_triangle_with_tail(), &mut NullSink).unwrap();
        complete_valence(&mut mol, &params, &mut NullSink).unwrap();
        let h = &mol.atoms()[5];
        assert_eq!(h.name, "HX1");
        let parent = &mol.atoms()[h.parent.unwrap()];
        assert!((distance(h.position, parent.position) - 1.09).abs() < EPS);
    }
}
