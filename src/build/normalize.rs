//! Centering and uniform scaling of atom positions.
//!
//! Graph layout engines place nodes at arbitrary, non-physical distances.
//! [`center`] moves the barycenter to the origin and [`scale`] then anchors
//! the whole skeleton to one reference bond of canonical length. Centering
//! always runs first so the result does not depend on the layout origin.

use super::diagnostics::{Diagnostic, DiagnosticSink, Stage};
use super::geometry::{barycenter, distance, scaled, sub};
use super::{Error, report};
use crate::model::molecule::Molecule;

/// Subtracts the barycenter of all atoms from every position.
///
/// Returns the barycenter that was removed. An empty molecule is left
/// untouched and yields the zero vector.
pub fn center(molecule: &mut Molecule, sink: &mut dyn DiagnosticSink) -> [f64; 3] {
    let Some(mean) = barycenter(molecule.atoms().iter().map(|a| a.position)) else {
        return [0.0; 3];
    };

    for atom in molecule.atoms_mut() {
        atom.position = sub(atom.position, mean);
    }

    sink.record(Diagnostic::Centered { barycenter: mean });
    mean
}

/// Multiplies every position so the first two atoms end up `bond_length`
/// apart.
///
/// Returns the applied factor. With fewer than two atoms there is no
/// reference bond; positions are left untouched and the factor is `1.0`.
///
/// # Errors
///
/// Returns [`Error::DegenerateGeometry`] if the reference atoms coincide, or
/// if the reference bond is so short that scaling overflows a coordinate. The
/// molecule is left unmodified in both cases.
pub fn scale(
    molecule: &mut Molecule,
    bond_length: f64,
    sink: &mut dyn DiagnosticSink,
) -> Result<f64, Error> {
    let (first, second) = match molecule.atoms() {
        [first, second, ..] => (first, second),
        atoms => {
            sink.record(Diagnostic::ScaleSkipped { atoms: atoms.len() });
            return Ok(1.0);
        }
    };

    let d = distance(first.position, second.position);
    if d == 0.0 || !d.is_finite() {
        let err = Error::degenerate_geometry(format!(
            "reference bond {}-{} has length {d}, cannot scale",
            first.name, second.name
        ));
        return Err(report(sink, Stage::Scale, err));
    }

    let reference = (first.name.clone(), second.name.clone());
    let factor = bond_length / d;
    let positions: Vec<[f64; 3]> = molecule
        .atoms()
        .iter()
        .map(|a| scaled(a.position, factor))
        .collect();

    if !factor.is_finite() || positions.iter().flatten().any(|c| !c.is_finite()) {
        let err = Error::degenerate_geometry(format!(
            "reference bond {}-{} has length {d}, scaling by {factor} overflows coordinates",
            reference.0, reference.1
        ));
        return Err(report(sink, Stage::Scale, err));
    }

    for (atom, position) in molecule.atoms_mut().iter_mut().zip(positions) {
        atom.position = position;
    }

    sink.record(Diagnostic::Scaled {
        reference,
        distance: d,
        factor,
    });
    Ok(factor)
}
