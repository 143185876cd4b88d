use std::collections::HashMap;
use std::io::{self, Write};

use skeleton_forge::{Element, Molecule};

use crate::util::text::truncate;

const INDENT: &str = "      ";
const KEY_W: usize = 18;
const VAL_W: usize = 30;

pub fn print_molecule_info(molecule: &Molecule) {
    let mut out = io::stderr().lock();

    let mut rows = vec![
        ("Total Atoms", molecule.atom_count().to_string()),
        ("Skeleton Atoms", molecule.skeleton_count().to_string()),
        ("Hydrogens Added", molecule.hydrogen_count().to_string()),
        ("Skeleton Bonds", molecule.bond_count().to_string()),
    ];

    if let [a, b, ..] = molecule.atoms() {
        let d = a.distance_to(b);
        rows.push(("Reference Bond", format!("{}–{}  {:.4} Å", a.name, b.name, d)));
    }
    if let Some([dx, dy, dz]) = extent(molecule) {
        rows.push(("Extent (Å)", format!("{dx:.2} × {dy:.2} × {dz:.2}")));
    }

    print_kv_table(&mut out, "Molecule Summary", &rows);
    print_element_counts(&mut out, molecule);
}

fn print_element_counts(out: &mut impl Write, molecule: &Molecule) {
    let mut counts: HashMap<Element, usize> = HashMap::new();
    for atom in molecule.atoms() {
        *counts.entry(atom.element).or_insert(0) += 1;
    }

    // Hill order: C, H, then alphabetical.
    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by_key(|(element, _)| {
        let rank = match element {
            Element::C => 0,
            Element::H => 1,
            _ => 2,
        };
        (rank, element.symbol())
    });

    let formula: String = sorted
        .iter()
        .map(|(element, n)| match *n {
            1 => element.symbol().to_string(),
            n => format!("{}{}", element.symbol(), n),
        })
        .collect();

    let _ = writeln!(out, "{}Formula: {}", INDENT, formula);
    let _ = writeln!(out);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let k_line = "─".repeat(KEY_W + 2);
    let v_line = "─".repeat(VAL_W + 2);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, title);
    let _ = writeln!(out, "{}┌{}┬{}┐", INDENT, k_line, v_line);
    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<KEY_W$} │ {:>VAL_W$} │",
            INDENT,
            truncate(key, KEY_W),
            truncate(val, VAL_W)
        );
    }
    let _ = writeln!(out, "{}└{}┴{}┘", INDENT, k_line, v_line);
}

fn extent(molecule: &Molecule) -> Option<[f64; 3]> {
    let mut atoms = molecule.atoms().iter();
    let first = atoms.next()?.position;
    let (lo, hi) = atoms.fold((first, first), |(mut lo, mut hi), atom| {
        for k in 0..3 {
            lo[k] = lo[k].min(atom.position[k]);
            hi[k] = hi[k].max(atom.position[k]);
        }
        (lo, hi)
    });
    Some([hi[0] - lo[0], hi[1] - lo[1], hi[2] - lo[2]])
}
