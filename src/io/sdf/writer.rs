use crate::io::Format;
use crate::io::error::Error;
use crate::model::molecule::Molecule;
use std::io::Write;

// Skeleton graphs carry no bond orders; CTfile type 8 means "any".
const SKELETON_BOND_TYPE: u8 = 8;
const HYDROGEN_BOND_TYPE: u8 = 1;

// V2000 counts and bond lines use three-character index fields.
const V2000_MAX_ENTRIES: usize = 999;

pub fn write<W: Write>(mut writer: W, molecule: &Molecule) -> Result<(), Error> {
    let skeleton_bonds = molecule.bonds();
    let hydrogen_bonds: Vec<(usize, usize)> = molecule
        .atoms()
        .iter()
        .enumerate()
        .filter_map(|(i, atom)| atom.parent.map(|p| (p, i)))
        .collect();

    check_capacity("atoms", molecule.atom_count())?;
    check_capacity("bonds", skeleton_bonds.len() + hydrogen_bonds.len())?;

    writeln!(writer, "SDF Export")?;
    writeln!(writer, "skeleton-forge")?;
    writeln!(writer)?;
    writeln!(
        writer,
        "{:>3}{:>3}  0  0  0  0  0  0  0  0  0999 V2000",
        molecule.atom_count(),
        skeleton_bonds.len() + hydrogen_bonds.len()
    )?;

    for atom in molecule.atoms() {
        writeln!(
            writer,
            "{:>10.4}{:>10.4}{:>10.4} {:<3} 0  0  0  0  0  0  0  0  0  0  0  0",
            atom.position[0],
            atom.position[1],
            atom.position[2],
            atom.element.symbol()
        )?;
    }

    let bonds = skeleton_bonds
        .iter()
        .map(|&(i, j)| (i, j, SKELETON_BOND_TYPE))
        .chain(
            hydrogen_bonds
                .iter()
                .map(|&(i, j)| (i, j, HYDROGEN_BOND_TYPE)),
        );
    for (i, j, kind) in bonds {
        writeln!(writer, "{:>3}{:>3}{:>3}  0  0  0  0", i + 1, j + 1, kind)?;
    }

    writeln!(writer, "M  END")?;
    writeln!(writer, "$$$$")?;
    writer.flush()?;
    Ok(())
}

fn check_capacity(what: &'static str, count: usize) -> Result<(), Error> {
    if count > V2000_MAX_ENTRIES {
        return Err(Error::CapacityExceeded {
            format: Format::Sdf,
            what,
            count,
            limit: V2000_MAX_ENTRIES,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{BuildConfig, NullSink, assemble, build};
    use crate::model::graph::SkeletonGraph;

    fn make_cyclobutadiene() -> Molecule {
        let mut graph = SkeletonGraph::new();
        graph
            .add_node("a", 0.0, 0.0)
            .add_node("b", 1.0, 0.0)
            .add_node("c", 1.0, 1.0)
            .add_node("d", 0.0, 1.0)
            .add_edge("a", "b")
            .add_edge("b", "c")
            .add_edge("c", "d")
            .add_edge("d", "a");
        build(&graph, &BuildConfig::default(), &mut NullSink).unwrap()
    }

    #[test]
    fn writes_counts_atoms_and_bonds() {
        let molecule = make_cyclobutadiene();
        let mut buf = Vec::new();
        write(&mut buf, &molecule).expect("write sdf");
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[1], "skeleton-forge");
        assert!(lines[3].starts_with("  8  8"));
        assert!(lines[3].ends_with("V2000"));
        assert_eq!(lines.len(), 4 + 8 + 8 + 2);
        assert_eq!(lines[lines.len() - 2], "M  END");
        assert_eq!(lines[lines.len() - 1], "$$$$");
    }

    #[test]
    fn hydrogen_bonds_point_to_parents() {
        let molecule = make_cyclobutadiene();
        let mut buf = Vec::new();
        write(&mut buf, &molecule).expect("write sdf");
        let text = String::from_utf8(buf).unwrap();
        let bond_lines: Vec<_> = text.lines().skip(4 + 8).take(8).collect();

        assert_eq!(bond_lines[0], "  1  2  8  0  0  0  0");
        assert_eq!(bond_lines[1], "  1  4  8  0  0  0  0");
        assert_eq!(bond_lines[4], "  1  5  1  0  0  0  0");
        assert_eq!(bond_lines[7], "  4  8  1  0  0  0  0");
    }

    #[test]
    fn rejects_molecule_beyond_v2000_limits() {
        let mut graph = SkeletonGraph::new();
        for i in 0..1000 {
            graph.add_node(format!("c{i}"), i as f64, 0.0);
        }
        for i in 0..1000 {
            graph.add_edge(format!("c{i}"), format!("c{}", (i + 1) % 1000));
        }
        let molecule = assemble(&graph, &mut NullSink).unwrap();

        let mut buf = Vec::new();
        let err = write(&mut buf, &molecule).unwrap_err();
        assert!(matches!(
            err,
            Error::CapacityExceeded {
                what: "atoms",
                count: 1000,
                limit: 999,
                ..
            }
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn accepts_molecule_at_v2000_limit() {
        let mut graph = SkeletonGraph::new();
        for i in 0..999 {
            graph.add_node(format!("c{i}"), i as f64, 0.0);
        }
        let molecule = assemble(&graph, &mut NullSink).unwrap();

        let mut buf = Vec::new();
        write(&mut buf, &molecule).expect("write sdf");
        let text = String::from_utf8(buf).unwrap();
        assert!(text.lines().nth(3).unwrap().starts_with("999  0"));
    }
}
