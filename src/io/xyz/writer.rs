use crate::io::error::Error;
use crate::model::molecule::Molecule;
use std::io::Write;

pub fn write<W: Write>(mut writer: W, molecule: &Molecule) -> Result<(), Error> {
    writeln!(writer, "{}", molecule.atom_count())?;
    writeln!(writer)?;

    for atom in molecule.atoms() {
        writeln!(
            writer,
            "{:<2} {:>16.10} {:>16.10} {:>16.10}",
            atom.element.symbol(),
            atom.position[0],
            atom.position[1],
            atom.position[2]
        )?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{BuildConfig, NullSink, build};
    use crate::model::graph::SkeletonGraph;

    fn make_cyclopropenyl() -> Molecule {
        let mut graph = SkeletonGraph::new();
        graph
            .add_node("a", 0.0, 0.0)
            .add_node("b", 2.0, 0.0)
            .add_node("c", 1.0, 1.7)
            .add_edge("a", "b")
            .add_edge("b", "c")
            .add_edge("c", "a");
        build(&graph, &BuildConfig::default(), &mut NullSink).unwrap()
    }

    #[test]
    fn writes_count_blank_line_and_atom_records() {
        let molecule = make_cyclopropenyl();
        let mut buf = Vec::new();
        write(&mut buf, &molecule).expect("write xyz");
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2 + 6);
        assert_eq!(lines[0], "6");
        assert_eq!(lines[1], "");

        let elements: Vec<_> = lines[2..]
            .iter()
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(elements, ["C", "C", "C", "H", "H", "H"]);
    }

    #[test]
    fn coordinates_keep_ten_decimals_and_parse_back() {
        let molecule = make_cyclopropenyl();
        let mut buf = Vec::new();
        write(&mut buf, &molecule).expect("write xyz");
        let text = String::from_utf8(buf).unwrap();

        for (line, atom) in text.lines().skip(2).zip(molecule.atoms()) {
            let fields: Vec<_> = line.split_whitespace().collect();
            assert_eq!(fields.len(), 4);
            for k in 0..3 {
                let decimals = fields[k + 1].split('.').nth(1).unwrap();
                assert_eq!(decimals.len(), 10);
                let value: f64 = fields[k + 1].parse().unwrap();
                assert!((value - atom.position[k]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn fixed_width_layout() {
        let molecule = make_cyclopropenyl();
        let mut buf = Vec::new();
        write(&mut buf, &molecule).expect("write xyz");
        let text = String::from_utf8(buf).unwrap();
        for line in text.lines().skip(2) {
            assert_eq!(line.len(), 2 + 3 * 17);
        }
    }
}
