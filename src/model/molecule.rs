use super::atom::Atom;
use super::types::Element;
use std::collections::HashMap;

/// Arena of atoms in creation order.
///
/// Skeleton atoms come first, in graph node order, followed by synthesized
/// hydrogens in completion order. Atoms are addressed by their arena index;
/// names are interned in a lookup table and are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    atoms: Vec<Atom>,
    index: HashMap<String, usize>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            atoms: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    #[inline]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    #[inline]
    pub fn atom(&self, idx: usize) -> Option<&Atom> {
        self.atoms.get(idx)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn neighbors(&self, idx: usize) -> &[usize] {
        self.atoms
            .get(idx)
            .map(|atom| atom.neighbors.as_slice())
            .unwrap_or(&[])
    }

    pub fn skeleton_count(&self) -> usize {
        self.atoms.iter().filter(|a| !a.is_synthesized()).count()
    }

    pub fn hydrogen_count(&self) -> usize {
        self.atoms.iter().filter(|a| a.is_synthesized()).count()
    }

    pub fn element_count(&self, element: Element) -> usize {
        self.atoms.iter().filter(|a| a.element == element).count()
    }

    /// Unique skeleton bonds as `(i, j)` pairs with `i < j`, ordered by `i`.
    pub fn bonds(&self) -> Vec<(usize, usize)> {
        let mut bonds = Vec::new();
        for (i, atom) in self.atoms.iter().enumerate() {
            for &j in &atom.neighbors {
                if i < j {
                    bonds.push((i, j));
                }
            }
        }
        bonds
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.atoms.iter().map(Atom::degree).sum::<usize>() / 2
    }

    /// Appends an atom and returns its index.
    ///
    /// The caller guarantees the name is not yet taken.
    pub(crate) fn push(&mut self, atom: Atom) -> usize {
        let idx = self.atoms.len();
        self.index.insert(atom.name.clone(), idx);
        self.atoms.push(atom);
        idx
    }

    /// Records an undirected bond. Returns `false` if it already existed.
    pub(crate) fn link(&mut self, i: usize, j: usize) -> bool {
        if self.atoms[i].neighbors.contains(&j) {
            return false;
        }
        self.atoms[i].neighbors.push(j);
        self.atoms[j].neighbors.push(i);
        true
    }

    pub(crate) fn atoms_mut(&mut self) -> &mut [Atom] {
        &mut self.atoms
    }
}
