use super::types::Element;
use crate::build::geometry::distance;

/// A single atom of a [`Molecule`](super::molecule::Molecule).
///
/// `neighbors` holds arena indices of bonded skeleton atoms. Synthesized
/// hydrogens carry no bonds; they only remember the atom they were placed on
/// through `parent`.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub name: String,
    pub element: Element,
    pub position: [f64; 3],
    pub neighbors: Vec<usize>,
    pub parent: Option<usize>,
}

impl Atom {
    pub fn new(name: impl Into<String>, element: Element, position: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            element,
            position,
            neighbors: Vec::new(),
            parent: None,
        }
    }

    pub fn hydrogen(name: impl Into<String>, position: [f64; 3], parent: usize) -> Self {
        Self {
            parent: Some(parent),
            ..Self::new(name, Element::H, position)
        }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    #[inline]
    pub fn is_synthesized(&self) -> bool {
        self.parent.is_some()
    }

    /// Euclidean distance between the two atom positions.
    #[inline]
    pub fn distance_to(&self, other: &Atom) -> f64 {
        distance(self.position, other.position)
    }
}
