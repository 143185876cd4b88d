use super::types::Element;

/// A skeleton node with its decoded planar layout position.
#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonNode {
    pub name: String,
    pub position: [f64; 2],
    pub element: Element,
}

impl SkeletonNode {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            position: [x, y],
            element: Element::C,
        }
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }
}

/// An undirected edge between two node names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonEdge {
    pub source: String,
    pub target: String,
}

impl SkeletonEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Planar graph layout handed over by a graph loader.
///
/// Node order is significant: the first two nodes define the reference bond
/// used for scaling, and atoms are written in node order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkeletonGraph {
    pub nodes: Vec<SkeletonNode>,
    pub edges: Vec<SkeletonEdge>,
}

impl SkeletonGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, name: impl Into<String>, x: f64, y: f64) -> &mut Self {
        self.nodes.push(SkeletonNode::new(name, x, y));
        self
    }

    pub fn add_edge(&mut self, source: impl Into<String>, target: impl Into<String>) -> &mut Self {
        self.edges.push(SkeletonEdge::new(source, target));
        self
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
