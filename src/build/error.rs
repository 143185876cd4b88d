//! Error types for skeleton reconstruction.
//!
//! Every failure of the [`build`](super::build) pipeline is unrecoverable for
//! the current run: it signals a structurally invalid input or parameter set
//! rather than a transient condition.

use thiserror::Error;

/// Errors that can occur while turning a skeleton graph into a 3-D molecule.
#[derive(Debug, Error)]
pub enum Error {
    /// The input graph is structurally invalid.
    ///
    /// Occurs when an edge references an unknown node, a node name is
    /// repeated, an edge connects a node to itself, or the graph is empty.
    #[error("malformed skeleton graph: {detail}")]
    MalformedGraph {
        /// Description of the problem.
        detail: String,
    },

    /// A geometric construction is undefined for the current positions.
    ///
    /// Occurs when the reference bond has zero length, or when the two bond
    /// vectors of a divalent atom cancel out.
    #[error("degenerate geometry: {detail}")]
    DegenerateGeometry {
        /// Description of the problem.
        detail: String,
    },

    /// A skeleton atom has a heavy-atom degree outside `[2, 3]`.
    #[error("invalid valence for atom '{atom}': {degree} skeleton neighbor(s), expected 2 or 3")]
    InvalidValence {
        /// Name of the offending atom.
        atom: String,
        /// Observed number of skeleton neighbors.
        degree: usize,
    },

    /// Failed to parse geometry parameters TOML.
    #[error("failed to parse geometry parameters: {0}")]
    ParameterParse(#[from] toml::de::Error),

    /// A geometry parameter has an unusable value.
    #[error("invalid geometry parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Rendered offending value.
        value: String,
    },
}

impl Error {
    /// Creates a [`MalformedGraph`](Error::MalformedGraph) error.
    pub fn malformed_graph(details: impl Into<String>) -> Self {
        Self::MalformedGraph {
            detail: details.into(),
        }
    }

    /// Creates a [`DegenerateGeometry`](Error::DegenerateGeometry) error.
    pub fn degenerate_geometry(details: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            detail: details.into(),
        }
    }

    /// Creates an [`InvalidValence`](Error::InvalidValence) error.
    ///
    /// # Arguments
    ///
    /// * `atom` — Name of the offending atom
    /// * `degree` — Observed number of skeleton neighbors
    pub fn invalid_valence(atom: &str, degree: usize) -> Self {
        Self::InvalidValence {
            atom: atom.to_string(),
            degree,
        }
    }

    /// Short machine-friendly label of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MalformedGraph { .. } => "malformed-graph",
            Error::DegenerateGeometry { .. } => "degenerate-geometry",
            Error::InvalidValence { .. } => "invalid-valence",
            Error::ParameterParse(_) | Error::InvalidParameter { .. } => "invalid-parameters",
        }
    }
}
