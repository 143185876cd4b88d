//! Reconstructs plausible 3-D coordinates, implicit hydrogens included, from
//! the planar layout of a molecule's carbon skeleton.
//!
//! # Features
//!
//! - **Skeleton assembly** — Atom arena with symmetric connectivity built from
//!   a node/edge list carrying planar layout positions
//! - **Normalization** — Barycenter moved to the origin, then a uniform scale
//!   that gives the first skeleton bond its canonical C–C length (1.4 Å)
//! - **Valence completion** — One hydrogen per divalent sp² atom, placed on
//!   the trigonal-planar bisector at the canonical C–H length (1.1 Å)
//! - **Output** — XYZ coordinates and V2000 SDF
//!
//! # Quick Start
//!
//! The main entry point is the [`build()`] function, which takes a
//! [`SkeletonGraph`], a [`BuildConfig`] and a [`DiagnosticSink`], and returns
//! the finished [`Molecule`]:
//!
//! ```
//! use skeleton_forge::{BuildConfig, BuildError, CollectingSink, Element, SkeletonGraph, build};
//! use skeleton_forge::io::{Format, MoleculeWriter};
//!
//! // Cyclopropenyl layout in arbitrary layout-engine units
//! let mut graph = SkeletonGraph::new();
//! graph
//!     .add_node("a", 27.0, 18.0)
//!     .add_node("b", 99.0, 18.0)
//!     .add_node("c", 63.0, 80.0)
//!     .add_edge("a", "b")
//!     .add_edge("b", "c")
//!     .add_edge("c", "a");
//!
//! let mut sink = CollectingSink::new();
//! let molecule = build(&graph, &BuildConfig::default(), &mut sink)?;
//!
//! // Three skeleton carbons, each completed with one hydrogen
//! assert_eq!(molecule.atom_count(), 6);
//! assert_eq!(molecule.element_count(Element::H), 3);
//! assert_eq!(molecule.atoms()[3].name, "H1");
//!
//! let mut xyz = Vec::new();
//! MoleculeWriter::new(&mut xyz, Format::Xyz).write(&molecule).unwrap();
//! assert!(String::from_utf8(xyz).unwrap().starts_with("6\n\n"));
//! # Ok::<(), BuildError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Skeleton graph reader (TOML) and molecule writers (XYZ, SDF)
//! - [`build()`] — Reconstruction pipeline
//!
//! # Data Types
//!
//! - [`SkeletonGraph`] — Planar node/edge layout handed over by a graph loader
//! - [`Molecule`] — Atom arena produced by the pipeline
//! - [`Atom`] — Name, element, position, neighbors and hydrogen parent
//! - [`Element`] — Element label
//!
//! # Stages
//!
//! [`assemble`], [`center`], [`scale`] and [`complete_valence`] are exposed
//! individually for callers that need to run only part of the pipeline.

mod build;
mod model;

pub mod io;

pub use model::atom::Atom;
pub use model::graph::{SkeletonEdge, SkeletonGraph, SkeletonNode};
pub use model::molecule::Molecule;
pub use model::types::{Element, ParseElementError};

pub use build::{
    BondLengths, BuildConfig, CollectingSink, Diagnostic, DiagnosticSink, GeometryParams, LogSink,
    NamingParams, NullSink, Stage, assemble, build, center, complete_valence,
    get_default_parameters, load_parameters, scale,
};

pub use build::Error as BuildError;
