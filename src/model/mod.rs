//! Core data structures flowing through `skeleton-forge`.
//!
//! - [`graph`] – Planar skeleton layout as produced by a graph loader.
//! - [`molecule`] – Atom arena built from a graph and mutated by the pipeline.
//! - [`atom`] – A single atom with name, element, position and connectivity.
//! - [`types`] – Element labels.
//!
//! The planar input ([`SkeletonGraph`]) is kept separate from the 3-D
//! [`Molecule`] so that the [`crate::build`] pipeline can turn one into the
//! other without mutating caller-owned data.
//!
//! [`SkeletonGraph`]: graph::SkeletonGraph
//! [`Molecule`]: molecule::Molecule

pub mod atom;
pub mod graph;
pub mod molecule;
pub mod types;
