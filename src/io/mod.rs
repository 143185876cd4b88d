//! Reading skeleton graphs and writing reconstructed molecules.
//!
//! - [`Format::Graph`] — TOML skeleton layout (`[[node]]` / `[[edge]]` tables), read only
//! - [`Format::Xyz`] — XYZ coordinates, write only
//! - [`Format::Sdf`] — V2000 molfile with skeleton and hydrogen bonds, write only

use std::fmt;
use std::io::{Read, Write};

pub mod error;

mod graph {
    pub mod reader;
}
mod sdf {
    pub mod writer;
}
mod xyz {
    pub mod writer;
}

pub use error::Error;

use crate::model::graph::SkeletonGraph;
use crate::model::molecule::Molecule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Graph,
    Xyz,
    Sdf,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Graph => write!(f, "skeleton graph"),
            Format::Xyz => write!(f, "XYZ"),
            Format::Sdf => write!(f, "SDF"),
        }
    }
}

pub struct GraphReader<R: Read> {
    reader: R,
    format: Format,
}

impl<R: Read> GraphReader<R> {
    pub fn new(reader: R, format: Format) -> Self {
        Self { reader, format }
    }

    pub fn read(self) -> Result<SkeletonGraph, Error> {
        match self.format {
            Format::Graph => graph::reader::read(self.reader),
            other => Err(Error::UnsupportedReadFormat(other)),
        }
    }
}

pub struct MoleculeWriter<W: Write> {
    writer: W,
    format: Format,
}

impl<W: Write> MoleculeWriter<W> {
    pub fn new(writer: W, format: Format) -> Self {
        Self { writer, format }
    }

    pub fn write(self, molecule: &Molecule) -> Result<(), Error> {
        match self.format {
            Format::Xyz => xyz::writer::write(self.writer, molecule),
            Format::Sdf => sdf::writer::write(self.writer, molecule),
            other => Err(Error::UnsupportedWriteFormat(other)),
        }
    }
}
