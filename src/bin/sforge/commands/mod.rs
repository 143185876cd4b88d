mod build;

pub use build::run_build as run;

use skeleton_forge::BuildError;

const EXIT_FAILURE: u8 = 1;
const EXIT_INVALID_VALENCE: u8 = 3;
const EXIT_DEGENERATE_GEOMETRY: u8 = 4;
const EXIT_MALFORMED_GRAPH: u8 = 5;

/// Maps the root pipeline error to a kind-specific process exit code.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<BuildError>() {
        Some(BuildError::InvalidValence { .. }) => EXIT_INVALID_VALENCE,
        Some(BuildError::DegenerateGeometry { .. }) => EXIT_DEGENERATE_GEOMETRY,
        Some(BuildError::MalformedGraph { .. }) => EXIT_MALFORMED_GRAPH,
        _ => EXIT_FAILURE,
    }
}
