use std::path::PathBuf;

use skeleton_forge::io::Format;

/// One requested output: destination (`None` for stdout) and format.
#[derive(Debug, Clone)]
pub struct OutputSpec {
    pub path: Option<PathBuf>,
    pub format: Format,
}
