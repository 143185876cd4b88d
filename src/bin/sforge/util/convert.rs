use skeleton_forge::io::Format;

use crate::cli::OutputFormat;

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Xyz => Format::Xyz,
            OutputFormat::Sdf => Format::Sdf,
        }
    }
}
