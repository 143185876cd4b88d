use std::path::Path;

use skeleton_forge::io::Format;

pub fn output(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "xyz" => Some(Format::Xyz),
        "sdf" | "mol" => Some(Format::Sdf),
        _ => None,
    }
}
