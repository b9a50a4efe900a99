//! Icon directory listing.

use crate::error::BatchError;
use std::fs;
use std::path::Path;

const SVG_EXT: &str = ".svg";

/// Names of `.svg` files directly inside `dir`, sorted by name.
///
/// Subdirectories are skipped, as is anything whose name does not end in
/// `.svg` exactly (case-sensitive) or is not valid UTF-8.
pub fn list_icons(dir: &Path) -> Result<Vec<String>, BatchError> {
    let list_err = |source: std::io::Error| BatchError::ListIcons {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let file_type = entry.file_type().map_err(list_err)?;
        if file_type.is_dir() {
            continue;
        }
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                tracing::warn!("skipping non UTF-8 file name {:?}", raw);
                continue;
            }
        };
        if !name.ends_with(SVG_EXT) {
            tracing::debug!("skipping {name}: not an .svg file");
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_svg_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("a.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("c.png"), "png").unwrap();
        fs::write(dir.path().join("upper.SVG"), "<svg/>").unwrap();
        fs::create_dir(dir.path().join("nested.svg")).unwrap();

        let names = list_icons(dir.path()).unwrap();
        assert_eq!(names, vec!["a.svg".to_string(), "b.svg".to_string()]);
    }

    #[test]
    fn missing_dir_is_list_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_icons(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, BatchError::ListIcons { .. }));
    }
}
