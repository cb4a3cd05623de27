//! Output directory preparation and asset copying.

use crate::error::{AppletError, Result};
use std::fs;
use std::path::Path;

/// Read a UTF-8 text file, mapping failures to an `Input` error naming `what`.
pub fn read_text(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| AppletError::read(what, path, e))
}

/// Ensure `dir` exists and is empty.
///
/// Files and subdirectories inside are removed; the directory itself is kept.
pub fn clear_directory(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| AppletError::write("output directory", dir, e))?;

    let entries = fs::read_dir(dir).map_err(|e| AppletError::write("output directory", dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| AppletError::write("output directory", dir, e))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| AppletError::write("output entry", &path, e))?;

        let removed = if file_type.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(|e| AppletError::write("output entry", &path, e))?;
    }

    Ok(())
}

/// Copy an opaque asset byte-for-byte into `target`, creating parents.
pub fn copy_asset(source: &Path, target: &Path) -> Result<()> {
    let bytes = fs::read(source).map_err(|e| AppletError::read("asset", source, e))?;
    super::atomic_write(target, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn clear_directory_creates_missing_dir() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("generated-applet");

        clear_directory(&out).unwrap();

        assert!(out.is_dir());
    }

    #[test]
    fn clear_directory_removes_files_and_subdirs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), "old").unwrap();
        fs::create_dir_all(dir.path().join("js/nested")).unwrap();
        fs::write(dir.path().join("js/nested/lib.js"), "old").unwrap();

        clear_directory(dir.path()).unwrap();

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn copy_asset_is_verbatim() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("lib.js");
        let bytes = b"/*! lib */\x00\xff";
        fs::write(&source, bytes).unwrap();

        let target = dir.path().join("out/js/lib.js");
        copy_asset(&source, &target).unwrap();

        assert_eq!(fs::read(&target).unwrap(), bytes);
    }

    #[test]
    fn copy_missing_asset_is_input_error() {
        let dir = TempDir::new().unwrap();
        let err = copy_asset(&dir.path().join("absent.js"), &dir.path().join("t.js")).unwrap_err();
        assert!(matches!(err, AppletError::Input(_)));
    }

    #[test]
    fn read_text_missing_file_names_what() {
        let dir = TempDir::new().unwrap();
        let err = read_text(&dir.path().join("nope.txt"), "prompt file").unwrap_err();
        assert!(err.to_string().contains("prompt file"));
    }
}
