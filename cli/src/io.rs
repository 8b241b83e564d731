use std::path::{Path, PathBuf};

use anyhow::Result;
use walkdir::WalkDir;

/// Collect every regular file directly inside `input`, sorted for
/// deterministic processing order. A single file is returned as-is.
/// Classification is content-based, so no extension filtering happens here.
pub fn collect_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    if !input.is_dir() {
        anyhow::bail!("{} is not a file or directory", input.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.png"), b"b").unwrap();
        std::fs::write(dir.path().join("a.txt"), b"a").unwrap();

        let files = collect_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.txt"), dir.path().join("b.png")]
        );
    }

    #[test]
    fn test_skips_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("top.png"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("deep.png"), b"y").unwrap();

        let files = collect_files(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("top.png")]);
    }

    #[test]
    fn test_single_file_input() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("only.jpg");
        std::fs::write(&file, b"x").unwrap();

        assert_eq!(collect_files(&file).unwrap(), vec![file]);
    }

    #[test]
    fn test_missing_input_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_files(&dir.path().join("absent")).is_err());
    }
}
