use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Which files count as input screenshots
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// A candidate file name must end with one of these
    pub allowed_extensions: Vec<String>,
    /// A candidate file name must not contain any of these
    pub ignore_patterns: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: vec![".png".to_string(), ".PNG".to_string()],
            ignore_patterns: vec![],
        }
    }
}

impl ScanConfig {
    fn matches(&self, file_name: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
            && !self
                .ignore_patterns
                .iter()
                .any(|pattern| file_name.contains(pattern.as_str()))
    }
}

/// Resolve CLI inputs into the ordered list of screenshot files to OCR
///
/// With no inputs, the current directory is scanned. Directory arguments
/// are scanned non-recursively; file arguments are taken directly. All
/// candidates pass through the extension and ignore filters. Directory
/// listings are sorted so the OCR concatenation order is deterministic.
pub fn gather_image_files(inputs: &[PathBuf], config: &ScanConfig) -> Result<Vec<PathBuf>> {
    if inputs.is_empty() {
        return scan_directory(Path::new("."), config);
    }

    let mut files = Vec::new();
    for item in inputs {
        if item.is_dir() {
            files.extend(scan_directory(item, config)?);
        } else if config.matches(&file_name_of(item)) {
            files.push(item.clone());
        } else {
            debug!("Skipping {:?}: does not match scan filters", item);
        }
    }
    Ok(files)
}

fn scan_directory(dir: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {:?}", dir))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {:?}", dir))?;
        let path = entry.path();
        if path.is_file() && config.matches(&file_name_of(&path)) {
            files.push(path);
        }
    }

    // read_dir order is platform-arbitrary
    files.sort();
    Ok(files)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        File::create(&path).unwrap();
        path
    }

    #[test]
    fn test_scan_directory_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.png");
        touch(dir.path(), "a.png");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "c.PNG");

        let files =
            gather_image_files(&[dir.path().to_path_buf()], &ScanConfig::default()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.png", "b.png", "c.PNG"]);
    }

    #[test]
    fn test_explicit_file_must_match_filters() {
        let dir = tempfile::tempdir().unwrap();
        let png = touch(dir.path(), "shot.png");
        let txt = touch(dir.path(), "shot.txt");

        let files = gather_image_files(&[png.clone(), txt], &ScanConfig::default()).unwrap();
        assert_eq!(files, vec![png]);
    }

    #[test]
    fn test_ignore_patterns() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "keep.png");
        touch(dir.path(), "skip_draft.png");

        let config = ScanConfig {
            ignore_patterns: vec!["draft".to_string()],
            ..ScanConfig::default()
        };
        let files = gather_image_files(&[dir.path().to_path_buf()], &config).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["keep.png"]);
    }

    #[test]
    fn test_missing_file_is_passed_through() {
        // A named-but-missing screenshot is not silently dropped; the OCR
        // step reports it
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.png");
        let files = gather_image_files(&[missing.clone()], &ScanConfig::default()).unwrap();
        assert_eq!(files, vec![missing]);
    }
}
