use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::info;

/// Failure modes of an OCR invocation
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("failed to launch OCR command {command:?} (is tesseract installed and on PATH?): {source}")]
    Launch {
        command: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("OCR failed for {path:?} ({status}): {stderr}")]
    Recognition {
        path: PathBuf,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Anything that can turn an image file into recognized text
///
/// The pipeline only needs the full text of each screenshot; tests swap in
/// a stub so the parsing stages run without a tesseract install.
pub trait OcrEngine {
    fn image_to_string(&self, path: &Path) -> Result<String, OcrError>;
}

/// OCR via the `tesseract` command-line binary
///
/// Runs `<command> <image> stdout -l <language>` and captures stdout,
/// which is how the original workflow drives tesseract as well.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    command: PathBuf,
    language: String,
}

impl TesseractEngine {
    pub fn new(command: impl Into<PathBuf>, language: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            language: language.into(),
        }
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new("tesseract", "eng")
    }
}

impl OcrEngine for TesseractEngine {
    fn image_to_string(&self, path: &Path) -> Result<String, OcrError> {
        let output = Command::new(&self.command)
            .arg(path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|source| OcrError::Launch {
                command: self.command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(OcrError::Recognition {
                path: path.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// OCR every file in order and concatenate the recognized text
///
/// The resulting blob is the single input the parsing pipeline consumes.
/// There is no separator guarantee beyond each file's output ending before
/// the next begins.
pub fn recognize_batch(engine: &dyn OcrEngine, files: &[PathBuf]) -> Result<String, OcrError> {
    let mut blob = String::new();
    for file in files {
        info!("Recognizing {:?}", file);
        blob.push_str(&engine.image_to_string(file)?);
    }
    Ok(blob)
}
