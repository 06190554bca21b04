use std::fmt::Formatter;
use std::path::PathBuf;

/// Failure while opening a PDF or reading its pages.
///
/// Malformed documents, missing files and permission problems all land here;
/// callers only need to know that extraction did not produce a record.
#[derive(Debug)]
pub enum ExtractError {
    IoError(std::io::Error),
    PdfError(lopdf::Error),
    /// The document needs a user password to be read.
    Encrypted,
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ExtractError::IoError(e) => write!(f, "IO error: {}", e),
            ExtractError::PdfError(e) => write!(f, "PDF error: {}", e),
            ExtractError::Encrypted => write!(f, "PDF is encrypted with a user password"),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::IoError(e) => Some(e),
            ExtractError::PdfError(e) => Some(e),
            ExtractError::Encrypted => None,
        }
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(e: std::io::Error) -> Self {
        ExtractError::IoError(e)
    }
}

impl From<lopdf::Error> for ExtractError {
    fn from(e: lopdf::Error) -> Self {
        ExtractError::PdfError(e)
    }
}

/// Failure in the parts of a run that surround extraction.
#[derive(Debug)]
pub enum PipelineError {
    ListDir {
        dir: PathBuf,
        source: std::io::Error,
    },
    Serialize(serde_json::Error),
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            PipelineError::ListDir { dir, source } => {
                write!(f, "Cannot read data folder {}: {}", dir.display(), source)
            }
            PipelineError::Serialize(e) => write!(f, "Serialization error: {}", e),
            PipelineError::Write { path, source } => {
                write!(f, "Cannot write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::ListDir { source, .. } => Some(source),
            PipelineError::Serialize(e) => Some(e),
            PipelineError::Write { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(e: serde_json::Error) -> Self {
        PipelineError::Serialize(e)
    }
}
