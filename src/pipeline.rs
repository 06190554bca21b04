use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::data_dir::first_pdf;
use crate::error::{ExtractError, PipelineError};
use crate::extract::from_path;
use crate::output::{OUTPUT_FILE_NAME, write_record};

/// What a run over the data folder ended with.
///
/// `Display` renders the console message for each case.
#[derive(Debug)]
pub enum Outcome {
    /// The record was written to `output`.
    Saved { input: PathBuf, output: PathBuf },
    /// The selected PDF could not be read. Nothing was written.
    ExtractionFailed { input: PathBuf, error: ExtractError },
    /// The folder holds no `.pdf` file. Nothing was written.
    NoPdfFound,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Saved { output, .. } => write!(f, "SLM data saved to {}", output.display()),
            Outcome::ExtractionFailed { error, .. } => write!(f, "Error processing PDF: {}", error),
            Outcome::NoPdfFound => write!(f, "No PDF files found in the data folder."),
        }
    }
}

/// Process the first PDF in `dir` and write `processed_book_data.json`
/// next to it.
///
/// Only one file is processed per run, even if several are present.
pub fn process_data_dir(dir: &Path) -> Result<Outcome, PipelineError> {
    let input = match first_pdf(dir).map_err(|source| PipelineError::ListDir {
        dir: dir.to_path_buf(),
        source,
    })? {
        Some(input) => input,
        None => {
            info!("no PDF in {}", dir.display());
            return Ok(Outcome::NoPdfFound);
        }
    };
    info!("processing {}", input.display());

    let record = match from_path(&input) {
        Ok(record) => record,
        Err(error) => {
            warn!("extraction of {} failed: {}", input.display(), error);
            return Ok(Outcome::ExtractionFailed { input, error });
        }
    };

    let output = dir.join(OUTPUT_FILE_NAME);
    write_record(&record, &output)?;

    Ok(Outcome::Saved { input, output })
}
