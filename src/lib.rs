//! PDF to JSON book extraction
//!
//! Reads the text of every page of a PDF and stores it as a JSON book record:
//! a placeholder title and one `{ "page", "text" }` entry per page.

pub mod data_dir;
mod error;
mod extract;
mod output;
mod pipeline;
mod types;

// Re-export error types
pub use error::{ExtractError, PipelineError};

// Re-export extraction API
pub use extract::{from_bytes, from_path, from_reader};

pub use output::{OUTPUT_FILE_NAME, to_json_string, write_record};
pub use pipeline::{Outcome, process_data_dir};
pub use types::{BookRecord, PageRecord};
