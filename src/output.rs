use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::error::PipelineError;
use crate::types::BookRecord;

pub const OUTPUT_FILE_NAME: &str = "processed_book_data.json";

const INDENT: &[u8] = b"    ";

/// Serialize a record as 4-space indented JSON, without a trailing newline.
///
/// Non-ASCII text is written as raw UTF-8 rather than `\uXXXX` escapes.
pub fn to_json_string(record: &BookRecord) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    record.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write a record to `path`, replacing any existing file.
pub fn write_record(record: &BookRecord, path: &Path) -> Result<(), PipelineError> {
    let data = to_json_string(record)?;
    fs::write(path, data).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "wrote {} page(s) to {}",
        record.page_count(),
        path.display()
    );
    Ok(())
}
