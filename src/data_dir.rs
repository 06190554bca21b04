//! Locating the data folder and picking the input PDF inside it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

pub const DATA_DIR_NAME: &str = "data";
pub const PDF_EXTENSION: &str = ".pdf";

/// The `data` folder one level above the directory holding the running
/// executable.
pub fn default_data_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(data_dir_for(exe_dir))
}

pub(crate) fn data_dir_for(exe_dir: &Path) -> PathBuf {
    match exe_dir.parent() {
        Some(parent) => parent.join(DATA_DIR_NAME),
        None => exe_dir.join("..").join(DATA_DIR_NAME),
    }
}

/// Regular files in `dir` whose name ends in `.pdf`, in directory listing
/// order.
///
/// The match is case-sensitive and the order is whatever the filesystem
/// reports; nothing is sorted.
pub fn pdf_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if !name.as_encoded_bytes().ends_with(PDF_EXTENSION.as_bytes()) {
            continue;
        }
        if !entry.path().is_file() {
            debug!("skipping non-file entry {:?}", name);
            continue;
        }
        files.push(entry.path());
    }

    Ok(files)
}

/// The first PDF in `dir`, if there is one.
pub fn first_pdf(dir: &Path) -> io::Result<Option<PathBuf>> {
    Ok(pdf_files(dir)?.into_iter().next())
}
