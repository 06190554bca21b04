use std::io::Read;
use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::error::ExtractError;
use crate::types::BookRecord;

fn extract_pages_from_doc(doc: &Document) -> Result<Vec<String>, ExtractError> {
    // `get_pages` is keyed by page number, so iteration follows document order.
    let pages = doc.get_pages();
    let mut texts = Vec::with_capacity(pages.len());

    for page_num in pages.keys() {
        let text = doc.extract_text(&[*page_num])?;
        debug!("page {}: {} chars", page_num, text.chars().count());
        texts.push(text);
    }

    Ok(texts)
}

fn extract_from_document(doc: &Document) -> Result<BookRecord, ExtractError> {
    // lopdf decrypts documents with an empty user password while loading and
    // records the state. Without that state the objects were never read.
    if doc.is_encrypted() && doc.encryption_state.is_none() {
        return Err(ExtractError::Encrypted);
    }

    let pages = extract_pages_from_doc(doc)?;
    Ok(BookRecord::new(pages))
}

/// Extract text from a PDF file at the given path.
///
/// Any failure while opening the document or reading a page fails the whole
/// extraction; no partial record is returned.
///
/// # Examples
///
/// ```no_run
/// let record = pdf_book_data::from_path("book.pdf")?;
/// for page in record.pages() {
///     println!("{}: {}", page.page, page.text);
/// }
/// # Ok::<(), pdf_book_data::ExtractError>(())
/// ```
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<BookRecord, ExtractError> {
    let doc = Document::load(path)?;
    extract_from_document(&doc)
}

/// Extract text from a PDF in memory.
pub fn from_bytes(bytes: &[u8]) -> Result<BookRecord, ExtractError> {
    let doc = Document::load_mem(bytes)?;
    extract_from_document(&doc)
}

/// Extract text from a PDF reader.
pub fn from_reader<R: Read>(mut reader: R) -> Result<BookRecord, ExtractError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_bytes(&bytes)
}
