use serde::{Deserialize, Serialize};

/// Text extracted from one page, keyed by its 1-based page number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub page: u32,
    pub text: String,
}

/// Output of PDF text extraction: a title and the pages in document order.
///
/// The title is always [`BookRecord::DEFAULT_TITLE`]; document metadata is
/// not consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub content: Vec<PageRecord>,
}

impl BookRecord {
    pub const DEFAULT_TITLE: &'static str = "Extracted Book";

    /// Build a record from page texts given in document order.
    /// Pages are numbered from 1.
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let content = pages
            .into_iter()
            .zip(1u32..)
            .map(|(text, page)| PageRecord {
                page,
                text: text.into(),
            })
            .collect();

        BookRecord {
            title: Self::DEFAULT_TITLE.to_string(),
            content,
        }
    }

    pub fn pages(&self) -> &[PageRecord] {
        &self.content
    }

    pub fn page_count(&self) -> usize {
        self.content.len()
    }

    /// Look up a page by its 1-based number.
    pub fn page(&self, page: u32) -> Option<&PageRecord> {
        let idx = usize::try_from(page).ok()?.checked_sub(1)?;
        self.content.get(idx)
    }
}

impl From<Vec<String>> for BookRecord {
    fn from(pages: Vec<String>) -> Self {
        BookRecord::new(pages)
    }
}
