/// One row of the input table.
///
/// `text` is `None` when the cell is absent; such records never reach the
/// metrics computer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    pub url_id: String,
    pub title: String,
    pub text: Option<String>,
}

impl ArticleRecord {
    pub fn new(url_id: impl Into<String>, title: impl Into<String>, text: Option<String>) -> Self {
        Self {
            url_id: url_id.into(),
            title: title.into(),
            text,
        }
    }

    /// Text eligible for processing: present and non-empty.
    ///
    /// Whitespace-only text is still eligible and yields zero metrics.
    pub fn processable_text(&self) -> Option<&str> {
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}
