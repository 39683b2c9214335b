use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use thiserror::Error;

pub mod reader;
pub mod table;

use crate::model::article::ArticleRecord;
use reader::open_maybe_gz;
use table::{resolve_columns, split_header, strip_line_end, unescape_field};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct ArticleTable {
    pub columns: Vec<String>,
    pub records: Vec<ArticleRecord>,
}

pub fn load_articles(path: &Path) -> Result<ArticleTable, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(format!(
            "input table {} not found",
            path.display()
        )));
    }
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();

    let read = reader.read_line(&mut buf)?;
    if read == 0 {
        return Err(InputError::Parse("input table is empty".to_string()));
    }
    let columns = split_header(strip_line_end(&buf));
    let index = resolve_columns(&columns)?;
    tracing::info!(
        path = %path.display(),
        columns = columns.len(),
        url_id = index.url_id,
        text = index.text,
        "resolved input columns"
    );

    let mut records = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut line_no = 1usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = strip_line_end(&buf);
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < columns.len() {
            tracing::warn!(
                line = line_no,
                fields = fields.len(),
                expected = columns.len(),
                "short row; missing cells treated as absent"
            );
        }

        let url_id = fields
            .get(index.url_id)
            .map(|s| unescape_field(s.trim()))
            .unwrap_or_default();
        if url_id.is_empty() {
            tracing::warn!(line = line_no, "row has empty {}", table::URL_ID_COLUMN);
        } else if !seen_ids.insert(url_id.clone()) {
            tracing::warn!(line = line_no, url_id = %url_id, "duplicate URL_ID; keeping both rows");
        }
        let title = index
            .title
            .and_then(|idx| fields.get(idx))
            .map(|s| unescape_field(s))
            .unwrap_or_default();
        let text = fields.get(index.text).map(|s| unescape_field(s));

        records.push(ArticleRecord::new(url_id, title, text));
    }

    Ok(ArticleTable {
        columns,
        records,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
