use std::path::Path;

use crate::input::{ArticleTable, InputError, load_articles};

#[derive(Debug)]
pub struct Stage1Output {
    pub table: ArticleTable,
    pub n_without_text: usize,
}

pub fn run_stage1(input_path: &Path) -> Result<Stage1Output, InputError> {
    let table = load_articles(input_path)?;
    let n_without_text = table
        .records
        .iter()
        .filter(|r| r.processable_text().is_none())
        .count();
    tracing::info!(
        rows = table.records.len(),
        columns = table.columns.len(),
        without_text = n_without_text,
        "loaded article table"
    );
    Ok(Stage1Output {
        table,
        n_without_text,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_ingest.rs"]
mod tests;
