use crate::input::InputError;

pub const URL_ID_COLUMN: &str = "URL_ID";
pub const TITLE_COLUMN: &str = "ARTICLE_TITLE";
pub const TEXT_COLUMN: &str = "ARTICLE_TEXT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub url_id: usize,
    pub title: Option<usize>,
    pub text: usize,
}

pub fn split_header(line: &str) -> Vec<String> {
    line.split('\t')
        .map(|s| s.trim().trim_start_matches('\u{feff}').trim().to_string())
        .collect()
}

/// Locates the article columns; names match case-insensitively.
pub fn resolve_columns(header: &[String]) -> Result<ColumnIndex, InputError> {
    let find = |name: &str| header.iter().position(|c| c.eq_ignore_ascii_case(name));

    let url_id = find(URL_ID_COLUMN).ok_or_else(|| {
        InputError::InvalidInput(format!("header has no {URL_ID_COLUMN} column"))
    })?;
    let text = find(TEXT_COLUMN).ok_or_else(|| {
        InputError::InvalidInput(format!("header has no {TEXT_COLUMN} column"))
    })?;
    let title = find(TITLE_COLUMN);
    if title.is_none() {
        tracing::warn!("header has no {TITLE_COLUMN} column; titles default to empty");
    }

    Ok(ColumnIndex { url_id, title, text })
}

/// Strips the line terminator only, so trailing empty cells survive.
pub fn strip_line_end(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Decodes `\t`, `\n`, `\r` and `\\`. Other backslashes are kept verbatim.
pub fn unescape_field(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

pub fn escape_field(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/table.rs"]
mod tests;
