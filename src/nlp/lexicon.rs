use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::input::reader::open_maybe_gz;
use crate::nlp::NlpError;

const BUILTIN_LEXICON_TSV: &str = include_str!("lexicon_en.tsv");
const BUILTIN_NAME: &str = "builtin:en";

static BUILTIN: OnceLock<Arc<SentimentLexicon>> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    pub intensity: f64,
}

impl LexiconEntry {
    /// Pure modifiers scale the next assessed word and carry no polarity.
    pub fn is_intensifier(&self) -> bool {
        self.polarity == 0.0 && self.intensity != 1.0
    }
}

#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    source_name: String,
    entries: HashMap<String, LexiconEntry>,
}

impl SentimentLexicon {
    /// Parses `word<TAB>polarity<TAB>subjectivity[<TAB>intensity]` lines.
    pub fn parse(contents: &str, source_name: &str) -> Result<Self, NlpError> {
        let mut entries = HashMap::new();
        for (idx, raw) in contents.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            if fields.len() < 3 || fields.len() > 4 {
                return Err(parse_error(
                    source_name,
                    line_no,
                    format!("expected 3 or 4 tab-separated fields, got {}", fields.len()),
                ));
            }
            let word = fields[0].to_lowercase();
            if word.is_empty() {
                return Err(parse_error(source_name, line_no, "empty word".to_string()));
            }
            let polarity = parse_number(source_name, line_no, "polarity", fields[1])?;
            let subjectivity = parse_number(source_name, line_no, "subjectivity", fields[2])?;
            let intensity = match fields.get(3) {
                Some(v) => parse_number(source_name, line_no, "intensity", v)?,
                None => 1.0,
            };
            if !(-1.0..=1.0).contains(&polarity) {
                return Err(parse_error(
                    source_name,
                    line_no,
                    format!("polarity {polarity} outside [-1, 1]"),
                ));
            }
            if !(0.0..=1.0).contains(&subjectivity) {
                return Err(parse_error(
                    source_name,
                    line_no,
                    format!("subjectivity {subjectivity} outside [0, 1]"),
                ));
            }
            if intensity <= 0.0 {
                return Err(parse_error(
                    source_name,
                    line_no,
                    format!("intensity {intensity} must be positive"),
                ));
            }
            if entries.contains_key(&word) {
                tracing::warn!(
                    source = source_name,
                    line = line_no,
                    word = %word,
                    "duplicate lexicon entry; keeping first"
                );
                continue;
            }
            entries.insert(
                word,
                LexiconEntry {
                    polarity,
                    subjectivity,
                    intensity,
                },
            );
        }

        if entries.is_empty() {
            return Err(NlpError::EmptyLexicon(source_name.to_string()));
        }

        Ok(Self {
            source_name: source_name.to_string(),
            entries,
        })
    }

    pub fn load(path: &Path) -> Result<Self, NlpError> {
        let mut reader = open_maybe_gz(path)?;
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Self::parse(&contents, &path.display().to_string())
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

/// The embedded English lexicon, parsed on first use and shared afterwards.
pub fn builtin_lexicon() -> Result<Arc<SentimentLexicon>, NlpError> {
    if let Some(lexicon) = BUILTIN.get() {
        return Ok(Arc::clone(lexicon));
    }
    let parsed = Arc::new(SentimentLexicon::parse(BUILTIN_LEXICON_TSV, BUILTIN_NAME)?);
    Ok(Arc::clone(BUILTIN.get_or_init(|| parsed)))
}

fn parse_number(source_name: &str, line: usize, field: &str, raw: &str) -> Result<f64, NlpError> {
    let value = raw
        .parse::<f64>()
        .map_err(|_| parse_error(source_name, line, format!("invalid {field} value '{raw}'")))?;
    if !value.is_finite() {
        return Err(parse_error(
            source_name,
            line,
            format!("{field} must be finite"),
        ));
    }
    Ok(value)
}

fn parse_error(source_name: &str, line: usize, msg: String) -> NlpError {
    NlpError::LexiconParse {
        source_name: source_name.to_string(),
        line,
        msg,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/nlp/lexicon.rs"]
mod tests;
