use unicode_segmentation::UnicodeSegmentation;

use crate::nlp::{NlpError, Tokenizer};

/// UAX#29 segmentation. Punctuation never becomes a word token.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn sentences(&self, text: &str) -> Result<Vec<String>, NlpError> {
        Ok(split_sentences(text))
    }

    fn words(&self, text: &str) -> Result<Vec<String>, NlpError> {
        Ok(split_words(text))
    }
}

pub fn split_sentences(text: &str) -> Vec<String> {
    text.unicode_sentences()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn split_words(text: &str) -> Vec<String> {
    text.unicode_words().map(str::to_string).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/nlp/tokenizer.rs"]
mod tests;
