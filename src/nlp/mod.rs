//! Text-processing collaborators used by the metrics stage.
//!
//! The metrics formulas only see the three capability traits below. The
//! default implementations are bundled in [`NlpToolkit`], which is built once
//! per process before any article is processed.

pub mod lexicon;
pub mod sentiment;
pub mod syllables;
pub mod tokenizer;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::nlp::lexicon::{SentimentLexicon, builtin_lexicon};
use crate::nlp::sentiment::LexiconSentimentAnalyzer;
use crate::nlp::syllables::HeuristicSyllableCounter;
use crate::nlp::tokenizer::UnicodeTokenizer;

#[derive(Debug, Error)]
pub enum NlpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("lexicon {source_name} line {line}: {msg}")]
    LexiconParse {
        source_name: String,
        line: usize,
        msg: String,
    },
    #[error("lexicon {0} has no entries")]
    EmptyLexicon(String),
    #[error("{component} failed: {msg}")]
    Collaborator {
        component: &'static str,
        msg: String,
    },
}

/// Sentence and word segmentation.
pub trait Tokenizer {
    fn sentences(&self, text: &str) -> Result<Vec<String>, NlpError>;
    fn words(&self, text: &str) -> Result<Vec<String>, NlpError>;
}

/// Document-level sentiment over the full text.
pub trait SentimentAnalyzer {
    fn analyze(&self, text: &str) -> Result<Sentiment, NlpError>;
}

pub trait SyllableCounter {
    fn count(&self, word: &str) -> Result<u32, NlpError>;
}

/// Polarity in [-1, 1], subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

#[derive(Debug, Clone, Default)]
pub struct NlpConfig {
    /// Replaces the embedded sentiment lexicon when set.
    pub lexicon_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct NlpToolkit {
    tokenizer: UnicodeTokenizer,
    sentiment: LexiconSentimentAnalyzer,
    syllables: HeuristicSyllableCounter,
}

impl NlpToolkit {
    /// Loads every NLP resource up front. Call once, before processing.
    pub fn initialize(config: &NlpConfig) -> Result<Self, NlpError> {
        let lexicon = match &config.lexicon_path {
            Some(path) => Arc::new(SentimentLexicon::load(path)?),
            None => builtin_lexicon()?,
        };
        tracing::info!(
            source = lexicon.source_name(),
            entries = lexicon.len(),
            "sentiment lexicon ready"
        );
        Ok(Self {
            tokenizer: UnicodeTokenizer,
            sentiment: LexiconSentimentAnalyzer::new(lexicon),
            syllables: HeuristicSyllableCounter,
        })
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        &self.tokenizer
    }

    pub fn sentiment(&self) -> &dyn SentimentAnalyzer {
        &self.sentiment
    }

    pub fn syllables(&self) -> &dyn SyllableCounter {
        &self.syllables
    }

    pub fn lexicon_source(&self) -> &str {
        self.sentiment.lexicon().source_name()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/nlp/toolkit.rs"]
mod tests;
