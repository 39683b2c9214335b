use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use crate::nlp::lexicon::SentimentLexicon;
use crate::nlp::{NlpError, Sentiment, SentimentAnalyzer};

const NEGATIONS: &[&str] = &["no", "not", "never", "nor"];
const NEGATION_FACTOR: f64 = -0.5;

/// Averages lexicon assessments over the words of a document.
///
/// An intensifier directly before an assessed lexicon word scales that word;
/// intensifiers do not chain. A negation flips the next assessed polarity by
/// [`NEGATION_FACTOR`] unless an unknown word of two or more letters comes
/// first.
#[derive(Debug, Clone)]
pub struct LexiconSentimentAnalyzer {
    lexicon: Arc<SentimentLexicon>,
}

impl LexiconSentimentAnalyzer {
    pub fn new(lexicon: Arc<SentimentLexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }
}

impl SentimentAnalyzer for LexiconSentimentAnalyzer {
    fn analyze(&self, text: &str) -> Result<Sentiment, NlpError> {
        let words: Vec<String> = text.unicode_words().map(str::to_lowercase).collect();

        let mut polarity_sum = 0f64;
        let mut subjectivity_sum = 0f64;
        let mut assessed = 0usize;
        let mut multiplier = 1f64;
        let mut negated = false;

        for (idx, word) in words.iter().enumerate() {
            if is_negation(word) {
                negated = true;
                continue;
            }
            let Some(entry) = self.lexicon.get(word) else {
                // Unknown words end a pending negation (over 1 char) or
                // modifier (over 2 chars).
                let len = word.chars().count();
                if len > 1 {
                    negated = false;
                }
                if len > 2 {
                    multiplier = 1.0;
                }
                continue;
            };
            if entry.is_intensifier() {
                // Only the intensifier directly before an assessed word counts.
                let modifies_next = words
                    .get(idx + 1)
                    .and_then(|next| self.lexicon.get(next))
                    .is_some_and(|next| !next.is_intensifier());
                multiplier = if modifies_next { entry.intensity } else { 1.0 };
                continue;
            }

            let mut polarity = entry.polarity * multiplier;
            if negated {
                polarity *= NEGATION_FACTOR;
            }
            let subjectivity = entry.subjectivity * multiplier;
            polarity_sum += polarity.clamp(-1.0, 1.0);
            subjectivity_sum += subjectivity.clamp(0.0, 1.0);
            assessed += 1;

            multiplier = 1.0;
            negated = false;
        }

        if assessed == 0 {
            return Ok(Sentiment::default());
        }
        let n = assessed as f64;
        Ok(Sentiment {
            polarity: (polarity_sum / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / n).clamp(0.0, 1.0),
        })
    }
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't") || word.ends_with("n\u{2019}t")
}

#[cfg(test)]
#[path = "../../tests/src_inline/nlp/sentiment.rs"]
mod tests;
