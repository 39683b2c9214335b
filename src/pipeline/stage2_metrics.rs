use crate::model::article::ArticleRecord;
use crate::model::metrics::{ArticleMetrics, MetricsResult};
use crate::model::thresholds::{MetricsProfile, PERSONAL_PRONOUNS, PronounMode};
use crate::nlp::{NlpError, NlpToolkit, Sentiment, SentimentAnalyzer, SyllableCounter, Tokenizer};

/// Per-article readability and sentiment metrics.
///
/// Holds borrowed collaborators only; `compute` is a pure function of the text.
pub struct ArticleMetricsComputer<'a> {
    tokenizer: &'a dyn Tokenizer,
    sentiment: &'a dyn SentimentAnalyzer,
    syllables: &'a dyn SyllableCounter,
    profile: MetricsProfile,
}

impl<'a> ArticleMetricsComputer<'a> {
    pub fn new(
        tokenizer: &'a dyn Tokenizer,
        sentiment: &'a dyn SentimentAnalyzer,
        syllables: &'a dyn SyllableCounter,
        profile: MetricsProfile,
    ) -> Self {
        Self {
            tokenizer,
            sentiment,
            syllables,
            profile,
        }
    }

    pub fn from_toolkit(toolkit: &'a NlpToolkit, profile: MetricsProfile) -> Self {
        Self::new(
            toolkit.tokenizer(),
            toolkit.sentiment(),
            toolkit.syllables(),
            profile,
        )
    }

    pub fn profile(&self) -> &MetricsProfile {
        &self.profile
    }

    pub fn compute(&self, text: &str) -> Result<ArticleMetrics, NlpError> {
        let sentences = self.tokenizer.sentences(text)?;
        let words = self.tokenizer.words(text)?;

        let sentence_count = sentences.len();
        let word_count = words.len();

        let avg_sentence_length = ratio(word_count as f64, sentence_count);
        let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
        let avg_word_length = ratio(total_chars as f64, word_count);

        let sentiment = checked_sentiment(self.sentiment.analyze(text)?)?;

        let mut complex_word_count = 0u64;
        let mut total_syllables = 0u64;
        for word in &words {
            let syllables = self.syllables.count(word)?;
            total_syllables += u64::from(syllables);
            if syllables > self.profile.complex_syllable_threshold {
                complex_word_count += 1;
            }
        }
        let percentage_of_complex_words = 100.0 * ratio(complex_word_count as f64, word_count);
        let fog_index = self.profile.fog_weight * (avg_sentence_length + percentage_of_complex_words);
        let syllable_per_word = ratio(total_syllables as f64, word_count);

        let personal_pronouns = match self.profile.pronoun_mode {
            PronounMode::Substring => count_pronoun_substrings(text),
            PronounMode::WholeWord => count_pronoun_words(&words),
        };

        tracing::debug!(
            sentences = sentence_count,
            words = word_count,
            complex = complex_word_count,
            pronouns = personal_pronouns,
            "computed article metrics"
        );

        Ok(ArticleMetrics {
            word_count: word_count as u64,
            avg_sentence_length,
            avg_word_length,
            polarity_score: sentiment.polarity,
            subjectivity_score: sentiment.subjectivity,
            percentage_of_complex_words,
            fog_index,
            avg_number_of_words_per_sentence: avg_sentence_length,
            personal_pronouns,
            complex_word_count,
            syllable_per_word,
        })
    }
}

fn checked_sentiment(sentiment: Sentiment) -> Result<Sentiment, NlpError> {
    let polarity_ok = (-1.0..=1.0).contains(&sentiment.polarity);
    let subjectivity_ok = (0.0..=1.0).contains(&sentiment.subjectivity);
    if polarity_ok && subjectivity_ok {
        Ok(sentiment)
    } else {
        Err(NlpError::Collaborator {
            component: "sentiment analyzer",
            msg: format!(
                "scores out of range: polarity {}, subjectivity {}",
                sentiment.polarity, sentiment.subjectivity
            ),
        })
    }
}

fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

/// Non-overlapping occurrences of every listed pronoun in the lowercased text.
///
/// Over-counts by construction: "us" also matches inside "trust".
pub fn count_pronoun_substrings(text: &str) -> u64 {
    let lower = text.to_lowercase();
    PERSONAL_PRONOUNS
        .iter()
        .map(|pronoun| lower.matches(pronoun).count() as u64)
        .sum()
}

pub fn count_pronoun_words(words: &[String]) -> u64 {
    words
        .iter()
        .filter(|word| {
            PERSONAL_PRONOUNS
                .iter()
                .any(|pronoun| pronoun.eq_ignore_ascii_case(word))
        })
        .count() as u64
}

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub results: Vec<MetricsResult>,
    pub skipped: Vec<String>,
}

/// Runs the computer over every record with text, preserving input order.
///
/// Records without text are left out of `results`; a collaborator failure
/// aborts the batch.
pub fn run_stage2(
    records: &[ArticleRecord],
    computer: &ArticleMetricsComputer<'_>,
) -> Result<Stage2Output, NlpError> {
    let mut results = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for record in records {
        let Some(text) = record.processable_text() else {
            tracing::debug!(
                url_id = %record.url_id,
                title = %record.title,
                "skipping record without article text"
            );
            skipped.push(record.url_id.clone());
            continue;
        };
        let metrics = computer.compute(text).inspect_err(|err| {
            tracing::error!(url_id = %record.url_id, error = %err, "metrics computation failed");
        })?;
        results.push(MetricsResult {
            url_id: record.url_id.clone(),
            metrics,
        });
    }

    tracing::info!(
        processed = results.len(),
        skipped = skipped.len(),
        pronoun_mode = computer.profile().pronoun_mode.as_str(),
        "computed metrics"
    );

    Ok(Stage2Output { results, skipped })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_metrics.rs"]
mod tests;
