use super::*;
use crate::model::metrics::MetricName;
use crate::nlp::Sentiment;
use crate::nlp::lexicon::builtin_lexicon;
use crate::nlp::sentiment::LexiconSentimentAnalyzer;
use crate::nlp::syllables::HeuristicSyllableCounter;
use crate::nlp::tokenizer::UnicodeTokenizer;

struct Fixture {
    tokenizer: UnicodeTokenizer,
    sentiment: LexiconSentimentAnalyzer,
    syllables: HeuristicSyllableCounter,
}

impl Fixture {
    fn new() -> Self {
        Self {
            tokenizer: UnicodeTokenizer,
            sentiment: LexiconSentimentAnalyzer::new(builtin_lexicon().unwrap()),
            syllables: HeuristicSyllableCounter,
        }
    }

    fn computer(&self, profile: MetricsProfile) -> ArticleMetricsComputer<'_> {
        ArticleMetricsComputer::new(&self.tokenizer, &self.sentiment, &self.syllables, profile)
    }
}

struct FixedSentiment(Sentiment);

impl SentimentAnalyzer for FixedSentiment {
    fn analyze(&self, _text: &str) -> Result<Sentiment, NlpError> {
        Ok(self.0)
    }
}

struct FailingSentiment;

impl SentimentAnalyzer for FailingSentiment {
    fn analyze(&self, _text: &str) -> Result<Sentiment, NlpError> {
        Err(NlpError::Collaborator {
            component: "sentiment",
            msg: "boom".to_string(),
        })
    }
}

/// Every token counts as three syllables.
struct ThreeSyllables;

impl SyllableCounter for ThreeSyllables {
    fn count(&self, _word: &str) -> Result<u32, NlpError> {
        Ok(3)
    }
}

fn assert_invariants(m: &ArticleMetrics) {
    assert_eq!(m.avg_sentence_length, m.avg_number_of_words_per_sentence);
    assert_eq!(
        m.fog_index,
        0.4 * (m.avg_sentence_length + m.percentage_of_complex_words)
    );
    assert!((0.0..=100.0).contains(&m.percentage_of_complex_words));
    assert!(m.complex_word_count <= m.word_count);
    assert!((-1.0..=1.0).contains(&m.polarity_score));
    assert!((0.0..=1.0).contains(&m.subjectivity_score));
}

#[test]
fn test_empty_text_yields_zeros() {
    let fx = Fixture::new();
    let m = fx.computer(MetricsProfile::legacy_v1()).compute("").unwrap();
    assert_eq!(m, ArticleMetrics::default());
    assert_invariants(&m);

    let m = fx.computer(MetricsProfile::whole_word_v1()).compute("").unwrap();
    assert_eq!(m, ArticleMetrics::default());
}

#[test]
fn test_whitespace_only_text_yields_zeros() {
    let fx = Fixture::new();
    let m = fx.computer(MetricsProfile::legacy_v1()).compute(" \n\t ").unwrap();
    assert_eq!(m, ArticleMetrics::default());
}

#[test]
fn test_reference_scenario() {
    let fx = Fixture::new();
    let text = "I love this. It is great and amazing.";
    let m = fx.computer(MetricsProfile::legacy_v1()).compute(text).unwrap();

    assert_eq!(m.word_count, 8);
    assert_eq!(m.avg_sentence_length, 4.0);
    assert_eq!(m.avg_number_of_words_per_sentence, 4.0);
    // I love this It is great and amazing -> 1+4+4+2+2+5+3+7
    assert_eq!(m.avg_word_length, 28.0 / 8.0);
    assert_eq!(m.complex_word_count, 1);
    assert_eq!(m.percentage_of_complex_words, 12.5);
    assert_eq!(m.fog_index, 0.4 * (4.0 + 12.5));
    assert_eq!(m.syllable_per_word, 10.0 / 8.0);
    // "it" plus "his" inside "this"; uppercase "I" never matches.
    assert_eq!(m.personal_pronouns, 2);
    assert!(m.polarity_score > 0.0);
    assert_invariants(&m);
}

#[test]
fn test_reference_scenario_whole_word() {
    let fx = Fixture::new();
    let text = "I love this. It is great and amazing.";
    let m = fx.computer(MetricsProfile::whole_word_v1()).compute(text).unwrap();
    assert_eq!(m.personal_pronouns, 2);
    assert_invariants(&m);
}

#[test]
fn test_substring_over_count() {
    let fx = Fixture::new();
    let legacy = fx.computer(MetricsProfile::legacy_v1()).compute("trust us").unwrap();
    assert_eq!(legacy.personal_pronouns, 2);

    let whole = fx.computer(MetricsProfile::whole_word_v1()).compute("trust us").unwrap();
    assert_eq!(whole.personal_pronouns, 1);
}

#[test]
fn test_pronoun_counters() {
    assert_eq!(count_pronoun_substrings("We told them."), 3); // we, them, he inside them
    assert_eq!(count_pronoun_substrings("no pronouns"), 0);
    let words: Vec<String> = ["We", "told", "THEM", "theme"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(count_pronoun_words(&words), 2);
}

#[test]
fn test_all_complex_words() {
    let fx = Fixture::new();
    let sentiment = FixedSentiment(Sentiment {
        polarity: -0.25,
        subjectivity: 0.5,
    });
    let computer = ArticleMetricsComputer::new(
        &fx.tokenizer,
        &sentiment,
        &ThreeSyllables,
        MetricsProfile::legacy_v1(),
    );
    let m = computer.compute("One two three. Four five.").unwrap();
    assert_eq!(m.word_count, 5);
    assert_eq!(m.complex_word_count, 5);
    assert_eq!(m.percentage_of_complex_words, 100.0);
    assert_eq!(m.avg_sentence_length, 2.5);
    assert_eq!(m.fog_index, 0.4 * (2.5 + 100.0));
    assert_eq!(m.syllable_per_word, 3.0);
    assert_eq!(m.polarity_score, -0.25);
    assert_eq!(m.subjectivity_score, 0.5);
    assert_invariants(&m);
}

#[test]
fn test_collaborator_failure_propagates() {
    let fx = Fixture::new();
    let computer = ArticleMetricsComputer::new(
        &fx.tokenizer,
        &FailingSentiment,
        &fx.syllables,
        MetricsProfile::legacy_v1(),
    );
    assert!(matches!(
        computer.compute("Some text."),
        Err(NlpError::Collaborator { .. })
    ));

    let records = vec![ArticleRecord::new("a", "", Some("Some text.".to_string()))];
    assert!(run_stage2(&records, &computer).is_err());
}

#[test]
fn test_out_of_range_sentiment_is_rejected() {
    let fx = Fixture::new();
    for bad in [
        Sentiment {
            polarity: 1.5,
            subjectivity: 0.5,
        },
        Sentiment {
            polarity: 0.0,
            subjectivity: -0.1,
        },
        Sentiment {
            polarity: f64::NAN,
            subjectivity: 0.0,
        },
    ] {
        let sentiment = FixedSentiment(bad);
        let computer = ArticleMetricsComputer::new(
            &fx.tokenizer,
            &sentiment,
            &fx.syllables,
            MetricsProfile::legacy_v1(),
        );
        assert!(matches!(
            computer.compute("Some text."),
            Err(NlpError::Collaborator {
                component: "sentiment analyzer",
                ..
            })
        ));
    }
}

#[test]
fn test_metric_values_in_declared_order() {
    let fx = Fixture::new();
    let m = fx
        .computer(MetricsProfile::legacy_v1())
        .compute("Readability matters.")
        .unwrap();
    let names: Vec<_> = m.values().map(|(name, _)| name).collect();
    assert_eq!(names, MetricName::ALL.to_vec());
}

#[test]
fn test_batch_skips_empty_and_keeps_order() {
    let fx = Fixture::new();
    let computer = fx.computer(MetricsProfile::legacy_v1());
    let records = vec![
        ArticleRecord::new("first", "A", Some("Short text here.".to_string())),
        ArticleRecord::new("empty", "B", Some(String::new())),
        ArticleRecord::new("third", "C", Some("Another article. Two sentences.".to_string())),
        ArticleRecord::new("absent", "D", None),
    ];

    let out = run_stage2(&records, &computer).unwrap();
    let ids: Vec<&str> = out.results.iter().map(|r| r.url_id.as_str()).collect();
    assert_eq!(ids, vec!["first", "third"]);
    assert_eq!(out.skipped, vec!["empty".to_string(), "absent".to_string()]);
    assert_eq!(out.results[1].metrics.word_count, 4);
    assert_eq!(out.results[1].metrics.avg_sentence_length, 2.0);
}
