#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricName {
    WordCount,
    AvgSentenceLength,
    AvgWordLength,
    PolarityScore,
    SubjectivityScore,
    PercentageOfComplexWords,
    FogIndex,
    AvgNumberOfWordsPerSentence,
    PersonalPronouns,
    ComplexWordCount,
    SyllablePerWord,
}

impl MetricName {
    /// Declared output order.
    pub const ALL: [MetricName; 11] = [
        MetricName::WordCount,
        MetricName::AvgSentenceLength,
        MetricName::AvgWordLength,
        MetricName::PolarityScore,
        MetricName::SubjectivityScore,
        MetricName::PercentageOfComplexWords,
        MetricName::FogIndex,
        MetricName::AvgNumberOfWordsPerSentence,
        MetricName::PersonalPronouns,
        MetricName::ComplexWordCount,
        MetricName::SyllablePerWord,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MetricName::WordCount => "WORD COUNT",
            MetricName::AvgSentenceLength => "AVG SENTENCE LENGTH",
            MetricName::AvgWordLength => "AVG WORD LENGTH",
            MetricName::PolarityScore => "POLARITY SCORE",
            MetricName::SubjectivityScore => "SUBJECTIVITY SCORE",
            MetricName::PercentageOfComplexWords => "PERCENTAGE OF COMPLEX WORDS",
            MetricName::FogIndex => "FOG INDEX",
            MetricName::AvgNumberOfWordsPerSentence => "AVG NUMBER OF WORDS PER SENTENCE",
            MetricName::PersonalPronouns => "PERSONAL PRONOUNS",
            MetricName::ComplexWordCount => "COMPLEX WORD COUNT",
            MetricName::SyllablePerWord => "SYLLABLE PER WORD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(u64),
    Real(f64),
}

impl MetricValue {
    pub fn as_f64(self) -> f64 {
        match self {
            MetricValue::Count(v) => v as f64,
            MetricValue::Real(v) => v,
        }
    }
}

/// The fixed metric set for one article.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleMetrics {
    pub word_count: u64,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    pub percentage_of_complex_words: f64,
    pub fog_index: f64,
    pub avg_number_of_words_per_sentence: f64,
    pub personal_pronouns: u64,
    pub complex_word_count: u64,
    pub syllable_per_word: f64,
}

impl ArticleMetrics {
    pub fn get(&self, name: MetricName) -> MetricValue {
        match name {
            MetricName::WordCount => MetricValue::Count(self.word_count),
            MetricName::AvgSentenceLength => MetricValue::Real(self.avg_sentence_length),
            MetricName::AvgWordLength => MetricValue::Real(self.avg_word_length),
            MetricName::PolarityScore => MetricValue::Real(self.polarity_score),
            MetricName::SubjectivityScore => MetricValue::Real(self.subjectivity_score),
            MetricName::PercentageOfComplexWords => {
                MetricValue::Real(self.percentage_of_complex_words)
            }
            MetricName::FogIndex => MetricValue::Real(self.fog_index),
            MetricName::AvgNumberOfWordsPerSentence => {
                MetricValue::Real(self.avg_number_of_words_per_sentence)
            }
            MetricName::PersonalPronouns => MetricValue::Count(self.personal_pronouns),
            MetricName::ComplexWordCount => MetricValue::Count(self.complex_word_count),
            MetricName::SyllablePerWord => MetricValue::Real(self.syllable_per_word),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = (MetricName, MetricValue)> + '_ {
        MetricName::ALL.iter().map(move |&name| (name, self.get(name)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricsResult {
    pub url_id: String,
    pub metrics: ArticleMetrics,
}
