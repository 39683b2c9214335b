use clap::ValueEnum;

/// Legacy pronoun list, matched verbatim by [`PronounMode::Substring`].
///
/// The leading `"I"` is uppercase and is compared against lowercased text, so
/// it never matches in substring mode.
pub const PERSONAL_PRONOUNS: &[&str] = &[
    "I",
    "me",
    "my",
    "mine",
    "myself",
    "we",
    "us",
    "our",
    "ours",
    "ourselves",
    "you",
    "your",
    "yours",
    "yourself",
    "yourselves",
    "he",
    "him",
    "his",
    "himself",
    "she",
    "her",
    "hers",
    "herself",
    "it",
    "its",
    "itself",
    "they",
    "them",
    "their",
    "theirs",
    "themselves",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PronounMode {
    /// Sum of substring occurrences of each pronoun in the lowercased text.
    Substring,
    /// Case-insensitive exact match of word tokens against the pronoun set.
    WholeWord,
}

impl PronounMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PronounMode::Substring => "substring",
            PronounMode::WholeWord => "whole-word",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricsProfile {
    /// A token is complex when its syllable count is strictly greater.
    pub complex_syllable_threshold: u32,
    pub fog_weight: f64,
    pub pronoun_mode: PronounMode,
}

impl MetricsProfile {
    pub fn legacy_v1() -> Self {
        Self {
            complex_syllable_threshold: 2,
            fog_weight: 0.4,
            pronoun_mode: PronounMode::Substring,
        }
    }

    pub fn whole_word_v1() -> Self {
        let mut base = Self::legacy_v1();
        base.pronoun_mode = PronounMode::WholeWord;
        base
    }

    pub fn for_mode(mode: PronounMode) -> Self {
        match mode {
            PronounMode::Substring => Self::legacy_v1(),
            PronounMode::WholeWord => Self::whole_word_v1(),
        }
    }
}

impl Default for MetricsProfile {
    fn default() -> Self {
        Self::legacy_v1()
    }
}
