use crate::nlp::{NlpError, SyllableCounter};

/// English vowel-group heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSyllableCounter;

impl SyllableCounter for HeuristicSyllableCounter {
    fn count(&self, word: &str) -> Result<u32, NlpError> {
        Ok(count_syllables(word))
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}

/// Tokens without letters have no syllables; any other token has at least one.
pub fn count_syllables(word: &str) -> u32 {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let mut groups = 0u32;
    let mut in_group = false;
    for &c in &letters {
        if is_vowel(c) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }

    if groups > 1 && has_silent_suffix(&letters) {
        groups -= 1;
    }
    groups.max(1)
}

fn has_silent_suffix(letters: &[char]) -> bool {
    let n = letters.len();
    if n < 3 {
        return false;
    }
    let last = letters[n - 1];
    let prev = letters[n - 2];
    let before = letters[n - 3];

    if last == 'e' {
        // consonant + "le" keeps its own syllable: "ta-ble".
        if prev == 'l' && is_consonant(before) {
            return false;
        }
        return is_consonant(prev);
    }
    if prev == 'e' && last == 's' {
        let sibilant = matches!(before, 's' | 'x' | 'z' | 'c' | 'g')
            || (before == 'h' && n >= 4 && matches!(letters[n - 4], 'c' | 's'));
        return is_consonant(before) && !sibilant;
    }
    if prev == 'e' && last == 'd' {
        return is_consonant(before) && !matches!(before, 't' | 'd');
    }
    false
}

#[cfg(test)]
#[path = "../../tests/src_inline/nlp/syllables.rs"]
mod tests;
