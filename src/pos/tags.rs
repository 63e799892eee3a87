use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical part-of-speech labels used across the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    Pronoun,
    Article,
    Numeral,
}

impl PartOfSpeech {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Article => "article",
            PartOfSpeech::Numeral => "numeral",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps an explicit tag token (Korean single character or English
/// abbreviation, case-insensitive) to its canonical part of speech.
pub fn canonical_pos(tag: &str) -> Option<PartOfSpeech> {
    match tag {
        "명" => return Some(PartOfSpeech::Noun),
        "동" => return Some(PartOfSpeech::Verb),
        "형" => return Some(PartOfSpeech::Adjective),
        "부" => return Some(PartOfSpeech::Adverb),
        "전" => return Some(PartOfSpeech::Preposition),
        "접" => return Some(PartOfSpeech::Conjunction),
        "감" => return Some(PartOfSpeech::Interjection),
        "대" => return Some(PartOfSpeech::Pronoun),
        "관" => return Some(PartOfSpeech::Article),
        "수" => return Some(PartOfSpeech::Numeral),
        _ => {}
    }

    match tag.to_ascii_lowercase().as_str() {
        "n" => Some(PartOfSpeech::Noun),
        "v" => Some(PartOfSpeech::Verb),
        "adj" => Some(PartOfSpeech::Adjective),
        "adv" => Some(PartOfSpeech::Adverb),
        "prep" => Some(PartOfSpeech::Preposition),
        "conj" => Some(PartOfSpeech::Conjunction),
        "int" => Some(PartOfSpeech::Interjection),
        "pron" => Some(PartOfSpeech::Pronoun),
        "art" => Some(PartOfSpeech::Article),
        "num" => Some(PartOfSpeech::Numeral),
        _ => None,
    }
}

/// Canonical label for a tag token; unmapped tokens pass through unchanged
/// and become their own key in the parsed word map.
pub fn canonical_label(tag: &str) -> String {
    canonical_pos(tag)
        .map(|pos| pos.as_str().to_string())
        .unwrap_or_else(|| tag.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_korean_tags_map_to_canonical() {
        assert_eq!(canonical_pos("명"), Some(PartOfSpeech::Noun));
        assert_eq!(canonical_pos("동"), Some(PartOfSpeech::Verb));
        assert_eq!(canonical_pos("수"), Some(PartOfSpeech::Numeral));
    }

    #[test]
    fn test_english_tags_are_case_insensitive() {
        assert_eq!(canonical_pos("N"), Some(PartOfSpeech::Noun));
        assert_eq!(canonical_pos("Adj"), Some(PartOfSpeech::Adjective));
        assert_eq!(canonical_pos("PRON"), Some(PartOfSpeech::Pronoun));
    }

    #[test]
    fn test_unmapped_tag_passes_through() {
        assert_eq!(canonical_pos("조"), None);
        assert_eq!(canonical_label("조"), "조");
        assert_eq!(canonical_label("v"), "verb");
    }
}
