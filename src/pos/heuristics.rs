//! Surface-form POS inference for words without explicit tags.
//!
//! Ordered suffix and closed-set rules, Korean first then English; the first
//! matching rule wins and the fallback is always noun, so inference never
//! fails.

use std::sync::OnceLock;

use regex::Regex;

use crate::pos::tags::PartOfSpeech;

fn rules() -> &'static Vec<(Regex, PartOfSpeech)> {
    static RULES: OnceLock<Vec<(Regex, PartOfSpeech)>> = OnceLock::new();
    RULES.get_or_init(|| {
        let table: &[(&str, PartOfSpeech)] = &[
            // Korean: verb-forming endings before the generic 다 adjective
            // fallback, then adverb, closed sets last.
            (
                r"(하다|되다|이다|있다|없다|거리다|스럽다|롭다|답다)$",
                PartOfSpeech::Verb,
            ),
            (r"다$", PartOfSpeech::Adjective),
            (
                r"(스럽게|롭게|답게|으로|게|히|이|로)$",
                PartOfSpeech::Adverb,
            ),
            (r"^(와|오|어|아|으|음|응)$", PartOfSpeech::Interjection),
            (
                r"^([0-9]+|[일이삼사오육칠팔구십백천만억]+)$",
                PartOfSpeech::Numeral,
            ),
            (
                r"^(나|너|그|이|저|우리|너희|그들|이것|저것)$",
                PartOfSpeech::Pronoun,
            ),
            (
                r"^(에서|에|와|과|그리고|또는|하지만|만약)$",
                PartOfSpeech::Preposition,
            ),
            // English, independently ordered.
            (r"(?i)(ing|ed|s)$", PartOfSpeech::Verb),
            (
                r"(?i)(ful|ous|ical|al|ive|able|ible|ic|ish|less)$",
                PartOfSpeech::Adjective,
            ),
            (r"(?i)ly$", PartOfSpeech::Adverb),
            (
                r"(?i)^(wow|oh|ah|oops|ouch|hmm|uh)$",
                PartOfSpeech::Interjection,
            ),
            (
                r"(?i)^([0-9]+|one|two|three|first|second|third)$",
                PartOfSpeech::Numeral,
            ),
            (
                r"(?i)^(i|you|he|she|it|we|they|this|that|these|those)$",
                PartOfSpeech::Pronoun,
            ),
            (
                r"(?i)^(in|on|at|and|or|but|if|when|where|why|how)$",
                PartOfSpeech::Preposition,
            ),
        ];
        table
            .iter()
            .map(|(pattern, pos)| (Regex::new(pattern).expect("valid heuristic pattern"), *pos))
            .collect()
    })
}

/// Guesses the part of speech of a surface form. First matching rule wins;
/// defaults to noun.
pub fn guess_pos(word: &str) -> PartOfSpeech {
    let trimmed = word.trim();
    for (re, pos) in rules() {
        if re.is_match(trimmed) {
            return *pos;
        }
    }
    PartOfSpeech::Noun
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_korean_verb_endings() {
        assert_eq!(guess_pos("사랑하다"), PartOfSpeech::Verb);
        assert_eq!(guess_pos("걱정되다"), PartOfSpeech::Verb);
    }

    #[test]
    fn test_korean_adjective_fallback() {
        // Ends in 다 but not a verb-forming morpheme.
        assert_eq!(guess_pos("예쁘다"), PartOfSpeech::Adjective);
    }

    #[test]
    fn test_korean_adverb_and_closed_sets() {
        assert_eq!(guess_pos("빠르게"), PartOfSpeech::Adverb);
        assert_eq!(guess_pos("우리"), PartOfSpeech::Pronoun);
        assert_eq!(guess_pos("그리고"), PartOfSpeech::Preposition);
        assert_eq!(guess_pos("삼십"), PartOfSpeech::Numeral);
    }

    #[test]
    fn test_english_suffixes() {
        assert_eq!(guess_pos("running"), PartOfSpeech::Verb);
        assert_eq!(guess_pos("beautiful"), PartOfSpeech::Adjective);
        assert_eq!(guess_pos("quickly"), PartOfSpeech::Adverb);
    }

    #[test]
    fn test_priority_verb_over_adverb() {
        // 'ing' wins before any later rule gets a look.
        assert_eq!(guess_pos("loving"), PartOfSpeech::Verb);
    }

    #[test]
    fn test_defaults_to_noun() {
        assert_eq!(guess_pos("사랑"), PartOfSpeech::Noun);
        assert_eq!(guess_pos("love"), PartOfSpeech::Noun);
        assert_eq!(guess_pos(""), PartOfSpeech::Noun);
    }
}
