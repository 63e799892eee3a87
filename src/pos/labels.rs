//! POS label extraction and cleanup for stored meanings, used when a
//! vocabulary entry is added without an explicit part of speech.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::pos::heuristics::guess_pos;
use crate::pos::tags::canonical_pos;

fn marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"([명동형부전접감대관수]|\b(?i:adj|adv|prep|conj|int|pron|art|num|n|v))\.\s*",
        )
        .expect("valid pos marker pattern")
    })
}

/// Collects the canonical POS labels marked in a meaning text, sorted and
/// `/`-joined (`명. 사랑/동. 사랑하다` → `noun/verb`). `None` when the text
/// carries no markers.
pub fn extract_pos_labels(meaning: &str) -> Option<String> {
    let mut labels = BTreeSet::new();
    for caps in marker_re().captures_iter(meaning) {
        if let Some(pos) = canonical_pos(&caps[1]) {
            labels.insert(pos.as_str());
        }
    }
    if labels.is_empty() {
        None
    } else {
        Some(labels.into_iter().collect::<Vec<_>>().join("/"))
    }
}

/// Removes POS markers from a meaning text, leaving the words themselves.
pub fn strip_pos_markers(meaning: &str) -> String {
    marker_re().replace_all(meaning, "").trim().to_string()
}

/// Resolves the stored form of a vocabulary entry: an explicitly provided
/// part of speech wins, then markers found in the meaning, then the surface
/// heuristic. The returned meaning has markers stripped.
pub fn prepare_entry(
    word: &str,
    meaning: &str,
    part_of_speech: Option<String>,
) -> (String, String, Option<String>) {
    if let Some(pos) = part_of_speech {
        return (word.trim().to_string(), meaning.trim().to_string(), Some(pos));
    }

    let extracted = extract_pos_labels(meaning)
        .unwrap_or_else(|| guess_pos(meaning.trim()).as_str().to_string());
    (
        word.trim().to_string(),
        strip_pos_markers(meaning),
        Some(extracted),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_korean_markers() {
        assert_eq!(
            extract_pos_labels("명. 사랑, 사랑애/동. 사랑하다"),
            Some("noun/verb".to_string())
        );
        assert_eq!(extract_pos_labels("형. 아름다운"), Some("adjective".to_string()));
    }

    #[test]
    fn test_extract_english_markers() {
        assert_eq!(extract_pos_labels("N. love/V. love"), Some("noun/verb".to_string()));
        assert_eq!(extract_pos_labels("adv. very"), Some("adverb".to_string()));
    }

    #[test]
    fn test_marker_needs_word_boundary() {
        // The n in "run." is inside a word, not a marker.
        assert_eq!(extract_pos_labels("to run. fast"), None);
    }

    #[test]
    fn test_strip_markers() {
        assert_eq!(
            strip_pos_markers("명. 사랑, 사랑애/동. 사랑하다"),
            "사랑, 사랑애/사랑하다"
        );
        assert_eq!(strip_pos_markers("N. love/V. love"), "love/love");
    }

    #[test]
    fn test_prepare_entry_prefers_explicit_pos() {
        let (word, meaning, pos) =
            prepare_entry(" run ", "명. 달리기", Some("verb".to_string()));
        assert_eq!(word, "run");
        assert_eq!(meaning, "명. 달리기");
        assert_eq!(pos.as_deref(), Some("verb"));
    }

    #[test]
    fn test_prepare_entry_falls_back_to_guess() {
        let (_, meaning, pos) = prepare_entry("공부하다", "공부하다", None);
        assert_eq!(meaning, "공부하다");
        assert_eq!(pos.as_deref(), Some("verb"));
    }
}
