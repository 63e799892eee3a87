//! Explicit-tag parsing for inputs like `동. 사랑하다 / 명. 사랑`.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::pos::tags::canonical_label;
use crate::text;

fn pos_group_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\w+)\.\s*([^/\n]+)").expect("valid pos group pattern"))
}

fn incomplete_res() -> &'static [Regex; 3] {
    static RES: OnceLock<[Regex; 3]> = OnceLock::new();
    RES.get_or_init(|| {
        [
            Regex::new(r"^(\w+)\.\s*$").expect("valid pattern"),
            Regex::new(r"^(\w+)\.\s*/\s*$").expect("valid pattern"),
            Regex::new(r"^(\w+)\.\s*/\s*\w+\.\s*$").expect("valid pattern"),
        ]
    })
}

/// One POS key with its words, in encounter order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PosGroup {
    pub pos: String,
    pub words: Vec<String>,
}

/// Ordered mapping from POS label to surface words. Empty when the input
/// carries no explicit tags, which is a valid state rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PosWordMap {
    groups: Vec<PosGroup>,
}

impl PosWordMap {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn contains(&self, pos: &str) -> bool {
        self.groups.iter().any(|g| g.pos == pos)
    }

    pub fn get(&self, pos: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.pos == pos)
            .map(|g| g.words.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PosGroup> {
        self.groups.iter()
    }

    /// Appends words under a key, extending the word list if the key was
    /// already seen.
    pub fn push_words(&mut self, pos: String, words: Vec<String>) {
        if let Some(group) = self.groups.iter_mut().find(|g| g.pos == pos) {
            group.words.extend(words);
        } else {
            self.groups.push(PosGroup { pos, words });
        }
    }

    /// All words in encounter order, across every POS group.
    pub fn all_words(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|g| g.words.iter().cloned())
            .collect()
    }
}

/// Signal for a tag with no words behind it, e.g. `동.` or `동. / 명.`.
/// Surfaced to the caller as a correctable input error, never as a score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncompletePosInput {
    pub pos_tag: String,
    pub message: String,
}

/// Parses explicit POS tags out of the text. Tag tokens map through the
/// canonical table; unmapped tokens keep their own spelling as the key.
pub fn parse_pos_input(input: &str) -> PosWordMap {
    let mut map = PosWordMap::default();
    for caps in pos_group_re().captures_iter(input) {
        let label = canonical_label(&caps[1]);
        let words = text::split_list(&caps[2]);
        if !words.is_empty() {
            map.push_words(label, words);
        }
    }
    map
}

/// Detects a trailing tag with no words. Matches against the whole trimmed
/// input so `동. 사랑하다` is complete while `동.` and `동. / 명.` are not.
pub fn check_incomplete(input: &str) -> Option<IncompletePosInput> {
    let trimmed = input.trim();
    for re in incomplete_res() {
        if let Some(caps) = re.captures(trimmed) {
            let tag = caps[1].to_string();
            let message = format!("품사 태그 '{tag}.' 뒤에 단어를 입력해주세요.");
            return Some(IncompletePosInput {
                pos_tag: tag,
                message,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_group() {
        let map = parse_pos_input("동. 사랑하다");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("verb"), Some(&["사랑하다".to_string()][..]));
    }

    #[test]
    fn test_parse_multiple_groups() {
        let map = parse_pos_input("동. 사랑하다 / 명. 사랑, 애정");
        assert_eq!(map.get("verb"), Some(&["사랑하다".to_string()][..]));
        assert_eq!(
            map.get("noun"),
            Some(&["사랑".to_string(), "애정".to_string()][..])
        );
    }

    #[test]
    fn test_repeated_key_extends() {
        let map = parse_pos_input("명. 사랑 / 명. 애정");
        assert_eq!(
            map.get("noun"),
            Some(&["사랑".to_string(), "애정".to_string()][..])
        );
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_unmapped_tag_keeps_own_key() {
        let map = parse_pos_input("조. 에게");
        assert_eq!(map.get("조"), Some(&["에게".to_string()][..]));
    }

    #[test]
    fn test_untagged_input_yields_empty_map() {
        assert!(parse_pos_input("사랑, 애정").is_empty());
    }

    #[test]
    fn test_incomplete_bare_tag() {
        let incomplete = check_incomplete("동.").expect("should be incomplete");
        assert_eq!(incomplete.pos_tag, "동");
        assert!(incomplete.message.contains("'동.'"));
    }

    #[test]
    fn test_incomplete_with_separator() {
        assert!(check_incomplete("동. /").is_some());
        assert!(check_incomplete("동. / 명.").is_some());
    }

    #[test]
    fn test_complete_input_is_not_flagged() {
        assert!(check_incomplete("동. 사랑하다").is_none());
        assert!(check_incomplete("사랑, 애정").is_none());
        assert!(check_incomplete("").is_none());
    }
}
