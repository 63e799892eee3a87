//! Multi-signal aggregation for word-list comparison (the strict policy):
//! fixed weights over four clamped signals plus a similarity-tier bonus.

use serde::Serialize;

use crate::pos::parse::PosWordMap;

const SEMANTIC_WEIGHT: f64 = 0.6;
const POS_WEIGHT: f64 = 0.2;
const SYNONYM_WEIGHT: f64 = 0.15;
const KEYWORD_WEIGHT: f64 = 0.05;

const HIGH_SIMILARITY_THRESHOLD: f64 = 0.8;
const HIGH_SIMILARITY_BONUS: f64 = 0.05;
const MID_SIMILARITY_THRESHOLD: f64 = 0.6;
const MID_SIMILARITY_BONUS: f64 = 0.02;

// Neutral score when one side carries no POS information at all, and the
// floor for a tagged-but-fully-mismatched pair.
const UNTAGGED_POS_SCORE: f64 = 0.3;
const POS_MISMATCH_FLOOR: f64 = 0.1;

/// The four independent sub-scores, each clamped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalScores {
    pub semantic_similarity: f64,
    pub pos_matching_score: f64,
    pub synonym_score: f64,
    pub keyword_score: f64,
}

impl SignalScores {
    pub fn new(semantic: f64, pos: f64, synonym: f64, keyword: f64) -> Self {
        Self {
            semantic_similarity: semantic.clamp(0.0, 1.0),
            pos_matching_score: pos.clamp(0.0, 1.0),
            synonym_score: synonym.clamp(0.0, 1.0),
            keyword_score: keyword.clamp(0.0, 1.0),
        }
    }
}

/// Weighted sum plus tier bonus. The bonus can push the total past 1.0;
/// callers must not assume an upper bound of 1 here.
pub fn total_score(signals: &SignalScores) -> f64 {
    let mut total = signals.semantic_similarity * SEMANTIC_WEIGHT
        + signals.pos_matching_score * POS_WEIGHT
        + signals.synonym_score * SYNONYM_WEIGHT
        + signals.keyword_score * KEYWORD_WEIGHT;

    if signals.semantic_similarity > HIGH_SIMILARITY_THRESHOLD {
        total += HIGH_SIMILARITY_BONUS;
    } else if signals.semantic_similarity > MID_SIMILARITY_THRESHOLD {
        total += MID_SIMILARITY_BONUS;
    }
    total
}

/// Matched-key fraction over the meaning side's POS keys. Either side
/// untagged scores the 0.3 neutral; a full mismatch between two tagged
/// sides floors at 0.1 instead of cratering to zero.
pub fn pos_matching_score(meaning_pos: &PosWordMap, user_pos: &PosWordMap) -> f64 {
    if meaning_pos.is_empty() || user_pos.is_empty() {
        return UNTAGGED_POS_SCORE;
    }

    let total = meaning_pos.len();
    let matched = meaning_pos
        .iter()
        .filter(|group| user_pos.contains(&group.pos))
        .count();

    let base = matched as f64 / total as f64;
    if base == 0.0 {
        return POS_MISMATCH_FLOOR;
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn map(groups: &[(&str, &[&str])]) -> PosWordMap {
        let mut out = PosWordMap::default();
        for (pos, words) in groups {
            out.push_words(
                pos.to_string(),
                words.iter().map(|w| w.to_string()).collect(),
            );
        }
        out
    }

    #[test]
    fn test_weighted_sum_without_bonus() {
        let signals = SignalScores::new(0.5, 0.3, 0.5, 0.0);
        let expected = 0.5 * 0.6 + 0.3 * 0.2 + 0.5 * 0.15;
        assert!((total_score(&signals) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_high_similarity_bonus() {
        let signals = SignalScores::new(0.9, 1.0, 1.0, 1.0);
        let expected = 0.9 * 0.6 + 0.2 + 0.15 + 0.05 + 0.05;
        assert!((total_score(&signals) - expected).abs() < 1e-9);
        // Bonuses may push past 1.0 for near-perfect answers.
        let perfect = SignalScores::new(1.0, 1.0, 1.0, 1.0);
        assert!(total_score(&perfect) > 1.0);
    }

    #[test]
    fn test_mid_similarity_bonus() {
        let with_bonus = total_score(&SignalScores::new(0.7, 0.0, 0.0, 0.0));
        assert!((with_bonus - (0.7 * 0.6 + 0.02)).abs() < 1e-9);
        let at_boundary = total_score(&SignalScores::new(0.6, 0.0, 0.0, 0.0));
        assert!((at_boundary - 0.6 * 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_signals_are_clamped() {
        let signals = SignalScores::new(-0.4, 1.7, 0.5, 0.5);
        assert_eq!(signals.semantic_similarity, 0.0);
        assert_eq!(signals.pos_matching_score, 1.0);
    }

    #[test]
    fn test_pos_score_untagged_side() {
        let tagged = map(&[("noun", &["사랑"])]);
        assert_eq!(pos_matching_score(&PosWordMap::default(), &tagged), 0.3);
        assert_eq!(pos_matching_score(&tagged, &PosWordMap::default()), 0.3);
    }

    #[test]
    fn test_pos_score_mismatch_floor() {
        let meaning = map(&[("noun", &["사랑"])]);
        let user = map(&[("verb", &["사랑하다"])]);
        assert_eq!(pos_matching_score(&meaning, &user), 0.1);
    }

    #[test]
    fn test_pos_score_partial_match() {
        let meaning = map(&[("noun", &["사랑"]), ("verb", &["사랑하다"])]);
        let user = map(&[("noun", &["애정"])]);
        assert_eq!(pos_matching_score(&meaning, &user), 0.5);
        assert_eq!(pos_matching_score(&user, &meaning), 1.0);
    }

    proptest! {
        #[test]
        fn prop_components_bounded_and_total_floor(
            semantic in -2.0f64..2.0,
            pos in -2.0f64..2.0,
            synonym in -2.0f64..2.0,
            keyword in -2.0f64..2.0,
        ) {
            let signals = SignalScores::new(semantic, pos, synonym, keyword);
            for component in [
                signals.semantic_similarity,
                signals.pos_matching_score,
                signals.synonym_score,
                signals.keyword_score,
            ] {
                prop_assert!((0.0..=1.0).contains(&component));
            }
            let total = total_score(&signals);
            prop_assert!(total >= 0.0);
            prop_assert!(total <= 1.0 + 0.05 + 1e-9);
        }
    }
}
