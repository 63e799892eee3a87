//! Submit-answer evaluation: blends embedding similarity with sentence
//! structure and turns the blended score into a verdict with fixed Korean
//! feedback and improvement suggestions. The thresholds and weights here are
//! product policy and must stay stable across releases.

use serde::Serialize;

use crate::text;

const EMBEDDING_WEIGHT: f64 = 0.7;
const STRUCTURE_WEIGHT: f64 = 0.3;

const CORRECT_THRESHOLD: f64 = 0.8;
const FLEXIBLE_THRESHOLD: f64 = 0.6;
const PARTIAL_FEEDBACK_THRESHOLD: f64 = 0.4;

const MAX_MISSING_KEYWORDS: usize = 3;
const DETAIL_RATIO: f64 = 0.5;

const FEEDBACK_EXCELLENT: &str = "훌륭합니다! 정답과 거의 일치하는 의미를 작성하셨습니다.";
const FEEDBACK_GOOD: &str = "좋습니다! 핵심 의미를 잘 이해하고 표현하셨습니다.";
const FEEDBACK_PARTIAL: &str = "괜찮습니다. 하지만 더 정확한 의미를 위해 노력해보세요.";
const FEEDBACK_POOR: &str = "의미를 다시 한번 생각해보세요. 정답과 차이가 있습니다.";

const SUGGESTION_DETAIL: &str = "더 자세한 설명을 추가해보세요.";
const SUGGESTION_ENCOURAGE: &str = "잘하고 있습니다! 계속 연습해보세요.";

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "can", "this", "that", "these", "those", "it",
    "its", "they", "them", "their", "we", "us", "our", "you", "your",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EvaluationResult {
    Correct,
    Flexible,
    Incorrect,
}

/// Verdict for one submission. Computed fresh per call; never persisted by
/// the engine itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationVerdict {
    pub similarity_score: f64,
    pub is_correct: bool,
    pub feedback: String,
    pub suggestions: Vec<String>,
    pub evaluation_result: EvaluationResult,
}

/// Blends embedding similarity (70%) with structural similarity (30%).
pub fn final_score(embedding_similarity: f64, structural_similarity: f64) -> f64 {
    embedding_similarity * EMBEDDING_WEIGHT + structural_similarity * STRUCTURE_WEIGHT
}

/// Threshold policy: >= 0.8 correct, >= 0.6 flexible, below incorrect.
pub fn decide(score: f64) -> EvaluationResult {
    if score >= CORRECT_THRESHOLD {
        EvaluationResult::Correct
    } else if score >= FLEXIBLE_THRESHOLD {
        EvaluationResult::Flexible
    } else {
        EvaluationResult::Incorrect
    }
}

pub fn is_correct(score: f64) -> bool {
    score >= FLEXIBLE_THRESHOLD
}

/// Average of length ratio and common-word ratio over whitespace-split
/// tokens; 0.0 when either text has no tokens.
pub fn structural_similarity(accepted_text: &str, user_text: &str) -> f64 {
    let accepted_tokens: Vec<&str> = accepted_text.split_whitespace().collect();
    let user_tokens: Vec<&str> = user_text.split_whitespace().collect();

    if accepted_tokens.is_empty() || user_tokens.is_empty() {
        return 0.0;
    }

    let min_len = accepted_tokens.len().min(user_tokens.len()) as f64;
    let max_len = accepted_tokens.len().max(user_tokens.len()) as f64;
    let length_ratio = min_len / max_len;

    let common = accepted_tokens
        .iter()
        .filter(|token| user_tokens.contains(token))
        .collect::<std::collections::HashSet<_>>()
        .len() as f64;
    let common_ratio = common / max_len;

    (length_ratio + common_ratio) / 2.0
}

/// Content keywords for the answer path: stop words and words of two or
/// fewer characters dropped, duplicates removed in encounter order.
pub fn extract_answer_keywords(text: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        if STOP_WORDS.contains(&word) || word.chars().count() <= 2 {
            continue;
        }
        if !keywords.iter().any(|k| k == word) {
            keywords.push(word.to_string());
        }
    }
    keywords
}

/// Feedback text keyed to fixed score bands.
pub fn feedback_for(score: f64) -> &'static str {
    if score >= CORRECT_THRESHOLD {
        FEEDBACK_EXCELLENT
    } else if score >= FLEXIBLE_THRESHOLD {
        FEEDBACK_GOOD
    } else if score >= PARTIAL_FEEDBACK_THRESHOLD {
        FEEDBACK_PARTIAL
    } else {
        FEEDBACK_POOR
    }
}

/// Improvement suggestions: missing accepted keywords (first three) and a
/// detail prompt for failing answers, encouragement for passing ones.
pub fn suggestions_for(
    accepted_keywords: &[String],
    user_keywords: &[String],
    score: f64,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if score < FLEXIBLE_THRESHOLD {
        let missing: Vec<&str> = accepted_keywords
            .iter()
            .filter(|keyword| !user_keywords.contains(keyword))
            .map(String::as_str)
            .take(MAX_MISSING_KEYWORDS)
            .collect();
        if !missing.is_empty() {
            suggestions.push(format!("다음 키워드를 포함해보세요: {}", missing.join(", ")));
        }

        if (user_keywords.len() as f64) < accepted_keywords.len() as f64 * DETAIL_RATIO {
            suggestions.push(SUGGESTION_DETAIL.to_string());
        }
    } else {
        suggestions.push(SUGGESTION_ENCOURAGE.to_string());
    }

    suggestions
}

/// Assembles the verdict for a submission given the raw embedding
/// similarity between the accepted meaning and the user's answer.
pub fn build_verdict(
    embedding_similarity: f64,
    accepted_meaning: &str,
    user_meaning: &str,
) -> EvaluationVerdict {
    let accepted_clean = text::normalize(accepted_meaning);
    let user_clean = text::normalize(user_meaning);

    let structure = structural_similarity(&accepted_clean, &user_clean);
    let score = final_score(embedding_similarity, structure);

    let accepted_keywords = extract_answer_keywords(&accepted_clean);
    let user_keywords = extract_answer_keywords(&user_clean);

    EvaluationVerdict {
        similarity_score: score,
        is_correct: is_correct(score),
        feedback: feedback_for(score).to_string(),
        suggestions: suggestions_for(&accepted_keywords, &user_keywords, score),
        evaluation_result: decide(score),
    }
}
