//! Text normalization shared by the comparison and submit-answer paths.

/// Lowercases, strips characters outside word characters / whitespace /
/// basic sentence punctuation, and collapses whitespace runs.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut cleaned = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        if ch.is_alphanumeric()
            || ch == '_'
            || ch.is_whitespace()
            || matches!(ch, '.' | ',' | ';' | ':' | '!' | '?')
        {
            cleaned.push(ch);
        }
    }

    let mut out = String::with_capacity(cleaned.len());
    let mut in_space = false;
    for ch in cleaned.trim().chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// Splits a comma-delimited word list, trimming each token and dropping
/// empty ones. Order is preserved.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_and_collapses() {
        assert_eq!(normalize("  Hello,   WORLD!  "), "hello, world!");
        assert_eq!(normalize("a*b(c)d"), "abcd");
        assert_eq!(normalize("달리다\t빨리   뛰다"), "달리다 빨리 뛰다");
    }

    #[test]
    fn test_normalize_keeps_sentence_punctuation() {
        assert_eq!(normalize("to run; quickly?"), "to run; quickly?");
    }

    #[test]
    fn test_split_list_basic() {
        assert_eq!(split_list("사랑, 애정 ,연애"), vec!["사랑", "애정", "연애"]);
    }

    #[test]
    fn test_split_list_drops_empty_tokens() {
        assert_eq!(split_list(" , a,, b ,"), vec!["a", "b"]);
        assert!(split_list("").is_empty());
        assert!(split_list("  ,  ").is_empty());
    }
}
