/// Minimum token length kept by the tokenizer.
///
/// Single-character tokens carry almost no signal for job/freelancer
/// matching and are dropped, matching the reference vectorizer's default
/// token pattern.
const MIN_TOKEN_LEN: usize = 2;

/// Tokenize free-form profile text into lowercase terms.
///
/// Tokens are maximal alphanumeric runs. No stopword removal, no stemming,
/// unigrams only. This tokenization is part of the scoring contract:
/// changing it changes every score the service produces.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}
