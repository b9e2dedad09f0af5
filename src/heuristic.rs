use thiserror::Error;

/// Why a reply could not be turned into a guess automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("no number-like token in reply")]
    NoCandidate,
    #[error("{0} number-like tokens in reply")]
    MultipleCandidates(usize),
    #[error("could not read {0:?} as an integer")]
    Unparseable(String),
}

/// Return true if a word looks like it might be a number: only digits,
/// commas and periods, with at least one digit.
pub fn is_numbery(word: &str) -> bool {
    let mut found_digit = false;
    for c in word.chars() {
        match c {
            '0'..='9' => found_digit = true,
            ',' | '.' => {}
            _ => return false,
        }
    }
    found_digit
}

/// Split reply text into words, dropping `!` and `?`, and keep the numbery ones.
pub fn numbery_tokens(text: &str) -> Vec<String> {
    let stripped: String = text.chars().filter(|c| !matches!(c, '!' | '?')).collect();
    stripped
        .split_whitespace()
        .filter(|word| is_numbery(word))
        .map(str::to_string)
        .collect()
}

/// Reduce a numbery token to plain digits.
///
/// With both separators present, whichever appears later is the decimal
/// point: it and everything after it are dropped, and the other separator is
/// removed as a thousands marker. A lone period is a decimal point; lone
/// commas are thousands markers.
pub fn normalize(token: &str) -> String {
    match (token.find(','), token.find('.')) {
        (Some(comma), Some(period)) if period > comma => token[..period].replace(',', ""),
        (Some(comma), Some(_)) => token[..comma].replace('.', ""),
        (None, Some(period)) => token[..period].to_string(),
        (Some(_), None) => token.replace(',', ""),
        (None, None) => token.to_string(),
    }
}

/// Try to pull a single integer guess out of reply text.
pub fn parse_guess(text: &str) -> Result<i64, ParseFailure> {
    let tokens = numbery_tokens(text);
    match tokens.as_slice() {
        [] => Err(ParseFailure::NoCandidate),
        [token] => normalize(token)
            .parse::<i64>()
            .map_err(|_| ParseFailure::Unparseable(token.clone())),
        many => Err(ParseFailure::MultipleCandidates(many.len())),
    }
}

pub fn extract_guess(text: &str) -> Option<i64> {
    parse_guess(text).ok()
}
