//! Whole-word counting with regular expressions.
//!
//! Each word is matched independently with a `\b<word>\b` pattern, so the
//! count for one word never affects the count for another. Matching is
//! case-sensitive: callers lowercase the text and supply lowercase words.

use regex::Regex;

use crate::{Count, Tally, Word, WordBenchError};

/// Compiles the whole-word pattern for `word`.
fn pattern(word: &str) -> Result<Regex, WordBenchError> {
    Regex::new(&format!(r"\b{}\b", regex::escape(word))).map_err(|e| WordBenchError::Pattern {
        word: word.to_string(),
        message: e.to_string(),
    })
}

/// Counts non-overlapping whole-word matches of `word` in `text`.
///
/// # Errors
///
/// Returns `WordBenchError::Pattern` if the pattern for `word` fails to compile.
///
/// # Examples
///
/// ```
/// use word_bench::counter::count_word;
///
/// assert_eq!(count_word("a letter came", "letter").unwrap(), 1);
/// assert_eq!(count_word("the newsletter", "letter").unwrap(), 0);
/// ```
pub fn count_word(text: &str, word: &str) -> Result<Count, WordBenchError> {
    Ok(pattern(word)?.find_iter(text).count())
}

/// Counts every word in `words`, keeping the order of `words`.
///
/// # Errors
///
/// Returns `WordBenchError::Pattern` if any pattern fails to compile.
///
/// # Examples
///
/// ```
/// use word_bench::counter::count;
///
/// let words: Vec<Box<str>> = vec!["dear".into(), "virtue".into()];
/// let tally = count("dear reader, dear virtue", &words).unwrap();
/// assert_eq!(tally[0], ("dear".into(), 2));
/// assert_eq!(tally[1], ("virtue".into(), 1));
/// ```
pub fn count(text: &str, words: &[Word]) -> Result<Tally, WordBenchError> {
    words
        .iter()
        .map(|word| Ok((word.clone(), count_word(text, word)?)))
        .collect()
}
