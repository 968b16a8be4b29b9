//! The vocabulary counted by the word-count programs.

use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};

use crate::{Word, WordBenchError};

/// An ordered list of lowercase words to count.
///
/// Order only determines how results are printed and reported.
///
/// # Examples
///
/// ```
/// use word_bench::WordList;
///
/// let words = WordList::default();
/// assert_eq!(words.len(), 6);
/// assert_eq!(words.as_slice()[0].as_ref(), "clarissa");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordList(Box<[Word]>);

impl WordList {
    /// The default vocabulary.
    pub const DEFAULT: [&'static str; 6] =
        ["clarissa", "lovelace", "letter", "dear", "miss", "virtue"];

    /// Creates a word list, rejecting words that are empty or not lowercase.
    ///
    /// # Errors
    ///
    /// Returns `WordBenchError::Config` if a word is empty or contains uppercase characters.
    pub fn new<I, S>(words: I) -> Result<Self, WordBenchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| {
                let word = word.as_ref();
                if word.is_empty() {
                    return Err(WordBenchError::Config("empty word in word list".to_string()));
                }
                if word.chars().any(char::is_uppercase) {
                    return Err(WordBenchError::Config(format!(
                        "word {word:?} must be lowercase"
                    )));
                }
                Ok(Word::from(word))
            })
            .collect::<Result<Box<[_]>, _>>()?;

        Ok(Self(words))
    }

    /// Gets the words as a slice.
    pub fn as_slice(&self) -> &[Word] {
        &self.0
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no words.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the words in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Word> {
        self.0.iter()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self(Self::DEFAULT.iter().map(|&word| Word::from(word)).collect())
    }
}

impl Display for WordList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

impl AsRef<[Word]> for WordList {
    fn as_ref(&self) -> &[Word] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = core::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
