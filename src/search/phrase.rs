//! Word-level phrase matching over a page's token stream.
//!
//! Matching compares words, not raw strings, so a phrase still matches when
//! the extractor broke the text into runs at different places than the
//! phrase's own word boundaries. Comparison is exact and case-sensitive.

use crate::text::{split_words, Token};
use std::ops::Range;

/// A target phrase, pre-split with the same rule used for page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    words: Vec<String>,
}

impl Phrase {
    /// Split `text` into the words to match.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_locate::search::Phrase;
    ///
    /// let phrase = Phrase::new("Gain on sale of non-current assets, etc");
    /// assert_eq!(phrase.len(), 7);
    /// ```
    pub fn new(text: &str) -> Self {
        Self {
            words: split_words(text).map(str::to_owned).collect(),
        }
    }

    /// The phrase words in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the phrase has no words and can never match.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A contiguous run of token indices on one page that equals the phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseWindow {
    /// Index of the first matched token
    pub start_word_index: usize,
    /// One past the last matched token
    pub end_word_index_exclusive: usize,
}

impl PhraseWindow {
    /// Number of words covered.
    pub fn len(&self) -> usize {
        self.end_word_index_exclusive - self.start_word_index
    }

    /// True for a window that covers no words.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The window as a token index range.
    pub fn range(&self) -> Range<usize> {
        self.start_word_index..self.end_word_index_exclusive
    }
}

/// Find the first window of `tokens` whose words equal the phrase words.
///
/// Scans left to right and stops at the first hit; later occurrences on the
/// same page are not reported. An empty phrase never matches.
pub fn find_phrase(tokens: &[Token<'_>], phrase: &Phrase) -> Option<PhraseWindow> {
    let n = phrase.len();
    if n == 0 || tokens.len() < n {
        return None;
    }

    tokens
        .windows(n)
        .position(|window| {
            window
                .iter()
                .zip(phrase.words())
                .all(|(token, word)| token.word == word.as_str())
        })
        .map(|start| PhraseWindow {
            start_word_index: start,
            end_word_index_exclusive: start + n,
        })
}
