//! Word tokenization of a page's fragment stream.
//!
//! Fragments are split on the ASCII space only, so punctuation stays attached
//! to its word (`"assets,"` is one token). Each token keeps the index of the
//! fragment it came from, which is how a match is mapped back to geometry.

use crate::content::Fragment;

/// One space-delimited word with a back-reference to its fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The word, borrowed from the fragment text
    pub word: &'a str,
    /// Index of the source fragment within the page
    pub fragment_index: usize,
    /// 1-based page number
    pub page_number: usize,
}

/// Split text into words on single spaces.
///
/// Leading and trailing spaces are dropped first so that they cannot produce
/// zero-length words; a text that is empty after that yields no words. Empty
/// words between two consecutive inner spaces are kept.
///
/// # Examples
///
/// ```
/// use pdf_locate::text::split_words;
///
/// let words: Vec<&str> = split_words(" non-current assets, ").collect();
/// assert_eq!(words, vec!["non-current", "assets,"]);
/// assert_eq!(split_words("   ").count(), 0);
/// ```
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    let trimmed = text.trim_matches(' ');
    let mut words = trimmed.split(' ');
    if trimmed.is_empty() {
        // `"".split(' ')` yields one empty word
        words.next();
    }
    words
}

/// Produce the ordered token stream for one page.
pub fn tokenize_page(fragments: &[Fragment], page_number: usize) -> Vec<Token<'_>> {
    fragments
        .iter()
        .enumerate()
        .flat_map(|(fragment_index, fragment)| {
            split_words(&fragment.text).map(move |word| Token {
                word,
                fragment_index,
                page_number,
            })
        })
        .collect()
}
