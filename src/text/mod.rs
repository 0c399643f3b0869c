//! Text processing for phrase location.

pub mod tokenizer;

pub use tokenizer::{split_words, tokenize_page, Token};
