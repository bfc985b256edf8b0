//! Sentence and word tokenization

use unicode_segmentation::UnicodeSegmentation;

/// Splits raw text into sentences and word-level tokens.
///
/// Word tokens include punctuation marks and numbers as separate tokens;
/// whitespace is never returned.
pub trait Tokenizer {
    fn tokenize_sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;

    fn tokenize_words<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Tokenizer based on Unicode text segmentation (UAX #29).
///
/// Contractions such as `don't` stay a single token, decimal numbers such
/// as `3.5` stay together, and each punctuation mark is its own token.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl UnicodeTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for UnicodeTokenizer {
    fn tokenize_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn tokenize_words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_word_bounds()
            .filter(|t| !t.trim().is_empty())
            .collect()
    }
}

/// True when every character of the token is a punctuation mark.
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_punctuation_char)
}

fn is_punctuation_char(ch: char) -> bool {
    ch.is_ascii_punctuation()
        || matches!(
            ch,
            '¡' | '¿' | '—' | '–' | '«' | '»' | '…' | '‘' | '’' | '“' | '”' | '•' | '·'
        )
}

/// True for tokens made only of decimal digits.
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_numeric())
}

/// True when the token has at least one cased letter and no lower-case ones.
pub fn is_all_uppercase(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}
