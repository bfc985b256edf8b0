//! Paragraph spelling pass.
//!
//! Each token is either exempt (punctuation, numbers, upper-case words,
//! technical terms), left alone (contractions, known words) or replaced by
//! the dictionary's best correction. The text is then rebuilt with a single
//! space between tokens and none before punctuation, so original spacing is
//! not preserved exactly: `year-old` comes back as `year- old`.

use crate::text::{is_all_uppercase, is_numeric, is_punctuation, Tokenizer};

use super::{Dictionary, TechnicalTerms};

/// A token the pass replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub original: String,
    pub corrected: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpellingResult {
    pub text: String,
    /// Replacements in order of occurrence.
    pub corrections: Vec<Correction>,
}

fn is_exempt(token: &str, terms: &TechnicalTerms) -> bool {
    is_punctuation(token) || is_numeric(token) || is_all_uppercase(token) || terms.contains(token)
}

fn is_contraction(token: &str) -> bool {
    token.contains('\'') || token.contains('\u{2019}')
}

pub fn fix_spelling(
    text: &str,
    tokenizer: &dyn Tokenizer,
    dictionary: &dyn Dictionary,
    terms: &TechnicalTerms,
) -> SpellingResult {
    let mut corrections = Vec::new();
    let mut fixed = String::with_capacity(text.len());

    for (i, token) in tokenizer.tokenize_words(text).into_iter().enumerate() {
        let word = if is_exempt(token, terms)
            || is_contraction(token)
            || dictionary.is_known(&token.to_lowercase())
        {
            token.to_string()
        } else {
            match dictionary.correct(token) {
                Some(correction) if correction != token => {
                    tracing::debug!(
                        original = token,
                        corrected = %correction,
                        "spelling corrected"
                    );
                    corrections.push(Correction {
                        original: token.to_string(),
                        corrected: correction.clone(),
                    });
                    correction
                }
                _ => token.to_string(),
            }
        };

        if i > 0 && !is_punctuation(&word) {
            fixed.push(' ');
        }
        fixed.push_str(&word);
    }

    SpellingResult {
        text: fixed,
        corrections,
    }
}
