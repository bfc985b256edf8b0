//! Text segmentation
//!
//! Paragraph splitting, sentence and word tokenization, stopwords.

pub mod stopwords;
pub mod tokenizer;

pub use tokenizer::{is_all_uppercase, is_numeric, is_punctuation, Tokenizer, UnicodeTokenizer};

/// Separator between paragraphs in input and output files.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Splits text on blank lines, trimming each paragraph and dropping empty ones.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split(PARAGRAPH_SEPARATOR)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`split_paragraphs`] for already-trimmed paragraphs.
pub fn join_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> String {
    paragraphs
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_trims_and_skips_empty() {
        let text = "  First para.\nstill first.\n\n\n\nSecond.  \n\n   \n\nThird.";
        assert_eq!(
            split_paragraphs(text),
            vec!["First para.\nstill first.", "Second.", "Third."]
        );
    }

    #[test]
    fn test_split_join_round_trip() {
        let paragraphs = vec!["One.".to_string(), "Two two.".to_string(), "Three.".to_string()];
        let joined = join_paragraphs(&paragraphs);
        assert_eq!(joined, "One.\n\nTwo two.\n\nThree.");
        assert_eq!(split_paragraphs(&joined), paragraphs);
    }

    #[test]
    fn test_split_empty_text() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("\n\n\n").is_empty());
    }
}
