//! Vowel-group syllable heuristic and complex-word counting

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Suffixes that keep an otherwise long word out of the complex count.
const INFLECTIONAL_SUFFIXES: &[&str] = &["es", "ed", "ing"];

fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// Counts syllables by counting vowel-group starts.
///
/// A trailing `e` always removes one syllable before the result is clamped
/// to 1, so `the` and `eye` both count as one. Returns 0 for an empty word.
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let Some(&first) = chars.first() else {
        return 0;
    };

    let mut count: isize = 0;
    if is_vowel(first) {
        count += 1;
    }
    for pair in chars.windows(2) {
        if is_vowel(pair[1]) && !is_vowel(pair[0]) {
            count += 1;
        }
    }
    if chars.last() == Some(&'e') {
        count -= 1;
    }

    count.max(1) as usize
}

/// Counts words of three or more syllables, skipping `-es`, `-ed` and `-ing` forms.
///
/// The suffix check is on the raw word, so callers lower-case beforehand.
pub fn count_complex_words<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| count_syllables(w) >= 3)
        .filter(|w| !INFLECTIONAL_SUFFIXES.iter().any(|s| w.ends_with(s)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_table() {
        let table = [
            ("cake", 1),
            ("the", 1),
            ("eye", 1),
            ("are", 1),
            ("syllable", 2),
            ("running", 2),
            ("yellow", 2),
            ("rhythm", 1),
            ("queue", 1),
            ("algorithm", 3),
            ("beautiful", 3),
            ("education", 4),
            ("technology", 4),
            ("readability", 5),
        ];
        for (word, expected) in table {
            assert_eq!(count_syllables(word), expected, "syllables of {word}");
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(count_syllables("Technology"), count_syllables("technology"));
        assert_eq!(count_syllables("AI"), 1);
    }

    #[test]
    fn test_never_below_one() {
        for word in ["e", "b", "42", "ye", "ee", "xyz", "-"] {
            assert!(count_syllables(word) >= 1, "{word}");
        }
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(count_syllables(""), 0);
    }

    #[test]
    fn test_complex_words_skip_inflections() {
        assert_eq!(count_complex_words(&["running"]), 0);
        // four syllables but ends in -ed
        assert_eq!(count_complex_words(&["complicated"]), 0);
        assert_eq!(count_complex_words(&["communicating", "educates"]), 0);
        assert_eq!(count_complex_words(&["algorithm", "cat", "education"]), 2);
    }

    #[test]
    fn test_complex_words_empty() {
        let none: [&str; 0] = [];
        assert_eq!(count_complex_words(&none), 0);
    }
}
