//! Edit distance used to rank spelling suggestions

/// Levenshtein distance where swapping two adjacent characters is one edit.
///
/// Optimal-string-alignment variant: no substring is edited twice, so
/// three rolling rows are enough.
pub fn damerau_levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut two_back: Vec<usize> = vec![0; b.len() + 1];
    let mut one_back: Vec<usize> = (0..=b.len()).collect();
    let mut current: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        current[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (one_back[j] + 1)
                .min(current[j - 1] + 1)
                .min(one_back[j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(two_back[j - 2] + 1);
            }
            current[j] = best;
        }
        std::mem::swap(&mut two_back, &mut one_back);
        std::mem::swap(&mut one_back, &mut current);
    }

    one_back[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(damerau_levenshtein_distance("fog", "fog"), 0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(damerau_levenshtein_distance("", ""), 0);
        assert_eq!(damerau_levenshtein_distance("abc", ""), 3);
        assert_eq!(damerau_levenshtein_distance("", "abc"), 3);
    }

    #[test]
    fn test_single_edits() {
        assert_eq!(damerau_levenshtein_distance("cat", "car"), 1);
        assert_eq!(damerau_levenshtein_distance("qick", "quick"), 1);
        assert_eq!(damerau_levenshtein_distance("quick", "qick"), 1);
    }

    #[test]
    fn test_transposition() {
        assert_eq!(damerau_levenshtein_distance("teh", "the"), 1);
        assert_eq!(damerau_levenshtein_distance("recieve", "receive"), 1);
    }

    #[test]
    fn test_multiple_edits() {
        assert_eq!(damerau_levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(damerau_levenshtein_distance("brwon", "brown"), 1);
    }
}
