//! Technical-term allowlist.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{AnalyzerError, Result};

const DEFAULT_TERMS: &[&str] = &[
    "NLP",
    "AI",
    "pangram",
    "chatbots",
    "analytics",
    "algorithm",
    "algorithms",
];

/// Domain terms the spelling pass never touches.
///
/// Membership is exact: `NLP` is protected, `nlp` is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicalTerms {
    terms: BTreeSet<String>,
}

impl Default for TechnicalTerms {
    fn default() -> Self {
        DEFAULT_TERMS.iter().copied().collect()
    }
}

impl TechnicalTerms {
    pub fn empty() -> Self {
        Self {
            terms: BTreeSet::new(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.terms.contains(token)
    }

    /// Adds one term per line from a file, skipping blanks and `#` comments.
    pub fn extend_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| AnalyzerError::io(path, e))?;
        let before = self.terms.len();
        self.terms.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .map(str::to_string),
        );
        Ok(self.terms.len() - before)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TechnicalTerms {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let terms = TechnicalTerms::default();
        assert!(terms.contains("NLP"));
        assert!(terms.contains("algorithm"));
        assert!(!terms.contains("nlp"));
        assert_eq!(terms.len(), 7);
    }

    #[test]
    fn test_extend_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# extra terms").unwrap();
        writeln!(file, "LLM").unwrap();
        writeln!(file, "  tokenizer  ").unwrap();
        writeln!(file, "NLP").unwrap();

        let mut terms = TechnicalTerms::default();
        let added = terms.extend_from_file(file.path()).unwrap();
        assert_eq!(added, 2);
        assert!(terms.contains("LLM"));
        assert!(terms.contains("tokenizer"));
    }
}
