//! Word-list loading
//!
//! Format: one entry per line, `word` or `word|frequency`. Blank lines and
//! lines starting with `#` are ignored.

use std::fs;
use std::path::Path;

use crate::error::{AnalyzerError, Result};

use super::trie::{Trie, WordInfo};

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Loads a word list file into a new trie.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Trie> {
        let mut trie = Trie::new();
        Self::append_from_file(&mut trie, path)?;
        Ok(trie)
    }

    /// Adds the words of a file to an existing trie, returning how many lines were read.
    pub fn append_from_file<P: AsRef<Path>>(trie: &mut Trie, path: P) -> Result<usize> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| AnalyzerError::io(path, e))?;
        let count = Self::append_from_str(trie, &content).map_err(|e| match e {
            AnalyzerError::Dictionary(msg) => {
                AnalyzerError::Dictionary(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        tracing::debug!(path = %path.display(), count, "word list loaded");
        Ok(count)
    }

    pub fn append_from_str(trie: &mut Trie, content: &str) -> Result<usize> {
        let mut count = 0;

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (word, info) = Self::parse_line(line).ok_or_else(|| {
                AnalyzerError::Dictionary(format!(
                    "invalid entry on line {}: {:?}",
                    line_num + 1,
                    line
                ))
            })?;
            trie.insert(word, info);
            count += 1;
        }

        Ok(count)
    }

    fn parse_line(line: &str) -> Option<(&str, WordInfo)> {
        let mut parts = line.splitn(2, '|');
        let word = parts.next()?.trim();
        if word.is_empty() {
            return None;
        }
        let info = match parts.next().map(str::trim) {
            None | Some("") => WordInfo::default(),
            Some(freq) => WordInfo {
                frequency: freq.parse().ok()?,
            },
        };
        Some((word, info))
    }
}
