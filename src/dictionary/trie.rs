//! Trie of known words with bounded edit-distance search

use std::collections::HashMap;

/// Data attached to a known word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordInfo {
    /// Relative corpus frequency; higher wins when ranking corrections.
    pub frequency: u32,
}

impl Default for WordInfo {
    fn default() -> Self {
        Self { frequency: 1 }
    }
}

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    word_info: Option<WordInfo>,
}

/// Lower-case word store.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word. An existing entry is only replaced by a higher frequency.
    pub fn insert(&mut self, word: &str, info: WordInfo) {
        let word_lower = word.to_lowercase();
        let mut node = &mut self.root;

        for ch in word_lower.chars() {
            node = node.children.entry(ch).or_default();
        }

        match node.word_info {
            None => {
                self.word_count += 1;
                node.word_info = Some(info);
            }
            Some(existing) if info.frequency > existing.frequency => {
                node.word_info = Some(info);
            }
            Some(_) => {}
        }
    }

    pub fn insert_word(&mut self, word: &str) {
        self.insert(word, WordInfo::default());
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    pub fn get(&self, word: &str) -> Option<&WordInfo> {
        let word_lower = word.to_lowercase();
        let mut node = &self.root;

        for ch in word_lower.chars() {
            node = node.children.get(&ch)?;
        }

        node.word_info.as_ref()
    }

    /// Finds every word within `max_distance` Levenshtein edits of `word`.
    ///
    /// Walks the trie carrying one DP row per node and prunes subtrees whose
    /// row minimum already exceeds the bound.
    pub fn search_within_distance(
        &self,
        word: &str,
        max_distance: usize,
    ) -> Vec<(String, WordInfo, usize)> {
        let target: Vec<char> = word.to_lowercase().chars().collect();
        let first_row: Vec<usize> = (0..=target.len()).collect();
        let mut results = Vec::new();
        let mut prefix = String::new();

        for (&ch, child) in &self.root.children {
            prefix.push(ch);
            Self::search_node(
                child,
                ch,
                &target,
                &first_row,
                max_distance,
                &mut prefix,
                &mut results,
            );
            prefix.pop();
        }

        results
    }

    fn search_node(
        node: &TrieNode,
        ch: char,
        target: &[char],
        prev_row: &[usize],
        max_distance: usize,
        prefix: &mut String,
        results: &mut Vec<(String, WordInfo, usize)>,
    ) {
        let mut row = Vec::with_capacity(prev_row.len());
        row.push(prev_row[0] + 1);
        for j in 1..prev_row.len() {
            let cost = if target[j - 1] == ch { 0 } else { 1 };
            let value = (prev_row[j] + 1)
                .min(row[j - 1] + 1)
                .min(prev_row[j - 1] + cost);
            row.push(value);
        }

        let distance = row[row.len() - 1];
        if let Some(info) = node.word_info {
            if distance <= max_distance {
                results.push((prefix.clone(), info, distance));
            }
        }

        if row.iter().min().is_some_and(|&m| m <= max_distance) {
            for (&next, child) in &node.children {
                prefix.push(next);
                Self::search_node(child, next, target, &row, max_distance, prefix, results);
                prefix.pop();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
