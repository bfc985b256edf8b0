//! Main engine: spelling pass and readability analysis over one dictionary.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::dictionary::{DictionaryLoader, Trie};
use crate::document::{self, DocumentReport};
use crate::error::{AnalyzerError, Result};
use crate::readability::{analyze_text, TextAnalysis};
use crate::spelling::{
    fix_spelling, Dictionary, PassThroughDictionary, SpellingResult, TechnicalTerms,
    TrieDictionary,
};
use crate::text::{stopwords, Tokenizer, UnicodeTokenizer};

pub struct Corrector {
    dictionary: Box<dyn Dictionary>,
    tokenizer: Box<dyn Tokenizer>,
    technical_terms: TechnicalTerms,
    top_words: usize,
    custom_dict_path: PathBuf,
}

impl Corrector {
    /// Builds a corrector from the word lists under `config.data_dir`.
    ///
    /// A missing or unreadable main word list does not fail: the spelling
    /// pass then leaves every token unchanged. An explicit `custom_dict`
    /// that cannot be read is an error.
    pub fn new(config: &Config) -> Result<Self> {
        let dictionary: Box<dyn Dictionary> = match Self::load_word_list(config)? {
            Some(trie) => {
                tracing::info!(words = trie.len(), "dictionary loaded");
                Box::new(TrieDictionary::new(trie).with_max_distance(config.max_distance))
            }
            None => Box::new(PassThroughDictionary),
        };
        Ok(Self::with_dictionary(config, dictionary))
    }

    /// Builds a corrector around a caller-supplied dictionary.
    ///
    /// The technical terms of `config` are added to the dictionary.
    pub fn with_dictionary(config: &Config, mut dictionary: Box<dyn Dictionary>) -> Self {
        let terms: Vec<&str> = config.technical_terms.iter().collect();
        dictionary.add_terms(&terms);

        Self {
            dictionary,
            tokenizer: Box::new(UnicodeTokenizer::new()),
            technical_terms: config.technical_terms.clone(),
            top_words: config.top_words,
            custom_dict_path: config.custom_words_path(),
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    fn load_word_list(config: &Config) -> Result<Option<Trie>> {
        let words_path = config.words_path();
        let mut trie = match DictionaryLoader::load_from_file(&words_path) {
            Ok(trie) => trie,
            Err(e) => {
                tracing::warn!(
                    path = %words_path.display(),
                    error = %e,
                    "word list unavailable, spelling pass disabled"
                );
                return Ok(None);
            }
        };

        let custom_path = config.custom_words_path();
        if custom_path.exists() {
            if let Err(e) = DictionaryLoader::append_from_file(&mut trie, &custom_path) {
                tracing::warn!(error = %e, "could not load custom dictionary");
            }
        }

        if let Some(ref extra) = config.custom_dict {
            DictionaryLoader::append_from_file(&mut trie, extra)?;
        }

        Ok(Some(trie))
    }

    pub fn fix_spelling(&self, paragraph: &str) -> SpellingResult {
        fix_spelling(
            paragraph,
            self.tokenizer.as_ref(),
            self.dictionary.as_ref(),
            &self.technical_terms,
        )
    }

    pub fn analyze(&self, text: &str) -> Result<TextAnalysis> {
        analyze_text(
            text,
            self.tokenizer.as_ref(),
            stopwords::english(),
            self.top_words,
        )
    }

    /// Corrects and analyzes every paragraph of `text`, in order.
    pub fn process_document(&self, text: &str) -> DocumentReport {
        document::process_document(self, text)
    }

    pub fn is_word_known(&self, word: &str) -> bool {
        self.dictionary.is_known(&word.to_lowercase())
    }

    /// Appends a word to the user's custom word list and makes it known now.
    pub fn add_custom_word(&mut self, word: &str) -> Result<()> {
        let word = word.trim();
        if word.is_empty() || word.contains('|') {
            return Err(AnalyzerError::Dictionary(format!(
                "not a valid word: {:?}",
                word
            )));
        }

        if let Some(parent) = self.custom_dict_path.parent() {
            fs::create_dir_all(parent).map_err(|e| AnalyzerError::io(parent, e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.custom_dict_path)
            .map_err(|e| AnalyzerError::io(&self.custom_dict_path, e))?;
        writeln!(file, "{}", word).map_err(|e| AnalyzerError::io(&self.custom_dict_path, e))?;

        self.dictionary.add_terms(&[word]);
        tracing::info!(word, path = %self.custom_dict_path.display(), "custom word added");
        Ok(())
    }
}
