//! Run configuration

use std::path::PathBuf;

use crate::spelling::TechnicalTerms;

/// Language directory under the data dir. Only English is supported.
pub const LANGUAGE: &str = "en";

#[derive(Debug, Clone)]
pub struct Config {
    /// Root for word lists and default input/output files (default: "data")
    pub data_dir: PathBuf,
    /// Extra word list loaded after the main one
    pub custom_dict: Option<PathBuf>,
    /// Terms the spelling pass must never change
    pub technical_terms: TechnicalTerms,
    /// Largest edit distance considered for a correction (default: 2)
    pub max_distance: usize,
    /// How many frequent words the report lists (default: 5)
    pub top_words: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            custom_dict: None,
            technical_terms: TechnicalTerms::default(),
            max_distance: 2,
            top_words: 5,
        }
    }
}

impl Config {
    pub fn words_path(&self) -> PathBuf {
        self.data_dir.join(LANGUAGE).join("words.txt")
    }

    /// Where `add-word` appends user words.
    pub fn custom_words_path(&self) -> PathBuf {
        self.data_dir.join(LANGUAGE).join("custom.txt")
    }

    pub fn default_input(&self) -> PathBuf {
        self.data_dir.join("in").join("raw-data.txt")
    }

    pub fn default_corrected_output(&self) -> PathBuf {
        self.data_dir.join("out").join("corrected-spelling-data.txt")
    }

    pub fn default_technology_output(&self) -> PathBuf {
        self.data_dir.join("out").join("technology.txt")
    }

    pub fn default_medical_output(&self) -> PathBuf {
        self.data_dir.join("out").join("medical.txt")
    }
}
