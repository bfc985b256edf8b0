//! Document orchestration
//!
//! Reads a file, runs every paragraph through the spelling pass and then
//! the readability analysis, and writes the corrected paragraphs back out.
//! The analysis functions themselves never touch the file system.

use std::fs;
use std::path::Path;

use crate::corrector::Corrector;
use crate::error::{AnalyzerError, Result};
use crate::readability::TextAnalysis;
use crate::spelling::{Correction, SpellingResult};
use crate::text::{join_paragraphs, split_paragraphs};

/// Outcome for one paragraph.
#[derive(Debug)]
pub struct ParagraphReport {
    /// 1-based position in the document.
    pub number: usize,
    pub original: String,
    pub spelling: SpellingResult,
    /// Analysis of the corrected text; an error here only skips this paragraph.
    pub analysis: Result<TextAnalysis>,
}

#[derive(Debug, Default)]
pub struct DocumentReport {
    pub paragraphs: Vec<ParagraphReport>,
}

impl DocumentReport {
    /// Every correction in the document, in order of occurrence.
    pub fn corrections(&self) -> impl Iterator<Item = &Correction> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.spelling.corrections.iter())
    }

    /// Corrected paragraphs joined with a blank line, in input order.
    pub fn corrected_text(&self) -> String {
        let paragraphs: Vec<&str> = self
            .paragraphs
            .iter()
            .map(|p| p.spelling.text.as_str())
            .collect();
        join_paragraphs(&paragraphs)
    }

    pub fn failed(&self) -> usize {
        self.paragraphs.iter().filter(|p| p.analysis.is_err()).count()
    }
}

/// Reads the whole input, reporting a missing file as [`AnalyzerError::MissingInput`].
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| AnalyzerError::from_read(path, e))
}

/// Writes `text`, creating parent directories as needed.
pub fn write_document<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AnalyzerError::io(parent, e))?;
    }
    fs::write(path, text).map_err(|e| AnalyzerError::io(path, e))?;
    tracing::info!(path = %path.display(), bytes = text.len(), "document written");
    Ok(())
}

pub fn process_paragraph(
    corrector: &Corrector,
    number: usize,
    paragraph: &str,
) -> ParagraphReport {
    let spelling = corrector.fix_spelling(paragraph);
    let analysis = corrector.analyze(&spelling.text);
    if let Err(ref e) = analysis {
        tracing::warn!(paragraph = number, error = %e, "paragraph skipped");
    }
    ParagraphReport {
        number,
        original: paragraph.to_string(),
        spelling,
        analysis,
    }
}

pub fn process_document(corrector: &Corrector, text: &str) -> DocumentReport {
    let paragraphs = split_paragraphs(text);
    tracing::debug!(count = paragraphs.len(), "paragraphs found");

    DocumentReport {
        paragraphs: paragraphs
            .iter()
            .enumerate()
            .map(|(i, p)| process_paragraph(corrector, i + 1, p))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::spelling::PassThroughDictionary;

    fn corrector() -> Corrector {
        Corrector::with_dictionary(&Config::default(), Box::new(PassThroughDictionary))
    }

    #[test]
    fn test_paragraph_order_is_kept() {
        let report = process_document(&corrector(), "First one.\n\nSecond one.\n\nThird one.");
        let numbers: Vec<usize> = report.paragraphs.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(report.corrected_text(), "First one.\n\nSecond one.\n\nThird one.");
    }

    #[test]
    fn test_failed_paragraph_does_not_stop_the_rest() {
        let report = process_document(&corrector(), "Good text here.\n\n...\n\nMore text.");
        assert_eq!(report.paragraphs.len(), 3);
        assert_eq!(report.failed(), 1);
        assert!(report.paragraphs[0].analysis.is_ok());
        assert!(matches!(
            report.paragraphs[1].analysis,
            Err(AnalyzerError::EmptyText)
        ));
        assert!(report.paragraphs[2].analysis.is_ok());
    }

    #[test]
    fn test_read_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(dir.path().join("raw-data.txt")).unwrap_err();
        assert!(matches!(err, AnalyzerError::MissingInput { .. }));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out").join("nested").join("fixed.txt");
        write_document(&out, "A.\n\nB.").unwrap();
        assert_eq!(read_document(&out).unwrap(), "A.\n\nB.");
    }
}
