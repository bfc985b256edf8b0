//! Console report formatting.

use std::io::{self, Write};
use std::path::Path;

use crate::document::{write_document, DocumentReport, ParagraphReport};
use crate::error::Result;
use crate::readability::TextAnalysis;
use crate::spelling::Correction;

pub fn write_paragraph<W: Write>(out: &mut W, paragraph: &ParagraphReport) -> io::Result<()> {
    writeln!(out, "\n--- Paragraph {} ---", paragraph.number)?;
    writeln!(out, "Original: {}", paragraph.original)?;
    writeln!(out, "Corrected: {}", paragraph.spelling.text)?;

    if !paragraph.spelling.corrections.is_empty() {
        writeln!(out, "\nSpelling corrections:")?;
        for c in &paragraph.spelling.corrections {
            writeln!(out, "  {} -> {}", c.original, c.corrected)?;
        }
    }

    match &paragraph.analysis {
        Ok(analysis) => write_analysis(out, analysis, paragraph.number),
        Err(e) => writeln!(out, "\nParagraph {} skipped: {}", paragraph.number, e),
    }
}

pub fn write_analysis<W: Write>(
    out: &mut W,
    analysis: &TextAnalysis,
    number: usize,
) -> io::Result<()> {
    let fog = &analysis.readability;

    writeln!(out, "\n=== Paragraph {} Analysis ===", number)?;
    writeln!(out, "Number of sentences: {}", analysis.num_sentences)?;
    writeln!(out, "Number of words: {}", analysis.num_words)?;
    writeln!(out, "Number of unique words: {}", analysis.num_unique_words)?;
    writeln!(
        out,
        "Average words per sentence: {:.2}",
        analysis.avg_words_per_sentence
    )?;

    writeln!(out, "\nReadability Analysis:")?;
    writeln!(out, "Gunning Fog Index: {:.1}", fog.gunning_fog_index)?;
    writeln!(
        out,
        "  - This text requires approximately {} years of formal education to understand",
        fog.years_of_education()
    )?;
    writeln!(
        out,
        "  - Average sentence length: {:.1} words",
        fog.avg_sentence_length
    )?;
    writeln!(
        out,
        "  - Percentage of complex words: {:.1}%",
        fog.percent_complex_words
    )?;
    writeln!(out, "  - Number of complex words: {}", fog.complex_word_count)?;

    writeln!(out, "\nMost common words:")?;
    for (word, count) in &analysis.most_common_words {
        writeln!(out, "  {}: {}", word, count)?;
    }
    Ok(())
}

pub fn write_summary<'a, W: Write>(
    out: &mut W,
    corrections: impl IntoIterator<Item = &'a Correction>,
) -> io::Result<()> {
    let mut corrections = corrections.into_iter().peekable();
    if corrections.peek().is_none() {
        return Ok(());
    }
    writeln!(out, "\n=== Summary of All Corrections ===")?;
    for c in corrections {
        writeln!(out, "{} -> {}", c.original, c.corrected)?;
    }
    Ok(())
}

/// Prints the paragraph count and every paragraph report.
pub fn write_report<W: Write>(out: &mut W, report: &DocumentReport) -> io::Result<()> {
    writeln!(
        out,
        "\nFound {} paragraphs in the text file.",
        report.paragraphs.len()
    )?;
    for paragraph in &report.paragraphs {
        write_paragraph(out, paragraph)?;
    }
    Ok(())
}

/// Prints the report, saves the corrected text to `output` if given, then
/// prints the corrections summary.
///
/// A failed save does not stop the summary; its error is returned last.
pub fn write_and_save<W: Write>(
    out: &mut W,
    report: &DocumentReport,
    output: Option<&Path>,
) -> Result<()> {
    write_report(out, report)?;

    let mut save_error = None;
    if let Some(path) = output {
        match write_document(path, &report.corrected_text()) {
            Ok(()) => writeln!(out, "\nCorrected text saved to {}", path.display())?,
            Err(e) => save_error = Some(e),
        }
    }

    write_summary(out, report.corrections())?;
    out.flush()?;

    match save_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
