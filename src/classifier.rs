//! Keyword classifier sorting paragraphs into technology and medical buckets.
//!
//! Medical content is checked first: a paragraph that reads like a case
//! presentation is medical even when it also mentions technology.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

const TECHNOLOGY_KEYWORDS: &[&str] = &[
    "technology",
    "computer",
    "artificial intelligence",
    "ai",
    "machine learning",
    "nlp",
    "algorithm",
    "digital",
    "chatbot",
    "analytics",
    "data",
    "recommendation",
    "facial recognition",
    "autonomous",
    "smart",
];

const MEDICAL_KEYWORDS: &[&str] = &[
    "patient",
    "diagnosis",
    "symptoms",
    "pain",
    "medical",
    "clinical",
    "treatment",
    "disease",
    "hospital",
    "doctor",
    "fever",
    "bleeding",
    "presents with",
    "complains of",
    "injury",
    "swelling",
    "fatigue",
    "nausea",
    "vomiting",
    "headache",
    "chest",
    "heart",
    "breathing",
    "blood",
    "medication",
    "surgery",
    "examination",
    "condition",
    "chronic",
    "acute",
    "prescription",
    "therapy",
    "healthcare",
];

/// Patterns typical of a clinical case write-up.
const MEDICAL_CASE_PATTERNS: &[&str] = &[
    r"\b\d+[-\s]year[-\s]old\b",
    r"\b(presents?|complains?|reports?|arrives?)\b.*\b(with|of)\b",
    r"\bpatient\b",
    r"\bdiagnosis\b",
    r"\b(symptoms?|signs?)\b",
    r"\b(pain|ache|discomfort)\b",
    r"\b(treatment|medication)\b",
    r"\b(medical|clinical)\b",
    r"\b(doctor|physician|nurse)\b",
    r"\b(hospital|clinic|emergency)\b",
];

/// Keywords up to this length must be whole words (optionally plural).
const SHORT_KEYWORD_LEN: usize = 3;

fn alternation(keywords: &[&str]) -> String {
    keywords
        .iter()
        .map(|k| regex::escape(k).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|")
}

/// Builds a case-insensitive matcher anchored at the start of a word.
///
/// Longer keywords also match inflected and compound forms (`chatbots`,
/// `smartphones`, `diseases`). Short ones like `ai` only match as a word,
/// so `said` and `air` do not count.
fn keyword_regex(keywords: &[&str]) -> Regex {
    let (short, long): (Vec<&str>, Vec<&str>) = keywords
        .iter()
        .partition(|k| k.chars().count() <= SHORT_KEYWORD_LEN);

    let mut branches = Vec::new();
    if !short.is_empty() {
        branches.push(format!(r"(?:{})s?\b", alternation(&short)));
    }
    if !long.is_empty() {
        branches.push(format!("(?:{})", alternation(&long)));
    }
    Regex::new(&format!(r"(?i)\b(?:{})", branches.join("|")))
        .expect("keyword list is a valid regex")
}

static TECHNOLOGY_RE: Lazy<Regex> = Lazy::new(|| keyword_regex(TECHNOLOGY_KEYWORDS));
static MEDICAL_RE: Lazy<Regex> = Lazy::new(|| keyword_regex(MEDICAL_KEYWORDS));
static MEDICAL_CASE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    MEDICAL_CASE_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)).expect("medical case pattern is valid"))
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Technology,
    Medical,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Technology => write!(f, "technology"),
            Category::Medical => write!(f, "medical"),
        }
    }
}

/// Paragraphs per bucket, each in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub technology: Vec<String>,
    pub medical: Vec<String>,
    /// Paragraphs that matched neither bucket.
    pub unclassified: usize,
}

pub fn is_medical_case(text: &str) -> bool {
    MEDICAL_CASE_RES.iter().any(|re| re.is_match(text))
}

pub fn is_medical_related(paragraph: &str) -> bool {
    is_medical_case(paragraph) || MEDICAL_RE.is_match(paragraph)
}

pub fn is_technology_related(paragraph: &str) -> bool {
    !is_medical_case(paragraph) && TECHNOLOGY_RE.is_match(paragraph)
}

pub fn classify_paragraph(paragraph: &str) -> Option<Category> {
    if is_medical_related(paragraph) {
        Some(Category::Medical)
    } else if is_technology_related(paragraph) {
        Some(Category::Technology)
    } else {
        None
    }
}

pub fn classify_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> Classification {
    let mut classification = Classification::default();
    for paragraph in paragraphs.iter().map(AsRef::as_ref) {
        match classify_paragraph(paragraph) {
            Some(Category::Medical) => classification.medical.push(paragraph.to_string()),
            Some(Category::Technology) => classification.technology.push(paragraph.to_string()),
            None => classification.unclassified += 1,
        }
    }
    tracing::debug!(
        technology = classification.technology.len(),
        medical = classification.medical.len(),
        unclassified = classification.unclassified,
        "paragraphs classified"
    );
    classification
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_presentation_is_medical() {
        assert!(is_medical_case(
            "A 45-year-old man presents with chest pain radiating to the left arm."
        ));
        assert!(is_medical_case("The 7 year old arrived at the ER."));
        assert_eq!(
            classify_paragraph("She complains of dizziness after using her computer."),
            Some(Category::Medical)
        );
    }

    #[test]
    fn test_technology_paragraph() {
        let p = "Machine learning algorithms power modern recommendation engines.";
        assert!(!is_medical_case(p));
        assert_eq!(classify_paragraph(p), Some(Category::Technology));
    }

    #[test]
    fn test_keywords_match_whole_words_only() {
        // "said" and "again" contain "ai"
        assert_eq!(classify_paragraph("She said it again and again."), None);
        assert_eq!(classify_paragraph("AI is everywhere."), Some(Category::Technology));
        assert_eq!(classify_paragraph("The air was fresh."), None);
        assert_eq!(classify_paragraph("Both AIs agreed."), Some(Category::Technology));
    }

    #[test]
    fn test_inflected_and_compound_forms() {
        for p in [
            "Chatbots answer questions.",
            "Algorithms and computers shape modern life.",
            "Smartphones are everywhere.",
        ] {
            assert_eq!(classify_paragraph(p), Some(Category::Technology), "{p}");
        }
        for p in ["Several diseases spread in winter.", "Living conditions matter."] {
            assert_eq!(classify_paragraph(p), Some(Category::Medical), "{p}");
        }
    }

    #[test]
    fn test_multi_word_keywords() {
        assert_eq!(
            classify_paragraph("Advances in artificial\nintelligence continue."),
            Some(Category::Technology)
        );
    }

    #[test]
    fn test_medical_wins_over_technology() {
        let p = "The hospital deployed an AI triage system.";
        assert!(!is_technology_related(p));
        assert_eq!(classify_paragraph(p), Some(Category::Medical));
    }

    #[test]
    fn test_classify_paragraphs_keeps_order() {
        let paragraphs = [
            "Digital tools changed publishing.",
            "The weather was pleasant.",
            "Chronic fatigue is common.",
            "Smart phones are computers.",
        ];
        let classification = classify_paragraphs(&paragraphs);
        assert_eq!(
            classification.technology,
            vec!["Digital tools changed publishing.", "Smart phones are computers."]
        );
        assert_eq!(classification.medical, vec!["Chronic fatigue is common."]);
        assert_eq!(classification.unclassified, 1);
    }
}
