//! fogcheck - readability analysis and spelling correction for English prose
//!
//! Splits a document into paragraphs, fixes spelling while protecting
//! technical terms, and reports Gunning Fog readability per paragraph.
//! A keyword classifier sorts paragraphs into technology and medical text.

pub mod classifier;
pub mod config;
pub mod corrector;
pub mod dictionary;
pub mod document;
pub mod error;
pub mod readability;
pub mod report;
pub mod spelling;
pub mod text;

pub use config::Config;
pub use corrector::Corrector;
pub use error::{AnalyzerError, Result};
