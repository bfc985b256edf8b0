//! Readability engine
//!
//! Syllable heuristic, complex-word count, Gunning Fog index and the
//! per-paragraph statistics built on top of them.

pub mod fog;
pub mod stats;
pub mod syllables;

pub use fog::{calculate_gunning_fog, FogReport};
pub use stats::{analyze_text, TextAnalysis};
pub use syllables::{count_complex_words, count_syllables};
