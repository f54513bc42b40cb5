//! Prose linting: weasel words, passive voice and duplicated words.
//!
//! Every detector is a pure function over `&str` returning [`Match`] spans
//! with byte offsets. The free functions use the built-in word lists, compiled
//! once per process; build a [`Linter`] from a custom [`Lexicon`] to use other
//! lists with the same matching rules.
//!
//! ```
//! let text = "this is is fine";
//! let dup = &prose_lint::detect_duplicate_words(text)[0];
//! assert_eq!(dup.index, 8);
//! let fixed = prose_lint::remove_duplicate_word(text, dup.index, dup.length).unwrap();
//! assert_eq!(fixed, "this is fine");
//! ```

use rayon::prelude::*;

pub mod detector;
pub mod error;
pub mod fix;
pub mod lexicon;
#[cfg(feature = "python")]
mod python;
pub mod words;

pub use detector::{Finding, FindingKind, Linter, Match};
pub use error::{LintError, Result};
pub use fix::remove_duplicate_word;
pub use lexicon::Lexicon;

use detector::DEFAULT_LINTER;

pub fn detect_weasel_words(text: &str) -> Vec<Match> {
    DEFAULT_LINTER.detect_weasel_words(text)
}

pub fn detect_passive_voice(text: &str) -> Vec<Match> {
    DEFAULT_LINTER.detect_passive_voice(text)
}

pub fn detect_duplicate_words(text: &str) -> Vec<Match> {
    DEFAULT_LINTER.detect_duplicate_words(text)
}

/// Removes all duplicated words, re-detecting after each right-to-left pass.
pub fn remove_all_duplicates(text: &str) -> String {
    fix::remove_all_duplicates(&DEFAULT_LINTER, text)
}

/// Findings of all three detectors, sorted by position.
pub fn lint(text: &str) -> Vec<Finding> {
    DEFAULT_LINTER.lint(text)
}

/// [`lint`] over many texts in parallel. Results keep the input order.
pub fn lint_batch<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<Vec<Finding>> {
    texts
        .par_iter()
        .map(|text| DEFAULT_LINTER.lint(text.as_ref()))
        .collect()
}
