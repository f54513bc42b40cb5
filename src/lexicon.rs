//! Word lists bundled for one [`Linter`](crate::Linter).
//!
//! The default lexicon is the static data in [`crate::words`]. Hosts that ship
//! their own lists build a `Lexicon` once and compile it with
//! [`Linter::new`](crate::Linter::new); the detectors treat every list the same
//! way regardless of its content.

use serde::{Deserialize, Serialize};

use crate::error::{LintError, Result};
use crate::words::{ALL_WEASEL_WORDS, AUXILIARY_VERBS, IRREGULAR_VERBS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub weasel_words: Vec<String>,
    pub irregular_verbs: Vec<String>,
    pub auxiliary_verbs: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            weasel_words: to_owned(&ALL_WEASEL_WORDS),
            irregular_verbs: to_owned(IRREGULAR_VERBS),
            auxiliary_verbs: to_owned(AUXILIARY_VERBS),
        }
    }
}

impl Lexicon {
    /// Append entries after the existing weasel words. Duplicates are kept.
    pub fn with_extra_weasel_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weasel_words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_list("weasel_words", &self.weasel_words)?;
        check_list("irregular_verbs", &self.irregular_verbs)?;
        check_list("auxiliary_verbs", &self.auxiliary_verbs)?;
        Ok(())
    }

    /// Whole-word alternation of every weasel phrase, case-insensitive.
    pub(crate) fn weasel_pattern(&self) -> String {
        format!(r"(?i)\b(?:{})\b", alternation(&self.weasel_words))
    }

    /// Auxiliary, optional plain spaces, then a regular "-ed" word or an
    /// irregular participle.
    pub(crate) fn passive_pattern(&self) -> String {
        format!(
            r"(?i)\b(?:{})\b[ ]*(?:\w+ed|{})\b",
            alternation(&self.auxiliary_verbs),
            alternation(&self.irregular_verbs)
        )
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn check_list(list: &'static str, entries: &[String]) -> Result<()> {
    if entries.is_empty() {
        return Err(LintError::EmptyWordList { list });
    }
    if let Some(position) = entries.iter().position(|e| e.trim().is_empty()) {
        return Err(LintError::BlankEntry { list, position });
    }
    Ok(())
}

/// Escapes each entry as written, so the words of a phrase match only with the
/// single spaces between them. Entry order is kept since it sets alternation
/// priority.
fn alternation(entries: &[String]) -> String {
    entries
        .iter()
        .map(|entry| regex::escape(entry))
        .collect::<Vec<_>>()
        .join("|")
}
