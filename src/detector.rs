//! Weasel-word, passive-voice and duplicate-word detection.

use std::ops::Range;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;
use serde::Serialize;

use crate::error::Result;
use crate::lexicon::Lexicon;

lazy_static! {
    /// Linter over the built-in word lists, compiled on first use.
    pub(crate) static ref DEFAULT_LINTER: Linter =
        Linter::new(Lexicon::default()).expect("built-in lexicon compiles");

    static ref WORD_PATTERN: Regex = Regex::new(r"\w+").unwrap();
}

/// A span of the analysed text. `index` and `length` are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Match {
    /// The span as it appears in the input, original casing kept.
    pub matched_text: String,
    pub index: usize,
    pub length: usize,
}

impl Match {
    fn new(text: &str, start: usize, end: usize) -> Self {
        Self {
            matched_text: text[start..end].to_string(),
            index: start,
            length: end - start,
        }
    }

    pub fn end(&self) -> usize {
        self.index + self.length
    }

    pub fn range(&self) -> Range<usize> {
        self.index..self.end()
    }

    /// The span in Unicode scalar values rather than bytes.
    ///
    /// `text` must be the string this match was produced from.
    pub fn char_range(&self, text: &str) -> Range<usize> {
        let start = text[..self.index].chars().count();
        start..start + self.matched_text.chars().count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    WeaselWord,
    PassiveVoice,
    DuplicateWord,
}

/// A [`Match`] tagged with the detector that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    #[serde(flatten)]
    pub span: Match,
}

/// Compiled detectors for one [`Lexicon`].
///
/// Compilation is the only costly step; a `Linter` is immutable afterwards and
/// can be shared across threads.
#[derive(Debug, Clone)]
pub struct Linter {
    weasel: Regex,
    passive: Regex,
}

impl Linter {
    pub fn new(lexicon: Lexicon) -> Result<Self> {
        lexicon.validate()?;
        let weasel = Regex::new(&lexicon.weasel_pattern())?;
        let passive = Regex::new(&lexicon.passive_pattern())?;
        debug!(
            "compiled linter: {} weasel words, {} irregular verbs, {} auxiliaries",
            lexicon.weasel_words.len(),
            lexicon.irregular_verbs.len(),
            lexicon.auxiliary_verbs.len()
        );
        Ok(Self { weasel, passive })
    }

    /// Every weasel phrase as a whole-word, case-insensitive span, left to
    /// right and non-overlapping.
    pub fn detect_weasel_words(&self, text: &str) -> Vec<Match> {
        let found: Vec<Match> = self
            .weasel
            .find_iter(text)
            .map(|m| Match::new(text, m.start(), m.end()))
            .collect();
        trace!("weasel words: {} in {} bytes", found.len(), text.len());
        found
    }

    /// Auxiliary verb, plain spaces, past participle. The span covers both
    /// words and the spaces between them.
    pub fn detect_passive_voice(&self, text: &str) -> Vec<Match> {
        let found: Vec<Match> = self
            .passive
            .find_iter(text)
            .map(|m| Match::new(text, m.start(), m.end()))
            .collect();
        trace!("passive voice: {} in {} bytes", found.len(), text.len());
        found
    }

    /// Words repeated after nothing but whitespace, compared case-insensitively.
    ///
    /// Each match is the second word of a pair. A run of three reports the
    /// second and the third word.
    pub fn detect_duplicate_words(&self, text: &str) -> Vec<Match> {
        detect_duplicate_words(text)
    }

    /// All findings of all detectors, ordered by position then kind.
    pub fn lint(&self, text: &str) -> Vec<Finding> {
        let tag = |kind: FindingKind| move |span: Match| Finding { kind, span };
        let mut findings: Vec<Finding> = self
            .detect_weasel_words(text)
            .into_iter()
            .map(tag(FindingKind::WeaselWord))
            .chain(
                self.detect_passive_voice(text)
                    .into_iter()
                    .map(tag(FindingKind::PassiveVoice)),
            )
            .chain(
                self.detect_duplicate_words(text)
                    .into_iter()
                    .map(tag(FindingKind::DuplicateWord)),
            )
            .collect();
        findings.sort_by_key(|f| (f.span.index, f.kind));
        findings
    }
}

impl Default for Linter {
    fn default() -> Self {
        DEFAULT_LINTER.clone()
    }
}

// The regex crate has no backreferences, so pairs are found by walking
// adjacent words instead of with a single `(\w+)\s+\1` pattern.
fn detect_duplicate_words(text: &str) -> Vec<Match> {
    let mut found = Vec::new();
    let mut previous: Option<regex::Match> = None;

    for word in WORD_PATTERN.find_iter(text) {
        if let Some(prev) = previous {
            let gap = &text[prev.end()..word.start()];
            let whitespace_only = !gap.is_empty() && gap.chars().all(char::is_whitespace);
            if whitespace_only && same_word(prev.as_str(), word.as_str()) {
                found.push(Match::new(text, word.start(), word.end()));
            }
        }
        previous = Some(word);
    }

    trace!("duplicate words: {} in {} bytes", found.len(), text.len());
    found
}

fn same_word(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
