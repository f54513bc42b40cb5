//! Removal of duplicated words reported by the duplicate-word detector.

use log::debug;

use crate::detector::Linter;
use crate::error::{LintError, Result};

/// Deletes the word at `index..index + length` together with the whitespace
/// that separates it from the previous word.
///
/// The span must come from a duplicate-word match on this exact `text`.
/// Offsets that overflow the text or split a character are rejected with
/// [`LintError::InvalidRange`]; any other stale span removes whatever it
/// points at.
pub fn remove_duplicate_word(text: &str, index: usize, length: usize) -> Result<String> {
    let end = index
        .checked_add(length)
        .filter(|&end| end <= text.len())
        .filter(|&end| text.is_char_boundary(index) && text.is_char_boundary(end))
        .ok_or(LintError::InvalidRange {
            index,
            length,
            text_len: text.len(),
        })?;

    let head = &text[..index];
    let start = head.trim_end_matches(char::is_whitespace).len();

    debug!("removing {:?} at {}..{}", &text[index..end], start, end);

    let mut result = String::with_capacity(text.len() - (end - start));
    result.push_str(&text[..start]);
    result.push_str(&text[end..]);
    Ok(result)
}

/// Removes every duplicate until none are left.
///
/// Each pass applies its matches right to left so earlier offsets stay valid;
/// runs of three or more collapse over repeated passes.
pub fn remove_all_duplicates(linter: &Linter, text: &str) -> String {
    let mut result = text.to_string();
    loop {
        let found = linter.detect_duplicate_words(&result);
        if found.is_empty() {
            return result;
        }
        let before = result.len();
        for m in found.iter().rev() {
            match remove_duplicate_word(&result, m.index, m.length) {
                Ok(next) => result = next,
                Err(e) => debug!("skipping duplicate at {}: {}", m.index, e),
            }
        }
        // a pass that removed nothing would repeat forever
        if result.len() == before {
            return result;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_preceding_whitespace_only() {
        let text = "Say it  it, please.";
        assert_eq!(remove_duplicate_word(text, 8, 2).unwrap(), "Say it, please.");
    }

    #[test]
    fn test_invalid_range_is_rejected() {
        let text = "très très";
        assert!(matches!(
            remove_duplicate_word(text, 6, 10),
            Err(LintError::InvalidRange { text_len: 11, .. })
        ));
        // byte 9 is inside the second "è"
        assert!(remove_duplicate_word(text, 9, 1).is_err());
        assert!(remove_duplicate_word(text, usize::MAX, 2).is_err());
    }

    #[test]
    fn test_span_at_start_has_no_whitespace_to_eat() {
        assert_eq!(remove_duplicate_word("the cat", 0, 3).unwrap(), " cat");
    }

    #[test]
    fn test_remove_all_collapses_runs() {
        let linter = Linter::default();
        assert_eq!(
            remove_all_duplicates(&linter, "the the the cat sat sat"),
            "the cat sat"
        );
    }
}
