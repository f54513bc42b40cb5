//! Python bindings. Offsets crossing this boundary are character offsets,
//! matching Python string indexing.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::detector::{DEFAULT_LINTER, Match};

/// Finding returned to Python
#[pyclass]
#[derive(Clone)]
struct Finding {
    #[pyo3(get)]
    text: String,
    #[pyo3(get)]
    index: usize,
    #[pyo3(get)]
    length: usize,
}

#[pymethods]
impl Finding {
    fn __repr__(&self) -> String {
        format!(
            "Finding(text={:?}, index={}, length={})",
            self.text, self.index, self.length
        )
    }
}

fn to_py(text: &str, found: Vec<Match>) -> Vec<Finding> {
    found
        .into_iter()
        .map(|m| {
            let chars = m.char_range(text);
            Finding {
                text: m.matched_text,
                index: chars.start,
                length: chars.len(),
            }
        })
        .collect()
}

/// Byte offset of the `n`th character, or the text length when `n` is at the end.
fn byte_offset(text: &str, n: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(n)
}

#[pyfunction]
fn detect_weasel_words(text: &str) -> Vec<Finding> {
    to_py(text, DEFAULT_LINTER.detect_weasel_words(text))
}

#[pyfunction]
fn detect_passive_voice(text: &str) -> Vec<Finding> {
    to_py(text, DEFAULT_LINTER.detect_passive_voice(text))
}

#[pyfunction]
fn detect_duplicate_words(text: &str) -> Vec<Finding> {
    to_py(text, DEFAULT_LINTER.detect_duplicate_words(text))
}

/// Remove a duplicate word given its character index and length
#[pyfunction]
fn remove_duplicate_word(text: &str, index: usize, length: usize) -> PyResult<String> {
    let invalid = || PyValueError::new_err(format!("invalid range {index}+{length}"));
    let start = byte_offset(text, index).ok_or_else(invalid)?;
    let end = index
        .checked_add(length)
        .and_then(|end| byte_offset(text, end))
        .ok_or_else(invalid)?;
    crate::fix::remove_duplicate_word(text, start, end - start)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pyfunction]
fn remove_all_duplicates(text: &str) -> String {
    crate::fix::remove_all_duplicates(&DEFAULT_LINTER, text)
}

#[pymodule]
fn prose_lint(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(detect_weasel_words, m)?)?;
    m.add_function(wrap_pyfunction!(detect_passive_voice, m)?)?;
    m.add_function(wrap_pyfunction!(detect_duplicate_words, m)?)?;
    m.add_function(wrap_pyfunction!(remove_duplicate_word, m)?)?;
    m.add_function(wrap_pyfunction!(remove_all_duplicates, m)?)?;
    m.add_class::<Finding>()?;
    Ok(())
}
