use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintError {
    /// The span handed to the remover does not fit the text.
    #[error("invalid range: index {index} + length {length} does not fit text of {text_len} bytes on char boundaries")]
    InvalidRange {
        index: usize,
        length: usize,
        text_len: usize,
    },

    #[error("word list `{list}` is empty")]
    EmptyWordList { list: &'static str },

    #[error("word list `{list}` has a blank entry at position {position}")]
    BlankEntry { list: &'static str, position: usize },

    #[error("failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, LintError>;
