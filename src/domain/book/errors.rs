//! Book Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("title must be {min}-{max} characters, got {actual}")]
    InvalidTitle {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("author must be {min}-{max} characters, got {actual}")]
    InvalidAuthor {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("pages must be between {min} and {max}, got {actual}")]
    InvalidPages { min: i64, max: i64, actual: i64 },

    #[error("genre must be one of roman, story, drama, got {0:?}")]
    InvalidGenre(String),

    #[error("invalid value for field '{field}': {reason}")]
    InvalidFieldValue { field: &'static str, reason: String },

    /// 多个字段同时不合法
    #[error("{}", join_errors(.0))]
    Multiple(Vec<BookError>),
}

impl BookError {
    /// 合并多个校验错误，只有一个时直接返回该错误
    pub fn collect(mut errors: Vec<BookError>) -> Result<(), BookError> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(BookError::Multiple(errors)),
        }
    }
}

fn join_errors(errors: &[BookError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
