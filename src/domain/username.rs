//! Username 值对象
//!
//! 5-30 个字符，只允许小写字母、数字、下划线和连字符

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MIN_LEN: usize = 5;
const MAX_LEN: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("username must be 5-30 characters, got {0}")]
    InvalidLength(usize),

    #[error("username may only contain a-z, 0-9, '_' and '-', found {0:?}")]
    InvalidCharacter(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(username: impl Into<String>) -> Result<Self, UsernameError> {
        let username = username.into();

        let len = username.chars().count();
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            return Err(UsernameError::InvalidLength(len));
        }

        if let Some(c) = username.chars().find(|c| !is_allowed(*c)) {
            return Err(UsernameError::InvalidCharacter(c));
        }

        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
