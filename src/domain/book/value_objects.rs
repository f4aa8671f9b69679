//! Book Context - Value Objects

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

use super::BookError;

/// 标题长度范围（字符数）
pub const TITLE_LEN: RangeInclusive<usize> = 5..=30;

/// 作者长度范围（字符数）
pub const AUTHOR_LEN: RangeInclusive<usize> = 5..=30;

/// 页数范围
pub const PAGES: RangeInclusive<i64> = 1..=1000;

/// 图书唯一标识（由存储层分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 图书体裁，只允许三个固定值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Roman,
    Story,
    Drama,
}

impl Genre {
    pub const ALL: [Genre; 3] = [Genre::Roman, Genre::Story, Genre::Drama];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Roman => "roman",
            Genre::Story => "story",
            Genre::Drama => "drama",
        }
    }
}

impl FromStr for Genre {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "roman" => Ok(Genre::Roman),
            "story" => Ok(Genre::Story),
            "drama" => Ok(Genre::Drama),
            other => Err(BookError::InvalidGenre(other.to_string())),
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 按字符数（而非字节数）检查长度，返回实际长度
pub fn check_text_len(value: &str, range: &RangeInclusive<usize>) -> Result<(), usize> {
    let len = value.chars().count();
    if range.contains(&len) {
        Ok(())
    } else {
        Err(len)
    }
}

pub fn check_title(title: &str) -> Result<(), BookError> {
    check_text_len(title, &TITLE_LEN).map_err(|actual| BookError::InvalidTitle {
        min: *TITLE_LEN.start(),
        max: *TITLE_LEN.end(),
        actual,
    })
}

pub fn check_author(author: &str) -> Result<(), BookError> {
    check_text_len(author, &AUTHOR_LEN).map_err(|actual| BookError::InvalidAuthor {
        min: *AUTHOR_LEN.start(),
        max: *AUTHOR_LEN.end(),
        actual,
    })
}

pub fn check_pages(pages: i64) -> Result<(), BookError> {
    if PAGES.contains(&pages) {
        Ok(())
    } else {
        Err(BookError::InvalidPages {
            min: *PAGES.start(),
            max: *PAGES.end(),
            actual: pages,
        })
    }
}
