//! Book Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::patch::{BookPatch, FieldUpdate};
use super::value_objects::{check_author, check_pages, check_title, BookId, Genre};
use super::BookError;

/// 待写入的图书（创建或整体替换时的候选记录，不含 id）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub pages: i64,
    #[serde(default)]
    pub description: Option<String>,
    pub genre: Genre,
}

impl BookDraft {
    /// 校验字段约束，收集全部违规项
    ///
    /// genre 由类型保证合法，description 不做限制
    pub fn validate(&self) -> Result<(), BookError> {
        let errors = [
            check_title(&self.title),
            check_author(&self.author),
            check_pages(self.pages),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        BookError::collect(errors)
    }
}

/// Book 聚合根
///
/// 不变量:
/// - id 由存储层分配，创建后不可变
/// - genre 只能是 Genre 的三个取值之一
///
/// 部分更新默认不重新校验长度和范围，因此已持久化的记录不一定满足 `BookDraft::validate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    pages: i64,
    description: Option<String>,
    genre: Genre,
}

impl Book {
    /// 用已分配的 id 和字段值构造（不做校验，用于从存储层还原）
    pub fn new(id: BookId, draft: BookDraft) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            pages: draft.pages,
            description: draft.description,
            genre: draft.genre,
        }
    }

    /// 整体替换除 id 外的全部字段
    pub fn replace_with(&mut self, draft: BookDraft) {
        self.title = draft.title;
        self.author = draft.author;
        self.pages = draft.pages;
        self.description = draft.description;
        self.genre = draft.genre;
    }

    /// 按顺序应用部分更新，未出现在 patch 中的字段保持不变
    pub fn apply_patch(&mut self, patch: &BookPatch) {
        for update in patch.updates() {
            match update {
                FieldUpdate::Title(title) => self.title = title.clone(),
                FieldUpdate::Author(author) => self.author = author.clone(),
                FieldUpdate::Pages(pages) => self.pages = *pages,
                FieldUpdate::Description(description) => self.description = description.clone(),
                FieldUpdate::Genre(genre) => self.genre = *genre,
            }
        }
    }

    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            pages: self.pages,
            description: self.description.clone(),
            genre: self.genre,
        }
    }

    /// 拆分为 id 与字段值
    pub fn into_parts(self) -> (BookId, BookDraft) {
        (
            self.id,
            BookDraft {
                title: self.title,
                author: self.author,
                pages: self.pages,
                description: self.description,
                genre: self.genre,
            },
        )
    }

    // Getters
    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn pages(&self) -> i64 {
        self.pages
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }
}
