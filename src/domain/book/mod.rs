//! Book Context - 图书限界上下文
//!
//! 职责:
//! - Book 实体与字段约束
//! - 整体替换与部分更新策略

mod aggregate;
mod errors;
mod patch;
mod value_objects;

pub use aggregate::{Book, BookDraft};
pub use errors::BookError;
pub use patch::{BookField, BookPatch, FieldUpdate};
pub use value_objects::{
    check_author, check_pages, check_text_len, check_title, BookId, Genre, AUTHOR_LEN, PAGES,
    TITLE_LEN,
};
