//! Book Queries

use crate::domain::book::BookId;

/// 按 id 获取图书
#[derive(Debug, Clone)]
pub struct GetBook {
    pub book_id: BookId,
}

/// 按作者列出图书
#[derive(Debug, Clone)]
pub struct ListBooksByAuthor {
    pub author: String,
}
