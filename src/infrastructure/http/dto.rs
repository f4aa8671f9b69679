//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::book::{Book, BookDraft, BookId, Genre};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Book DTOs
// ============================================================================

/// 创建 / 整体替换请求体（id 由服务端分配，请求中的 id 会被忽略）
#[derive(Debug, Deserialize)]
pub struct BookRequest {
    pub title: String,
    pub author: String,
    pub pages: i64,
    #[serde(default)]
    pub description: Option<String>,
    pub genre: Genre,
}

impl From<BookRequest> for BookDraft {
    fn from(req: BookRequest) -> Self {
        BookDraft {
            title: req.title,
            author: req.author,
            pages: req.pages,
            description: req.description,
            genre: req.genre,
        }
    }
}

/// 按作者查询参数
#[derive(Debug, Deserialize)]
pub struct ListBooksParams {
    #[serde(alias = "auther")]
    pub author: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookResponse {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub pages: i64,
    pub description: Option<String>,
    pub genre: Genre,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        let (id, draft) = book.into_parts();
        Self {
            id,
            title: draft.title,
            author: draft.author,
            pages: draft.pages,
            description: draft.description,
            genre: draft.genre,
        }
    }
}

/// 写操作响应：提示信息 + 受影响的 id
#[derive(Debug, Serialize, Deserialize)]
pub struct BookMutationResponse {
    pub message: String,
    pub book_id: BookId,
}

impl BookMutationResponse {
    pub fn new(message: &str, book_id: BookId) -> Self {
        Self {
            message: message.to_string(),
            book_id,
        }
    }
}

// ============================================================================
// User DTOs
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub username: String,
}
