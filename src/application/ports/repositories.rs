//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::book::{Book, BookDraft, BookId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Book Repository Port
///
/// 每次调用只执行单条语句，连接在调用结束时归还
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 插入新记录，返回存储层分配的 id（id 不会被复用）
    async fn insert(&self, draft: &BookDraft) -> Result<BookId, RepositoryError>;

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, RepositoryError>;

    /// 按作者精确匹配，按 id 升序
    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, RepositoryError>;

    /// 覆盖写入除 id 外的全部字段，记录不存在时返回 false
    async fn update(&self, book: &Book) -> Result<bool, RepositoryError>;

    /// 删除记录，记录不存在时返回 false
    async fn delete(&self, id: BookId) -> Result<bool, RepositoryError>;

    /// 存储可用性检查
    async fn ping(&self) -> Result<(), RepositoryError>;
}
