//! Book Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateBook, DeleteBook, PatchBook, ReplaceBook};
use crate::application::error::ApplicationError;
use crate::application::ports::BookRepositoryPort;
use crate::domain::book::{Book, BookId, BookPatch};

const RESOURCE: &str = "Book";

// ============================================================================
// CreateBook
// ============================================================================

/// CreateBook Handler - 校验后写入，返回新分配的 id
pub struct CreateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl CreateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: CreateBook) -> Result<BookId, ApplicationError> {
        command.draft.validate()?;

        let book_id = self.book_repo.insert(&command.draft).await?;

        tracing::info!(
            book_id = %book_id,
            title = %command.draft.title,
            author = %command.draft.author,
            "Book created"
        );

        Ok(book_id)
    }
}

// ============================================================================
// ReplaceBook
// ============================================================================

/// ReplaceBook Handler - 整体覆盖已有记录
pub struct ReplaceBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl ReplaceBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: ReplaceBook) -> Result<BookId, ApplicationError> {
        let book_id = command.book_id;

        // 校验先于任何存储访问
        command.draft.validate()?;

        let book = Book::new(book_id, command.draft);
        if !self.book_repo.update(&book).await? {
            return Err(ApplicationError::not_found(RESOURCE, book_id));
        }

        tracing::info!(book_id = %book_id, title = %book.title(), "Book replaced");

        Ok(book_id)
    }
}

// ============================================================================
// PatchBook
// ============================================================================

/// PatchBook Handler - 只修改请求中出现的已知字段
///
/// `strict` 为 false 时不重新检查长度和范围（例如允许 pages=9999），
/// 但字段类型和 genre 取值始终会被检查
pub struct PatchBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
    strict: bool,
}

impl PatchBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>, strict: bool) -> Self {
        Self { book_repo, strict }
    }

    pub async fn handle(&self, command: PatchBook) -> Result<BookId, ApplicationError> {
        let book_id = command.book_id;

        let patch = BookPatch::from_json(&command.fields)?;
        if self.strict {
            patch.validate()?;
        }

        if !patch.ignored_keys().is_empty() {
            tracing::debug!(
                book_id = %book_id,
                ignored = ?patch.ignored_keys(),
                "Ignoring unknown fields in partial update"
            );
        }

        let mut book = self
            .book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(RESOURCE, book_id))?;

        book.apply_patch(&patch);

        // 读取与写入之间记录可能已被删除
        if !self.book_repo.update(&book).await? {
            return Err(ApplicationError::not_found(RESOURCE, book_id));
        }

        tracing::info!(
            book_id = %book_id,
            fields = ?patch.touched_fields(),
            "Book partially updated"
        );

        Ok(book_id)
    }
}

// ============================================================================
// DeleteBook
// ============================================================================

/// DeleteBook Handler
pub struct DeleteBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl DeleteBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: DeleteBook) -> Result<BookId, ApplicationError> {
        let book_id = command.book_id;

        if !self.book_repo.delete(book_id).await? {
            return Err(ApplicationError::not_found(RESOURCE, book_id));
        }

        tracing::info!(book_id = %book_id, "Book deleted");

        Ok(book_id)
    }
}
