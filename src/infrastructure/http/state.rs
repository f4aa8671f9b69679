//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateBookHandler, DeleteBookHandler, PatchBookHandler, ReplaceBookHandler,
    // Query handlers
    GetBookHandler, ListBooksByAuthorHandler,
    // Ports
    BookRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub book_repo: Arc<dyn BookRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_book_handler: CreateBookHandler,
    pub replace_book_handler: ReplaceBookHandler,
    pub patch_book_handler: PatchBookHandler,
    pub delete_book_handler: DeleteBookHandler,

    // ========== Query Handlers ==========
    pub get_book_handler: GetBookHandler,
    pub list_books_handler: ListBooksByAuthorHandler,
}

impl AppState {
    /// 创建应用状态
    ///
    /// `strict_patch` 为 true 时部分更新会重新校验字段约束
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>, strict_patch: bool) -> Self {
        Self {
            book_repo: book_repo.clone(),

            // Command handlers
            create_book_handler: CreateBookHandler::new(book_repo.clone()),
            replace_book_handler: ReplaceBookHandler::new(book_repo.clone()),
            patch_book_handler: PatchBookHandler::new(book_repo.clone(), strict_patch),
            delete_book_handler: DeleteBookHandler::new(book_repo.clone()),

            // Query handlers
            get_book_handler: GetBookHandler::new(book_repo.clone()),
            list_books_handler: ListBooksByAuthorHandler::new(book_repo),
        }
    }
}
