//! Book Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::BookRepositoryPort;
use crate::application::queries::{GetBook, ListBooksByAuthor};
use crate::domain::book::Book;

/// GetBook Handler
pub struct GetBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl GetBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: GetBook) -> Result<Book, ApplicationError> {
        self.book_repo
            .find_by_id(query.book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", query.book_id))
    }
}

/// ListBooksByAuthor Handler - 没有匹配时返回空列表
pub struct ListBooksByAuthorHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl ListBooksByAuthorHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: ListBooksByAuthor) -> Result<Vec<Book>, ApplicationError> {
        let books = self.book_repo.find_by_author(&query.author).await?;

        tracing::debug!(author = %query.author, count = books.len(), "Books listed by author");

        Ok(books)
    }
}
