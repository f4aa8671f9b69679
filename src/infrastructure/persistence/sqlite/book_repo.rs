//! SQLite Book Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{BookRepositoryPort, RepositoryError};
use crate::domain::book::{Book, BookDraft, BookId, Genre};

/// SQLite Book Repository
pub struct SqliteBookRepository {
    pool: DbPool,
}

impl SqliteBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    pages: i64,
    description: Option<String>,
    genre: String,
}

impl TryFrom<BookRow> for Book {
    type Error = RepositoryError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let genre = row
            .genre
            .parse::<Genre>()
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        Ok(Book::new(
            BookId::new(row.id),
            BookDraft {
                title: row.title,
                author: row.author,
                pages: row.pages,
                description: row.description,
                genre,
            },
        ))
    }
}

#[async_trait]
impl BookRepositoryPort for SqliteBookRepository {
    async fn insert(&self, draft: &BookDraft) -> Result<BookId, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO books (title, author, pages, description, genre)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.author)
        .bind(draft.pages)
        .bind(&draft.description)
        .bind(draft.genre.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(BookId::new(result.last_insert_rowid()))
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, RepositoryError> {
        let row: Option<BookRow> = sqlx::query_as(
            "SELECT id, title, author, pages, description, genre FROM books WHERE id = ?",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Book::try_from).transpose()
    }

    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, RepositoryError> {
        let rows: Vec<BookRow> = sqlx::query_as(
            "SELECT id, title, author, pages, description, genre FROM books WHERE author = ? ORDER BY id",
        )
        .bind(author)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Book::try_from).collect()
    }

    async fn update(&self, book: &Book) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = ?, author = ?, pages = ?, description = ?, genre = ?
            WHERE id = ?
            "#,
        )
        .bind(book.title())
        .bind(book.author())
        .bind(book.pages())
        .bind(book.description())
        .bind(book.genre().as_str())
        .bind(book.id().value())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: BookId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
