//! 测试用内存 Repository

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::application::ports::{BookRepositoryPort, RepositoryError};
use crate::domain::book::{Book, BookDraft, BookId};

#[derive(Default)]
pub struct InMemoryBookRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i64,
    books: BTreeMap<BookId, Book>,
}

impl InMemoryBookRepository {
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().books.len()
    }
}

#[async_trait]
impl BookRepositoryPort for InMemoryBookRepository {
    async fn insert(&self, draft: &BookDraft) -> Result<BookId, RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        inner.last_id += 1;
        let id = BookId::new(inner.last_id);
        inner.books.insert(id, Book::new(id, draft.clone()));
        Ok(id)
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, RepositoryError> {
        Ok(self.inner.lock().unwrap().books.get(&id).cloned())
    }

    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, RepositoryError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .books
            .values()
            .filter(|b| b.author() == author)
            .cloned()
            .collect())
    }

    async fn update(&self, book: &Book) -> Result<bool, RepositoryError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.books.get_mut(&book.id()) {
            Some(existing) => {
                *existing = book.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: BookId) -> Result<bool, RepositoryError> {
        Ok(self.inner.lock().unwrap().books.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
