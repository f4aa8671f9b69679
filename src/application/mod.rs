//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（BookRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use commands::{
    CreateBook, DeleteBook, PatchBook, ReplaceBook,
    // Handlers
    handlers::{CreateBookHandler, DeleteBookHandler, PatchBookHandler, ReplaceBookHandler},
};

pub use error::ApplicationError;

pub use ports::{BookRepositoryPort, RepositoryError};

pub use queries::{
    GetBook, ListBooksByAuthor,
    // Handlers
    handlers::{GetBookHandler, ListBooksByAuthorHandler},
};
