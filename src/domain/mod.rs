//! Domain Layer - 领域层
//!
//! 包含:
//! - Book Context: 图书记录管理
//! - Username: 用户名值对象

pub mod book;

mod username;

pub use username::{Username, UsernameError};
