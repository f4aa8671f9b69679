//! Bookshelf - 图书记录 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book Context: 图书实体、字段约束、部分更新策略
//! - Username: 用户名值对象
//!
//! 应用层 (application/):
//! - Ports: BookRepositoryPort
//! - Commands: 创建 / 替换 / 部分更新 / 删除
//! - Queries: 按 id 查询 / 按作者列出
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::{load_config, AppConfig};
