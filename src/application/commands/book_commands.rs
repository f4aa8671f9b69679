//! Book Commands

use serde_json::{Map, Value};

use crate::domain::book::{BookDraft, BookId};

/// 创建图书命令
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub draft: BookDraft,
}

/// 整体替换图书命令
#[derive(Debug, Clone)]
pub struct ReplaceBook {
    pub book_id: BookId,
    pub draft: BookDraft,
}

/// 部分更新图书命令（任意字段名到值的映射）
#[derive(Debug, Clone)]
pub struct PatchBook {
    pub book_id: BookId,
    pub fields: Map<String, Value>,
}

/// 删除图书命令
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub book_id: BookId,
}
