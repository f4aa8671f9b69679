//! Book Context - Partial Update
//!
//! 部分更新的字段白名单与类型化更新值。
//! 未知字段名被忽略；已知字段的值类型不符时返回错误。

use serde_json::{Map, Value};

use super::value_objects::{check_author, check_pages, check_title, Genre};
use super::BookError;

/// 可通过部分更新修改的字段（id 不在其中）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Title,
    Author,
    Pages,
    Description,
    Genre,
}

impl BookField {
    pub const SETTABLE: [BookField; 5] = [
        BookField::Title,
        BookField::Author,
        BookField::Pages,
        BookField::Description,
        BookField::Genre,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::SETTABLE.into_iter().find(|field| field.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            BookField::Title => "title",
            BookField::Author => "author",
            BookField::Pages => "pages",
            BookField::Description => "description",
            BookField::Genre => "genre",
        }
    }
}

/// 单个字段的新值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Title(String),
    Author(String),
    Pages(i64),
    Description(Option<String>),
    Genre(Genre),
}

impl FieldUpdate {
    /// 将 JSON 值转换为对应字段的类型化更新
    pub fn parse(field: BookField, value: &Value) -> Result<Self, BookError> {
        match field {
            BookField::Title => expect_string(field, value).map(FieldUpdate::Title),
            BookField::Author => expect_string(field, value).map(FieldUpdate::Author),
            BookField::Pages => value
                .as_i64()
                .map(FieldUpdate::Pages)
                .ok_or_else(|| invalid(field, "expected an integer", value)),
            BookField::Description => match value {
                Value::Null => Ok(FieldUpdate::Description(None)),
                Value::String(s) => Ok(FieldUpdate::Description(Some(s.clone()))),
                other => Err(invalid(field, "expected a string or null", other)),
            },
            BookField::Genre => match value {
                Value::String(s) => s.parse::<Genre>().map(FieldUpdate::Genre),
                other => Err(invalid(field, "expected a string", other)),
            },
        }
    }

    pub fn field(&self) -> BookField {
        match self {
            FieldUpdate::Title(_) => BookField::Title,
            FieldUpdate::Author(_) => BookField::Author,
            FieldUpdate::Pages(_) => BookField::Pages,
            FieldUpdate::Description(_) => BookField::Description,
            FieldUpdate::Genre(_) => BookField::Genre,
        }
    }

    /// 按创建时的约束检查新值（strict patch 模式使用）
    pub fn validate(&self) -> Result<(), BookError> {
        match self {
            FieldUpdate::Title(title) => check_title(title),
            FieldUpdate::Author(author) => check_author(author),
            FieldUpdate::Pages(pages) => check_pages(*pages),
            FieldUpdate::Description(_) | FieldUpdate::Genre(_) => Ok(()),
        }
    }
}

/// 部分更新：一组类型化字段更新，以及被忽略的未知键
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    updates: Vec<FieldUpdate>,
    ignored: Vec<String>,
}

impl BookPatch {
    /// 从任意 JSON 对象构造
    ///
    /// 不在白名单中的键记入 `ignored`，类型错误会全部收集后返回
    pub fn from_json(map: &Map<String, Value>) -> Result<Self, BookError> {
        let mut patch = BookPatch::default();
        let mut errors = Vec::new();

        for (key, value) in map {
            match BookField::from_name(key) {
                Some(field) => match FieldUpdate::parse(field, value) {
                    Ok(update) => patch.updates.push(update),
                    Err(e) => errors.push(e),
                },
                None => patch.ignored.push(key.clone()),
            }
        }

        BookError::collect(errors)?;
        Ok(patch)
    }

    pub fn updates(&self) -> &[FieldUpdate] {
        &self.updates
    }

    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored
    }

    pub fn touched_fields(&self) -> Vec<&'static str> {
        self.updates.iter().map(|u| u.field().name()).collect()
    }

    /// 对被修改的字段重新执行长度/范围校验
    pub fn validate(&self) -> Result<(), BookError> {
        let errors = self
            .updates
            .iter()
            .filter_map(|update| update.validate().err())
            .collect();

        BookError::collect(errors)
    }
}

fn expect_string(field: BookField, value: &Value) -> Result<String, BookError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(field, "expected a string", value))
}

fn invalid(field: BookField, expected: &str, value: &Value) -> BookError {
    BookError::InvalidFieldValue {
        field: field.name(),
        reason: format!("{}, got {}", expected, value),
    }
}
