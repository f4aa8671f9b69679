//! Book HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde_json::{Map, Value};
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::application::{
    CreateBook, DeleteBook, GetBook, ListBooksByAuthor, PatchBook, ReplaceBook,
};
use crate::domain::book::{check_text_len, BookId, AUTHOR_LEN};
use crate::infrastructure::http::dto::{
    ApiResponse, BookMutationResponse, BookRequest, BookResponse, ListBooksParams,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 单本查询允许的 id 范围
const GET_BOOK_ID: RangeInclusive<i64> = 1..=1000;

/// 获取单本图书
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<BookResponse>>, ApiError> {
    let Path(book_id) = path?;

    if !GET_BOOK_ID.contains(&book_id) {
        return Err(ApiError::Validation(format!(
            "book_id must be between {} and {}, got {}",
            GET_BOOK_ID.start(),
            GET_BOOK_ID.end(),
            book_id
        )));
    }

    let book = state
        .get_book_handler
        .handle(GetBook {
            book_id: BookId::new(book_id),
        })
        .await?;

    Ok(Json(ApiResponse::success(BookResponse::from(book))))
}

/// 按作者列出图书，没有匹配时返回空列表
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListBooksParams>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<BookResponse>>>, ApiError> {
    let Query(params) = params?;

    check_text_len(&params.author, &AUTHOR_LEN).map_err(|actual| {
        ApiError::Validation(format!(
            "author must be {}-{} characters, got {}",
            AUTHOR_LEN.start(),
            AUTHOR_LEN.end(),
            actual
        ))
    })?;

    let books = state
        .list_books_handler
        .handle(ListBooksByAuthor {
            author: params.author,
        })
        .await?;

    let responses: Vec<BookResponse> = books.into_iter().map(BookResponse::from).collect();

    Ok(Json(ApiResponse::success(responses)))
}

/// 创建图书
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    body: Result<Json<BookRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<BookMutationResponse>>, ApiError> {
    let Json(req) = body?;

    let book_id = state
        .create_book_handler
        .handle(CreateBook { draft: req.into() })
        .await?;

    Ok(Json(ApiResponse::success(BookMutationResponse::new(
        "Book created",
        book_id,
    ))))
}

/// 整体替换图书
pub async fn replace_book(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<BookRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<BookMutationResponse>>, ApiError> {
    let Path(book_id) = path?;
    let Json(req) = body?;

    let book_id = state
        .replace_book_handler
        .handle(ReplaceBook {
            book_id: BookId::new(book_id),
            draft: req.into(),
        })
        .await?;

    Ok(Json(ApiResponse::success(BookMutationResponse::new(
        "Book updated",
        book_id,
    ))))
}

/// 部分更新图书（任意 JSON 对象，未知字段被忽略）
pub async fn patch_book(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<ApiResponse<BookMutationResponse>>, ApiError> {
    let Path(book_id) = path?;
    let Json(fields) = body?;

    let book_id = state
        .patch_book_handler
        .handle(PatchBook {
            book_id: BookId::new(book_id),
            fields,
        })
        .await?;

    Ok(Json(ApiResponse::success(BookMutationResponse::new(
        "Book partially updated",
        book_id,
    ))))
}

/// 删除图书
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<BookMutationResponse>>, ApiError> {
    let Path(book_id) = path?;

    let book_id = state
        .delete_book_handler
        .handle(DeleteBook {
            book_id: BookId::new(book_id),
        })
        .await?;

    Ok(Json(ApiResponse::success(BookMutationResponse::new(
        "Book deleted",
        book_id,
    ))))
}
