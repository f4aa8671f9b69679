//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                 GET     健康检查
//! - /api/books/{id}           GET     获取单本图书（1 <= id <= 1000）
//! - /api/books/?author=...    GET     按作者列出图书
//! - /api/books/               POST    创建图书
//! - /api/books/{id}           PUT     整体替换图书
//! - /api/books/{id}           PATCH   部分更新图书
//! - /api/books/{id}           DELETE  删除图书
//! - /api/users/{username}     GET     回显用户名

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(book_routes())
        .route("/users/:username", get(handlers::get_user))
}

/// Book 路由（集合路径同时接受带与不带结尾斜杠）
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/books",
            get(handlers::list_books).post(handlers::create_book),
        )
        .route(
            "/books/",
            get(handlers::list_books).post(handlers::create_book),
        )
        .route(
            "/books/:book_id",
            get(handlers::get_book)
                .put(handlers::replace_book)
                .patch(handlers::patch_book)
                .delete(handlers::delete_book),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::build_router;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteBookRepository,
    };
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    async fn app_with(strict_patch: bool) -> Router {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = Arc::new(SqliteBookRepository::new(pool));
        build_router(Arc::new(AppState::new(repo, strict_patch)))
    }

    async fn app() -> Router {
        app_with(false).await
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn book() -> Value {
        json!({
            "title": "O'tkan kunlar",
            "author": "Abdulla Qodiriy",
            "pages": 432,
            "description": "historical romance",
            "genre": "roman"
        })
    }

    async fn create(app: &Router, body: Value) -> i64 {
        let (status, value) = send(app, Method::POST, "/api/books/", Some(body)).await;
        assert_eq!(status, StatusCode::OK, "{}", value);
        value["data"]["book_id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let app = app().await;
        let (status, value) = send(&app, Method::GET, "/api/ping", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["errno"], 0);
        assert_eq!(value["error"], "");
        assert_eq!(value["data"]["status"], "ok");
        assert_eq!(value["data"]["database"], "ok");
        assert_eq!(value["data"]["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_ping_reports_unavailable_database() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = Arc::new(SqliteBookRepository::new(pool.clone()));
        let app = build_router(Arc::new(AppState::new(repo, false)));
        pool.close().await;

        let (status, value) = send(&app, Method::GET, "/api/ping", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(value["errno"], 503);
        assert_eq!(value["data"]["status"], "degraded");
        assert_eq!(value["data"]["database"], "unavailable");
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_fields() {
        let app = app().await;
        let id = create(&app, book()).await;

        let (status, value) = send(&app, Method::GET, &format!("/api/books/{}", id), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["errno"], 0);
        let mut expected = book();
        expected["id"] = json!(id);
        assert_eq!(value["data"], expected);
    }

    #[tokio::test]
    async fn test_create_returns_unique_ids() {
        let app = app().await;
        let first = create(&app, book()).await;
        let second = create(&app, book()).await;
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_create_without_trailing_slash() {
        let app = app().await;
        let (status, _) = send(&app, Method::POST, "/api/books", Some(book())).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_and_persists_nothing() {
        let app = app().await;

        let mut short_title = book();
        short_title["title"] = json!("abc");
        let mut zero_pages = book();
        zero_pages["pages"] = json!(0);
        let mut bad_genre = book();
        bad_genre["genre"] = json!("fantasy");
        let mut missing_author = book();
        missing_author.as_object_mut().unwrap().remove("author");

        for body in [short_title, zero_pages, bad_genre, missing_author] {
            let (status, value) = send(&app, Method::POST, "/api/books/", Some(body)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(value["errno"], 422);
        }

        let (_, value) = send(&app, Method::GET, "/api/books/?author=Abdulla%20Qodiriy", None).await;
        assert_eq!(value["data"], json!([]));
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_json() {
        let app = app().await;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/books/")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_description_is_optional() {
        let app = app().await;
        let mut body = book();
        body.as_object_mut().unwrap().remove("description");
        let id = create(&app, body).await;

        let (_, value) = send(&app, Method::GET, &format!("/api/books/{}", id), None).await;
        assert_eq!(value["data"]["description"], Value::Null);
    }

    #[tokio::test]
    async fn test_get_missing_is_404() {
        let app = app().await;
        let (status, value) = send(&app, Method::GET, "/api/books/5", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(value["errno"], 404);
        assert_eq!(value["error"], "Book not found: 5");
    }

    #[tokio::test]
    async fn test_get_id_out_of_range_is_422() {
        let app = app().await;
        for uri in ["/api/books/0", "/api/books/1001", "/api/books/abc"] {
            let (status, _) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_list_by_author() {
        let app = app().await;
        create(&app, book()).await;
        create(&app, book()).await;
        let mut other = book();
        other["author"] = json!("Cho'lpon Yunusov");
        create(&app, other).await;

        let (status, value) =
            send(&app, Method::GET, "/api/books/?author=Abdulla%20Qodiriy", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["data"].as_array().unwrap().len(), 2);

        // 旧参数名仍然可用
        let (_, value) = send(&app, Method::GET, "/api/books?auther=Abdulla%20Qodiriy", None).await;
        assert_eq!(value["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_unknown_author_is_empty() {
        let app = app().await;
        let (status, value) = send(&app, Method::GET, "/api/books/?author=unknownx", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["data"], json!([]));
    }

    #[tokio::test]
    async fn test_list_rejects_bad_author_param() {
        let app = app().await;
        for uri in ["/api/books/?author=abc", "/api/books/"] {
            let (status, _) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_replace_existing() {
        let app = app().await;
        let id = create(&app, book()).await;
        let replacement = json!({
            "title": "Kecha va kunduz",
            "author": "Abdulhamid Cho'lpon",
            "pages": 300,
            "genre": "drama"
        });

        let (status, value) =
            send(&app, Method::PUT, &format!("/api/books/{}", id), Some(replacement)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["data"]["book_id"], json!(id));

        let (_, value) = send(&app, Method::GET, &format!("/api/books/{}", id), None).await;
        assert_eq!(value["data"]["title"], "Kecha va kunduz");
        assert_eq!(value["data"]["genre"], "drama");
        assert_eq!(value["data"]["description"], Value::Null);
    }

    #[tokio::test]
    async fn test_replace_missing_is_404_and_store_unchanged() {
        let app = app().await;
        let (status, _) = send(&app, Method::PUT, "/api/books/77", Some(book())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::GET, "/api/books/77", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_replace_invalid_is_422() {
        let app = app().await;
        let id = create(&app, book()).await;
        let mut bad = book();
        bad["pages"] = json!(1001);

        let (status, _) = send(&app, Method::PUT, &format!("/api/books/{}", id), Some(bad)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (_, value) = send(&app, Method::GET, &format!("/api/books/{}", id), None).await;
        assert_eq!(value["data"]["pages"], 432);
    }

    #[tokio::test]
    async fn test_patch_bypasses_range_and_ignores_unknown_keys() {
        let app = app().await;
        let id = create(&app, book()).await;

        let (status, value) = send(
            &app,
            Method::PATCH,
            &format!("/api/books/{}", id),
            Some(json!({ "pages": 9999, "publisher": "Sharq", "id": 500 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["data"]["book_id"], json!(id));

        let (_, value) = send(&app, Method::GET, &format!("/api/books/{}", id), None).await;
        assert_eq!(value["data"]["pages"], 9999);
        assert_eq!(value["data"]["id"], json!(id));
        assert_eq!(value["data"]["title"], "O'tkan kunlar");
    }

    #[tokio::test]
    async fn test_patch_rejects_invalid_genre() {
        let app = app().await;
        let id = create(&app, book()).await;

        let (status, _) = send(
            &app,
            Method::PATCH,
            &format!("/api/books/{}", id),
            Some(json!({ "genre": "fantasy" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (_, value) = send(&app, Method::GET, &format!("/api/books/{}", id), None).await;
        assert_eq!(value["data"]["genre"], "roman");
    }

    #[tokio::test]
    async fn test_patch_missing_is_404() {
        let app = app().await;
        let (status, _) = send(
            &app,
            Method::PATCH,
            "/api/books/9",
            Some(json!({ "pages": 10 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_strict_patch_rejects_out_of_range() {
        let app = app_with(true).await;
        let id = create(&app, book()).await;

        let (status, _) = send(
            &app,
            Method::PATCH,
            &format!("/api/books/{}", id),
            Some(json!({ "pages": 9999 })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_404() {
        let app = app().await;
        let id = create(&app, book()).await;

        let (status, value) = send(&app, Method::DELETE, &format!("/api/books/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["data"]["book_id"], json!(id));

        let (status, _) = send(&app, Method::GET, &format!("/api/books/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, &format!("/api/books/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_user() {
        let app = app().await;
        let (status, value) = send(&app, Method::GET, "/api/users/john_doe-1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["data"]["username"], "john_doe-1");

        for uri in ["/api/users/John_Doe", "/api/users/abc", "/api/users/bob.smith"] {
            let (status, value) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
            assert_eq!(value["errno"], 422);
        }
    }
}
