// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use once_cell::sync::Lazy;
use serde_json::Value;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use tower::util::ServiceExt as _;

use kawaraban::application::{ports::time::Clock, services::ApplicationServices};
use kawaraban::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use kawaraban::infrastructure::{
    database,
    repositories::{SqliteArticleReadRepository, SqliteArticleWriteRepository},
    time::SystemClock,
};
use kawaraban::presentation::http::{routes::build_router, state::HttpState};

use super::mocks;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()))
        .try_init();
});

/// マイグレーション適用済みのインメモリSQLiteプールを開く
pub async fn make_test_pool() -> Arc<SqlitePool> {
    Lazy::force(&TRACING);

    // Single connection only: every `:memory:` connection would otherwise
    // open its own empty database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool).await.expect("run migrations");
    Arc::new(pool)
}

/// インメモリSQLiteと本物のリポジトリでルーターを組み立てる
pub async fn make_test_router() -> Router {
    let pool = make_test_pool().await;

    let write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)));
    let read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(write_repo, read_repo, clock));
    build_router(HttpState { services })
}

/// 常に失敗するリポジトリでルーターを組み立てる(500系の検証用)
pub fn make_failing_router() -> Router {
    Lazy::force(&TRACING);

    let write_repo: Arc<dyn ArticleWriteRepository> = Arc::new(mocks::FailingArticleWrite);
    let read_repo: Arc<dyn ArticleReadRepository> = Arc::new(mocks::FailingArticleRead);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(write_repo, read_repo, clock));
    build_router(HttpState { services })
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// 生の文字列ボディを送る(壊れたJSONのテスト用)
pub fn raw_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// レスポンスをステータスとJSONボディに分解する
pub async fn read_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}

/// エンベロープの3キー構造を検証し、dataを返す
pub fn assert_envelope(body: &Value, success: bool, message: &str) -> Value {
    let object = body.as_object().expect("envelope must be an object");
    assert_eq!(
        object.len(),
        3,
        "envelope must carry exactly success/data/message: {body}"
    );
    assert_eq!(body["success"], Value::Bool(success), "success flag: {body}");
    assert_eq!(body["message"], Value::String(message.into()), "message: {body}");
    body["data"].clone()
}

/// 1件作成して、レスポンスのdata(作成済みレコード)を返す
pub async fn create_article(app: &Router, title: &str, content: &str, author: &str) -> Value {
    let payload = serde_json::json!({
        "title": title,
        "content": content,
        "author": author,
    });
    let resp = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/articles", &payload))
        .await
        .unwrap();
    let (status, body) = read_json(resp).await;
    assert_eq!(status, StatusCode::CREATED, "seed create failed: {body}");
    assert_envelope(&body, true, "Article created successfully.")
}

/// count件の記事を同一著者で投入する
pub async fn seed_articles(app: &Router, count: usize, author: &str) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let created = create_article(
            app,
            &format!("Article {i}"),
            &format!("{i:02} {}", "body text ".repeat(8)),
            author,
        )
        .await;
        ids.push(created["id"].as_i64().expect("created id"));
    }
    ids
}
