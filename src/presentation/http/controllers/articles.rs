use axum::{
    Extension, Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::Response,
};
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    error::ApplicationError,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::{
    envelope,
    error::{ApiError, ApiResult, IntoApiResult},
    state::HttpState,
};

fn default_page() -> u32 {
    1
}

/// Keeps an explicit JSON `null` distinguishable from an absent key: absent
/// stays `None`, `null` becomes `Some(None)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
}

impl Default for ArticleListParams {
    fn default() -> Self {
        Self {
            author: None,
            page: 1,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Fields set to JSON `null` count as present and go through validation;
/// only keys missing from the body are skipped.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub author: Option<Option<String>>,
}

/// Non-numeric path segments cannot name a record, so they read as absent.
fn article_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(_) => Err(ApiError::classify(ApplicationError::not_found(
            "article id is not numeric",
        ))),
    }
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(
        ("author" = Option<String>, Query, description = "Exact author name to filter by"),
        ("page" = Option<u32>, Query, description = "1-based page number, 25 articles per page")
    ),
    responses(
        (status = 200, description = "Articles retrieved.", body = crate::presentation::http::openapi::ArticleListEnvelope),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::openapi::ErrorEnvelope)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    params: Result<Query<ArticleListParams>, QueryRejection>,
) -> ApiResult<Response> {
    // Unparseable query strings degrade to the defaults.
    let params = params.map(|Query(params)| params).unwrap_or_default();

    let articles = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            author: params.author,
            page: params.page,
        })
        .await
        .into_api()?;

    Ok(envelope::ok(articles, "Articles retrieved successfully."))
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = crate::presentation::http::openapi::ArticleEnvelope),
        (status = 422, description = "Validation failed.", body = crate::presentation::http::openapi::ErrorEnvelope),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::openapi::ErrorEnvelope)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> ApiResult<Response> {
    // A body that does not parse counts as an empty payload and fails the
    // required-field checks.
    let payload = payload.map(|Json(payload)| payload).unwrap_or_default();

    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        author: payload.author,
    };

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_api()?;

    Ok(envelope::created(article, "Article created successfully."))
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article retrieved.", body = crate::presentation::http::openapi::ArticleEnvelope),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::openapi::ErrorEnvelope),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::openapi::ErrorEnvelope)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Response> {
    let id = article_id(path)?;

    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_api()?;

    Ok(envelope::ok(article, "Article retrieved successfully."))
}

#[utoipa::path(
    method(put, patch),
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = crate::presentation::http::openapi::ArticleEnvelope),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::openapi::ErrorEnvelope),
        (status = 422, description = "Validation failed.", body = crate::presentation::http::openapi::ErrorEnvelope),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::openapi::ErrorEnvelope)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateArticleRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let id = article_id(path)?;
    // Malformed bodies count as "no fields supplied".
    let payload = payload.map(|Json(payload)| payload).unwrap_or_default();

    // A null field flattens to an empty string, so it fails the field's
    // rules instead of silently reading as absent.
    let command = UpdateArticleCommand {
        id,
        title: payload.title.map(|title| title.unwrap_or_default()),
        content: payload.content.map(|content| content.unwrap_or_default()),
        author: payload.author.map(|author| author.unwrap_or_default()),
    };

    let article = state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_api()?;

    Ok(envelope::ok(article, "Article updated successfully."))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article deleted; data is null.", body = crate::presentation::http::openapi::DeletedEnvelope),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::openapi::ErrorEnvelope),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::openapi::ErrorEnvelope)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Response> {
    let id = article_id(path)?;

    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_api()?;

    Ok(envelope::ok_empty("Article deleted successfully."))
}
