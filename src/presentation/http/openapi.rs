use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::{dto::ArticleDto, validation::FieldErrors};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

// Concrete envelope shapes for the generated document; the runtime type is
// generic and would not name its instantiations usefully.

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleEnvelope {
    pub success: bool,
    pub data: Option<ArticleDto>,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleListEnvelope {
    pub success: bool,
    pub data: Vec<ArticleDto>,
    pub message: String,
}

/// Delete responses carry no payload; `data` is always null.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedEnvelope {
    pub success: bool,
    #[schema(value_type = Object)]
    pub data: Option<serde_json::Value>,
    pub message: String,
}

/// Failure shape; `data` holds the field-error map on 422 and is null
/// otherwise.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub data: Option<FieldErrors>,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleEnvelope,
            ArticleListEnvelope,
            DeletedEnvelope,
            ErrorEnvelope,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::application::dto::ArticleDto,
            crate::application::validation::FieldErrors
        )
    ),
    tags(
        (name = "Articles", description = "Article management endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Kawaraban API",
        description = "Article service with uniform response envelopes",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}
