use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Page through articles, optionally restricted to an exact author match.
    /// `page` is 1-based; implementations return at most `page_size` records.
    async fn list(
        &self,
        author: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> DomainResult<Vec<Article>>;

    /// Lookup that treats absence as an error. Every id-addressed operation
    /// calls this first so the missing-record path is decided in one place.
    async fn find_required(&self, id: ArticleId) -> DomainResult<Article> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))
    }
}
