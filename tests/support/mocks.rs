// tests/support/mocks.rs
use async_trait::async_trait;

use kawaraban::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use kawaraban::domain::errors::{DomainError, DomainResult};

fn unavailable() -> DomainError {
    DomainError::Persistence("database unavailable".into())
}

/// 常に永続化エラーを返す書き込みリポジトリ
pub struct FailingArticleWrite;

#[async_trait]
impl ArticleWriteRepository for FailingArticleWrite {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(unavailable())
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        Err(unavailable())
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        Err(unavailable())
    }
}

/// 常に永続化エラーを返す読み取りリポジトリ
pub struct FailingArticleRead;

#[async_trait]
impl ArticleReadRepository for FailingArticleRead {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(unavailable())
    }

    async fn list(
        &self,
        _author: Option<&str>,
        _page: u32,
        _page_size: u32,
    ) -> DomainResult<Vec<Article>> {
        Err(unavailable())
    }
}
