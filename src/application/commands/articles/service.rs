// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::article::{Article, ArticleId, ArticleReadRepository, ArticleWriteRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }

    /// Resolve a raw id into an existing article or a not-found error.
    /// Ids the store can never hold (zero, negative) take the same path.
    pub(super) async fn fetch_article(&self, id: i64) -> ApplicationResult<Article> {
        let id =
            ArticleId::new(id).map_err(|_| ApplicationError::not_found("article not found"))?;
        Ok(self.read_repo.find_required(id).await?)
    }
}
