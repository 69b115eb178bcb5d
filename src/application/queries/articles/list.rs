use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct ListArticlesQuery {
    pub author: Option<String>,
    pub page: u32,
}

impl ArticleQueryService {
    /// Lists articles newest first, optionally narrowed to one author.
    ///
    /// Pages are fixed at 25 entries; a page past the end yields an empty
    /// list rather than an error.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        const PAGE_SIZE: u32 = 25;

        let page = query.page.max(1);
        let records = self
            .read_repo
            .list(query.author.as_deref(), page, PAGE_SIZE)
            .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}
