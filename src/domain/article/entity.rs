// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleAuthor, ArticleContent, ArticleId, ArticleTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub author: ArticleAuthor,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub author: ArticleAuthor,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(
        title: ArticleTitle,
        content: ArticleContent,
        author: ArticleAuthor,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            content,
            author,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update: only the fields that are `Some` change in the store.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    pub author: Option<ArticleAuthor>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            author: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_author(mut self, author: ArticleAuthor) -> Self {
        self.author = Some(author);
        self
    }

    /// True when no field was supplied; such an update must not touch the row.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn title() -> ArticleTitle {
        ArticleTitle::new("Sample Article").unwrap()
    }

    fn content() -> ArticleContent {
        ArticleContent::new("a".repeat(60)).unwrap()
    }

    fn author() -> ArticleAuthor {
        ArticleAuthor::new("John Doe").unwrap()
    }

    #[test]
    fn new_article_shares_one_timestamp() {
        let now = Utc::now();
        let article = NewArticle::new(title(), content(), author(), now);
        assert_eq!(article.created_at, now);
        assert_eq!(article.updated_at, now);
    }

    #[test]
    fn update_starts_empty() {
        let update = ArticleUpdate::new(ArticleId::new(1).unwrap(), Utc::now());
        assert!(update.is_empty());
    }

    #[test]
    fn update_builders_set_only_their_field() {
        let update = ArticleUpdate::new(ArticleId::new(1).unwrap(), Utc::now()).with_title(title());
        assert!(!update.is_empty());
        assert!(update.title.is_some());
        assert!(update.content.is_none());
        assert!(update.author.is_none());
    }
}
