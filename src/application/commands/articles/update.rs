use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::article::{ArticleAuthor, ArticleContent, ArticleTitle, ArticleUpdate},
};

/// Partial update: absent fields keep their stored value; present fields are
/// validated with the same rules as creation.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.fetch_article(command.id).await?;

        let mut errors = FieldErrors::new();
        let title = command
            .title
            .and_then(|value| errors.check("title", ArticleTitle::new(value)));
        let content = command
            .content
            .and_then(|value| errors.check("content", ArticleContent::new(value)));
        let author = command
            .author
            .and_then(|value| errors.check("author", ArticleAuthor::new(value)));

        if !errors.is_empty() {
            return Err(ApplicationError::Validation(errors));
        }

        let mut update = ArticleUpdate::new(article.id, self.clock.now());
        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(content) = content {
            update = update.with_content(content);
        }
        if let Some(author) = author {
            update = update.with_author(author);
        }

        // Nothing supplied: no write, the stored timestamps stay untouched.
        if update.is_empty() {
            return Ok(article.into());
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
