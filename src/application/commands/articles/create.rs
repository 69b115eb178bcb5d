// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        validation::FieldErrors,
    },
    domain::article::{ArticleAuthor, ArticleContent, ArticleTitle, NewArticle},
};

/// Input for article creation. Fields arrive as options so a missing field
/// and an empty one share the same validation path.
pub struct CreateArticleCommand {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut errors = FieldErrors::new();
        let title = errors.check("title", ArticleTitle::new(command.title.unwrap_or_default()));
        let content = errors.check(
            "content",
            ArticleContent::new(command.content.unwrap_or_default()),
        );
        let author = errors.check(
            "author",
            ArticleAuthor::new(command.author.unwrap_or_default()),
        );

        let (Some(title), Some(content), Some(author)) = (title, content, author) else {
            return Err(ApplicationError::Validation(errors));
        };

        let article = NewArticle::new(title, content, author, self.clock.now());
        let created = self.write_repo.insert(article).await?;
        Ok(created.into())
    }
}
