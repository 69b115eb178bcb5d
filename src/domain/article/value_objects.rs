use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const MIN_CONTENT_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "title must be a non-empty string".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    /// Length is counted in characters, not bytes, so multi-byte scripts are
    /// not penalized.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() < MIN_CONTENT_CHARS {
            return Err(DomainError::Validation(format!(
                "content must be at least {MIN_CONTENT_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleContent> for String {
    fn from(value: ArticleContent) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleAuthor(String);

impl ArticleAuthor {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "author must be a non-empty string".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleAuthor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleAuthor> for String {
    fn from(value: ArticleAuthor) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_id_rejects_non_positive() {
        assert!(ArticleId::new(0).is_err());
        assert!(ArticleId::new(-7).is_err());
        assert_eq!(i64::from(ArticleId::new(3).unwrap()), 3);
    }

    #[test]
    fn title_rejects_empty_and_whitespace() {
        assert!(ArticleTitle::new("").is_err());
        assert!(ArticleTitle::new("   ").is_err());
        assert_eq!(ArticleTitle::new("Hello").unwrap().as_str(), "Hello");
    }

    #[test]
    fn content_enforces_minimum_length() {
        assert!(ArticleContent::new("too short").is_err());
        let exact = "x".repeat(MIN_CONTENT_CHARS);
        assert!(ArticleContent::new(exact).is_ok());
        let one_less = "x".repeat(MIN_CONTENT_CHARS - 1);
        assert!(ArticleContent::new(one_less).is_err());
    }

    #[test]
    fn content_counts_characters_not_bytes() {
        // 50 hiragana characters are 150 UTF-8 bytes but still valid content.
        let multibyte = "あ".repeat(MIN_CONTENT_CHARS);
        assert!(ArticleContent::new(multibyte).is_ok());
        let short_multibyte = "あ".repeat(MIN_CONTENT_CHARS - 1);
        assert!(ArticleContent::new(short_multibyte).is_err());
    }

    #[test]
    fn author_rejects_empty() {
        assert!(ArticleAuthor::new("").is_err());
        assert_eq!(ArticleAuthor::new("Jane Doe").unwrap().as_str(), "Jane Doe");
    }
}
