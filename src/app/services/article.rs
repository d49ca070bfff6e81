use std::fs;
use std::path::Path;

use crate::app::infrastructure::error::Result;

const SAMPLE_ARTICLE: &str = include_str!("../../../assets/sample_article.txt");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub body: String,
}

impl Article {
    /// Split plain text into a title (first non-empty line) and a body
    pub fn parse(text: &str) -> Self {
        let mut lines = text.lines();
        let title = lines
            .by_ref()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("Untitled")
            .to_string();
        let body = lines
            .collect::<Vec<_>>()
            .join("\n")
            .trim_matches('\n')
            .to_string();
        Self { title, body }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    pub fn sample() -> Self {
        Self::parse(SAMPLE_ARTICLE)
    }

    /// Load the configured article, falling back to the sample on any error
    pub fn load_or_sample(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::sample();
        };
        match Self::load(path) {
            Ok(article) => {
                tracing::info!(path = %path.display(), title = %article.title, "article loaded");
                article
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load article, showing sample");
                Self::sample()
            }
        }
    }

    /// Text as shown by the reader: title, blank line, body
    pub fn display_text(&self) -> String {
        if self.body.is_empty() {
            self.title.clone()
        } else {
            format!("{}\n\n{}", self.title, self.body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_title_and_body() {
        let article = Article::parse("\n\n  Morning Notes  \nFirst paragraph.\n\nSecond paragraph.\n");
        assert_eq!(article.title, "Morning Notes");
        assert_eq!(article.body, "First paragraph.\n\nSecond paragraph.");
    }

    #[test]
    fn test_parse_empty_text() {
        let article = Article::parse("");
        assert_eq!(article.title, "Untitled");
        assert!(article.body.is_empty());
        assert_eq!(article.display_text(), "Untitled");
    }

    #[test]
    fn test_sample_article_has_content() {
        let article = Article::sample();
        assert!(!article.title.is_empty());
        assert!(!article.body.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Title line\nBody text").unwrap();
        let article = Article::load(file.path()).unwrap();
        assert_eq!(article.title, "Title line");
        assert_eq!(article.display_text(), "Title line\n\nBody text");
    }

    #[test]
    fn test_missing_file_falls_back_to_sample() {
        let dir = tempfile::tempdir().unwrap();
        let article = Article::load_or_sample(Some(&dir.path().join("nope.txt")));
        assert_eq!(article, Article::sample());
        assert_eq!(Article::load_or_sample(None), Article::sample());
    }
}
