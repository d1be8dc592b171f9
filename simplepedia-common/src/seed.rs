//! Seed fixture loading
//!
//! The initial collection is a JSON array of articles, read once at startup.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::editor::can_save;
use crate::error::{Error, Result};
use crate::models::{Article, Collection};

/// Parse a seed fixture from JSON text
pub fn parse_seed(json: &str) -> Result<Collection> {
    let articles: Vec<Article> = serde_json::from_str(json)?;
    validate(&articles)?;
    Ok(Collection::new(articles))
}

/// Read and parse a seed fixture file
pub fn load_seed(path: &Path) -> Result<Collection> {
    let json = std::fs::read_to_string(path)?;
    let collection = parse_seed(&json)?;
    info!("Loaded {} articles from {}", collection.len(), path.display());
    Ok(collection)
}

fn validate(articles: &[Article]) -> Result<()> {
    let mut seen = HashSet::with_capacity(articles.len());
    for article in articles {
        if !seen.insert(article.id) {
            return Err(Error::InvalidInput(format!(
                "duplicate article id {} in seed",
                article.id
            )));
        }
        if !can_save(&article.title) {
            return Err(Error::InvalidInput(format!(
                "article {} has an empty title",
                article.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArticleId;
    use std::io::Write;

    const SEED: &str = r#"[
        {"id": 1, "title": "Dalek", "contents": "Mutants in armour", "edited": "2016-11-19T22:57:32.639Z"},
        {"id": 2, "title": "Dominators", "contents": "Conquerors", "edited": "2016-11-19T22:57:32.639Z"}
    ]"#;

    #[test]
    fn test_parse_seed() {
        let c = parse_seed(SEED).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(ArticleId(2)).unwrap().title, "Dominators");
    }

    #[test]
    fn test_parse_empty_seed() {
        assert!(parse_seed("[]").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": 1, "title": "A", "contents": "", "edited": "2016-11-19T22:57:32.639Z"},
            {"id": 1, "title": "B", "contents": "", "edited": "2016-11-19T22:57:32.639Z"}
        ]"#;
        assert!(matches!(parse_seed(json), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_blank_title_rejected() {
        let json = r#"[{"id": 1, "title": "  ", "contents": "", "edited": "2016-11-19T22:57:32.639Z"}]"#;
        assert!(matches!(parse_seed(json), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_missing_field_is_json_error() {
        let json = r#"[{"id": 1, "title": "A"}]"#;
        assert!(matches!(parse_seed(json), Err(Error::Json(_))));
    }

    #[test]
    fn test_load_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();
        let c = load_seed(file.path()).unwrap();
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_load_seed_missing_file() {
        let err = load_seed(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
