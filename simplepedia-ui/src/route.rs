//! URL routes of the browser front end
//!
//! The core only deals in navigation events; this module is the router
//! that maps those to paths and back.
//!
//! | Path                  | Route          |
//! |-----------------------|----------------|
//! | `/`, `/articles`      | `Index`        |
//! | `/articles/{id}`      | `Article(id)`  |
//! | `/articles/{id}/edit` | `Edit(id)`     |
//! | `/edit`               | `Create`       |

use std::fmt;

use serde::{Serialize, Serializer};
use simplepedia_common::ArticleId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Index,
    Article(ArticleId),
    Edit(ArticleId),
    Create,
}

impl Route {
    /// Parse a path; query string and trailing slash are ignored
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["articles"] => Some(Route::Index),
            ["articles", id] => parse_id(id).map(Route::Article),
            ["articles", id, "edit"] => parse_id(id).map(Route::Edit),
            ["edit"] => Some(Route::Create),
            _ => None,
        }
    }

    /// Article the route points at, if any
    pub fn article_id(&self) -> Option<ArticleId> {
        match self {
            Route::Article(id) | Route::Edit(id) => Some(*id),
            Route::Index | Route::Create => None,
        }
    }

    pub fn is_editor(&self) -> bool {
        matches!(self, Route::Edit(_) | Route::Create)
    }
}

fn parse_id(segment: &str) -> Option<ArticleId> {
    segment.parse::<i64>().ok().map(ArticleId)
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Index => f.write_str("/articles"),
            Route::Article(id) => write!(f, "/articles/{}", id),
            Route::Edit(id) => write!(f, "/articles/{}/edit", id),
            Route::Create => f.write_str("/edit"),
        }
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Index));
        assert_eq!(Route::parse("/articles"), Some(Route::Index));
        assert_eq!(Route::parse("/articles/"), Some(Route::Index));
        assert_eq!(Route::parse("/articles/12"), Some(Route::Article(ArticleId(12))));
        assert_eq!(Route::parse("/articles/12/edit"), Some(Route::Edit(ArticleId(12))));
        assert_eq!(Route::parse("/edit"), Some(Route::Create));
        assert_eq!(Route::parse("/articles/3?ref=home"), Some(Route::Article(ArticleId(3))));
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        assert_eq!(Route::parse("/articles/abc"), None);
        assert_eq!(Route::parse("/articles/1/delete"), None);
        assert_eq!(Route::parse("/admin"), None);
    }

    #[test]
    fn test_display_round_trips() {
        for route in [
            Route::Index,
            Route::Article(ArticleId(7)),
            Route::Edit(ArticleId(7)),
            Route::Create,
        ] {
            assert_eq!(Route::parse(&route.to_string()), Some(route));
        }
    }
}
