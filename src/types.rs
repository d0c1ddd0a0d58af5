use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A document field that full-text search can be scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Description,
    Content,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Content => "content",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        match s {
            "title" => Some(Self::Title),
            "description" => Some(Self::Description),
            "content" => Some(Self::Content),
            _ => None,
        }
    }
}

/// One of the upstream API's accepted result orderings, paired with the
/// label shown to people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortMethod {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ArticlesResponse {
    pub status: String,
    #[serde(rename = "totalResults", default)]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub source: ArticleSource,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_field_slug_round_trip() {
        for field in [SearchField::Title, SearchField::Description, SearchField::Content] {
            assert_eq!(SearchField::from_slug(field.as_str()), Some(field));
        }
        assert_eq!(SearchField::from_slug("body"), None);
    }

    #[test]
    fn search_field_serializes_lowercase() {
        let json = serde_json::to_string(&SearchField::Title).unwrap();
        assert_eq!(json, "\"title\"");
    }

    #[test]
    fn articles_response_deserializes_upstream_envelope() {
        let body = serde_json::json!({
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": { "id": "the-verge", "name": "The Verge" },
                "author": "Jane Doe",
                "title": "Rust 2.0 announced",
                "description": "A short summary.",
                "url": "https://example.test/article",
                "urlToImage": "https://example.test/banner.png",
                "publishedAt": "2024-11-20T08:00:00Z",
                "content": "Full text."
            }]
        });

        let parsed: ArticlesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.status, "ok");
        assert_eq!(parsed.total_results, 1);
        assert_eq!(parsed.articles.len(), 1);

        let article = &parsed.articles[0];
        assert_eq!(article.source.name, "The Verge");
        assert_eq!(article.published_at.timestamp(), 1_732_089_600);
    }

    #[test]
    fn articles_response_tolerates_missing_optionals() {
        let body = serde_json::json!({
            "status": "ok",
            "totalResults": 0,
            "articles": [{
                "source": { "id": null, "name": "Wire Service" },
                "author": null,
                "title": "Untitled",
                "description": null,
                "url": "https://example.test/a",
                "urlToImage": null,
                "publishedAt": "2024-01-01T00:00:00Z",
                "content": null
            }]
        });

        let parsed: ArticlesResponse = serde_json::from_value(body).unwrap();
        assert!(parsed.articles[0].author.is_none());
        assert!(parsed.articles[0].source.id.is_none());
    }
}
