//! Wire types for the subset of the API a sweep touches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Editor id the API reports when an article was last touched by a
/// content-block propagation rather than a person.
pub const CONTENT_BLOCK_EDITOR_ID: i64 = -1;

/// A brand, from `/api/v2/brands.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub subdomain: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandsPage {
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub next_page: Option<String>,
}

/// A help center article from the incremental feed.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub html_url: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// An article translation. The first one is the primary translation and
/// carries the edit the sweep judges.
#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    pub updated_at: DateTime<Utc>,
    pub updated_by_id: i64,
}

/// A side-loaded user from the incremental feed.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// One page of the incremental articles feed with embedded users and
/// translations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticlePage {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub next_page: Option<String>,
}

/// A ticket hit from the tag search, only the fields dedup needs.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchTicket {
    pub subject: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub results: Vec<SearchTicket>,
    #[serde(default)]
    pub next_page: Option<String>,
}

/// Payload for ticket creation. Write-only; created tickets are never
/// read back.
#[derive(Debug, Clone, Serialize)]
pub struct NewTicket {
    pub subject: String,
    pub comment: NewComment,
    pub requester_id: i64,
    pub brand_id: i64,
    pub ticket_form_id: i64,
    pub group_id: i64,
    pub priority: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub html_body: String,
    /// Always false: QA comments stay internal.
    pub public: bool,
    pub author_id: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedTicketEnvelope {
    pub ticket: CreatedTicket,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedTicket {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_page_deserializes_embedded_data() {
        let json = r#"{
            "articles": [{
                "id": 1,
                "title": "How to reset a password",
                "html_url": "https://acme.zendesk.com/hc/en-us/articles/1",
                "translations": [{
                    "updated_at": "2026-08-01T10:00:00Z",
                    "updated_by_id": 9
                }]
            }],
            "users": [{"id": 9, "name": "Alice"}],
            "next_page": null
        }"#;
        let page: ArticlePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.articles.len(), 1);
        assert_eq!(page.articles[0].translations[0].updated_by_id, 9);
        assert_eq!(page.users[0].name, "Alice");
        assert!(page.next_page.is_none());
    }

    #[test]
    fn test_article_without_translations_deserializes() {
        let json = r#"{
            "articles": [{
                "id": 2,
                "title": "Orphan",
                "html_url": "https://acme.zendesk.com/hc/en-us/articles/2"
            }]
        }"#;
        let page: ArticlePage = serde_json::from_str(json).unwrap();
        assert!(page.articles[0].translations.is_empty());
        assert!(page.users.is_empty());
    }

    #[test]
    fn test_new_ticket_serializes_routing_fields() {
        let ticket = NewTicket {
            subject: "Quality Assessment: X".to_string(),
            comment: NewComment {
                html_body: "<p>body</p>".to_string(),
                public: false,
                author_id: 42,
            },
            requester_id: 9,
            brand_id: 100,
            ticket_form_id: 200,
            group_id: 300,
            priority: "normal".to_string(),
            tags: vec!["qa-review-2026-08-01".to_string()],
        };
        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["ticket_form_id"], 200);
        assert_eq!(json["comment"]["public"], false);
        assert_eq!(json["tags"][0], "qa-review-2026-08-01");
    }
}
