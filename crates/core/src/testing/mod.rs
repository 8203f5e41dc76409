//! Testing utilities and mock implementations.
//!
//! `MockHelpdesk` stands in for the real instance behind the
//! `HelpdeskApi` seam, allowing full sweep tests without network access.

mod mock_helpdesk;

pub use mock_helpdesk::{CreatedTicketRecord, MockHelpdesk};

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::{DateTime, Utc};

    use crate::zendesk::{Article, ArticlePage, Brand, NewComment, NewTicket, Translation, User};

    /// Create a test brand.
    pub fn brand(id: i64, name: &str, subdomain: &str, active: bool) -> Brand {
        Brand {
            id,
            name: name.to_string(),
            subdomain: subdomain.to_string(),
            active,
        }
    }

    /// Create a test user.
    pub fn user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
        }
    }

    /// Create a test article with a single translation.
    pub fn article(id: i64, title: &str, editor_id: i64, updated_at: DateTime<Utc>) -> Article {
        Article {
            id,
            title: title.to_string(),
            html_url: format!("https://acme.zendesk.com/hc/en-us/articles/{}", id),
            translations: vec![Translation {
                updated_at,
                updated_by_id: editor_id,
            }],
        }
    }

    /// Create an incremental feed page.
    pub fn page(articles: Vec<Article>, users: Vec<User>, next_page: Option<&str>) -> ArticlePage {
        ArticlePage {
            articles,
            users,
            next_page: next_page.map(str::to_string),
        }
    }

    /// Create a minimal ticket payload with the given subject.
    pub fn new_ticket(subject: &str) -> NewTicket {
        NewTicket {
            subject: subject.to_string(),
            comment: NewComment {
                html_body: "<p>test</p>".to_string(),
                public: false,
                author_id: 42,
            },
            requester_id: 9,
            brand_id: 100,
            ticket_form_id: 200,
            group_id: 300,
            priority: "normal".to_string(),
            tags: vec!["qa-review-2026-08-01".to_string()],
        }
    }
}
