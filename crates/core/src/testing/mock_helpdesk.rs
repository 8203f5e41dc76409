//! Mock helpdesk for testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::zendesk::{ArticlePage, Brand, HelpdeskApi, NewTicket, TransportError};

/// A recorded ticket creation for test assertions.
#[derive(Debug, Clone)]
pub struct CreatedTicketRecord {
    /// The payload that was submitted.
    pub ticket: NewTicket,
    /// The identity the submission impersonated.
    pub on_behalf_of: i64,
    /// The id the mock assigned.
    pub id: i64,
}

/// Mock implementation of the `HelpdeskApi` trait.
///
/// Provides controllable behavior for testing:
/// - Configurable brands, article pages (keyed by URL) and existing
///   ticket subjects
/// - Recorded ticket creations for assertions
/// - Injectable failures per call site
pub struct MockHelpdesk {
    brands: Arc<RwLock<Vec<Brand>>>,
    /// Incremental feed pages, keyed by the exact URL the fetcher asks for.
    pages: Arc<RwLock<HashMap<String, ArticlePage>>>,
    subjects: Arc<RwLock<Vec<String>>>,
    created: Arc<RwLock<Vec<CreatedTicketRecord>>>,
    next_ticket_id: Arc<RwLock<i64>>,
    /// If set, the next brand listing fails with this error.
    next_brands_error: Arc<RwLock<Option<TransportError>>>,
    /// If set, the next subject search fails with this error.
    next_search_error: Arc<RwLock<Option<TransportError>>>,
    /// URLs whose page fetch always fails with a 500.
    failing_pages: Arc<RwLock<HashMap<String, String>>>,
    /// Subjects whose ticket creation always fails with a 500.
    failing_subjects: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for MockHelpdesk {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHelpdesk {
    pub fn new() -> Self {
        Self {
            brands: Arc::new(RwLock::new(Vec::new())),
            pages: Arc::new(RwLock::new(HashMap::new())),
            subjects: Arc::new(RwLock::new(Vec::new())),
            created: Arc::new(RwLock::new(Vec::new())),
            next_ticket_id: Arc::new(RwLock::new(9000)),
            next_brands_error: Arc::new(RwLock::new(None)),
            next_search_error: Arc::new(RwLock::new(None)),
            failing_pages: Arc::new(RwLock::new(HashMap::new())),
            failing_subjects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Set the brands returned by `list_brands`.
    pub async fn set_brands(&self, brands: Vec<Brand>) {
        *self.brands.write().await = brands;
    }

    /// Register the page returned for an exact URL.
    pub async fn add_page(&self, url: impl Into<String>, page: ArticlePage) {
        self.pages.write().await.insert(url.into(), page);
    }

    /// Set the existing ticket subjects returned by the tag search.
    pub async fn set_existing_subjects(&self, subjects: Vec<String>) {
        *self.subjects.write().await = subjects;
    }

    /// Configure the next `list_brands` call to fail.
    pub async fn set_next_brands_error(&self, error: TransportError) {
        *self.next_brands_error.write().await = Some(error);
    }

    /// Configure the next `ticket_subjects_tagged` call to fail.
    pub async fn set_next_search_error(&self, error: TransportError) {
        *self.next_search_error.write().await = Some(error);
    }

    /// Make fetches of the given URL fail with a 500.
    pub async fn fail_page(&self, url: impl Into<String>, message: impl Into<String>) {
        self.failing_pages
            .write()
            .await
            .insert(url.into(), message.into());
    }

    /// Make creations of tickets with the given subject fail with a 500.
    pub async fn fail_subject(&self, subject: impl Into<String>, message: impl Into<String>) {
        self.failing_subjects
            .write()
            .await
            .insert(subject.into(), message.into());
    }

    /// Tickets recorded by `create_ticket`, in submission order.
    pub async fn created_tickets(&self) -> Vec<CreatedTicketRecord> {
        self.created.read().await.clone()
    }

    /// Number of write calls that reached the mock.
    pub async fn create_call_count(&self) -> usize {
        self.created.read().await.len()
    }
}

#[async_trait]
impl HelpdeskApi for MockHelpdesk {
    async fn list_brands(&self) -> Result<Vec<Brand>, TransportError> {
        if let Some(err) = self.next_brands_error.write().await.take() {
            return Err(err);
        }
        Ok(self.brands.read().await.clone())
    }

    async fn article_page(&self, url: &str) -> Result<ArticlePage, TransportError> {
        if let Some(message) = self.failing_pages.read().await.get(url) {
            return Err(TransportError::Status {
                status: 500,
                body: message.clone(),
            });
        }
        self.pages
            .read()
            .await
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::Status {
                status: 404,
                body: format!("no page registered for {}", url),
            })
    }

    async fn ticket_subjects_tagged(&self, _tag: &str) -> Result<Vec<String>, TransportError> {
        if let Some(err) = self.next_search_error.write().await.take() {
            return Err(err);
        }
        Ok(self.subjects.read().await.clone())
    }

    async fn create_ticket(
        &self,
        ticket: &NewTicket,
        on_behalf_of: i64,
    ) -> Result<i64, TransportError> {
        if let Some(message) = self.failing_subjects.read().await.get(&ticket.subject) {
            return Err(TransportError::Status {
                status: 500,
                body: message.clone(),
            });
        }

        let mut next_id = self.next_ticket_id.write().await;
        let id = *next_id;
        *next_id += 1;

        self.created.write().await.push(CreatedTicketRecord {
            ticket: ticket.clone(),
            on_behalf_of,
            id,
        });
        Ok(id)
    }
}
