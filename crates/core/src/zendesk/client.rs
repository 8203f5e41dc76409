//! Typed API surface over the transport.

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ZendeskConfig;

use super::transport::Transport;
use super::types::{
    ArticlePage, Brand, BrandsPage, CreatedTicketEnvelope, NewTicket, SearchPage,
};
use super::TransportError;

/// The read/write surface of the helpdesk API used by a sweep.
///
/// The sweep pipeline only ever sees this trait; production uses
/// [`ZendeskClient`], tests use `testing::MockHelpdesk`.
#[async_trait]
pub trait HelpdeskApi: Send + Sync {
    /// All brands on the instance.
    async fn list_brands(&self) -> Result<Vec<Brand>, TransportError>;

    /// One page of a brand's incremental article feed, with embedded
    /// users and translations. Callers follow `next_page` themselves
    /// (after normalization).
    async fn article_page(&self, url: &str) -> Result<ArticlePage, TransportError>;

    /// Subjects of every ticket carrying the given tag.
    async fn ticket_subjects_tagged(&self, tag: &str) -> Result<Vec<String>, TransportError>;

    /// Create a ticket on behalf of the given user id, returning the new
    /// ticket id.
    async fn create_ticket(
        &self,
        ticket: &NewTicket,
        on_behalf_of: i64,
    ) -> Result<i64, TransportError>;
}

/// Production implementation backed by [`Transport`].
pub struct ZendeskClient {
    transport: Transport,
    subdomain: String,
}

impl ZendeskClient {
    pub fn new(config: &ZendeskConfig) -> Result<Self, TransportError> {
        Ok(Self {
            transport: Transport::new(&config.token, config.max_rate_limit_retries)?,
            subdomain: config.subdomain.clone(),
        })
    }

    fn base_url(&self) -> String {
        format!("https://{}.zendesk.com/api/v2", self.subdomain)
    }

    /// Entry URL for a brand's incremental article feed, scoped to the
    /// brand's own subdomain and filtered server-side by the cutoff.
    pub fn incremental_articles_url(brand_subdomain: &str, start_time: i64) -> String {
        format!(
            "https://{}.zendesk.com/api/v2/help_center/incremental/articles.json?start_time={}&include=users,translations",
            brand_subdomain, start_time
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TransportError> {
        let value = self.transport.request(Method::GET, url, None, None).await?;
        serde_json::from_value(value).map_err(|e| TransportError::Parse(e.to_string()))
    }
}

#[async_trait]
impl HelpdeskApi for ZendeskClient {
    async fn list_brands(&self) -> Result<Vec<Brand>, TransportError> {
        let mut url = format!("{}/brands.json", self.base_url());
        let mut brands = Vec::new();
        loop {
            let page: BrandsPage = self.get_json(&url).await?;
            brands.extend(page.brands);
            match page.next_page {
                Some(next) => url = next,
                None => break,
            }
        }
        debug!(brands = brands.len(), "Listed brands");
        Ok(brands)
    }

    async fn article_page(&self, url: &str) -> Result<ArticlePage, TransportError> {
        self.get_json(url).await
    }

    async fn ticket_subjects_tagged(&self, tag: &str) -> Result<Vec<String>, TransportError> {
        let query = format!("type:ticket tags:{}", tag);
        let mut url = format!(
            "{}/search.json?query={}",
            self.base_url(),
            urlencoding::encode(&query)
        );
        let mut subjects = Vec::new();
        loop {
            let page: SearchPage = self.get_json(&url).await?;
            subjects.extend(page.results.into_iter().map(|t| t.subject));
            match page.next_page {
                Some(next) => url = next,
                None => break,
            }
        }
        debug!(tag = tag, subjects = subjects.len(), "Fetched tagged ticket subjects");
        Ok(subjects)
    }

    async fn create_ticket(
        &self,
        ticket: &NewTicket,
        on_behalf_of: i64,
    ) -> Result<i64, TransportError> {
        let url = format!("{}/tickets.json", self.base_url());
        let body = serde_json::json!({ "ticket": ticket });
        let identity = on_behalf_of.to_string();
        let value = self
            .transport
            .request(Method::POST, &url, Some(&body), Some(&identity))
            .await?;
        let created: CreatedTicketEnvelope =
            serde_json::from_value(value).map_err(|e| TransportError::Parse(e.to_string()))?;
        Ok(created.ticket.id)
    }
}
