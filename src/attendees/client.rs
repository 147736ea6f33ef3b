use crate::attendees::models::{AttendeePage, PageRequest};
use crate::config::Config;
use reqwest::{Client, Error as ReqwestError, StatusCode, Url};
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Error, Debug)]
pub enum AttendeeError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Event not found")]
    EventNotFound,
    #[error("Unexpected response status: {0}")]
    Status(StatusCode),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl AttendeeError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, AttendeeError::Request(e) if e.is_timeout())
    }
}

/// Client for the attendees collection of a single event
#[derive(Clone, Debug)]
pub struct AttendeeClient {
    client: Client,
    base_url: Url,
    event_id: String,
}

impl AttendeeClient {
    pub fn new(config: &Config) -> Result<Self, AttendeeError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent("pass-in/0.1")
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            event_id: config.event_id.clone(),
        })
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    /// URL of the attendees collection for the given page request
    pub fn attendees_url(&self, request: &PageRequest) -> Result<Url, AttendeeError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AttendeeError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["events", self.event_id.as_str(), "attendees"]);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("pageIndex", &request.page_index.to_string());
            if let Some(term) = &request.query {
                query.append_pair("query", term);
            }
        }

        Ok(url)
    }

    /// Fetch one page of attendees
    pub async fn fetch_page(&self, request: &PageRequest) -> Result<AttendeePage, AttendeeError> {
        let url = self.attendees_url(request)?;
        debug!("📡 Attendees API: GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            // Keep the raw body around so parse failures can be logged
            let body = response.text().await?;

            let page: AttendeePage = serde_json::from_str(&body).map_err(|e| {
                error!("JSON parsing error for event {}: {}", self.event_id, e);
                error!("Raw response: {}", body);
                e
            })?;

            debug!(
                "✓ Page {} returned {} of {} attendee(s)",
                request.page_index,
                page.attendees.len(),
                page.total
            );
            Ok(page)
        } else if status == StatusCode::NOT_FOUND {
            warn!("✗ Event not found: {}", self.event_id);
            Err(AttendeeError::EventNotFound)
        } else {
            warn!("✗ Attendees API error: {}", status);
            Err(AttendeeError::Status(status))
        }
    }
}
