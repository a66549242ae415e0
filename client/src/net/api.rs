//! REST client for the campaign backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with "not available on server";
//! campaign requests are only issued after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Any non-success response becomes a [`RequestError`] carrying a
//! human-readable message. Create, publish, and pause read the backend's
//! JSON `error` field and fall back to a fixed message; the list call only
//! ever reports its fixed message. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use super::types::{Campaign, CampaignAck, CampaignFields};

pub const CREATE_FAILED: &str = "Failed to create campaign";
pub const FETCH_FAILED: &str = "Failed to fetch campaigns";
pub const PUBLISH_FAILED: &str = "Failed to publish campaign";
pub const PAUSE_FAILED: &str = "Failed to pause campaign";

/// A failed campaign request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// URLs of the backend campaign routes under one base address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` list / `POST` create.
    #[must_use]
    pub fn campaigns(&self) -> String {
        format!("{}/campaigns", self.base_url)
    }

    #[must_use]
    pub fn publish(&self, campaign_id: &str) -> String {
        format!("{}/campaigns/{campaign_id}/publish", self.base_url)
    }

    #[must_use]
    pub fn pause(&self, campaign_id: &str) -> String {
        format!("{}/campaigns/{campaign_id}/pause", self.base_url)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Message for a failed create/publish/pause response body.
///
/// Uses the body's `error` string when present and non-empty, otherwise
/// `fallback`. Bodies that are not JSON also get `fallback`.
pub fn error_message_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

/// Decode a success body from create, publish, or pause.
///
/// Any JSON value is accepted; fields that do not match [`CampaignAck`] are
/// left empty. Only a body that is not JSON at all is an error.
///
/// # Errors
///
/// Returns the JSON parse error message.
pub fn ack_from_body(body: &str) -> Result<CampaignAck, RequestError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| RequestError::new(e.to_string()))?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// The four backend operations the UI issues.
///
/// Futures are not `Send`: browser fetches are bound to the JS event loop.
#[async_trait::async_trait(?Send)]
pub trait CampaignApi {
    /// `POST /campaigns` with the full form record.
    ///
    /// # Errors
    ///
    /// Returns the backend's `error` message, or [`CREATE_FAILED`].
    async fn create_campaign(&self, fields: &CampaignFields) -> Result<CampaignAck, RequestError>;

    /// `GET /campaigns`, in backend order.
    ///
    /// # Errors
    ///
    /// Returns [`FETCH_FAILED`] for any non-success status.
    async fn get_campaigns(&self) -> Result<Vec<Campaign>, RequestError>;

    /// `POST /campaigns/{id}/publish` with no body.
    ///
    /// # Errors
    ///
    /// Returns the backend's `error` message, or [`PUBLISH_FAILED`].
    async fn publish_campaign(&self, campaign_id: &str) -> Result<CampaignAck, RequestError>;

    /// `POST /campaigns/{id}/pause` with no body.
    ///
    /// # Errors
    ///
    /// Returns the backend's `error` message, or [`PAUSE_FAILED`].
    async fn pause_campaign(&self, campaign_id: &str) -> Result<CampaignAck, RequestError>;
}

/// [`CampaignApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpCampaignApi {
    endpoints: Endpoints,
}

impl HttpCampaignApi {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { endpoints: Endpoints::new(base_url) }
    }

    /// Client pointed at the build-configured backend.
    #[must_use]
    pub fn from_config() -> Self {
        Self::new(&crate::config::api_base_url())
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> RequestError {
    RequestError::new("not available on server")
}

#[cfg(feature = "hydrate")]
fn transport_error(err: gloo_net::Error) -> RequestError {
    log::warn!("campaign request failed: {err}");
    RequestError::new(err.to_string())
}

/// Decode an acknowledgement, or turn a failure body into a [`RequestError`].
#[cfg(feature = "hydrate")]
async fn read_ack(resp: gloo_net::http::Response, fallback: &str) -> Result<CampaignAck, RequestError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let err = RequestError::new(error_message_from_body(&body, fallback));
        log::warn!("{} -> {status}: {err}", resp.url());
        return Err(err);
    }
    let body = resp.text().await.map_err(transport_error)?;
    ack_from_body(&body).inspect_err(|err| log::warn!("{} -> unreadable body: {err}", resp.url()))
}

#[async_trait::async_trait(?Send)]
impl CampaignApi for HttpCampaignApi {
    async fn create_campaign(&self, fields: &CampaignFields) -> Result<CampaignAck, RequestError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoints.campaigns())
                .json(fields)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            read_ack(resp, CREATE_FAILED).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = fields;
            Err(unavailable())
        }
    }

    async fn get_campaigns(&self) -> Result<Vec<Campaign>, RequestError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoints.campaigns())
                .send()
                .await
                .map_err(transport_error)?;
            if !resp.ok() {
                log::warn!("{} -> {}", resp.url(), resp.status());
                return Err(RequestError::new(FETCH_FAILED));
            }
            resp.json::<Vec<Campaign>>().await.map_err(transport_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(unavailable())
        }
    }

    async fn publish_campaign(&self, campaign_id: &str) -> Result<CampaignAck, RequestError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoints.publish(campaign_id))
                .send()
                .await
                .map_err(transport_error)?;
            read_ack(resp, PUBLISH_FAILED).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = campaign_id;
            Err(unavailable())
        }
    }

    async fn pause_campaign(&self, campaign_id: &str) -> Result<CampaignAck, RequestError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoints.pause(campaign_id))
                .send()
                .await
                .map_err(transport_error)?;
            read_ack(resp, PAUSE_FAILED).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = campaign_id;
            Err(unavailable())
        }
    }
}
