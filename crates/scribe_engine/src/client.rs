use std::time::Duration;

use scribe_logging::{scribe_debug, scribe_warn};
use serde::Serialize;

use crate::normalize;
use crate::types::{DraftArticle, GenerateRequest, PublishPayload, WebhookError};

#[derive(Debug, Clone)]
pub struct WebhookSettings {
    pub connect_timeout: Duration,
    /// Generous ceiling; generation flows proxy an LLM call.
    pub request_timeout: Duration,
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }
}

#[async_trait::async_trait]
pub trait WebhookClient: Send + Sync {
    async fn generate(
        &self,
        request: &GenerateRequest,
        url: &str,
    ) -> Result<String, WebhookError>;

    async fn publish(
        &self,
        payload: &PublishPayload,
        url: &str,
    ) -> Result<DraftArticle, WebhookError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestWebhookClient {
    http: reqwest::Client,
}

impl ReqwestWebhookClient {
    pub fn new(settings: WebhookSettings) -> Result<Self, WebhookError> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| WebhookError::network(err.to_string()))?;
        Ok(Self { http })
    }

    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<String, WebhookError> {
        // The URLs are user-supplied free text; a malformed one is the same
        // class of mistake as an unreachable host.
        let parsed =
            reqwest::Url::parse(url).map_err(|err| WebhookError::network(err.to_string()))?;

        scribe_debug!("POST {}", parsed);
        let response = self
            .http
            .post(parsed)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            scribe_warn!("webhook {} answered {}", url, status);
            return Err(WebhookError::http(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        response.text().await.map_err(map_transport_error)
    }
}

#[async_trait::async_trait]
impl WebhookClient for ReqwestWebhookClient {
    async fn generate(
        &self,
        request: &GenerateRequest,
        url: &str,
    ) -> Result<String, WebhookError> {
        let raw = self.post_json(url, request).await?;
        Ok(normalize::article_text(&raw))
    }

    async fn publish(
        &self,
        payload: &PublishPayload,
        url: &str,
    ) -> Result<DraftArticle, WebhookError> {
        let raw = self.post_json(url, payload).await?;
        normalize::draft_article(&raw)
    }
}

fn map_transport_error(err: reqwest::Error) -> WebhookError {
    WebhookError::network(err.to_string())
}
