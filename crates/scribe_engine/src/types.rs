use std::fmt;

use serde::{Deserialize, Serialize};

/// JSON body POSTed to the generation webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub topic: String,
    pub description: String,
    pub audience: String,
    pub format: String,
    pub keywords: String,
}

/// JSON body POSTed to the publish webhook.
///
/// `content` and `final_article` both carry the article body; deployed
/// webhook flows disagree on which field name they read, so both are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishPayload {
    #[serde(flatten)]
    pub request: GenerateRequest,
    pub content: String,
    pub final_article: String,
}

impl PublishPayload {
    pub fn new(request: GenerateRequest, article: impl Into<String>) -> Self {
        let article = article.into();
        Self {
            request,
            content: article.clone(),
            final_article: article,
        }
    }
}

/// Draft article record returned by the publish webhook. Extra fields in the
/// response are ignored; a missing field fails deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftArticle {
    pub id: u64,
    pub html_url: String,
    pub title: String,
    pub draft: bool,
}

/// A failed webhook call. `detail` keeps the transport-level cause for
/// logging; `Display` yields the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookError {
    pub kind: FailureKind,
    pub detail: String,
}

impl WebhookError {
    pub(crate) fn http(status: u16, status_text: impl Into<String>) -> Self {
        let status_text = status_text.into();
        Self {
            detail: format!("http status {status} {status_text}"),
            kind: FailureKind::HttpStatus {
                status,
                status_text,
            },
        }
    }

    pub(crate) fn network(detail: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Network,
            detail: detail.into(),
        }
    }

    pub(crate) fn malformed(reason: &'static str) -> Self {
        Self {
            kind: FailureKind::MalformedResponse,
            detail: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Non-2xx answer; status line surfaces verbatim.
    HttpStatus { status: u16, status_text: String },
    /// Transport-level failure: bad URL, DNS, refused connection, timeout.
    Network,
    /// The publish response body matched no recognized shape.
    MalformedResponse,
}

impl fmt::Display for WebhookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FailureKind::HttpStatus {
                status,
                status_text,
            } => {
                write!(f, "request failed with status {status}")?;
                if !status_text.is_empty() {
                    write!(f, " {status_text}")?;
                }
                Ok(())
            }
            FailureKind::Network => {
                write!(
                    f,
                    "connection error: verify the webhook URL and network connectivity"
                )
            }
            FailureKind::MalformedResponse => write!(f, "{}", self.detail),
        }
    }
}

impl std::error::Error for WebhookError {}
