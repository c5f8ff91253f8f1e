use std::time::Duration;

use crate::msg::FormField;
use crate::view_model::{AppViewModel, NotificationView};

/// How long a notification stays visible before it is auto-dismissed.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Monotonic identifier for a shown notification. A timeout only dismisses
/// the notification whose token it carries, so a replaced notification
/// invalidates every older timer.
pub type NotificationToken = u64;

/// The article description the user fills in before generating.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleRequest {
    pub topic: String,
    pub description: String,
    pub audience: String,
    pub format: String,
    /// Optional; every other field is required for submission.
    pub keywords: String,
}

impl ArticleRequest {
    /// True when every required field is non-blank after trimming.
    pub fn is_complete(&self) -> bool {
        [&self.topic, &self.description, &self.audience, &self.format]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// The two user-configurable webhook URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub generate_url: String,
    pub publish_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            generate_url: "https://n8n.flap.studio/webhook/eauditoria/generate-content".into(),
            publish_url: "https://n8n.flap.studio/webhook/eauditoria/send-zendesk".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub token: NotificationToken,
}

/// Confirmation record for a draft article created by the publish webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResult {
    pub article_id: u64,
    pub url: String,
    pub title: String,
    pub is_draft: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    request: ArticleRequest,
    endpoints: EndpointConfig,
    content: String,
    generating: bool,
    publishing: bool,
    notification: Option<Notification>,
    notification_seq: NotificationToken,
    last_published: Option<PublishResult>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            request: self.request.clone(),
            endpoints: self.endpoints.clone(),
            content: self.content.clone(),
            generating: self.generating,
            publishing: self.publishing,
            can_generate: self.request.is_complete() && !self.generating,
            can_publish: self.has_content() && !self.publishing,
            notification: self.notification.as_ref().map(|n| NotificationView {
                message: n.message.clone(),
                severity: n.severity,
            }),
            last_published: self.last_published.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns the dirty bit and clears it, so renders coalesce.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn request(&self) -> &ArticleRequest {
        &self.request
    }

    pub fn endpoints(&self) -> &EndpointConfig {
        &self.endpoints
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn generating(&self) -> bool {
        self.generating
    }

    pub fn publishing(&self) -> bool {
        self.publishing
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn last_published(&self) -> Option<&PublishResult> {
        self.last_published.as_ref()
    }

    /// Non-blank content is the precondition for publishing and copying.
    pub(crate) fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    pub(crate) fn set_request_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Topic => self.request.topic = value,
            FormField::Description => self.request.description = value,
            FormField::Audience => self.request.audience = value,
            FormField::Format => self.request.format = value,
            FormField::Keywords => self.request.keywords = value,
        }
        self.dirty = true;
    }

    pub(crate) fn set_generate_url(&mut self, url: String) {
        self.endpoints.generate_url = url;
        self.dirty = true;
    }

    pub(crate) fn set_publish_url(&mut self, url: String) {
        self.endpoints.publish_url = url;
        self.dirty = true;
    }

    pub(crate) fn restore_endpoints(&mut self, endpoints: EndpointConfig) {
        self.endpoints = endpoints;
        self.dirty = true;
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
        self.dirty = true;
    }

    pub(crate) fn set_generating(&mut self, generating: bool) {
        self.generating = generating;
        self.dirty = true;
    }

    pub(crate) fn set_publishing(&mut self, publishing: bool) {
        self.publishing = publishing;
        self.dirty = true;
    }

    pub(crate) fn record_published(&mut self, result: PublishResult) {
        self.last_published = Some(result);
        self.dirty = true;
    }

    /// Shows a notification, replacing any current one, and returns the
    /// token its auto-dismiss timer must carry.
    pub(crate) fn show_notification(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
    ) -> NotificationToken {
        self.notification_seq += 1;
        let token = self.notification_seq;
        self.notification = Some(Notification {
            message: message.into(),
            severity,
            token,
        });
        self.dirty = true;
        token
    }

    pub(crate) fn dismiss_notification(&mut self) {
        if self.notification.take().is_some() {
            self.dirty = true;
        }
    }

    /// Dismisses only if `token` still identifies the shown notification.
    pub(crate) fn expire_notification(&mut self, token: NotificationToken) {
        if self
            .notification
            .as_ref()
            .is_some_and(|current| current.token == token)
        {
            self.notification = None;
            self.dirty = true;
        }
    }
}
