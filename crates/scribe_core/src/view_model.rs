use crate::{ArticleRequest, EndpointConfig, PublishResult, Severity};

/// Snapshot of a notification for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub message: String,
    pub severity: Severity,
}

/// Render snapshot of the whole application state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub request: ArticleRequest,
    pub endpoints: EndpointConfig,
    pub content: String,
    pub generating: bool,
    pub publishing: bool,
    /// Form complete and no generation in flight; drives the Generate control.
    pub can_generate: bool,
    /// Non-blank content and no publish in flight; drives the Publish control.
    pub can_publish: bool,
    pub notification: Option<NotificationView>,
    pub last_published: Option<PublishResult>,
    pub dirty: bool,
}
