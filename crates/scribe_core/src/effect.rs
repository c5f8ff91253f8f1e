use crate::{ArticleRequest, EndpointConfig, NotificationToken};

/// Side effects requested by `update`; executed outside the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the article request to the generation webhook.
    CallGenerate {
        request: ArticleRequest,
        url: String,
    },
    /// POST the article request plus the edited body to the publish webhook.
    CallPublish {
        request: ArticleRequest,
        content: String,
        url: String,
    },
    /// Persist the webhook URLs.
    SaveEndpoints(EndpointConfig),
    /// Write the article body to the system clipboard.
    CopyToClipboard { content: String },
    /// Deliver `Msg::NotificationTimedOut { token }` after the notification
    /// window elapses.
    ScheduleNotificationTimeout { token: NotificationToken },
}
