//! Scribe core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{FormField, Msg};
pub use state::{
    AppState, ArticleRequest, EndpointConfig, Notification, NotificationToken, PublishResult,
    Severity, NOTIFICATION_TTL,
};
pub use update::update;
pub use view_model::{AppViewModel, NotificationView};
