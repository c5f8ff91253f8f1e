//! Scribe engine: webhook transport, response normalization and persistence.
mod client;
mod engine;
mod normalize;
mod persist;
mod text;
mod types;

pub use client::{ReqwestWebhookClient, WebhookClient, WebhookSettings};
pub use engine::{EngineEvent, EngineHandle};
pub use normalize::{article_text, draft_article};
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use text::plain_text;
pub use types::{DraftArticle, FailureKind, GenerateRequest, PublishPayload, WebhookError};
