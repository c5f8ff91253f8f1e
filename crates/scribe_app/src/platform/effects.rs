use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use scribe_core::{ArticleRequest, Effect, Msg, PublishResult, NOTIFICATION_TTL};
use scribe_engine::{
    plain_text, DraftArticle, EngineEvent, EngineHandle, GenerateRequest, PublishPayload,
    WebhookSettings,
};
use scribe_logging::{scribe_info, scribe_warn};

use super::persistence;
use super::ui::ShellEvent;

/// Executes the effects the state machine requests and feeds completions
/// back into the shell's event channel.
pub(crate) struct EffectRunner {
    engine: EngineHandle,
    tx: mpsc::Sender<ShellEvent>,
    state_dir: PathBuf,
}

impl EffectRunner {
    pub(crate) fn new(
        tx: mpsc::Sender<ShellEvent>,
        state_dir: PathBuf,
    ) -> anyhow::Result<Self> {
        let engine = EngineHandle::new(WebhookSettings::default())?;
        let runner = Self {
            engine,
            tx,
            state_dir,
        };
        runner.spawn_event_loop();
        Ok(runner)
    }

    pub(crate) fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::CallGenerate { request, url } => {
                    scribe_info!("generation call to {} topic={:?}", url, request.topic);
                    self.engine.generate(map_request(request), url);
                }
                Effect::CallPublish {
                    request,
                    content,
                    url,
                } => {
                    scribe_info!("publish call to {} content_len={}", url, content.len());
                    self.engine
                        .publish(PublishPayload::new(map_request(request), content), url);
                }
                Effect::SaveEndpoints(endpoints) => {
                    persistence::save_endpoints(&self.state_dir, &endpoints);
                }
                Effect::CopyToClipboard { content } => {
                    self.copy_to_clipboard(content);
                }
                Effect::ScheduleNotificationTimeout { token } => {
                    let tx = self.tx.clone();
                    thread::spawn(move || {
                        thread::sleep(NOTIFICATION_TTL);
                        let _ =
                            tx.send(ShellEvent::Dispatch(Msg::NotificationTimedOut { token }));
                    });
                }
            }
        }
    }

    fn copy_to_clipboard(&self, content: String) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = write_clipboard(&content).map_err(|err| {
                scribe_warn!("clipboard write failed: {}", err);
                "could not copy the article to the clipboard".to_string()
            });
            let _ = tx.send(ShellEvent::Dispatch(Msg::CopyFinished(result)));
        });
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let tx = self.tx.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = match event {
                    EngineEvent::GenerateFinished(result) => Msg::GenerateFinished(
                        result.map_err(|err| {
                            scribe_warn!("generation failed: {}", err.detail);
                            err.to_string()
                        }),
                    ),
                    EngineEvent::PublishFinished(result) => Msg::PublishFinished(
                        result.map(map_draft).map_err(|err| {
                            scribe_warn!("publish failed: {}", err.detail);
                            err.to_string()
                        }),
                    ),
                };
                if tx.send(ShellEvent::Dispatch(msg)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_request(request: ArticleRequest) -> GenerateRequest {
    GenerateRequest {
        topic: request.topic,
        description: request.description,
        audience: request.audience,
        format: request.format,
        keywords: request.keywords,
    }
}

fn map_draft(draft: DraftArticle) -> PublishResult {
    PublishResult {
        article_id: draft.id,
        url: draft.html_url,
        title: draft.title,
        is_draft: draft.draft,
    }
}

fn write_clipboard(content: &str) -> Result<(), arboard::Error> {
    arboard::Clipboard::new()?.set_text(plain_text(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_maps_field_for_field() {
        let request = ArticleRequest {
            topic: "A".to_string(),
            description: "B".to_string(),
            audience: "Geral".to_string(),
            format: "FAQ".to_string(),
            keywords: String::new(),
        };

        let wire = map_request(request);

        assert_eq!(wire.topic, "A");
        assert_eq!(wire.description, "B");
        assert_eq!(wire.audience, "Geral");
        assert_eq!(wire.format, "FAQ");
        assert_eq!(wire.keywords, "");
    }

    #[test]
    fn draft_record_maps_to_the_publish_result() {
        let draft = DraftArticle {
            id: 42,
            html_url: "https://x/42".to_string(),
            title: "T".to_string(),
            draft: true,
        };

        assert_eq!(
            map_draft(draft),
            PublishResult {
                article_id: 42,
                url: "https://x/42".to_string(),
                title: "T".to_string(),
                is_draft: true,
            }
        );
    }
}
