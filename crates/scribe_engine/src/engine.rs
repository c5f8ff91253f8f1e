use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::client::{ReqwestWebhookClient, WebhookClient, WebhookSettings};
use crate::types::{DraftArticle, GenerateRequest, PublishPayload, WebhookError};

enum EngineCommand {
    Generate {
        request: GenerateRequest,
        url: String,
    },
    Publish {
        payload: PublishPayload,
        url: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    GenerateFinished(Result<String, WebhookError>),
    PublishFinished(Result<DraftArticle, WebhookError>),
}

/// Bridge between the synchronous shell and the async webhook client: one
/// background thread owns a Tokio runtime and spawns a task per call, so a
/// generation and a publish never block each other.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: WebhookSettings) -> Result<Self, WebhookError> {
        let client = Arc::new(ReqwestWebhookClient::new(settings)?);
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn generate(&self, request: GenerateRequest, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Generate {
            request,
            url: url.into(),
        });
    }

    pub fn publish(&self, payload: PublishPayload, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Publish {
            payload,
            url: url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn WebhookClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Generate { request, url } => {
            let result = client.generate(&request, &url).await;
            let _ = event_tx.send(EngineEvent::GenerateFinished(result));
        }
        EngineCommand::Publish { payload, url } => {
            let result = client.publish(&payload, &url).await;
            let _ = event_tx.send(EngineEvent::PublishFinished(result));
        }
    }
}
