use crate::{AppState, Effect, Msg, Severity};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FieldEdited(field, value) => {
            state.set_request_field(field, value);
            Vec::new()
        }
        Msg::GenerateUrlEdited(url) => {
            state.set_generate_url(url);
            vec![Effect::SaveEndpoints(state.endpoints().clone())]
        }
        Msg::PublishUrlEdited(url) => {
            state.set_publish_url(url);
            vec![Effect::SaveEndpoints(state.endpoints().clone())]
        }
        Msg::EndpointsRestored(endpoints) => {
            // Startup restore only; re-saving here would rewrite the file
            // with its own contents.
            state.restore_endpoints(endpoints);
            Vec::new()
        }
        Msg::ContentEdited(content) => {
            state.set_content(content);
            Vec::new()
        }
        Msg::GenerateClicked => {
            if state.generating() {
                return (state, Vec::new());
            }
            let endpoints = state.endpoints().clone();
            if endpoints.generate_url.trim().is_empty() {
                return notify_error(state, "configure the generation webhook URL first");
            }
            if !state.request().is_complete() {
                return notify_error(
                    state,
                    "fill in topic, description, audience and format before generating",
                );
            }
            state.set_generating(true);
            vec![Effect::CallGenerate {
                request: state.request().clone(),
                url: endpoints.generate_url,
            }]
        }
        Msg::GenerateFinished(result) => {
            state.set_generating(false);
            match result {
                Ok(content) => {
                    state.set_content(content);
                    notify(&mut state, "article generated successfully", Severity::Success)
                }
                Err(message) => notify(&mut state, message, Severity::Error),
            }
        }
        Msg::PublishClicked => {
            if state.publishing() {
                return (state, Vec::new());
            }
            let endpoints = state.endpoints().clone();
            if endpoints.publish_url.trim().is_empty() {
                return notify_error(state, "configure the publish webhook URL first");
            }
            if !state.has_content() {
                return notify_error(state, "there is no content to publish");
            }
            state.set_publishing(true);
            vec![Effect::CallPublish {
                request: state.request().clone(),
                content: state.content().to_string(),
                url: endpoints.publish_url,
            }]
        }
        Msg::PublishFinished(result) => {
            state.set_publishing(false);
            match result {
                Ok(published) => {
                    state.record_published(published);
                    notify(
                        &mut state,
                        "article saved as a help-center draft",
                        Severity::Success,
                    )
                }
                Err(message) => notify(&mut state, message, Severity::Error),
            }
        }
        Msg::CopyClicked => {
            if !state.has_content() {
                return (state, Vec::new());
            }
            vec![Effect::CopyToClipboard {
                content: state.content().to_string(),
            }]
        }
        Msg::CopyFinished(result) => match result {
            Ok(()) => notify(
                &mut state,
                "article copied to the clipboard",
                Severity::Success,
            ),
            Err(message) => notify(&mut state, message, Severity::Error),
        },
        Msg::NotificationDismissed => {
            state.dismiss_notification();
            Vec::new()
        }
        Msg::NotificationTimedOut { token } => {
            state.expire_notification(token);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Shows a notification and schedules its auto-dismiss timeout.
fn notify(state: &mut AppState, message: impl Into<String>, severity: Severity) -> Vec<Effect> {
    let token = state.show_notification(message, severity);
    vec![Effect::ScheduleNotificationTimeout { token }]
}

fn notify_error(mut state: AppState, message: &str) -> (AppState, Vec<Effect>) {
    let effects = notify(&mut state, message, Severity::Error);
    (state, effects)
}
