use std::sync::Once;

use scribe_core::{update, AppState, Effect, FormField, Msg, PublishResult, Severity};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scribe_logging::initialize_for_tests);
}

fn drafted_state(content: &str) -> AppState {
    let state = [
        (FormField::Topic, "A"),
        (FormField::Description, "B"),
        (FormField::Audience, "Geral"),
        (FormField::Format, "FAQ"),
    ]
    .into_iter()
    .fold(AppState::new(), |state, (field, value)| {
        update(state, Msg::FieldEdited(field, value.to_string())).0
    });
    update(state, Msg::ContentEdited(content.to_string())).0
}

fn has_call_effect(effects: &[Effect]) -> bool {
    effects
        .iter()
        .any(|effect| matches!(effect, Effect::CallPublish { .. }))
}

fn sample_draft() -> PublishResult {
    PublishResult {
        article_id: 42,
        url: "https://x/42".to_string(),
        title: "T".to_string(),
        is_draft: true,
    }
}

#[test]
fn publish_requires_webhook_url() {
    init_logging();
    let state = drafted_state("Hello");
    let (state, _) = update(state, Msg::PublishUrlEdited(String::new()));

    let (state, effects) = update(state, Msg::PublishClicked);

    assert!(!has_call_effect(&effects));
    assert!(!state.publishing());
    let notification = state.notification().expect("error notification");
    assert_eq!(notification.message, "configure the publish webhook URL first");
}

#[test]
fn publish_rejects_blank_content() {
    init_logging();
    for blank in ["", "   ", "\n\t  \n"] {
        let state = drafted_state(blank);

        let (state, effects) = update(state, Msg::PublishClicked);

        assert!(!has_call_effect(&effects), "content {blank:?} must not publish");
        assert!(!state.publishing());
        let notification = state.notification().expect("error notification");
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.message, "there is no content to publish");
    }
}

#[test]
fn publish_emits_call_effect_with_content() {
    init_logging();
    let state = drafted_state("Hello");
    let (state, _) = update(
        state,
        Msg::PublishUrlEdited("https://hooks.test/publish".to_string()),
    );

    let (state, effects) = update(state, Msg::PublishClicked);

    assert!(state.publishing());
    assert!(!state.view().can_publish);
    assert_eq!(
        effects,
        vec![Effect::CallPublish {
            request: state.request().clone(),
            content: "Hello".to_string(),
            url: "https://hooks.test/publish".to_string(),
        }]
    );
}

#[test]
fn second_click_is_ignored_while_publishing() {
    init_logging();
    let state = drafted_state("Hello");
    let (state, first) = update(state, Msg::PublishClicked);
    assert!(has_call_effect(&first));

    let (state, second) = update(state, Msg::PublishClicked);

    assert!(second.is_empty());
    assert!(state.publishing());
}

#[test]
fn publish_success_records_draft_and_clears_flag() {
    init_logging();
    let state = drafted_state("Hello");
    let (state, _) = update(state, Msg::PublishClicked);

    let (state, _) = update(state, Msg::PublishFinished(Ok(sample_draft())));

    assert!(!state.publishing());
    assert_eq!(state.last_published(), Some(&sample_draft()));
    assert_eq!(state.content(), "Hello");
    let notification = state.notification().expect("success notification");
    assert_eq!(notification.severity, Severity::Success);

    let view = state.view();
    assert_eq!(view.last_published, Some(sample_draft()));
}

#[test]
fn publish_failure_leaves_content_untouched() {
    init_logging();
    let state = drafted_state("Hello");
    let (state, _) = update(state, Msg::PublishClicked);

    let (state, _) = update(
        state,
        Msg::PublishFinished(Err("could not interpret the publish response".into())),
    );

    assert!(!state.publishing());
    assert_eq!(state.content(), "Hello");
    assert_eq!(state.last_published(), None);
    let notification = state.notification().expect("error notification");
    assert_eq!(notification.message, "could not interpret the publish response");
}

#[test]
fn publish_may_overlap_an_in_flight_generation() {
    init_logging();
    let state = drafted_state("Hello");
    let (state, _) = update(state, Msg::GenerateClicked);
    assert!(state.generating());

    let (state, effects) = update(state, Msg::PublishClicked);

    assert!(state.generating());
    assert!(state.publishing());
    assert!(has_call_effect(&effects));
}
