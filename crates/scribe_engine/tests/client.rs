use scribe_engine::{
    DraftArticle, FailureKind, GenerateRequest, PublishPayload, ReqwestWebhookClient,
    WebhookClient, WebhookSettings,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_request() -> GenerateRequest {
    GenerateRequest {
        topic: "A".to_string(),
        description: "B".to_string(),
        audience: "Geral".to_string(),
        format: "FAQ".to_string(),
        keywords: String::new(),
    }
}

fn client() -> ReqwestWebhookClient {
    ReqwestWebhookClient::new(WebhookSettings::default()).expect("client")
}

#[tokio::test]
async fn generate_posts_the_form_and_normalizes_the_data_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "topic": "A",
            "description": "B",
            "audience": "Geral",
            "format": "FAQ",
            "keywords": "",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":"<p>Hello</p>"}"#))
        .mount(&server)
        .await;

    let url = format!("{}/generate", server.uri());
    let article = client().generate(&sample_request(), &url).await.unwrap();
    assert_eq!(article, "<p>Hello</p>");
}

#[tokio::test]
async fn generate_passes_plain_text_responses_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Just text"))
        .mount(&server)
        .await;

    let url = format!("{}/generate", server.uri());
    let article = client().generate(&sample_request(), &url).await.unwrap();
    assert_eq!(article, "Just text");
}

#[tokio::test]
async fn generate_surfaces_http_status_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let url = format!("{}/generate", server.uri());
    let err = client().generate(&sample_request(), &url).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::HttpStatus {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "request failed with status 500 Internal Server Error"
    );
}

#[tokio::test]
async fn unreachable_host_maps_to_the_fixed_connection_message() {
    let err = client()
        .generate(&sample_request(), "http://127.0.0.1:1/hook")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Network);
    assert_eq!(
        err.to_string(),
        "connection error: verify the webhook URL and network connectivity"
    );
}

#[tokio::test]
async fn malformed_url_is_the_same_class_of_mistake() {
    let err = client()
        .generate(&sample_request(), "not a webhook url")
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Network);
    assert_eq!(
        err.to_string(),
        "connection error: verify the webhook URL and network connectivity"
    );
}

#[tokio::test]
async fn publish_sends_both_article_body_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/publish"))
        .and(body_partial_json(json!({
            "topic": "A",
            "content": "Hello",
            "final_article": "Hello",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"article":{"id":42,"html_url":"https://x/42","title":"T","draft":true}}]"#,
        ))
        .mount(&server)
        .await;

    let payload = PublishPayload::new(sample_request(), "Hello");
    let url = format!("{}/publish", server.uri());
    let draft = client().publish(&payload, &url).await.unwrap();
    assert_eq!(
        draft,
        DraftArticle {
            id: 42,
            html_url: "https://x/42".to_string(),
            title: "T".to_string(),
            draft: true,
        }
    );
}

#[tokio::test]
async fn publish_rejects_unrecognized_response_shapes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/publish"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
        .mount(&server)
        .await;

    let payload = PublishPayload::new(sample_request(), "Hello");
    let url = format!("{}/publish", server.uri());
    let err = client().publish(&payload, &url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
}
