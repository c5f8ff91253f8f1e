use serde_json::Value;

use crate::types::{DraftArticle, WebhookError};

/// Explicit parse step: a body is either structured JSON or raw text.
fn parse_structured(raw: &str) -> Option<Value> {
    serde_json::from_str(raw).ok()
}

fn first_element(value: &Value) -> Option<&Value> {
    value.as_array().and_then(|items| items.first())
}

/// Extracts the article body from a generation response.
///
/// The generation webhook is an opaque third-party flow whose response shape
/// varies by deployment, so the body is probed in a fixed priority order:
/// unparseable text passes through unchanged, then `[{"data": ...}]`,
/// `{"data": ...}`, `{"text": ...}`, a bare JSON string, and finally the raw
/// body again. Always yields a string, possibly empty, and never fails.
pub fn article_text(raw: &str) -> String {
    let Some(value) = parse_structured(raw) else {
        return raw.to_string();
    };

    if let Some(Value::String(data)) = first_element(&value).and_then(|item| item.get("data")) {
        return data.clone();
    }
    if let Some(Value::String(data)) = value.get("data") {
        return data.clone();
    }
    if let Some(Value::String(text)) = value.get("text") {
        return text.clone();
    }
    if let Value::String(text) = value {
        return text;
    }
    raw.to_string()
}

/// Extracts the created draft record from a publish response.
///
/// Stricter than [`article_text`]: the result feeds a structured
/// confirmation display, so an unrecognized shape fails instead of
/// degrading. Accepted shapes are an object with an `article` record or a
/// sequence whose first element carries one.
pub fn draft_article(raw: &str) -> Result<DraftArticle, WebhookError> {
    let Some(value) = parse_structured(raw) else {
        return Err(WebhookError::malformed(
            "could not interpret the publish response",
        ));
    };

    let envelope = first_element(&value).unwrap_or(&value);
    envelope
        .get("article")
        .and_then(|article| serde_json::from_value::<DraftArticle>(article.clone()).ok())
        .ok_or_else(|| WebhookError::malformed("unrecognized publish response structure"))
}
