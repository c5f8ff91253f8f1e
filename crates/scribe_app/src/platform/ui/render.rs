use scribe_core::{AppViewModel, Severity};

const PREVIEW_LIMIT: usize = 400;

/// Prints the current view model as a compact status block.
pub(crate) fn render(view: &AppViewModel) {
    println!("----------------------------------------");
    if let Some(notification) = &view.notification {
        let tag = match notification.severity {
            Severity::Success => "ok",
            Severity::Error => "error",
        };
        println!("[{tag}] {}", notification.message);
    }

    let mut activity = Vec::new();
    if view.generating {
        activity.push("generating");
    }
    if view.publishing {
        activity.push("publishing");
    }
    if !activity.is_empty() {
        println!("busy: {}", activity.join(", "));
    }

    println!(
        "form: topic={:?} description={:?} audience={:?} format={:?} keywords={:?}",
        view.request.topic,
        view.request.description,
        view.request.audience,
        view.request.format,
        view.request.keywords,
    );
    println!(
        "webhooks: generate={} publish={}",
        view.endpoints.generate_url, view.endpoints.publish_url
    );

    if view.content.is_empty() {
        println!("article: <empty>");
    } else {
        let preview: String = view.content.chars().take(PREVIEW_LIMIT).collect();
        let suffix = if view.content.chars().count() > PREVIEW_LIMIT {
            "..."
        } else {
            ""
        };
        println!("article ({} chars):", view.content.chars().count());
        println!("{preview}{suffix}");
    }

    if let Some(draft) = &view.last_published {
        let status = if draft.is_draft { "draft" } else { "published" };
        println!(
            "last publish: #{} {:?} ({status}) {}",
            draft.article_id, draft.title, draft.url
        );
    }
    println!("----------------------------------------");
}

pub(crate) fn render_help() {
    println!("commands:");
    println!("  topic|description|audience|format|keywords <text>   fill the form");
    println!("  generate-url|publish-url <url>                      configure webhooks");
    println!("  generate                                            call the generation webhook");
    println!("  edit <text>                                         replace the article body");
    println!("  copy                                                copy the article as plain text");
    println!("  publish                                             create a help-center draft");
    println!("  show | dismiss | help | quit");
}
