use scraper::Html;

/// Clipboard form of the article body: generated articles are HTML, and the
/// copy operation wants what the rendered text reads as, not the markup.
/// Input without markup passes through unchanged.
pub fn plain_text(content: &str) -> String {
    if !content.contains('<') {
        return content.to_string();
    }
    let fragment = Html::parse_fragment(content);
    fragment.root_element().text().collect::<String>()
}
