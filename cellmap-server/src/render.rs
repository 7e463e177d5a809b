//! Page rendering boundary.
//!
//! Handlers depend on the trait; the bundled implementation substitutes
//! the document name and body into a static editor template.

/// Renders the editor page for a stored document.
pub trait PageRenderer: Send + Sync {
    fn render_map(&self, name: &str, document: &str) -> String;
}

/// Template-based renderer using the bundled editor page.
#[derive(Debug, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

const TEMPLATE: &str = include_str!("../templates/index.html");

impl PageRenderer for HtmlRenderer {
    fn render_map(&self, name: &str, document: &str) -> String {
        // The document is embedded as a JSON string literal, with `<`
        // escaped so stored content cannot break out of the script block.
        let encoded = serde_json::to_string(document)
            .unwrap_or_else(|_| "\"\"".to_string())
            .replace('<', "\\u003c");
        TEMPLATE
            .replace("__MAP_NAME__", name)
            .replace("__MAP_DOCUMENT__", &encoded)
    }
}
