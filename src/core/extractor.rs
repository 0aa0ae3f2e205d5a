use crate::domain::model::ExtractedOutput;
use regex::Regex;
use std::sync::LazyLock;

// First ``` fence pair wins; the `xml` tag is optional and matched case-insensitively.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?i:xml)?\n?(.*?)\n?```").expect("fenced block pattern is valid")
});

/// Returns the trimmed body of the first fenced block in `raw_text`, or `raw_text` untouched
/// when there is no fence.
pub fn extract_xml(raw_text: &str) -> &str {
    match FENCED_BLOCK.captures(raw_text).and_then(|caps| caps.get(1)) {
        Some(body) => body.as_str().trim(),
        None => raw_text,
    }
}

pub fn has_fenced_block(raw_text: &str) -> bool {
    FENCED_BLOCK.is_match(raw_text)
}

impl ExtractedOutput {
    pub fn from_raw(raw_text: &str) -> Self {
        Self {
            xml_text: extract_xml(raw_text).to_string(),
        }
    }
}

/// Escapes the result for presentation layers that render it inside HTML markup.
pub fn escape_for_display(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
