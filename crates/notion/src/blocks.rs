//! Constructors for common child blocks.
//!
//! Children are opaque to the page builder, so any JSON value the service accepts
//! can be passed directly. These helpers only cover the usual text blocks.

use serde_json::{json, Value};

use crate::property::TextSpan;

fn text_block(kind: &str, text: &str) -> Value {
    json!({
        "object": "block",
        "type": kind,
        kind: { "rich_text": [TextSpan::new(text)] },
    })
}

#[must_use]
pub fn paragraph(text: &str) -> Value {
    text_block("paragraph", text)
}

/// Heading block. Levels outside 1..=3 are clamped.
#[must_use]
pub fn heading(level: u8, text: &str) -> Value {
    let kind = match level {
        0 | 1 => "heading_1",
        2 => "heading_2",
        _ => "heading_3",
    };
    text_block(kind, text)
}

#[must_use]
pub fn bulleted_list_item(text: &str) -> Value {
    text_block("bulleted_list_item", text)
}

#[must_use]
pub fn numbered_list_item(text: &str) -> Value {
    text_block("numbered_list_item", text)
}

#[must_use]
pub fn quote(text: &str) -> Value {
    text_block("quote", text)
}

#[must_use]
pub fn to_do(text: &str, checked: bool) -> Value {
    json!({
        "object": "block",
        "type": "to_do",
        "to_do": { "rich_text": [TextSpan::new(text)], "checked": checked },
    })
}

#[must_use]
pub fn divider() -> Value {
    json!({ "object": "block", "type": "divider", "divider": {} })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_shape() {
        assert_eq!(
            paragraph("hello"),
            json!({
                "object": "block",
                "type": "paragraph",
                "paragraph": { "rich_text": [{ "text": { "content": "hello" } }] }
            })
        );
    }

    #[test]
    fn test_heading_levels_clamp() {
        assert_eq!(heading(1, "a")["type"], "heading_1");
        assert_eq!(heading(2, "a")["type"], "heading_2");
        assert_eq!(heading(3, "a")["type"], "heading_3");
        assert_eq!(heading(9, "a")["type"], "heading_3");
        assert_eq!(heading(0, "a")["type"], "heading_1");
    }

    #[test]
    fn test_to_do_carries_checked_flag() {
        let block = to_do("ship it", true);
        assert_eq!(block["to_do"]["checked"], true);
        assert_eq!(block["to_do"]["rich_text"][0]["text"]["content"], "ship it");
    }

    #[test]
    fn test_divider_has_empty_body() {
        assert_eq!(divider()["divider"], json!({}));
    }
}
