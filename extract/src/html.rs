//! Minimal HTML text extraction for the web fallback.
//!
//! This is not a general HTML parser. Fetched pages wrap the rendered
//! manual text in a `<div id="content">` container; everything needed here
//! is to find that container, take its subtree, and strip the markup. Like
//! the rest of the pipeline, it is regex heuristics over text.

use std::sync::LazyLock;

use regex::Regex;

static PATTERNS: LazyLock<HtmlPatterns> = LazyLock::new(HtmlPatterns::new);

struct HtmlPatterns {
    content_div: Regex,
    div_boundary: Regex,
    script_or_style: Regex,
    tag: Regex,
    numeric_entity: Regex,
}

impl HtmlPatterns {
    fn new() -> Self {
        Self {
            content_div: Regex::new(r#"(?i)<div\s[^>]*id\s*=\s*["']?content["']?[^>]*>"#)
                .expect("static regex must compile"),
            div_boundary: Regex::new(r"(?i)<div\b|</div\s*>").expect("static regex must compile"),
            script_or_style: Regex::new(r"(?is)<(script|style)\b.*?</(script|style)\s*>")
                .expect("static regex must compile"),
            tag: Regex::new(r"(?s)<[^>]*>").expect("static regex must compile"),
            numeric_entity: Regex::new(r"&#(\d+);").expect("static regex must compile"),
        }
    }
}

/// Extracts the text of the primary content container from an HTML page.
///
/// Returns `None` when no content container is present. Unbalanced markup
/// degrades to taking everything after the container opening, which is the
/// best a text heuristic can do.
pub fn content_text(html: &str) -> Option<String> {
    let open = PATTERNS.content_div.find(html)?;
    let body = &html[open.end()..];

    let mut depth = 1usize;
    let mut end = body.len();
    for boundary in PATTERNS.div_boundary.find_iter(body) {
        if boundary.as_str().starts_with("</") {
            depth -= 1;
            if depth == 0 {
                end = boundary.start();
                break;
            }
        } else {
            depth += 1;
        }
    }

    let inner = PATTERNS.script_or_style.replace_all(&body[..end], "");
    let stripped = PATTERNS.tag.replace_all(&inner, "");
    Some(decode_entities(&stripped))
}

fn decode_entities(text: &str) -> String {
    let decoded = PATTERNS.numeric_entity.replace_all(text, |caps: &regex::Captures<'_>| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });

    decoded
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
