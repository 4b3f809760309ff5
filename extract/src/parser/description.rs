//! Short-description extraction from the NAME and DESCRIPTION sections.

use tooldoc_core::NO_DESCRIPTION;

use super::{PATTERNS, collapse_whitespace};

/// Extracts a one-line description from rendered page text.
///
/// The NAME section usually carries `<command> - <description>`; when it
/// does, that text (up to the next non-indented or blank line) wins, with
/// internal whitespace collapsed. Otherwise the first sentence of the
/// DESCRIPTION paragraph is used, kept as captured. Never fails: falls back
/// to [`NO_DESCRIPTION`].
pub fn extract_description(text: &str) -> String {
    if let Some(caps) = PATTERNS.name_line.captures(text) {
        return collapse_whitespace(&caps[1]);
    }

    if let Some(caps) = PATTERNS.description_section.captures(text) {
        let paragraph = caps[1].trim();
        if let Some(first) = PATTERNS.sentence_break.splitn(paragraph, 2).next() {
            return first.trim().to_string();
        }
    }

    NO_DESCRIPTION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_section_single_line() {
        let text = "NAME\n    foo - does a thing\n\nSYNOPSIS\n    foo\n";
        assert_eq!(extract_description(text), "does a thing");
    }

    #[test]
    fn test_name_section_en_dash() {
        let text = "NAME\n    foo \u{2013} does a thing\n\n";
        assert_eq!(extract_description(text), "does a thing");
    }

    #[test]
    fn test_name_section_wrapped_line_is_collapsed() {
        let text = "NAME\n    foo - does a thing\n      over two lines\n\n";
        assert_eq!(extract_description(text), "does a thing over two lines");
    }

    #[test]
    fn test_description_fallback_takes_first_sentence() {
        let text = "DESCRIPTION\n    Frobnicates widgets. Also sorts them.\n\nOPTIONS\n";
        assert_eq!(extract_description(text), "Frobnicates widgets");
    }

    #[test]
    fn test_sentinel_when_nothing_matches() {
        assert_eq!(extract_description("no sections here"), NO_DESCRIPTION);
    }
}
