//! Regex heuristics for converting rendered manual-page text.
//!
//! All patterns live in one process-wide [`ManPatterns`] set, compiled once
//! behind a [`LazyLock`]. The heuristics are intentionally loose: rendered
//! man pages have no grammar, and a pattern that misfires on an unusual page
//! yields a misclassified record, not an error.

pub mod description;
pub mod options;
pub mod synopsis;

use std::sync::LazyLock;

use regex::Regex;

pub(crate) static PATTERNS: LazyLock<ManPatterns> = LazyLock::new(ManPatterns::new);

pub(crate) struct ManPatterns {
    // Section capture. The regex crate has no lookahead, so section
    // terminators are matched as consuming groups; only the captured body
    // group is ever used.
    pub(crate) name_line: Regex,
    pub(crate) description_section: Regex,
    pub(crate) options_section: Regex,
    pub(crate) synopsis_section: Regex,

    // Option entries: -a, --long, --color=when, -D format
    pub(crate) option_token: Regex,

    // Classification cues
    pub(crate) flag_words: Regex,
    pub(crate) kv_pair_equals: Regex,
    pub(crate) kv_phrase_equals: Regex,
    pub(crate) kv_pair_colon: Regex,
    pub(crate) kv_phrase_colon: Regex,
    pub(crate) long_equals: Regex,
    pub(crate) trailing_value_token: Regex,
    pub(crate) value_verbs: Regex,

    // Value-type capture, tried in order: <file> / -file / [file],
    // file..., =value, VALUE
    pub(crate) value_bracketed: Regex,
    pub(crate) value_ellipsis: Regex,
    pub(crate) value_equals: Regex,
    pub(crate) value_caps: Regex,

    // Synopsis cleanup
    pub(crate) option_like: Regex,
    pub(crate) positional_token: Regex,

    pub(crate) sentence_break: Regex,
    pub(crate) whitespace_run: Regex,
}

impl ManPatterns {
    fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure
        // indicates a programmer error in the pattern, not a runtime
        // condition.
        Self {
            // NAME\n    foo - does a thing   (hyphen, en dash, or em dash)
            name_line: Regex::new(r"(?s)NAME\s*\n\s*\S+\s*[-\u{2013}\u{2014}]\s*(.+?)(?:\n\S|\n\n)")
                .expect("static regex must compile"),
            description_section: Regex::new(r"(?s)DESCRIPTION\s*\n\s*(.+?)(?:\n\S+\n|\n\n\S)")
                .expect("static regex must compile"),
            // OPTIONS header or the BSD-style lead-in phrase, body up to the
            // next all-caps header line or end of input.
            options_section: Regex::new(
                r"(?si)(?:OPTIONS|The following options are available:?)\s*\n(.*?)(?:\n[A-Z][A-Z\s]+\n|\z)",
            )
            .expect("static regex must compile"),
            synopsis_section: Regex::new(r"(?s)SYNOPSIS\s*\n\s*(.+?)(?:\n\n|\n[A-Z])")
                .expect("static regex must compile"),

            option_token: Regex::new(r"(-{1,2}[a-zA-Z0-9_-]+(?:=\S+)?|-[a-zA-Z](?:\s+\S+)?)")
                .expect("static regex must compile"),

            flag_words: Regex::new(r"\b(toggle|enable|disable|flag)\b")
                .expect("static regex must compile"),
            kv_pair_equals: Regex::new(r"\b\w+=\w+\b").expect("static regex must compile"),
            kv_phrase_equals: Regex::new(r"(?i)\bname=value\b").expect("static regex must compile"),
            kv_pair_colon: Regex::new(r"\b\w+:\w+\b").expect("static regex must compile"),
            kv_phrase_colon: Regex::new(r"(?i)\busername:password\b|\bname:value\b")
                .expect("static regex must compile"),
            long_equals: Regex::new(r"--\w+=").expect("static regex must compile"),
            trailing_value_token: Regex::new(r"\s+\w+(?:\s+|\]|$)")
                .expect("static regex must compile"),
            value_verbs: Regex::new(r"\b(specify|set|use|take|accept|require)\b")
                .expect("static regex must compile"),

            value_bracketed: Regex::new(r"[-<](\w+(?:[_-]\w+)*)[>\]]")
                .expect("static regex must compile"),
            value_ellipsis: Regex::new(r"\s+(\w+(?:[_-]\w+)*)\s*\.\.\.")
                .expect("static regex must compile"),
            value_equals: Regex::new(r"=(\w+(?:[_-]\w+)*)").expect("static regex must compile"),
            value_caps: Regex::new(r"\s+([A-Z][A-Z_]+)\b").expect("static regex must compile"),

            option_like: Regex::new(r"\[?-{1,2}\w+(?:\s+\w+)?\]?")
                .expect("static regex must compile"),
            positional_token: Regex::new(r"\[?([A-Z_]+|\w+\.\.\.)(?:\s+[A-Z_]+|\s+\w+\.\.\.)?\]?")
                .expect("static regex must compile"),

            sentence_break: Regex::new(r"[.!?]\s+").expect("static regex must compile"),
            whitespace_run: Regex::new(r"\s+").expect("static regex must compile"),
        }
    }
}

/// Trims and collapses internal whitespace runs to single spaces.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    PATTERNS
        .whitespace_run
        .replace_all(text.trim(), " ")
        .into_owned()
}
