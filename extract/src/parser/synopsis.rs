//! Positional-argument extraction from the SYNOPSIS section.

use regex::Regex;
use tooldoc_core::ParameterRecord;

use super::PATTERNS;

/// Parses positional arguments out of the synopsis for `command`.
///
/// The command name and option-like tokens are removed first; what remains
/// is scanned for all-caps words and ellipsis-suffixed words. A candidate
/// optionally swallows one trailing token of the same shape, matching the
/// loose grammar synopsis lines actually use. `OPTION`/`OPTIONS` is the
/// conventional placeholder for the options list and never becomes a
/// positional. Positions are 1-based in order of appearance.
pub fn parse_positionals(text: &str, command: &str) -> Vec<ParameterRecord> {
    let Some(caps) = PATTERNS.synopsis_section.captures(text) else {
        return Vec::new();
    };
    let synopsis = caps[1].trim().to_string();

    let command_word = Regex::new(&format!(r"\b{}\b", regex::escape(command)))
        .expect("escaped command name must compile");
    let synopsis = command_word.replace_all(&synopsis, "");
    let synopsis = PATTERNS.option_like.replace_all(&synopsis, "");

    let mut records = Vec::new();
    let mut position = 0u32;
    for caps in PATTERNS.positional_token.captures_iter(&synopsis) {
        let token = caps[1].trim();
        if token.is_empty()
            || token.eq_ignore_ascii_case("option")
            || token.eq_ignore_ascii_case("options")
        {
            continue;
        }
        position += 1;
        records.push(ParameterRecord::positional(token, position).with_value_type(value_type(token)));
    }

    records
}

fn value_type(token: &str) -> String {
    let lower = token.to_lowercase();
    if lower.contains("file") || lower.contains("path") {
        "file-path".to_string()
    } else if lower.contains("dir") {
        "directory".to_string()
    } else if lower.contains("pid") {
        "pid".to_string()
    } else {
        lower.trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grep_synopsis_yields_two_positionals() {
        let text = "SYNOPSIS\n    grep [OPTIONS] PATTERN [FILE]...\n\nDESCRIPTION\n";
        let records = parse_positionals(text, "grep");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "PATTERN");
        assert_eq!(records[0].position, Some(1));
        assert_eq!(records[0].value_type.as_deref(), Some("pattern"));
        assert_eq!(records[1].name, "FILE");
        assert_eq!(records[1].position, Some(2));
        assert_eq!(records[1].value_type.as_deref(), Some("file-path"));
    }

    #[test]
    fn test_command_name_is_not_a_positional() {
        let text = "SYNOPSIS\n    true [ignored command line arguments]\n\n";
        let records = parse_positionals(text, "true");
        assert!(records.iter().all(|r| r.name != "true"));
    }

    #[test]
    fn test_option_tokens_with_values_are_removed() {
        let text = "SYNOPSIS\n    tail [-n lines] FILE\n\n";
        let records = parse_positionals(text, "tail");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "FILE");
        assert_eq!(records[0].position, Some(1));
    }

    #[test]
    fn test_directory_token_infers_directory() {
        let text = "SYNOPSIS\n    ls [OPTION]... [DIR]...\n\n";
        let records = parse_positionals(text, "ls");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "DIR");
        assert_eq!(records[0].value_type.as_deref(), Some("directory"));
    }

    #[test]
    fn test_missing_synopsis_yields_empty_list() {
        assert!(parse_positionals("OPTIONS\n    -v   verbose\n", "x").is_empty());
    }

    #[test]
    fn test_pid_token_infers_pid() {
        let text = "SYNOPSIS\n    kill [-s signal] PID...\n\n";
        let records = parse_positionals(text, "kill");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "PID");
        assert_eq!(records[0].value_type.as_deref(), Some("pid"));
    }
}
