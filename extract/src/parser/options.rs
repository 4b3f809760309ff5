//! OPTIONS section parsing and parameter classification.

use tooldoc_core::{ParamType, ParameterRecord};

use super::{PATTERNS, collapse_whitespace};

/// Parses the options section of rendered page text into parameter records.
///
/// Returns an empty list when no options section is found; a missing section
/// is normal, not an error.
pub fn parse_options(text: &str) -> Vec<ParameterRecord> {
    let Some(caps) = PATTERNS.options_section.captures(text) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for entry in split_entries(&caps[1]) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let mut lines = entry.split('\n');
        let first_line = lines.next().unwrap_or("").trim();
        if !first_line.starts_with('-') {
            continue;
        }

        let matched: Vec<&str> = PATTERNS
            .option_token
            .find_iter(first_line)
            .map(|m| m.as_str())
            .collect();
        let Some(&primary) = matched.first() else {
            continue;
        };

        // Description: the first line with the option tokens removed, then
        // every following line, joined and whitespace-collapsed.
        let mut parts: Vec<String> = Vec::new();
        let leftover = PATTERNS
            .option_token
            .replacen(first_line, matched.len(), "");
        let leftover = leftover.trim();
        if !leftover.is_empty() {
            parts.push(leftover.to_string());
        }
        for line in lines {
            let cleaned = line.trim();
            if !cleaned.is_empty() {
                parts.push(cleaned.to_string());
            }
        }
        let description = collapse_whitespace(&parts.join(" "));

        let param_type = classify(primary, &description, first_line);
        let mut record = ParameterRecord::option(primary.trim(), param_type);
        if param_type != ParamType::Flag
            && let Some(value_type) = infer_value_type(first_line, &description)
        {
            record = record.with_value_type(value_type);
        }
        if !description.is_empty() {
            record = record.with_description(&description);
        }
        records.push(record);
    }

    records
}

/// Splits an options-section body into entries.
///
/// A new entry starts at any line beginning with whitespace followed by a
/// dash; continuation lines stay attached to the entry above.
fn split_entries(section: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut current = String::new();
    let mut started = false;

    for line in section.split('\n') {
        if started && starts_entry(line) {
            entries.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
        started = true;
    }
    if !current.is_empty() {
        entries.push(current);
    }

    entries
}

fn starts_entry(line: &str) -> bool {
    let stripped = line.trim_start();
    stripped.starts_with('-') && stripped.len() < line.len()
}

/// Classifies how the parameter is passed; first matching rule wins.
///
/// The rules are heuristic and deliberately so: a description that merely
/// mentions "flag" forces the flag classification, matching the observed
/// behavior this tool reproduces.
fn classify(name: &str, description: &str, first_line: &str) -> ParamType {
    let desc_lower = description.to_lowercase();
    if PATTERNS.flag_words.is_match(&desc_lower) {
        return ParamType::Flag;
    }

    let combined = format!("{name} {first_line} {description}");

    // A name=value shape in the surrounding text marks an option whose value
    // is itself a key=value pair, as long as the option name has no '=' of
    // its own. An outer shape match without the literal phrase falls through.
    if PATTERNS.kv_pair_equals.is_match(&combined)
        && !name.contains('=')
        && PATTERNS.kv_phrase_equals.is_match(&combined)
    {
        return ParamType::OptionKvEquals;
    }

    if PATTERNS.kv_pair_colon.is_match(&combined)
        && !name.contains(':')
        && PATTERNS.kv_phrase_colon.is_match(&combined)
    {
        return ParamType::OptionKvColon;
    }

    if name.contains('=') || PATTERNS.long_equals.is_match(description) {
        return ParamType::OptionEquals;
    }

    if PATTERNS.trailing_value_token.is_match(name) {
        return ParamType::Option;
    }

    if name.starts_with('-') && name.chars().count() == 2 {
        if PATTERNS.value_verbs.is_match(&desc_lower) {
            return ParamType::Option;
        }
        return ParamType::Flag;
    }

    ParamType::Option
}

/// Infers a normalized value tag from the entry's first line, falling back
/// to substring hints in the description.
fn infer_value_type(param_text: &str, description: &str) -> Option<String> {
    let patterns = [
        &PATTERNS.value_bracketed,
        &PATTERNS.value_ellipsis,
        &PATTERNS.value_equals,
        &PATTERNS.value_caps,
    ];
    for pattern in patterns {
        if let Some(caps) = pattern.captures(param_text) {
            return Some(normalize_value_token(&caps[1].to_lowercase()));
        }
    }

    let desc_lower = description.to_lowercase();
    if desc_lower.contains("file") || desc_lower.contains("path") {
        Some("file-path".to_string())
    } else if desc_lower.contains("number") || desc_lower.contains("numeric") {
        Some("number".to_string())
    } else if desc_lower.contains("directory") {
        Some("directory".to_string())
    } else if desc_lower.contains("pid") || desc_lower.contains("process id") {
        Some("pid".to_string())
    } else {
        None
    }
}

fn normalize_value_token(token: &str) -> String {
    match token {
        "file" | "path" | "filename" | "filepath" => "file-path".to_string(),
        "num" | "number" | "n" | "count" => "number".to_string(),
        "string" | "str" | "text" => "string".to_string(),
        "pid" | "process" => "pid".to_string(),
        "dir" | "directory" => "directory".to_string(),
        other => other.to_string(),
    }
}
