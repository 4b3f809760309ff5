//! Record type definitions for converted manual pages.
//!
//! The wire shape is deliberately loose: `value-type`, `description`, and
//! `position` are optional and omitted when absent, and field names use the
//! kebab-case spelling consumers of the JSON expect.

use serde::{Deserialize, Serialize};

/// Maximum length of an extracted parameter description, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Sentinel description used when nothing could be extracted.
pub const NO_DESCRIPTION: &str = "No description available";

/// How a parameter is passed on the command line.
///
/// The heuristics that assign these are ad hoc and can misclassify real
/// manual pages; consumers should treat the tag as a best-effort hint.
///
/// # Examples
///
/// ```
/// use tooldoc_core::ParamType;
///
/// let json = serde_json::to_string(&ParamType::OptionKvEquals).unwrap();
/// assert_eq!(json, r#""option-kv-equals""#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParamType {
    /// Boolean on/off switch taking no value.
    Flag,
    /// Option taking a separate value (e.g. `-o file`).
    Option,
    /// Option whose value is attached with `=` (e.g. `--color=when`).
    OptionEquals,
    /// Option whose value is itself a `name=value` pair.
    OptionKvEquals,
    /// Option whose value is a `name:value` pair.
    OptionKvColon,
    /// Argument identified by position rather than by a flag.
    Positional,
}

/// A single flag, option, or positional argument.
///
/// Use [`option`](ParameterRecord::option) or
/// [`positional`](ParameterRecord::positional) to create records, then chain
/// [`with_value_type`](ParameterRecord::with_value_type) and
/// [`with_description`](ParameterRecord::with_description).
///
/// # Examples
///
/// ```
/// use tooldoc_core::{ParamType, ParameterRecord};
///
/// let rec = ParameterRecord::option("--output", ParamType::Option)
///     .with_value_type("file-path")
///     .with_description("write the result to the given file");
/// assert_eq!(rec.value_type.as_deref(), Some("file-path"));
/// assert!(rec.position.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRecord {
    /// Parameter name as it appeared in the page (e.g. `-v` or `FILE`).
    pub name: String,
    /// Classification of how the parameter is passed.
    #[serde(rename = "param-type")]
    pub param_type: ParamType,
    /// Normalized value tag (`file-path`, `number`, ...), when inferable.
    #[serde(rename = "value-type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    /// Free-text description, truncated to [`DESCRIPTION_MAX_CHARS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 1-based position in the synopsis; only set for positional records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl ParameterRecord {
    /// Creates an option-family record with the given classification.
    ///
    /// # Examples
    ///
    /// ```
    /// use tooldoc_core::{ParamType, ParameterRecord};
    ///
    /// let rec = ParameterRecord::option("-v", ParamType::Flag);
    /// assert_eq!(rec.name, "-v");
    /// assert!(rec.description.is_none());
    /// ```
    pub fn option(name: &str, param_type: ParamType) -> Self {
        Self {
            name: name.to_string(),
            param_type,
            value_type: None,
            description: None,
            position: None,
        }
    }

    /// Creates a positional record with a 1-based position.
    ///
    /// # Examples
    ///
    /// ```
    /// use tooldoc_core::{ParamType, ParameterRecord};
    ///
    /// let rec = ParameterRecord::positional("FILE", 2);
    /// assert_eq!(rec.param_type, ParamType::Positional);
    /// assert_eq!(rec.position, Some(2));
    /// ```
    pub fn positional(name: &str, position: u32) -> Self {
        Self {
            name: name.to_string(),
            param_type: ParamType::Positional,
            value_type: None,
            description: None,
            position: Some(position),
        }
    }

    /// Sets the normalized value tag.
    pub fn with_value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    /// Sets the description, truncating to [`DESCRIPTION_MAX_CHARS`].
    ///
    /// Truncation counts characters, not bytes, so multi-byte text from
    /// rendered pages cannot split a code point.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.chars().take(DESCRIPTION_MAX_CHARS).collect());
        self
    }
}

/// One converted tool: name, description, and ordered parameters.
///
/// Positional parameters are listed before option parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    /// Command name the record was built for.
    pub name: String,
    /// Short description, or [`NO_DESCRIPTION`] when none was found.
    pub description: String,
    /// Extracted parameters, positionals first.
    pub parameters: Vec<ParameterRecord>,
}

impl ToolRecord {
    /// Creates a record with no parameters.
    pub fn new(name: &str, description: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }
}

/// The persisted multi-tool collection: `{"tools": [...]}`.
///
/// Invariant: `tools` is always present and always a sequence.
///
/// # Examples
///
/// ```
/// use tooldoc_core::{OutputDocument, ToolRecord};
///
/// let doc = OutputDocument::with_tool(ToolRecord::new("ls", "list directory contents"));
/// let json = serde_json::to_string(&doc).unwrap();
/// let back: OutputDocument = serde_json::from_str(&json).unwrap();
/// assert_eq!(doc, back);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDocument {
    /// Converted tools in append order.
    pub tools: Vec<ToolRecord>,
}

impl OutputDocument {
    /// Creates a document holding a single record.
    pub fn with_tool(tool: ToolRecord) -> Self {
        Self { tools: vec![tool] }
    }
}

/// The single-record shape printed to stdout: `{"tool": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEnvelope {
    /// The converted record.
    pub tool: ToolRecord,
}

impl ToolEnvelope {
    /// Wraps a record for single-record output.
    pub fn new(tool: ToolRecord) -> Self {
        Self { tool }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_type_serializes_kebab_case() {
        let pairs = [
            (ParamType::Flag, r#""flag""#),
            (ParamType::Option, r#""option""#),
            (ParamType::OptionEquals, r#""option-equals""#),
            (ParamType::OptionKvEquals, r#""option-kv-equals""#),
            (ParamType::OptionKvColon, r#""option-kv-colon""#),
            (ParamType::Positional, r#""positional""#),
        ];
        for (param_type, expected) in pairs {
            assert_eq!(serde_json::to_string(&param_type).unwrap(), expected);
        }
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let rec = ParameterRecord::option("-v", ParamType::Flag);
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"name":"-v","param-type":"flag"}"#);
    }

    #[test]
    fn test_description_truncated_to_200_chars() {
        let long = "x".repeat(500);
        let rec = ParameterRecord::option("-v", ParamType::Flag).with_description(&long);
        assert_eq!(rec.description.unwrap().chars().count(), 200);
    }

    #[test]
    fn test_description_truncation_counts_chars_not_bytes() {
        let long = "ä".repeat(300);
        let rec = ParameterRecord::option("-v", ParamType::Flag).with_description(&long);
        assert_eq!(rec.description.unwrap().chars().count(), 200);
    }

    #[test]
    fn test_positional_carries_position() {
        let rec = ParameterRecord::positional("FILE", 3);
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains(r#""position":3"#));
    }

    #[test]
    fn test_output_document_round_trip() {
        let mut record = ToolRecord::new("grep", "print lines matching a pattern");
        record
            .parameters
            .push(ParameterRecord::positional("PATTERN", 1).with_value_type("pattern"));
        record.parameters.push(
            ParameterRecord::option("-i", ParamType::Flag)
                .with_description("ignore case distinctions"),
        );
        let doc = OutputDocument::with_tool(record);

        let json = serde_json::to_string_pretty(&doc).unwrap();
        let back: OutputDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }

    #[test]
    fn test_envelope_wraps_under_tool_key() {
        let envelope = ToolEnvelope::new(ToolRecord::new("ls", "list directory contents"));
        let json = serde_json::to_string(&envelope).unwrap();
        assert!(json.starts_with(r#"{"tool":{"#));
    }
}
