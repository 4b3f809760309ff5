//! Append-merge of a tool record into an existing output document.
//!
//! The merge operates on [`serde_json::Value`] rather than the typed
//! structs: entries already present in the `tools` array are carried over
//! verbatim, whatever their shape, and only the structural invariants are
//! checked.
//!
//! # Example
//!
//! ```
//! use tooldoc_core::{ToolRecord, append_tool};
//!
//! let existing = r#"{"tools": [{"name": "ls", "description": "d", "parameters": []}]}"#;
//! let doc = append_tool(existing, &ToolRecord::new("grep", "g")).unwrap();
//! let names: Vec<_> = doc["tools"]
//!     .as_array()
//!     .unwrap()
//!     .iter()
//!     .map(|t| t["name"].as_str().unwrap().to_string())
//!     .collect();
//! assert_eq!(names, vec!["ls", "grep"]);
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::ToolRecord;

/// Ways the append-merge can fail.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The existing document is not valid JSON.
    #[error("could not parse existing output document: {0}")]
    Parse(#[from] serde_json::Error),
    /// The existing document root is not a JSON object.
    #[error("existing output document root is not an object")]
    RootNotObject,
    /// The existing document has a `tools` key that is not an array.
    #[error("existing 'tools' field is not an array")]
    ToolsNotArray,
}

/// Appends `tool` to the `tools` array of a serialized output document.
///
/// A document missing the `tools` key is restarted as a bare tools
/// collection; a `tools` key holding anything but an array is an error.
/// Existing array entries are preserved untouched.
pub fn append_tool(raw: &str, tool: &ToolRecord) -> Result<Value, MergeError> {
    let mut doc: Value = serde_json::from_str(raw)?;
    let obj = doc.as_object_mut().ok_or(MergeError::RootNotObject)?;

    if !obj.contains_key("tools") {
        // Not a document this writer produced; restart it as one.
        obj.clear();
        obj.insert("tools".to_string(), Value::Array(Vec::new()));
    }

    let tools = obj
        .get_mut("tools")
        .and_then(Value::as_array_mut)
        .ok_or(MergeError::ToolsNotArray)?;
    tools.push(serde_json::to_value(tool)?);

    Ok(doc)
}
