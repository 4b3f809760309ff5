//! Core record types for structured manual-page output.
//!
//! This crate defines the data model produced when a manual page is
//! converted into a structured description of a command-line tool:
//!
//! - [`ToolRecord`] — one tool: name, short description, and parameters.
//! - [`ParameterRecord`] — a single flag, option, or positional argument.
//! - [`ParamType`] — how a parameter is passed on the command line.
//! - [`OutputDocument`] — a `{"tools": [...]}` collection persisted to disk.
//! - [`ToolEnvelope`] — the `{"tool": {...}}` shape printed for one record.
//!
//! Appending to an existing collection ([`append_tool`]) works at the JSON
//! value level so entries the writer did not produce survive untouched.
//!
//! # Example
//!
//! ```
//! use tooldoc_core::*;
//!
//! let mut record = ToolRecord::new("grep", "print lines matching a pattern");
//! record.parameters.push(
//!     ParameterRecord::positional("PATTERN", 1).with_value_type("pattern"),
//! );
//! record.parameters.push(
//!     ParameterRecord::option("-v", ParamType::Flag)
//!         .with_description("Invert the sense of matching"),
//! );
//!
//! let json = serde_json::to_string(&record).unwrap();
//! assert!(json.contains(r#""param-type":"positional""#));
//! ```

mod merge;
mod types;

pub use merge::{MergeError, append_tool};
pub use types::*;
