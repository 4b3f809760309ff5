//! Manual-page retrieval and heuristic conversion into tool records.
//!
//! This crate turns the free-text structure of a rendered manual page into a
//! [`ToolRecord`]: a short description plus a list of flags, options, and
//! positional arguments. There is no grammar for rendered man pages, so the
//! whole pipeline is a sequence of regular-expression heuristics applied to
//! unstructured text. Results are best-effort by design.
//!
//! # Main entry points
//!
//! - [`convert_text`] — convert already-retrieved page text without touching
//!   the system or the network.
//! - [`convert_command`] — retrieve the page for a command (local viewer
//!   first, web fallback second) and convert it.
//!
//! # Example
//!
//! ```
//! use tooldoc_extract::convert_text;
//!
//! let page = "\
//! NAME
//!     frob - frobnicate the input
//!
//! SYNOPSIS
//!     frob [OPTIONS] FILE
//!
//! OPTIONS
//!     -v, --verbose    enable verbose output
//! ";
//!
//! let record = convert_text("frob", page);
//! assert_eq!(record.description, "frobnicate the input");
//! assert_eq!(record.parameters.len(), 2);
//! // Positionals come before options.
//! assert_eq!(record.parameters[0].name, "FILE");
//! assert_eq!(record.parameters[1].name, "-v");
//! ```

pub mod html;
pub mod parser;
pub mod retrieve;

use tooldoc_core::ToolRecord;

use retrieve::{PageSource, RetrieveError};

/// Converts already-retrieved manual-page text into a tool record.
///
/// Missing or unrecognizable sections are not errors: they simply contribute
/// nothing. Positional parameters are listed before option parameters.
pub fn convert_text(command: &str, text: &str) -> ToolRecord {
    let description = parser::description::extract_description(text);
    let mut parameters = parser::synopsis::parse_positionals(text, command);
    parameters.extend(parser::options::parse_options(text));

    let mut record = ToolRecord::new(command, description);
    record.parameters = parameters;
    record
}

/// Retrieves the manual page for `command` and converts it.
///
/// `local` is tried first; `web` is tried at most once, and only when the
/// local source fails or produces nothing but whitespace.
pub fn convert_command(
    command: &str,
    local: &dyn PageSource,
    web: &dyn PageSource,
) -> Result<ToolRecord, RetrieveError> {
    let text = retrieve::retrieve(command, local, web)?;
    Ok(convert_text(command, &text))
}
