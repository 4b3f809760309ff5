use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tooldoc_core::{OutputDocument, ToolEnvelope, ToolRecord, append_tool};
use tooldoc_extract::retrieve::{LocalViewer, WebViewer};

#[derive(Debug, Parser)]
#[command(name = "tooldoc")]
#[command(about = "Convert manual pages to structured JSON tool records")]
struct Cli {
    /// Name of the command-line tool to process.
    command: String,
    /// Output JSON file (if it exists, the record is appended to its tools array).
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let local = LocalViewer;
    let web = WebViewer::new();
    let record = tooldoc_extract::convert_command(&cli.command, &local, &web)
        .map_err(|err| err.to_string())?;

    match cli.output {
        Some(path) => write_output(&path, &cli.command, &record, cli.pretty),
        None => print_record(record, cli.pretty),
    }
}

fn print_record(record: ToolRecord, pretty: bool) -> Result<(), String> {
    let json = to_json(&ToolEnvelope::new(record), pretty)?;
    println!("{json}");
    Ok(())
}

fn write_output(
    path: &Path,
    command: &str,
    record: &ToolRecord,
    pretty: bool,
) -> Result<(), String> {
    if path.exists() {
        let raw = fs::read_to_string(path)
            .map_err(|err| format!("failed to read '{}': {err}", path.display()))?;
        let doc = append_tool(&raw, record).map_err(|err| err.to_string())?;
        write_json(path, &doc, pretty)?;
        eprintln!("Appended {command} to {}", path.display());
    } else {
        let doc = OutputDocument::with_tool(record.clone());
        write_json(path, &doc, pretty)?;
        eprintln!("Created {} with {command}", path.display());
    }
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T, pretty: bool) -> Result<(), String> {
    let json = to_json(value, pretty)?;
    fs::write(path, json).map_err(|err| format!("failed to write '{}': {err}", path.display()))
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, String> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(|err| format!("JSON serialization failed: {err}"))
}
