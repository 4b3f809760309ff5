//! Fixture-driven tests for the conversion pipeline.

use std::fs;
use std::path::PathBuf;

use tooldoc_core::{ParamType, ParameterRecord};
use tooldoc_extract::convert_text;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(path).expect("fixture file must be readable")
}

fn find<'a>(record: &'a [ParameterRecord], name: &str) -> &'a ParameterRecord {
    record
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("missing parameter '{name}'"))
}

#[test]
fn test_grep_fixture_description_from_name_section() {
    let record = convert_text("grep", &fixture("grep-man.txt"));
    assert_eq!(record.name, "grep");
    assert_eq!(record.description, "print lines that match patterns");
}

#[test]
fn test_grep_fixture_positionals_come_first() {
    let record = convert_text("grep", &fixture("grep-man.txt"));

    assert_eq!(record.parameters[0].name, "PATTERN");
    assert_eq!(record.parameters[0].param_type, ParamType::Positional);
    assert_eq!(record.parameters[0].position, Some(1));
    assert_eq!(record.parameters[1].name, "FILE");
    assert_eq!(record.parameters[1].position, Some(2));
    assert_eq!(record.parameters[1].value_type.as_deref(), Some("file-path"));

    // Everything after the positionals is option-family.
    assert!(
        record.parameters[2..]
            .iter()
            .all(|p| p.param_type != ParamType::Positional)
    );
}

#[test]
fn test_grep_fixture_option_classification() {
    let record = convert_text("grep", &fixture("grep-man.txt"));

    let ignore_case = find(&record.parameters, "-i");
    assert_eq!(ignore_case.param_type, ParamType::Flag);
    assert!(
        ignore_case
            .description
            .as_deref()
            .unwrap()
            .contains("Ignore case distinctions")
    );

    let regexp = find(&record.parameters, "-e");
    assert_eq!(regexp.param_type, ParamType::Option);

    let line_number = find(&record.parameters, "-n");
    assert_eq!(line_number.param_type, ParamType::Flag);
}

#[test]
fn test_curl_fixture_kv_classifications() {
    let record = convert_text("curl", &fixture("curl-man.txt"));

    assert_eq!(record.description, "transfer a URL");
    assert_eq!(
        find(&record.parameters, "-b").param_type,
        ParamType::OptionKvEquals
    );
    assert_eq!(
        find(&record.parameters, "-u").param_type,
        ParamType::OptionKvColon
    );
    assert_eq!(find(&record.parameters, "-v").param_type, ParamType::Flag);

    let output = find(&record.parameters, "-o");
    assert_eq!(output.param_type, ParamType::Option);
    assert_eq!(output.value_type.as_deref(), Some("file-path"));

    let url = find(&record.parameters, "URL");
    assert_eq!(url.param_type, ParamType::Positional);
    assert_eq!(url.position, Some(1));
}

#[test]
fn test_true_fixture_description_falls_back_to_first_sentence() {
    let record = convert_text("true", &fixture("true-man.txt"));
    assert_eq!(
        record.description,
        "Exit with a status code indicating success"
    );
}

#[test]
fn test_true_fixture_bsd_lead_in_options() {
    let record = convert_text("true", &fixture("true-man.txt"));

    let help = find(&record.parameters, "--help");
    assert_eq!(help.param_type, ParamType::Option);
    let version = find(&record.parameters, "--version");
    assert_eq!(version.param_type, ParamType::Option);

    assert!(
        record
            .parameters
            .iter()
            .all(|p| p.param_type != ParamType::Positional)
    );
}

#[test]
fn test_unparsable_text_still_produces_a_record() {
    let record = convert_text("mystery", "completely unstructured text");
    assert_eq!(record.name, "mystery");
    assert_eq!(record.description, "No description available");
    assert!(record.parameters.is_empty());
}

#[test]
fn test_record_serializes_with_kebab_case_keys() {
    let record = convert_text("grep", &fixture("grep-man.txt"));
    let json = serde_json::to_value(&record).expect("record must serialize");

    let first = &json["parameters"][0];
    assert_eq!(first["param-type"], "positional");
    assert_eq!(first["position"], 1);
    assert!(first.get("param_type").is_none());
}
