use std::fs;
use std::path::PathBuf;

use clap::Parser;
use sxl_xlsx::{CliArgs, ConvertConfig, InputSource, MissingTemplate, OutputTarget};

#[test]
fn defaults_write_output_xlsx_from_stdin() {
    let args = CliArgs::parse_from(["sxl-xlsx", "--template", "template.xlsx"]);
    let config = ConvertConfig::from_args(args).expect("config");

    assert_eq!(config.template, PathBuf::from("template.xlsx"));
    assert_eq!(config.input, InputSource::Stdin);
    assert_eq!(config.output, OutputTarget::File(PathBuf::from("output.xlsx")));
    assert!(!config.options.short_descriptions);
}

#[test]
fn flags_select_stdout_and_short_descriptions() {
    let args = CliArgs::parse_from([
        "sxl-xlsx",
        "--template",
        "template.xlsx",
        "--short-desc",
        "--stdout",
        "--output",
        "ignored.xlsx",
        "sxl.yaml",
    ]);
    let config = ConvertConfig::from_args(args).expect("config");

    assert_eq!(config.output, OutputTarget::Stdout);
    assert!(config.options.short_descriptions);
    assert_eq!(config.input, InputSource::File(PathBuf::from("sxl.yaml")));
}

#[test]
fn dash_reads_stdin() {
    let args = CliArgs::parse_from(["sxl-xlsx", "--template", "t.xlsx", "-"]);
    let config = ConvertConfig::from_args(args).expect("config");
    assert_eq!(config.input, InputSource::Stdin);
}

#[test]
fn missing_template_is_reported() {
    let args = CliArgs::parse_from(["sxl-xlsx", "--short-desc"]);
    let err = ConvertConfig::from_args(args).expect_err("expected failure");
    assert!(err.is::<MissingTemplate>());
    assert!(err.to_string().contains("--template needs to be set"));
}

#[test]
fn merges_config_file_and_cli_overrides() {
    let dir = tempfile::tempdir().expect("config tempdir");
    let config_path = dir.path().join("sxl.yaml");
    fs::write(
        &config_path,
        "template: from-file.xlsx\nshort_desc: true\noutput: plant.xlsx\n",
    )
    .expect("write config");

    let args = CliArgs::parse_from([
        "sxl-xlsx",
        "--config",
        config_path.to_str().unwrap(),
        "--template",
        "from-cli.xlsx",
    ]);
    let config = ConvertConfig::from_args(args).expect("config");

    assert_eq!(config.template, PathBuf::from("from-cli.xlsx"));
    assert!(config.options.short_descriptions);
    assert_eq!(config.output, OutputTarget::File(PathBuf::from("plant.xlsx")));
}

#[test]
fn json_config_supplies_template() {
    let dir = tempfile::tempdir().expect("config tempdir");
    let config_path = dir.path().join("sxl.json");
    fs::write(&config_path, r#"{"template": "t.xlsx", "stdout": true}"#).expect("write config");

    let args = CliArgs::parse_from(["sxl-xlsx", "--config", config_path.to_str().unwrap()]);
    let config = ConvertConfig::from_args(args).expect("config");

    assert_eq!(config.template, PathBuf::from("t.xlsx"));
    assert_eq!(config.output, OutputTarget::Stdout);
}

#[test]
fn unsupported_config_extension_is_error() {
    let dir = tempfile::tempdir().expect("config tempdir");
    let config_path = dir.path().join("sxl.toml");
    fs::write(&config_path, "template = 't.xlsx'").expect("write config");

    let args = CliArgs::parse_from(["sxl-xlsx", "--config", config_path.to_str().unwrap()]);
    let err = ConvertConfig::from_args(args).expect_err("expected failure");
    assert!(err.to_string().contains("unsupported config extension"));
}

#[test]
fn validate_rejects_missing_template() {
    let args = CliArgs::parse_from(["sxl-xlsx", "--template", "/this/does/not/exist.xlsx"]);
    let config = ConvertConfig::from_args(args).expect("config");
    let err = config.validate().expect_err("expected failure");
    assert!(err.to_string().contains("does not exist"));
}
