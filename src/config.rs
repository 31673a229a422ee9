use crate::mapper::MapOptions;
use crate::sxl::SxlDocument;
use crate::workbook::OutputTarget;
use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_OUTPUT: &str = "output.xlsx";
const STDIN_MARKER: &str = "-";

/// Raised when neither the command line nor the config file names a template.
#[derive(Debug, Error)]
#[error("--template needs to be set")]
pub struct MissingTemplate;

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "sxl-xlsx",
    about = "Transcribe an SXL signal exchange list (YAML) into an xlsx template",
    version
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to a configuration file (YAML or JSON)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "XLSX", help = "SXL template workbook")]
    pub template: Option<PathBuf>,

    #[arg(long, help = "Keep only the first line of alarm, status and command descriptions")]
    pub short_desc: bool,

    #[arg(long, help = "Write the workbook to standard output")]
    pub stdout: bool,

    #[arg(
        long,
        value_name = "FILE",
        help = "Output workbook path (default: output.xlsx)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        value_name = "INPUT",
        help = "SXL document to read; standard input when omitted or '-'"
    )]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn read_document(&self) -> Result<SxlDocument> {
        match self {
            InputSource::Stdin => SxlDocument::from_reader(io::stdin().lock())
                .context("failed to load SXL document from stdin"),
            InputSource::File(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("failed to read SXL document {:?}", path))?;
                SxlDocument::from_yaml_str(&contents)
                    .with_context(|| format!("failed to load SXL document {:?}", path))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub template: PathBuf,
    pub input: InputSource,
    pub output: OutputTarget,
    pub options: MapOptions,
}

impl ConvertConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            config,
            template: cli_template,
            short_desc: cli_short_desc,
            stdout: cli_stdout,
            output: cli_output,
            input,
        } = args;

        let file_config = if let Some(path) = config.as_ref() {
            load_config_file(path)?
        } else {
            PartialConfig::default()
        };

        let PartialConfig {
            template: file_template,
            short_desc: file_short_desc,
            stdout: file_stdout,
            output: file_output,
        } = file_config;

        let template = cli_template.or(file_template).ok_or(MissingTemplate)?;

        let short_descriptions = cli_short_desc || file_short_desc.unwrap_or(false);
        let to_stdout = cli_stdout || file_stdout.unwrap_or(false);

        let output = if to_stdout {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(
                cli_output
                    .or(file_output)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            )
        };

        let input = match input {
            Some(path) if path.as_os_str() != STDIN_MARKER => InputSource::File(path),
            _ => InputSource::Stdin,
        };

        Ok(Self {
            template,
            input,
            output,
            options: MapOptions { short_descriptions },
        })
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.template.exists(),
            "template {:?} does not exist",
            self.template
        );
        anyhow::ensure!(
            self.template.is_file(),
            "template {:?} is not a file",
            self.template
        );
        if let InputSource::File(path) = &self.input {
            anyhow::ensure!(path.is_file(), "input {:?} is not a file", path);
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    template: Option<PathBuf>,
    short_desc: Option<bool>,
    stdout: Option<bool>,
    output: Option<PathBuf>,
}

fn load_config_file(path: &Path) -> Result<PartialConfig> {
    if !path.exists() {
        anyhow::bail!("config file {:?} does not exist", path);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {:?}", path))?;
    let ext = path
        .extension()
        .and_then(|os| os.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse YAML config {:?}", path))?,
        "json" => serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse JSON config {:?}", path))?,
        other => anyhow::bail!("unsupported config extension: {other}"),
    };
    Ok(parsed)
}
