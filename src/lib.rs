pub mod arguments;
pub mod cells;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod mapper;
pub mod styles;
pub mod sxl;
pub mod utils;
pub mod workbook;

pub use config::{CliArgs, ConvertConfig, InputSource, MissingTemplate};
pub use error::{ConvertError, ConvertResult};
pub use logging::{LoggingConfig, init_logging};
pub use mapper::{ConversionRun, MapOptions};
pub use sxl::SxlDocument;
pub use workbook::{OutputTarget, TemplateWorkbook};

use anyhow::{Context, Result};
use std::path::Path;

/// Read the document, fill the template and write the result.
///
/// Nothing is written unless every sheet was mapped.
pub fn run(config: &ConvertConfig) -> Result<()> {
    let workbook = transcribe(&config.template, &config.input, config.options)?;
    workbook
        .write_to(&config.output)
        .with_context(|| format!("failed to save workbook to {}", config.output))?;
    Ok(())
}

/// Open `template` and map the document from `input` into it.
pub fn transcribe(
    template: &Path,
    input: &InputSource,
    options: MapOptions,
) -> Result<TemplateWorkbook> {
    let mut workbook = TemplateWorkbook::open(template)?;
    let doc = input.read_document()?;
    fill_template(&mut workbook, &doc, options)?;
    Ok(workbook)
}

/// Map `doc` into an already opened template.
pub fn fill_template(
    workbook: &mut TemplateWorkbook,
    doc: &SxlDocument,
    options: MapOptions,
) -> ConvertResult<()> {
    if let Some(name) = workbook.missing_sheets().first() {
        return Err(ConvertError::SheetNotFound {
            name: name.to_string(),
        });
    }

    tracing::info!(
        object_types = doc.objects.len(),
        sites = doc.sites.len(),
        short_descriptions = options.short_descriptions,
        "mapping SXL document"
    );

    let mut run = ConversionRun::new(options);
    run.map_document(workbook, doc)?;

    tracing::debug!(
        return_value_blocks = run.return_value_blocks().inserted(),
        "template filled"
    );
    Ok(())
}
