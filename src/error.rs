//! Error types for the SXL to workbook conversion.

use std::path::PathBuf;
use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// Template workbook could not be opened or parsed
    #[error("failed to read template workbook {path:?}: {message}")]
    TemplateRead { path: PathBuf, message: String },

    /// Workbook could not be serialized
    #[error("failed to write workbook to {target}: {message}")]
    WorkbookWrite { target: String, message: String },

    /// Template lacks one of the fixed sheets
    #[error("template has no sheet named '{name}'")]
    SheetNotFound { name: String },

    /// SXL document is not valid YAML or does not match the expected layout
    #[error("invalid SXL document: {0}")]
    InvalidDocument(#[source] serde_yaml::Error),

    /// A field the mapping cannot do without is absent
    #[error("{entry} has no '{field}' mapping")]
    MissingField { entry: String, field: &'static str },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}
