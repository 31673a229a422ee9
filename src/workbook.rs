use crate::error::{ConvertError, ConvertResult};
use crate::layout::ALL_SHEETS;
use crate::utils::path_to_forward_slashes;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use umya_spreadsheet::reader::xlsx;
use umya_spreadsheet::{Spreadsheet, Worksheet};

/// Where the finished workbook goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputTarget::File(path) => write!(f, "{}", path_to_forward_slashes(path)),
            OutputTarget::Stdout => write!(f, "stdout"),
        }
    }
}

/// A template workbook opened for in-place editing.
pub struct TemplateWorkbook {
    book: Spreadsheet,
}

impl TemplateWorkbook {
    pub fn open(path: &Path) -> ConvertResult<Self> {
        let book = xlsx::read(path).map_err(|err| ConvertError::TemplateRead {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let template = Self { book };
        tracing::debug!(
            template = %path_to_forward_slashes(path),
            sheets = ?template.sheet_names(),
            "template opened"
        );
        Ok(template)
    }

    pub fn from_spreadsheet(book: Spreadsheet) -> Self {
        Self { book }
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.book
            .get_sheet_collection()
            .iter()
            .map(|sheet| sheet.get_name().to_string())
            .collect()
    }

    /// Names of fixed SXL sheets the template lacks.
    pub fn missing_sheets(&self) -> Vec<&'static str> {
        ALL_SHEETS
            .iter()
            .copied()
            .filter(|name| self.book.get_sheet_by_name(name).is_none())
            .collect()
    }

    pub fn sheet_mut(&mut self, name: &str) -> ConvertResult<&mut Worksheet> {
        self.book
            .get_sheet_by_name_mut(name)
            .ok_or_else(|| ConvertError::SheetNotFound {
                name: name.to_string(),
            })
    }

    pub fn into_spreadsheet(self) -> Spreadsheet {
        self.book
    }

    pub fn to_bytes(&self) -> ConvertResult<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        umya_spreadsheet::writer::xlsx::write_writer(&self.book, &mut buffer).map_err(|err| {
            ConvertError::WorkbookWrite {
                target: "memory".to_string(),
                message: err.to_string(),
            }
        })?;
        Ok(buffer.into_inner())
    }

    pub fn write_to(&self, target: &OutputTarget) -> ConvertResult<()> {
        match target {
            OutputTarget::File(path) => {
                umya_spreadsheet::writer::xlsx::write(&self.book, path).map_err(|err| {
                    ConvertError::WorkbookWrite {
                        target: target.to_string(),
                        message: err.to_string(),
                    }
                })?;
            }
            OutputTarget::Stdout => {
                let bytes = self.to_bytes()?;
                let stdout = std::io::stdout();
                let mut lock = stdout.lock();
                lock.write_all(&bytes)
                    .and_then(|_| lock.flush())
                    .map_err(|source| ConvertError::Io {
                        context: "failed to write workbook to stdout".to_string(),
                        source,
                    })?;
            }
        }
        tracing::info!(output = %target, "workbook written");
        Ok(())
    }
}
