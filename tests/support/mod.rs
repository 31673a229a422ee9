#![allow(dead_code)]

use std::path::{Path, PathBuf};

use sxl_xlsx::layout::ALL_SHEETS;
use sxl_xlsx::{MapOptions, SxlDocument, TemplateWorkbook, fill_template};
use tempfile::{TempDir, tempdir};
use umya_spreadsheet::{self, Spreadsheet, Worksheet};

pub const TLC_SXL: &str = include_str!("../fixtures/tlc.yaml");

/// Marker the template carries in cells the mapper must not blank.
pub const TEMPLATE_DEFAULT: &str = "template default";

pub fn write_workbook_to_path<F>(path: &Path, f: F)
where
    F: FnOnce(&mut Spreadsheet),
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create dir");
    }
    let mut book = umya_spreadsheet::new_file();
    f(&mut book);
    umya_spreadsheet::writer::xlsx::write(&book, path).expect("write workbook");
}

/// A blank workbook with every SXL sheet, as shipped templates have.
pub fn template_book() -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file();
    book.get_sheet_by_name_mut("Sheet1")
        .expect("default sheet")
        .set_name(ALL_SHEETS[0]);
    for name in &ALL_SHEETS[1..] {
        book.new_sheet(*name).expect("new sheet");
    }
    book
}

pub fn parse(yaml: &str) -> SxlDocument {
    SxlDocument::from_yaml_str(yaml).expect("valid SXL")
}

/// Map `yaml` into a fresh in-memory template.
pub fn fill(yaml: &str, options: MapOptions) -> Spreadsheet {
    let mut workbook = TemplateWorkbook::from_spreadsheet(template_book());
    fill_template(&mut workbook, &parse(yaml), options).expect("fill template");
    workbook.into_spreadsheet()
}

pub fn sheet<'a>(book: &'a Spreadsheet, name: &str) -> &'a Worksheet {
    book.get_sheet_by_name(name).expect("sheet present")
}

/// Cell text at 1-based (`col`, `row`), `None` when the cell was never created.
pub fn text(sheet: &Worksheet, col: u32, row: u32) -> Option<String> {
    sheet
        .get_cell(sxl_xlsx::utils::cell_address(col, row).as_str())
        .map(|cell| cell.get_value().to_string())
}

pub fn row(sheet: &Worksheet, row: u32, cols: std::ops::RangeInclusive<u32>) -> Vec<String> {
    cols.map(|col| text(sheet, col, row).unwrap_or_default())
        .collect()
}

pub struct TestWorkspace {
    _tempdir: TempDir,
    root: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let tempdir = tempdir().expect("tempdir");
        let root = tempdir.path().to_path_buf();
        Self {
            _tempdir: tempdir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn create_template(&self, name: &str) -> PathBuf {
        self.create_workbook(name, |book| *book = template_book())
    }

    pub fn create_workbook<F>(&self, name: &str, f: F) -> PathBuf
    where
        F: FnOnce(&mut Spreadsheet),
    {
        let path = self.path(name);
        write_workbook_to_path(&path, f);
        path
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("write file");
        path
    }
}
