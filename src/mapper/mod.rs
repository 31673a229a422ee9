//! Transcription of an [`SxlDocument`] into the fixed sheets of a template.
//!
//! Each sheet has its own mapper. They run in template order and share a
//! [`ConversionRun`] holding the options and the counters that outlive a
//! single sheet.

pub mod aggregated_status;
pub mod alarms;
pub mod commands;
pub mod object_types;
pub mod objects;
pub mod status;
pub mod version;

use crate::arguments::{NotesJoin, render_argument};
use crate::cells::set_cell;
use crate::error::ConvertResult;
use crate::layout;
use crate::styles::ReturnValueBlocks;
use crate::sxl::{Arguments, SxlDocument};
use crate::utils::first_line;
use crate::workbook::TemplateWorkbook;
use umya_spreadsheet::Worksheet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapOptions {
    /// Keep only the first line of alarm, status and command descriptions.
    pub short_descriptions: bool,
}

/// State for one document-to-workbook conversion.
#[derive(Debug, Default)]
pub struct ConversionRun {
    options: MapOptions,
    return_values: ReturnValueBlocks,
}

impl ConversionRun {
    pub fn new(options: MapOptions) -> Self {
        Self {
            options,
            return_values: ReturnValueBlocks::new(),
        }
    }

    pub fn return_value_blocks(&self) -> &ReturnValueBlocks {
        &self.return_values
    }

    /// Fill every SXL sheet of `workbook` from `doc`.
    pub fn map_document(
        &mut self,
        workbook: &mut TemplateWorkbook,
        doc: &SxlDocument,
    ) -> ConvertResult<()> {
        version::map_version(workbook.sheet_mut(layout::VERSION_SHEET)?, doc);
        object_types::map_object_types(workbook.sheet_mut(layout::OBJECT_TYPES_SHEET)?, doc);
        objects::map_objects(workbook.sheet_mut(layout::OBJECTS_SHEET)?, doc);
        aggregated_status::map_aggregated_status(
            workbook.sheet_mut(layout::AGGREGATED_STATUS_SHEET)?,
            doc,
        );
        alarms::map_alarms(workbook.sheet_mut(layout::ALARMS_SHEET)?, doc, self.options);

        let sheet = workbook.sheet_mut(layout::STATUS_SHEET)?;
        self.return_values.insert_all(sheet);
        status::map_statuses(sheet, doc, self.options)?;

        commands::map_commands(workbook.sheet_mut(layout::COMMANDS_SHEET)?, doc, self.options)?;
        Ok(())
    }
}

pub(crate) fn description_for(options: MapOptions, description: Option<&str>) -> Option<&str> {
    if options.short_descriptions {
        description.map(first_line)
    } else {
        description
    }
}

/// Columns one argument occupies on a sheet.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArgumentLayout {
    pub first_column: u32,
    /// Extra column between name and type carrying the command name.
    pub with_command: bool,
    pub notes_join: NotesJoin,
}

impl ArgumentLayout {
    fn width(self) -> u32 {
        if self.with_command { 5 } else { 4 }
    }
}

/// Write `arguments` left to right starting at `layout.first_column`.
pub(crate) fn write_arguments(
    sheet: &mut Worksheet,
    row: u32,
    arguments: &Arguments,
    layout: ArgumentLayout,
    command: Option<&crate::sxl::Scalar>,
) {
    let mut col = layout.first_column;
    for (name, argument) in arguments {
        let rendered = render_argument(argument, layout.notes_join);
        set_cell(sheet, col, row, Some(name));
        let mut next = col + 1;
        if layout.with_command {
            set_cell(sheet, next, row, command);
            next += 1;
        }
        set_cell(sheet, next, row, argument.kind.as_ref());
        set_cell(sheet, next + 1, row, rendered.value);
        set_cell(sheet, next + 2, row, rendered.description);
        col += layout.width();
    }
}
