use super::{ArgumentLayout, MapOptions, description_for, write_arguments};
use crate::arguments::NotesJoin;
use crate::cells::set_cell;
use crate::error::{ConvertError, ConvertResult};
use crate::layout::RowCursor;
use crate::layout::status::{FIRST_ARGUMENT_COLUMN, FIRST_ROW};
use crate::sxl::SxlDocument;
use umya_spreadsheet::Worksheet;

const RETURN_VALUES: ArgumentLayout = ArgumentLayout {
    first_column: FIRST_ARGUMENT_COLUMN,
    with_command: false,
    notes_join: NotesJoin::Raw,
};

/// One row per status with its return values to the right.
///
/// Every status must declare `arguments`; a status without them aborts the
/// conversion.
pub fn map_statuses(
    sheet: &mut Worksheet,
    doc: &SxlDocument,
    options: MapOptions,
) -> ConvertResult<()> {
    let mut rows = RowCursor::starting_at(FIRST_ROW);

    for (type_name, object) in &doc.objects {
        for (code, status) in object.statuses() {
            let row = rows.advance();
            set_cell(sheet, 1, row, Some(type_name));
            set_cell(sheet, 2, row, status.object.as_ref());
            set_cell(sheet, 3, row, Some(code));
            set_cell(
                sheet,
                4,
                row,
                description_for(options, status.description.as_deref()),
            );

            let arguments = status
                .arguments
                .as_ref()
                .ok_or_else(|| ConvertError::MissingField {
                    entry: format!("status {code} of {type_name}"),
                    field: "arguments",
                })?;
            write_arguments(sheet, row, arguments, RETURN_VALUES, None);
        }
    }

    tracing::debug!(statuses = rows.peek() - FIRST_ROW, "status sheet mapped");
    Ok(())
}
