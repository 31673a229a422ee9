use super::{ArgumentLayout, MapOptions, description_for, write_arguments};
use crate::arguments::NotesJoin;
use crate::cells::set_cell;
use crate::layout::RowCursor;
use crate::layout::alarms::{FIRST_ARGUMENT_COLUMN, FIRST_ROW};
use crate::sxl::SxlDocument;
use umya_spreadsheet::Worksheet;

const ARGUMENTS: ArgumentLayout = ArgumentLayout {
    first_column: FIRST_ARGUMENT_COLUMN,
    with_command: false,
    notes_join: NotesJoin::Trimmed,
};

/// One row per alarm, object types in document order. Alarms without
/// arguments leave the argument columns alone.
pub fn map_alarms(sheet: &mut Worksheet, doc: &SxlDocument, options: MapOptions) {
    let mut rows = RowCursor::starting_at(FIRST_ROW);

    for (type_name, object) in &doc.objects {
        for (code, alarm) in object.alarms() {
            let row = rows.advance();
            set_cell(sheet, 1, row, Some(type_name));
            set_cell(sheet, 2, row, alarm.object.as_ref());
            set_cell(sheet, 3, row, Some(code));
            set_cell(
                sheet,
                4,
                row,
                description_for(options, alarm.description.as_deref()),
            );
            set_cell(sheet, 5, row, alarm.external_alarm_code_id.as_ref());
            set_cell(sheet, 6, row, alarm.external_nts_alarm_code_id.as_ref());
            set_cell(sheet, 7, row, alarm.priority.as_ref());
            set_cell(sheet, 8, row, alarm.category.as_ref());

            if let Some(arguments) = alarm.arguments.as_ref() {
                write_arguments(sheet, row, arguments, ARGUMENTS, None);
            }
        }
    }

    tracing::debug!(alarms = rows.peek() - FIRST_ROW, "alarms sheet mapped");
}
