use super::{ArgumentLayout, MapOptions, description_for, write_arguments};
use crate::arguments::NotesJoin;
use crate::cells::set_cell;
use crate::error::{ConvertError, ConvertResult};
use crate::layout::RowCursor;
use crate::layout::commands::{FIRST_ARGUMENT_COLUMN, FIRST_ROW};
use crate::sxl::SxlDocument;
use umya_spreadsheet::Worksheet;

const ARGUMENTS: ArgumentLayout = ArgumentLayout {
    first_column: FIRST_ARGUMENT_COLUMN,
    with_command: true,
    notes_join: NotesJoin::Raw,
};

/// One row per command; every argument repeats the command name.
pub fn map_commands(
    sheet: &mut Worksheet,
    doc: &SxlDocument,
    options: MapOptions,
) -> ConvertResult<()> {
    let mut rows = RowCursor::starting_at(FIRST_ROW);

    for (type_name, object) in &doc.objects {
        for (code, command) in object.commands() {
            let row = rows.advance();
            set_cell(sheet, 1, row, Some(type_name));
            set_cell(sheet, 2, row, command.object.as_ref());
            set_cell(sheet, 3, row, Some(code));
            set_cell(
                sheet,
                4,
                row,
                description_for(options, command.description.as_deref()),
            );

            let Some(arguments) = command.arguments.as_ref() else {
                return Err(ConvertError::MissingField {
                    entry: format!("command {code} of {type_name}"),
                    field: "arguments",
                });
            };
            write_arguments(sheet, row, arguments, ARGUMENTS, command.command.as_ref());
        }
    }

    tracing::debug!(commands = rows.peek() - FIRST_ROW, "commands sheet mapped");
    Ok(())
}
