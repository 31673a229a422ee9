use crate::cells::set_cell;
use crate::layout::RowCursor;
use crate::layout::aggregated_status::{
    FIRST_ROW, STATE_COUNT, STATE_DESCRIPTION_COLUMN, STATE_DESCRIPTION_FIRST_ROW,
};
use crate::sxl::SxlDocument;
use umya_spreadsheet::Worksheet;

/// Fill the aggregated status sheet from the grouped object types.
///
/// The state bit descriptions have one fixed slot per bit, so the last
/// grouped type's descriptions are the ones left in the sheet.
pub fn map_aggregated_status(sheet: &mut Worksheet, doc: &SxlDocument) {
    let mut rows = RowCursor::starting_at(FIRST_ROW);

    for (name, object) in doc.grouped_objects() {
        let row = rows.advance();
        set_cell(sheet, 1, row, Some(name));
        set_cell(sheet, 3, row, object.functional_position.as_ref());
        set_cell(sheet, 4, row, object.functional_state.as_ref());

        for level in 1..=STATE_COUNT {
            set_cell(
                sheet,
                STATE_DESCRIPTION_COLUMN,
                STATE_DESCRIPTION_FIRST_ROW + level - 1,
                object.aggregated_status_description(level),
            );
        }
    }

    tracing::debug!(
        grouped = rows.peek() - FIRST_ROW,
        "aggregated status sheet mapped"
    );
}
