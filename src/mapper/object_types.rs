use crate::cells::set_cell;
use crate::layout::RowCursor;
use crate::layout::object_types::{GROUPED_FIRST_ROW, SINGLE_FIRST_ROW};
use crate::sxl::{ObjectCategory, SxlDocument};
use umya_spreadsheet::Worksheet;

/// List object types, grouped ones in the upper table and single ones in
/// the lower table.
pub fn map_object_types(sheet: &mut Worksheet, doc: &SxlDocument) {
    let mut grouped = RowCursor::starting_at(GROUPED_FIRST_ROW);
    let mut single = RowCursor::starting_at(SINGLE_FIRST_ROW);

    for (name, object) in &doc.objects {
        let row = match object.category() {
            ObjectCategory::Grouped => grouped.advance(),
            ObjectCategory::Single => single.advance(),
        };
        set_cell(sheet, 1, row, Some(name));
        set_cell(sheet, 2, row, object.description.as_ref());
    }

    tracing::debug!(
        grouped = grouped.peek() - GROUPED_FIRST_ROW,
        single = single.peek() - SINGLE_FIRST_ROW,
        "object types sheet mapped"
    );
}
