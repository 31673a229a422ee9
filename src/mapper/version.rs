use crate::cells::set_cell;
use crate::layout::version::*;
use crate::sxl::{Scalar, SxlDocument};
use umya_spreadsheet::Worksheet;

/// Copy the document metadata onto the Version sheet.
pub fn map_version(sheet: &mut Worksheet, doc: &SxlDocument) {
    let fields: [((u32, u32), Option<&Scalar>); 9] = [
        (PLANT_ID, doc.id.as_ref()),
        (PLANT_NAME, doc.description.as_ref()),
        (CONSTRUCTOR, doc.constructor.as_ref()),
        (REVIEWED, doc.reviewed.as_ref()),
        (APPROVED, doc.approved.as_ref()),
        (CREATED_DATE, doc.created_date.as_ref()),
        (REVISION, doc.version.as_ref()),
        (REVISION_DATE, doc.date.as_ref()),
        (RSMP_VERSION, doc.rsmp_version.as_ref()),
    ];
    for ((col, row), value) in fields {
        set_cell(sheet, col, row, value);
    }
    tracing::debug!(
        written = fields.iter().filter(|(_, value)| value.is_some()).count(),
        "version sheet mapped"
    );
}
