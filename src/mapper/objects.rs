use crate::cells::set_cell;
use crate::layout::RowCursor;
use crate::layout::objects::{GROUPED_FIRST_ROW, SINGLE_FIRST_ROW, SITE_DESCRIPTION, SITE_NAME};
use crate::sxl::{ObjectCategory, SxlDocument};
use umya_spreadsheet::Worksheet;

/// List every object instance of every site.
///
/// The template has a single site header, so with several sites the last
/// one's name and description end up there. Instance rows keep counting
/// across sites.
pub fn map_objects(sheet: &mut Worksheet, doc: &SxlDocument) {
    let mut grouped = RowCursor::starting_at(GROUPED_FIRST_ROW);
    let mut single = RowCursor::starting_at(SINGLE_FIRST_ROW);

    for (site_name, site) in &doc.sites {
        set_cell(sheet, SITE_NAME.0, SITE_NAME.1, Some(site_name));
        set_cell(
            sheet,
            SITE_DESCRIPTION.0,
            SITE_DESCRIPTION.1,
            site.description.as_ref(),
        );

        for (type_name, object) in &doc.objects {
            let cursor = match object.category() {
                ObjectCategory::Grouped => &mut grouped,
                ObjectCategory::Single => &mut single,
            };
            for (instance_name, instance) in site.instances_of(type_name) {
                let row = cursor.advance();
                set_cell(sheet, 1, row, Some(type_name));
                set_cell(sheet, 2, row, Some(instance_name));
                set_cell(sheet, 3, row, instance.component_id.as_ref());
                set_cell(sheet, 4, row, instance.nts_object_id.as_ref());
                set_cell(sheet, 5, row, instance.external_nts_id.as_ref());
                set_cell(sheet, 6, row, instance.description.as_ref());
            }
        }
    }

    tracing::debug!(
        sites = doc.sites.len(),
        grouped = grouped.peek() - GROUPED_FIRST_ROW,
        single = single.peek() - SINGLE_FIRST_ROW,
        "objects sheet mapped"
    );
}
