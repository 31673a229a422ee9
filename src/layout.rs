//! Fixed positions in the SXL workbook template.
//!
//! Columns and rows are 1-based, matching what a user sees in a spreadsheet
//! application.

pub const VERSION_SHEET: &str = "Version";
pub const OBJECT_TYPES_SHEET: &str = "Object types";
pub const OBJECTS_SHEET: &str = "Objects";
pub const AGGREGATED_STATUS_SHEET: &str = "Aggregated status";
pub const ALARMS_SHEET: &str = "Alarms";
pub const STATUS_SHEET: &str = "Status";
pub const COMMANDS_SHEET: &str = "Commands";

pub const ALL_SHEETS: &[&str] = &[
    VERSION_SHEET,
    OBJECT_TYPES_SHEET,
    OBJECTS_SHEET,
    AGGREGATED_STATUS_SHEET,
    ALARMS_SHEET,
    STATUS_SHEET,
    COMMANDS_SHEET,
];

pub mod version {
    pub const PLANT_ID: (u32, u32) = (2, 4);
    pub const PLANT_NAME: (u32, u32) = (2, 6);
    pub const CONSTRUCTOR: (u32, u32) = (2, 10);
    pub const REVIEWED: (u32, u32) = (2, 12);
    pub const APPROVED: (u32, u32) = (2, 15);
    pub const CREATED_DATE: (u32, u32) = (2, 18);
    pub const REVISION: (u32, u32) = (2, 21);
    pub const REVISION_DATE: (u32, u32) = (3, 21);
    pub const RSMP_VERSION: (u32, u32) = (2, 26);
}

pub mod object_types {
    pub const GROUPED_FIRST_ROW: u32 = 7;
    pub const SINGLE_FIRST_ROW: u32 = 19;
}

pub mod objects {
    pub const SITE_NAME: (u32, u32) = (2, 2);
    pub const SITE_DESCRIPTION: (u32, u32) = (3, 2);
    pub const GROUPED_FIRST_ROW: u32 = 7;
    pub const SINGLE_FIRST_ROW: u32 = 25;
}

pub mod aggregated_status {
    pub const FIRST_ROW: u32 = 7;
    /// Rows holding the descriptions of status bits 1..=8, column 3.
    pub const STATE_DESCRIPTION_COLUMN: u32 = 3;
    pub const STATE_DESCRIPTION_FIRST_ROW: u32 = 17;
    pub const STATE_COUNT: u32 = 8;
}

pub mod alarms {
    pub const FIRST_ROW: u32 = 7;
    pub const FIRST_ARGUMENT_COLUMN: u32 = 9;
}

pub mod status {
    pub const FIRST_ROW: u32 = 7;
    pub const FIRST_ARGUMENT_COLUMN: u32 = 5;
    /// Return value blocks already drawn by the template.
    pub const TEMPLATE_RETURN_VALUE_BLOCKS: u32 = 2;
    /// Extra blocks added on every conversion.
    pub const INSERTED_RETURN_VALUE_BLOCKS: u32 = 2;
    pub const RETURN_VALUE_BLOCK_WIDTH: u32 = 4;
    pub const RETURN_VALUE_TITLE_ROW: u32 = 5;
    pub const RETURN_VALUE_HEADER_ROW: u32 = 6;
    pub const RETURN_VALUE_LAST_ROW: u32 = 16;
}

pub mod commands {
    pub const FIRST_ROW: u32 = 25;
    pub const FIRST_ARGUMENT_COLUMN: u32 = 5;
}

/// Hands out consecutive rows starting at a fixed template row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCursor {
    next: u32,
}

impl RowCursor {
    pub fn starting_at(row: u32) -> Self {
        Self { next: row }
    }

    /// Current row; the cursor moves one row down.
    pub fn advance(&mut self) -> u32 {
        let row = self.next;
        self.next += 1;
        row
    }

    pub fn peek(&self) -> u32 {
        self.next
    }
}
