use crate::layout::status::{
    FIRST_ARGUMENT_COLUMN, INSERTED_RETURN_VALUE_BLOCKS, RETURN_VALUE_BLOCK_WIDTH,
    RETURN_VALUE_HEADER_ROW, RETURN_VALUE_LAST_ROW, RETURN_VALUE_TITLE_ROW,
    TEMPLATE_RETURN_VALUE_BLOCKS,
};
use crate::utils::{cell_address, range_address};
use umya_spreadsheet::{Border, HorizontalAlignmentValues, Style, Worksheet};

pub const RETURN_VALUE_TITLE: &str = "return value";
pub const RETURN_VALUE_HEADERS: [&str; 4] = ["Name", "Type", "Value", "Comment"];

/// Border style for one cell edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Thin,
    Medium,
}

impl Edge {
    fn style_name(self) -> &'static str {
        match self {
            Edge::Thin => Border::BORDER_THIN,
            Edge::Medium => Border::BORDER_MEDIUM,
        }
    }
}

/// Edges drawn on one cell of a return value block; `None` keeps the
/// template's border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellEdges {
    pub top: Option<Edge>,
    pub right: Option<Edge>,
    pub bottom: Option<Edge>,
}

/// Columns (1-based, inclusive) covered by one return value block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockColumns {
    pub first: u32,
    pub last: u32,
}

/// Appends return value blocks to the Status sheet.
///
/// The index restarts with every conversion run; the template already
/// carries [`TEMPLATE_RETURN_VALUE_BLOCKS`] blocks, so new ones start
/// right after them.
#[derive(Debug, Clone, Default)]
pub struct ReturnValueBlocks {
    inserted: u32,
}

impl ReturnValueBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inserted(&self) -> u32 {
        self.inserted
    }

    pub fn base_column() -> u32 {
        FIRST_ARGUMENT_COLUMN + TEMPLATE_RETURN_VALUE_BLOCKS * RETURN_VALUE_BLOCK_WIDTH
    }

    pub fn columns_for(index: u32) -> BlockColumns {
        let first = Self::base_column() + index * RETURN_VALUE_BLOCK_WIDTH;
        BlockColumns {
            first,
            last: first + RETURN_VALUE_BLOCK_WIDTH - 1,
        }
    }

    /// Draw the next block and return the columns it occupies.
    pub fn insert(&mut self, sheet: &mut Worksheet) -> BlockColumns {
        let columns = Self::columns_for(self.inserted);
        self.inserted += 1;

        for col in columns.first..=columns.last {
            for row in RETURN_VALUE_TITLE_ROW..=RETURN_VALUE_LAST_ROW {
                let address = cell_address(col, row);
                sheet.get_cell_mut(address.as_str()).set_value_string("");
                let edges = block_edges(columns, col, row);
                apply_edges(sheet.get_style_mut(address.as_str()), edges);
            }
        }

        let title = cell_address(columns.first, RETURN_VALUE_TITLE_ROW);
        sheet
            .get_cell_mut(title.as_str())
            .set_value_string(RETURN_VALUE_TITLE);
        let style = sheet.get_style_mut(title.as_str());
        style
            .get_alignment_mut()
            .set_horizontal(HorizontalAlignmentValues::Center);
        style.get_font_mut().set_bold(true).set_italic(true);
        sheet.add_merge_cells(range_address(
            columns.first,
            RETURN_VALUE_TITLE_ROW,
            columns.last,
            RETURN_VALUE_TITLE_ROW,
        ));

        for (offset, label) in (0..).zip(RETURN_VALUE_HEADERS) {
            let address = cell_address(columns.first + offset, RETURN_VALUE_HEADER_ROW);
            sheet.get_cell_mut(address.as_str()).set_value_string(label);
        }

        tracing::debug!(
            block = self.inserted - 1,
            first_column = columns.first,
            last_column = columns.last,
            "inserted return value block"
        );
        columns
    }

    /// Insert every block a conversion adds to the Status sheet.
    pub fn insert_all(&mut self, sheet: &mut Worksheet) -> Vec<BlockColumns> {
        (0..INSERTED_RETURN_VALUE_BLOCKS)
            .map(|_| self.insert(sheet))
            .collect()
    }
}

/// Borders of the cell at (`col`, `row`) inside a block: thin inner grid,
/// medium outline, medium line under the header row.
pub fn block_edges(columns: BlockColumns, col: u32, row: u32) -> CellEdges {
    let top = (row == RETURN_VALUE_TITLE_ROW).then_some(Edge::Medium);
    let right = if col == columns.last {
        Some(Edge::Medium)
    } else {
        Some(Edge::Thin)
    };
    let bottom = if row == RETURN_VALUE_LAST_ROW || row == RETURN_VALUE_HEADER_ROW {
        Some(Edge::Medium)
    } else {
        Some(Edge::Thin)
    };
    CellEdges { top, right, bottom }
}

fn apply_edges(style: &mut Style, edges: CellEdges) {
    let borders = style.get_borders_mut();
    apply_edge(borders.get_top_border_mut(), edges.top);
    apply_edge(borders.get_right_border_mut(), edges.right);
    apply_edge(borders.get_bottom_border_mut(), edges.bottom);
}

fn apply_edge(border: &mut Border, edge: Option<Edge>) {
    if let Some(edge) = edge {
        border.set_border_style(edge.style_name());
    }
}
