use std::path::Path;

pub fn column_number_to_name(column: u32) -> String {
    let mut column = column;
    let mut name = String::new();
    while column > 0 {
        let rem = ((column - 1) % 26) as u8;
        name.insert(0, (b'A' + rem) as char);
        column = (column - 1) / 26;
    }
    name
}

pub fn cell_address(column: u32, row: u32) -> String {
    format!("{}{}", column_number_to_name(column), row)
}

pub fn range_address(start_col: u32, start_row: u32, end_col: u32, end_row: u32) -> String {
    format!(
        "{}:{}",
        cell_address(start_col, start_row),
        cell_address(end_col, end_row)
    )
}

/// First line of `text` without its line terminator.
pub fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

pub fn path_to_forward_slashes(path: &Path) -> String {
    let raw = path.to_string_lossy();
    if raw.contains('\\') {
        raw.replace('\\', "/")
    } else {
        raw.into_owned()
    }
}
