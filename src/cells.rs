use crate::sxl::Scalar;
use crate::utils::cell_address;
use umya_spreadsheet::Worksheet;

/// Content written into a template cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::Text(value.clone())
    }
}

impl From<&Scalar> for CellValue {
    fn from(value: &Scalar) -> Self {
        use serde_yaml::Value;
        match value.as_yaml() {
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => number_cell(n),
            _ => CellValue::Text(value.to_string()),
        }
    }
}

/// Largest integer magnitude an f64 holds without rounding.
const MAX_EXACT_INTEGER: u64 = 1 << 53;

/// Integers past [`MAX_EXACT_INTEGER`] are kept as text so long ids such as
/// `componentId` survive unchanged.
fn number_cell(number: &serde_yaml::Number) -> CellValue {
    let exact = match (number.as_u64(), number.as_i64()) {
        (Some(unsigned), _) => unsigned <= MAX_EXACT_INTEGER,
        (None, Some(signed)) => signed.unsigned_abs() <= MAX_EXACT_INTEGER,
        (None, None) => true,
    };
    match number.as_f64() {
        Some(float) if exact => CellValue::Number(float),
        _ => CellValue::Text(number.to_string()),
    }
}

/// Write `value` at 1-based (`col`, `row`), creating the cell when needed.
///
/// `None` leaves whatever the template holds at that position untouched.
pub fn set_cell<V: Into<CellValue>>(sheet: &mut Worksheet, col: u32, row: u32, value: Option<V>) {
    let Some(value) = value else {
        return;
    };
    let address = cell_address(col, row);
    let cell = sheet.get_cell_mut(address.as_str());
    match value.into() {
        CellValue::Text(text) => {
            cell.set_value_string(text);
        }
        CellValue::Number(number) => {
            cell.set_value_number(number);
        }
        CellValue::Bool(flag) => {
            cell.set_value_bool(flag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> umya_spreadsheet::Spreadsheet {
        umya_spreadsheet::new_file()
    }

    #[test]
    fn writes_and_overwrites_text() {
        let mut book = sheet();
        let ws = book.get_sheet_by_name_mut("Sheet1").unwrap();
        set_cell(ws, 2, 4, Some("first"));
        assert_eq!(ws.get_value("B4"), "first");
        set_cell(ws, 2, 4, Some("second"));
        assert_eq!(ws.get_value("B4"), "second");
    }

    #[test]
    fn none_keeps_existing_content() {
        let mut book = sheet();
        let ws = book.get_sheet_by_name_mut("Sheet1").unwrap();
        ws.get_cell_mut("C7").set_value("template default");
        set_cell::<&str>(ws, 3, 7, None);
        assert_eq!(ws.get_value("C7"), "template default");
        set_cell::<&str>(ws, 4, 7, None);
        assert!(ws.get_cell("D7").is_none());
    }

    #[test]
    fn scalars_keep_their_cell_type() {
        let yaml: Scalar = serde_yaml::from_str("3").unwrap();
        assert_eq!(CellValue::from(&yaml), CellValue::Number(3.0));
        let yaml: Scalar = serde_yaml::from_str("true").unwrap();
        assert_eq!(CellValue::from(&yaml), CellValue::Bool(true));
        let yaml: Scalar = serde_yaml::from_str("'3.1.0'").unwrap();
        assert_eq!(CellValue::from(&yaml), CellValue::Text("3.1.0".to_string()));
    }

    #[test]
    fn integers_past_f64_precision_stay_text() {
        let yaml: Scalar = serde_yaml::from_str("12345678901234567890").unwrap();
        assert_eq!(
            CellValue::from(&yaml),
            CellValue::Text("12345678901234567890".to_string())
        );
        let yaml: Scalar = serde_yaml::from_str("-9007199254740993").unwrap();
        assert_eq!(
            CellValue::from(&yaml),
            CellValue::Text("-9007199254740993".to_string())
        );
        let yaml: Scalar = serde_yaml::from_str("9007199254740992").unwrap();
        assert_eq!(CellValue::from(&yaml), CellValue::Number(9007199254740992.0));
    }
}
