//! Rendering of alarm, status and command arguments into their
//! value and comment columns.

use crate::cells::CellValue;
use crate::sxl::{Argument, Scalar};

const BOOLEAN_TYPE: &str = "boolean";
const BOOLEAN_VALUES: &str = "-False\n-True";

/// How an argument's permissible values are expressed.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValues<'a> {
    Boolean,
    Ranged(&'a Scalar),
    Enumerated(Vec<(&'a str, Option<&'a Scalar>)>),
}

impl<'a> ArgumentValues<'a> {
    pub fn classify(argument: &'a Argument) -> Self {
        if argument.kind.as_deref() == Some(BOOLEAN_TYPE) {
            return ArgumentValues::Boolean;
        }
        if let Some(range) = argument.range.as_ref() {
            return ArgumentValues::Ranged(range);
        }
        let values = argument
            .values
            .iter()
            .flat_map(|values| values.iter())
            .map(|(value, description)| (value.as_str(), description.as_ref()))
            .collect();
        ArgumentValues::Enumerated(values)
    }
}

/// Cell contents produced for one argument.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedArgument {
    pub value: Option<CellValue>,
    pub description: Option<String>,
}

/// What happens to the line break joining a prior description and the
/// value notes when the notes come out empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesJoin {
    /// One trailing newline is removed (Alarms).
    Trimmed,
    /// `prior + "\n" + notes` is kept as is (Status and Commands).
    Raw,
}

pub fn render_argument(argument: &Argument, join: NotesJoin) -> RenderedArgument {
    match ArgumentValues::classify(argument) {
        ArgumentValues::Boolean => RenderedArgument {
            value: Some(CellValue::from(BOOLEAN_VALUES)),
            description: argument.description.clone(),
        },
        ArgumentValues::Ranged(range) => RenderedArgument {
            value: Some(CellValue::from(range)),
            description: argument.description.clone(),
        },
        ArgumentValues::Enumerated(values) => {
            let mut bullets = String::new();
            let mut notes = String::new();
            for (value, description) in values {
                bullets.push('-');
                bullets.push_str(value);
                bullets.push('\n');
                let description = description.map(ToString::to_string).unwrap_or_default();
                if !description.is_empty() {
                    notes.push_str(value);
                    notes.push_str(": ");
                    notes.push_str(&description);
                    notes.push('\n');
                }
            }
            chomp(&mut bullets);
            chomp(&mut notes);

            let description = match argument.description.as_deref() {
                None => notes,
                Some(existing) => {
                    let mut combined = format!("{existing}\n{notes}");
                    if join == NotesJoin::Trimmed {
                        chomp(&mut combined);
                    }
                    combined
                }
            };

            RenderedArgument {
                value: Some(CellValue::Text(bullets)),
                description: Some(description),
            }
        }
    }
}

fn chomp(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use proptest::prelude::*;

    fn argument(yaml: &str) -> Argument {
        serde_yaml::from_str(yaml).expect("argument yaml")
    }

    fn text(value: Option<CellValue>) -> String {
        match value {
            Some(CellValue::Text(text)) => text,
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn boolean_ignores_declared_values() {
        let arg = argument(
            "type: boolean\nrange: '[0-1]'\nvalues: {a: b}\ndescription: Enabled\n",
        );
        assert_eq!(ArgumentValues::classify(&arg), ArgumentValues::Boolean);
        let rendered = render_argument(&arg, NotesJoin::Trimmed);
        assert_eq!(text(rendered.value), "-False\n-True");
        assert_eq!(rendered.description.as_deref(), Some("Enabled"));
    }

    #[test]
    fn range_is_written_verbatim() {
        let arg = argument("type: integer\nrange: '[0-255]'\ndescription: Cycle time\n");
        let rendered = render_argument(&arg, NotesJoin::Trimmed);
        assert_eq!(text(rendered.value), "[0-255]");
        assert_eq!(rendered.description.as_deref(), Some("Cycle time"));
    }

    #[test]
    fn numeric_range_keeps_number_type() {
        let arg = argument("type: integer\nrange: 10\n");
        assert_eq!(render_argument(&arg, NotesJoin::Trimmed).value, Some(CellValue::Number(10.0)));
    }

    #[test]
    fn enumerated_values_append_to_description() {
        let arg = argument(
            "type: string\nvalues:\n  NormalControl: Normal control\n  YellowFlash: ''\n  Dark: Lamps off\ndescription: Operating mode\n",
        );
        let rendered = render_argument(&arg, NotesJoin::Trimmed);
        assert_eq!(text(rendered.value), "-NormalControl\n-YellowFlash\n-Dark");
        assert_eq!(
            rendered.description.as_deref(),
            Some("Operating mode\nNormalControl: Normal control\nDark: Lamps off")
        );
    }

    #[test]
    fn enumerated_without_description_uses_notes() {
        let arg = argument("type: integer\nvalues:\n  0: Off\n  1: ~\n");
        let rendered = render_argument(&arg, NotesJoin::Trimmed);
        assert_eq!(text(rendered.value), "-0\n-1");
        assert_eq!(rendered.description.as_deref(), Some("0: Off"));
    }

    #[test]
    fn trimmed_join_drops_newline_without_notes() {
        let arg = argument("type: string\nvalues: {a: '', b: ''}\ndescription: Plain\n");
        let rendered = render_argument(&arg, NotesJoin::Trimmed);
        assert_eq!(text(rendered.value), "-a\n-b");
        assert_eq!(rendered.description.as_deref(), Some("Plain"));
    }

    #[test]
    fn raw_join_keeps_newline_without_notes() {
        let arg = argument("type: string\nvalues: {a: '', b: ''}\ndescription: Plain\n");
        let rendered = render_argument(&arg, NotesJoin::Raw);
        assert_eq!(rendered.description.as_deref(), Some("Plain\n"));
    }

    #[test]
    fn raw_join_matches_trimmed_when_notes_exist() {
        let arg = argument("type: integer\nvalues: {0: Off, 1: On}\ndescription: Mode\n");
        assert_eq!(
            render_argument(&arg, NotesJoin::Raw),
            render_argument(&arg, NotesJoin::Trimmed)
        );
        assert_eq!(
            render_argument(&arg, NotesJoin::Raw).description.as_deref(),
            Some("Mode\n0: Off\n1: On")
        );
    }

    proptest! {
        #[test]
        fn boolean_value_column_is_constant(range in proptest::option::of("[a-z0-9-]{1,8}"),
                                            description in proptest::option::of("[a-z ]{0,12}")) {
            let arg = Argument {
                kind: Some("boolean".to_string()),
                range: range.as_deref().map(Scalar::from),
                values: None,
                description: description.clone(),
            };
            let rendered = render_argument(&arg, NotesJoin::Trimmed);
            prop_assert_eq!(rendered.value, Some(CellValue::from("-False\n-True")));
            prop_assert_eq!(rendered.description, description);
        }

        #[test]
        fn bullet_list_follows_value_order(keys in proptest::collection::vec("[A-Za-z]{1,6}", 1..6)) {
            let mut values = IndexMap::new();
            for key in &keys {
                values.insert(key.clone(), None);
            }
            let expected = values
                .keys()
                .map(|key| format!("-{key}"))
                .collect::<Vec<_>>()
                .join("\n");
            let arg = Argument {
                kind: Some("string".to_string()),
                range: None,
                values: Some(values),
                description: None,
            };
            let rendered = render_argument(&arg, NotesJoin::Trimmed);
            prop_assert_eq!(rendered.value, Some(CellValue::Text(expected)));
            prop_assert_eq!(rendered.description, Some(String::new()));
        }
    }
}
