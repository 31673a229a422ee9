//! Typed view of an SXL (signal exchange list) document.
//!
//! Every mapping is an [`IndexMap`] so iteration follows document order,
//! which decides row placement in the output workbook. Scalar leaves are
//! kept as raw YAML values ([`Scalar`]) so numbers and booleans reach the
//! workbook with their natural cell type.

use crate::error::{ConvertError, ConvertResult};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;
use std::io::Read;

pub type Arguments = IndexMap<String, Argument>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Scalar(pub serde_yaml::Value);

impl Scalar {
    pub fn as_yaml(&self) -> &serde_yaml::Value {
        &self.0
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar(serde_yaml::Value::String(value.to_string()))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use serde_yaml::Value;
        match &self.0 {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            other => {
                let rendered = serde_yaml::to_string(other).map_err(|_| fmt::Error)?;
                f.write_str(rendered.trim_end())
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SxlDocument {
    pub id: Option<Scalar>,
    pub description: Option<Scalar>,
    pub constructor: Option<Scalar>,
    pub reviewed: Option<Scalar>,
    pub approved: Option<Scalar>,
    #[serde(rename = "created-date")]
    pub created_date: Option<Scalar>,
    pub version: Option<Scalar>,
    pub date: Option<Scalar>,
    #[serde(rename = "rsmp-version")]
    pub rsmp_version: Option<Scalar>,
    pub objects: IndexMap<String, ObjectType>,
    pub sites: IndexMap<String, Site>,
}

impl SxlDocument {
    pub fn from_yaml_str(input: &str) -> ConvertResult<Self> {
        serde_yaml::from_str(input).map_err(ConvertError::InvalidDocument)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> ConvertResult<Self> {
        let mut input = String::new();
        reader
            .read_to_string(&mut input)
            .map_err(|source| ConvertError::Io {
                context: "failed to read SXL document".to_string(),
                source,
            })?;
        Self::from_yaml_str(&input)
    }

    /// Object types carrying an aggregated status, in document order.
    pub fn grouped_objects(&self) -> impl Iterator<Item = (&String, &ObjectType)> {
        self.objects.iter().filter(|(_, object)| object.is_grouped())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectType {
    pub description: Option<Scalar>,
    pub functional_position: Option<Scalar>,
    pub functional_state: Option<Scalar>,
    pub aggregated_status: Option<IndexMap<String, AggregatedStatusLevel>>,
    pub alarms: Option<IndexMap<String, Alarm>>,
    pub statuses: Option<IndexMap<String, Status>>,
    pub commands: Option<IndexMap<String, Command>>,
}

impl ObjectType {
    pub fn is_grouped(&self) -> bool {
        self.aggregated_status.is_some()
    }

    pub fn category(&self) -> ObjectCategory {
        if self.is_grouped() {
            ObjectCategory::Grouped
        } else {
            ObjectCategory::Single
        }
    }

    /// Description of aggregated status bit `level` (1-based).
    pub fn aggregated_status_description(&self, level: u32) -> Option<&Scalar> {
        self.aggregated_status
            .as_ref()?
            .get(&level.to_string())?
            .description
            .as_ref()
    }

    pub fn alarms(&self) -> impl Iterator<Item = (&String, &Alarm)> {
        self.alarms.iter().flatten()
    }

    pub fn statuses(&self) -> impl Iterator<Item = (&String, &Status)> {
        self.statuses.iter().flatten()
    }

    pub fn commands(&self) -> impl Iterator<Item = (&String, &Command)> {
        self.commands.iter().flatten()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectCategory {
    Grouped,
    Single,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AggregatedStatusLevel {
    pub title: Option<Scalar>,
    pub description: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Site {
    pub description: Option<Scalar>,
    #[serde(default)]
    pub objects: IndexMap<String, Option<IndexMap<String, ObjectInstance>>>,
}

impl Site {
    /// Instances this site defines for `object_type`; empty when the site
    /// does not mention the type.
    pub fn instances_of<'a>(
        &'a self,
        object_type: &str,
    ) -> impl Iterator<Item = (&'a String, &'a ObjectInstance)> {
        self.objects
            .get(object_type)
            .and_then(Option::as_ref)
            .into_iter()
            .flatten()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectInstance {
    #[serde(rename = "componentId")]
    pub component_id: Option<Scalar>,
    #[serde(rename = "ntsObjectId")]
    pub nts_object_id: Option<Scalar>,
    #[serde(rename = "externalNtsId")]
    pub external_nts_id: Option<Scalar>,
    pub description: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Alarm {
    pub object: Option<Scalar>,
    pub description: Option<String>,
    #[serde(rename = "externalAlarmCodeId")]
    pub external_alarm_code_id: Option<Scalar>,
    #[serde(rename = "externalNtsAlarmCodeId")]
    pub external_nts_alarm_code_id: Option<Scalar>,
    pub priority: Option<Scalar>,
    pub category: Option<Scalar>,
    pub arguments: Option<Arguments>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Status {
    pub object: Option<Scalar>,
    pub description: Option<String>,
    pub arguments: Option<Arguments>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Command {
    pub object: Option<Scalar>,
    pub description: Option<String>,
    pub command: Option<Scalar>,
    pub arguments: Option<Arguments>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Argument {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub range: Option<Scalar>,
    pub values: Option<IndexMap<String, Option<Scalar>>>,
    pub description: Option<String>,
}
