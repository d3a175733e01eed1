pub mod formats;

use crate::sequence_processor::collectors::composition::{CompositionRow, CompositionTable};
use chrono::{DateTime, Utc};
use serde::de::{Deserializer, Error};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

pub const EXPORT_VERSION: &str = "1.0";

/// Root structure for JSON exports.
///
/// # Fields
///
/// * `version` - Layout version of the export document.
/// * `created_at` - When the export was produced, serialized as RFC 3339.
/// * `tool_version` - Crate version that produced the document.
/// * `data` - The analysis payload, tagged by `type`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisExport {
    pub version: String,
    #[serde(serialize_with = "serialize_datetime", deserialize_with = "deserialize_datetime")]
    pub created_at: DateTime<Utc>,
    pub tool_version: String,

    #[serde(flatten)]
    pub data: AnalysisData,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnalysisData {
    Composition(CompositionExport),
}

/// A composition table flattened into its emitted rows.
///
/// `max_position` is `None` when no symbol was observed, in which case
/// `rows` is empty as well.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompositionExport {
    pub source: String,
    pub sequences: u64,
    pub symbols: String,
    pub max_position: Option<usize>,
    pub rows: Vec<CompositionRow>,
}

impl CompositionExport {
    pub fn from_table(source: impl Into<String>, table: &CompositionTable) -> Self {
        Self {
            source: source.into(),
            sequences: table.sequences(),
            symbols: table.symbols().map(char::from).collect(),
            max_position: table.max_position(),
            rows: table.rows().collect(),
        }
    }
}

impl AnalysisExport {
    pub fn new(data: AnalysisData) -> Self {
        Self {
            version: EXPORT_VERSION.to_string(),
            created_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            data,
        }
    }
}

fn serialize_datetime<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(D::Error::custom)
}
