//! Literal values carried by `Literal` nodes.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A constant value attached to a `Literal` operation node.
///
/// The node's `DataType` decides how the value is rendered; the same
/// `Int` value becomes a plain integer under an integer type and an
/// interval constructor under an interval type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralValue {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
    Binary(Vec<u8>),
    Uuid(Uuid),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
}

impl LiteralValue {
    pub fn is_null(&self) -> bool {
        matches!(self, LiteralValue::Null)
    }
}
