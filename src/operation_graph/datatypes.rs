//! Portable datatype vocabulary for the operation graph.
//!
//! These types describe results and literal fields of operation nodes in a
//! dialect-neutral way. The DuckDB side of the house renders them through
//! `duckdb_ast::data_type`.

use serde::{Deserialize, Serialize};

/// Interval resolutions the operation graph can express.
///
/// Whether a unit is representable in the target engine is a dialect
/// capability fact, not a property of this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
}

impl IntervalUnit {
    pub fn singular(&self) -> &'static str {
        match self {
            IntervalUnit::Year => "year",
            IntervalUnit::Month => "month",
            IntervalUnit::Week => "week",
            IntervalUnit::Day => "day",
            IntervalUnit::Hour => "hour",
            IntervalUnit::Minute => "minute",
            IntervalUnit::Second => "second",
            IntervalUnit::Millisecond => "millisecond",
            IntervalUnit::Microsecond => "microsecond",
            IntervalUnit::Nanosecond => "nanosecond",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            IntervalUnit::Year => "years",
            IntervalUnit::Month => "months",
            IntervalUnit::Week => "weeks",
            IntervalUnit::Day => "days",
            IntervalUnit::Hour => "hours",
            IntervalUnit::Minute => "minutes",
            IntervalUnit::Second => "seconds",
            IntervalUnit::Millisecond => "milliseconds",
            IntervalUnit::Microsecond => "microseconds",
            IntervalUnit::Nanosecond => "nanoseconds",
        }
    }
}

/// Resolution of an integer epoch value fed to timestamp construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampUnit {
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
}

impl TimestampUnit {
    pub fn name(&self) -> &'static str {
        match self {
            TimestampUnit::Second => "second",
            TimestampUnit::Millisecond => "millisecond",
            TimestampUnit::Microsecond => "microsecond",
            TimestampUnit::Nanosecond => "nanosecond",
        }
    }
}

/// Which correlation coefficient a `Correlation` node asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationMode {
    Population,
    Sample,
}

/// Row sampling strategy of a `Sample` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleMethod {
    /// Per-row coin flip.
    Row,
    /// Per-storage-block selection.
    Block,
}

/// Dialect-neutral result/field type of an operation node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Decimal { precision: u8, scale: u8 },
    String,
    Binary,
    Uuid,
    Date,
    Time,
    /// A timestamp, optionally carrying an IANA timezone name.
    Timestamp { timezone: Option<String> },
    Interval { unit: IntervalUnit },
    Json,
    Array(Box<DataType>),
    Map(Box<DataType>, Box<DataType>),
    Struct(Vec<(String, DataType)>),
}

impl DataType {
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
        )
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, DataType::Float32 | DataType::Float64)
    }

    pub fn is_decimal(&self) -> bool {
        matches!(self, DataType::Decimal { .. })
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_floating() || self.is_decimal()
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, DataType::Boolean)
    }

    pub fn is_interval(&self) -> bool {
        matches!(self, DataType::Interval { .. })
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, DataType::Timestamp { .. })
    }

    /// Timezone of a timestamp type, if any.
    pub fn timezone(&self) -> Option<&str> {
        match self {
            DataType::Timestamp { timezone } => timezone.as_deref(),
            _ => None,
        }
    }
}
