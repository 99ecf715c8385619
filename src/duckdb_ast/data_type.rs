//! Portable datatype to DuckDB type-name mapping.

use crate::operation_graph::DataType;

/// Render a portable datatype as a DuckDB type name.
pub fn duckdb_type(dtype: &DataType) -> String {
    match dtype {
        DataType::Boolean => "BOOLEAN".to_string(),
        DataType::Int8 => "TINYINT".to_string(),
        DataType::Int16 => "SMALLINT".to_string(),
        DataType::Int32 => "INTEGER".to_string(),
        DataType::Int64 => "BIGINT".to_string(),
        DataType::UInt8 => "UTINYINT".to_string(),
        DataType::UInt16 => "USMALLINT".to_string(),
        DataType::UInt32 => "UINTEGER".to_string(),
        DataType::UInt64 => "UBIGINT".to_string(),
        DataType::Float32 => "FLOAT".to_string(),
        DataType::Float64 => "DOUBLE".to_string(),
        DataType::Decimal { precision, scale } => {
            format!("DECIMAL({}, {})", precision, scale)
        }
        DataType::String => "VARCHAR".to_string(),
        DataType::Binary => "BLOB".to_string(),
        DataType::Uuid => "UUID".to_string(),
        DataType::Date => "DATE".to_string(),
        DataType::Time => "TIME".to_string(),
        DataType::Timestamp { timezone: None } => "TIMESTAMP".to_string(),
        DataType::Timestamp { timezone: Some(_) } => "TIMESTAMPTZ".to_string(),
        DataType::Interval { .. } => "INTERVAL".to_string(),
        DataType::Json => "JSON".to_string(),
        DataType::Array(inner) => format!("{}[]", duckdb_type(inner)),
        DataType::Map(key, value) => {
            format!("MAP({}, {})", duckdb_type(key), duckdb_type(value))
        }
        DataType::Struct(fields) => {
            let rendered: Vec<String> = fields
                .iter()
                .map(|(name, field)| format!("{} {}", name, duckdb_type(field)))
                .collect();
            format!("STRUCT({})", rendered.join(", "))
        }
    }
}
