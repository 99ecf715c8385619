//! Literal rendering rules.
//!
//! DuckDB's literal grammar has no direct form for interval, UUID, binary,
//! time, or timestamp values, and no non-finite DECIMAL at all; those render
//! through dialect constructors and casts instead of generic literal syntax.

use chrono::{Datelike, Timelike};

use crate::duckdb_ast::builder::{
    bool_lit, cast, float_lit, func, int_lit, null, str_lit,
};
use crate::duckdb_ast::{IntervalLiteral, SqlExpr};
use crate::operation_graph::{DataType, IntervalUnit, LiteralValue};

use super::errors::DuckDbCompileError;
use super::DuckDbCompiler;

impl DuckDbCompiler {
    pub(super) fn literal(
        &self,
        value: &LiteralValue,
        dtype: &DataType,
    ) -> Result<SqlExpr, DuckDbCompileError> {
        if value.is_null() {
            return Ok(cast(null(), dtype));
        }

        match dtype {
            DataType::Interval { unit } => {
                if *unit == IntervalUnit::Nanosecond {
                    return Err(DuckDbCompileError::UnsupportedIntervalResolution {
                        unit: unit.singular(),
                    });
                }
                let rendered = match value {
                    LiteralValue::Int(i) => i.to_string(),
                    LiteralValue::Float(f) => f.to_string(),
                    LiteralValue::String(s) => s.clone(),
                    other => return Ok(plain_literal(other)),
                };
                Ok(SqlExpr::IntervalLiteral(IntervalLiteral {
                    value: rendered,
                    unit: unit.singular().to_uppercase(),
                }))
            }
            DataType::Uuid => Ok(cast(plain_literal(value), dtype)),
            DataType::Binary => match value {
                LiteralValue::Binary(bytes) => {
                    Ok(cast(str_lit(hex_escape(bytes)), dtype))
                }
                other => Ok(plain_literal(other)),
            },
            DataType::Date => Ok(cast(plain_literal(value), dtype)),
            DataType::Time => match value {
                LiteralValue::Time(time) => {
                    let seconds =
                        f64::from(time.second()) + f64::from(time.nanosecond()) / 1e9;
                    Ok(func(
                        "make_time",
                        vec![
                            int_lit(i64::from(time.hour())),
                            int_lit(i64::from(time.minute())),
                            float_lit(seconds),
                        ],
                    ))
                }
                other => Ok(plain_literal(other)),
            },
            DataType::Timestamp { timezone } => match value {
                LiteralValue::Timestamp(ts) => {
                    let seconds =
                        f64::from(ts.second()) + f64::from(ts.nanosecond()) / 1e9;
                    let mut args = vec![
                        int_lit(i64::from(ts.year())),
                        int_lit(i64::from(ts.month())),
                        int_lit(i64::from(ts.day())),
                        int_lit(i64::from(ts.hour())),
                        int_lit(i64::from(ts.minute())),
                        float_lit(seconds),
                    ];
                    let name = match timezone {
                        Some(tz) => {
                            args.push(str_lit(tz.as_str()));
                            "make_timestamptz"
                        }
                        None => "make_timestamp",
                    };
                    Ok(func(name, args))
                }
                other => Ok(plain_literal(other)),
            },
            numeric if numeric.is_numeric() => match value {
                LiteralValue::Float(f) if !f.is_finite() => {
                    // non-finite values only exist as FLOAT/DOUBLE in DuckDB
                    let target = if numeric.is_decimal() {
                        log::warn!(
                            "no non-finite DECIMAL representation in DuckDB, \
                             rendering {} as FLOAT",
                            f
                        );
                        DataType::Float32
                    } else {
                        numeric.clone()
                    };
                    Ok(cast(str_lit(f.to_string()), &target))
                }
                LiteralValue::Int(i) => Ok(cast(int_lit(*i), numeric)),
                LiteralValue::Float(f) => Ok(cast(float_lit(*f), numeric)),
                other => Ok(plain_literal(other)),
            },
            _ => Ok(plain_literal(value)),
        }
    }
}

/// Generic rendering for values the dialect literal grammar covers.
fn plain_literal(value: &LiteralValue) -> SqlExpr {
    match value {
        LiteralValue::Null => null(),
        LiteralValue::Boolean(b) => bool_lit(*b),
        LiteralValue::Int(i) => int_lit(*i),
        LiteralValue::Float(f) => float_lit(*f),
        LiteralValue::String(s) => str_lit(s.clone()),
        LiteralValue::Binary(bytes) => str_lit(hex_escape(bytes)),
        LiteralValue::Uuid(uuid) => str_lit(uuid.to_string()),
        LiteralValue::Date(date) => str_lit(date.to_string()),
        LiteralValue::Time(time) => str_lit(time.to_string()),
        LiteralValue::Timestamp(ts) => str_lit(ts.to_string()),
    }
}

/// Two-digit hex escape per byte, e.g. `\xde\xad`.
fn hex_escape(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("\\x{}", hex::encode([*byte])))
        .collect()
}
