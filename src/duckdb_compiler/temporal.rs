//! Interval and timestamp translation rules.

use crate::duckdb_ast::builder::{
    add, cast, div, float_lit, func, int_lit, mul, str_lit,
};
use crate::duckdb_ast::SqlExpr;
use crate::operation_graph::{DataType, IntervalUnit, TimestampUnit};

use super::capabilities::interval_constructor_suffix;
use super::errors::DuckDbCompileError;
use super::DuckDbCompiler;

impl DuckDbCompiler {
    /// Interval construction shared by the from-integer node and casts to
    /// interval types, so every constructing path rejects the same units.
    pub(super) fn interval_from_integer(
        &self,
        arg: &SqlExpr,
        unit: IntervalUnit,
    ) -> Result<SqlExpr, DuckDbCompileError> {
        match unit {
            IntervalUnit::Nanosecond => Err(DuckDbCompileError::UnsupportedIntervalResolution {
                unit: unit.singular(),
            }),
            // no native week constructor
            IntervalUnit::Week => Ok(func("to_days", vec![mul(arg.clone(), int_lit(7))])),
            other => match interval_constructor_suffix(other) {
                Some(suffix) => Ok(func(format!("to_{}", suffix), vec![arg.clone()])),
                None => Err(DuckDbCompileError::UnsupportedIntervalResolution {
                    unit: other.singular(),
                }),
            },
        }
    }

    pub(super) fn timestamp_from_unix(
        &self,
        arg: &SqlExpr,
        unit: TimestampUnit,
    ) -> Result<SqlExpr, DuckDbCompileError> {
        match unit {
            TimestampUnit::Second => Ok(func("to_timestamp", vec![arg.clone()])),
            TimestampUnit::Millisecond => Ok(func("epoch_ms", vec![arg.clone()])),
            other => Err(DuckDbCompileError::UnsupportedTimestampUnit { unit: other.name() }),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn timestamp_from_components(
        &self,
        year: &SqlExpr,
        month: &SqlExpr,
        day: &SqlExpr,
        hours: &SqlExpr,
        minutes: &SqlExpr,
        seconds: &SqlExpr,
        microseconds: Option<&SqlExpr>,
        timezone: Option<&str>,
    ) -> SqlExpr {
        // fractional seconds fold into the seconds argument
        let seconds = match microseconds {
            Some(micros) => add(seconds.clone(), div(micros.clone(), float_lit(1e6))),
            None => seconds.clone(),
        };

        let mut args = vec![
            year.clone(),
            month.clone(),
            day.clone(),
            hours.clone(),
            minutes.clone(),
            seconds,
        ];
        let name = match timezone {
            Some(tz) => {
                args.push(str_lit(tz));
                "make_timestamptz"
            }
            None => "make_timestamp",
        };
        func(name, args)
    }

    /// DuckDB's current timestamp carries a timezone; strip it back to a
    /// naive timestamp.
    pub(super) fn timestamp_now(&self) -> SqlExpr {
        cast(
            func("now", vec![]),
            &DataType::Timestamp { timezone: None },
        )
    }

    // date_part returns sub-minute totals for ms/us, so take the remainder
    // to get the within-second component.
    pub(super) fn extract_millisecond(&self, arg: &SqlExpr) -> SqlExpr {
        func(
            "mod",
            vec![
                func("date_part", vec![str_lit("ms"), arg.clone()]),
                int_lit(1_000),
            ],
        )
    }

    pub(super) fn extract_microsecond(&self, arg: &SqlExpr) -> SqlExpr {
        func(
            "mod",
            vec![
                func("date_part", vec![str_lit("us"), arg.clone()]),
                int_lit(1_000_000),
            ],
        )
    }
}
