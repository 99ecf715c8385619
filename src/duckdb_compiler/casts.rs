//! Cast translation rules.
//!
//! Most casts pass through unchanged. Interval targets route through the
//! unit-specific constructors (a generic CAST cannot carry the unit), and
//! integer-to-timestamp means "epoch seconds", not a bit reinterpretation.

use crate::duckdb_ast::builder::{cast, func, try_cast};
use crate::duckdb_ast::SqlExpr;
use crate::operation_graph::DataType;

use super::errors::DuckDbCompileError;
use super::DuckDbCompiler;

impl DuckDbCompiler {
    pub(super) fn cast_value(
        &self,
        arg: &SqlExpr,
        from: &DataType,
        to: &DataType,
    ) -> Result<SqlExpr, DuckDbCompileError> {
        if let DataType::Interval { unit } = to {
            let int_arg = cast(arg.clone(), &DataType::Int32);
            return self.interval_from_integer(&int_arg, *unit);
        }

        if to.is_timestamp() && from.is_integer() {
            return Ok(func("to_timestamp", vec![arg.clone()]));
        }

        Ok(cast(arg.clone(), to))
    }

    pub(super) fn to_json_map(&self, arg: &SqlExpr) -> SqlExpr {
        try_cast(
            arg.clone(),
            &DataType::Map(Box::new(DataType::String), Box::new(DataType::Json)),
        )
    }

    pub(super) fn to_json_array(&self, arg: &SqlExpr) -> SqlExpr {
        try_cast(arg.clone(), &DataType::Array(Box::new(DataType::Json)))
    }
}

#[cfg(test)]
mod tests {
    use crate::duckdb_ast::builder::ident;
    use crate::duckdb_ast::ToSql;
    use crate::duckdb_compiler::{DuckDbCompileError, DuckDbCompiler};
    use crate::operation_graph::{DataType, IntervalUnit, Operation};

    fn compiler() -> DuckDbCompiler {
        DuckDbCompiler::new()
    }

    #[test]
    fn test_plain_cast_passes_through() {
        let op = Operation::Cast {
            arg: ident("x"),
            from: DataType::Int64,
            to: DataType::String,
        };
        assert_eq!(
            compiler().compile(&op).unwrap().to_sql(),
            "CAST(x AS VARCHAR)"
        );
    }

    #[test]
    fn test_cast_to_interval_routes_through_constructor() {
        let op = Operation::Cast {
            arg: ident("x"),
            from: DataType::Int64,
            to: DataType::Interval {
                unit: IntervalUnit::Minute,
            },
        };
        assert_eq!(
            compiler().compile(&op).unwrap().to_sql(),
            "to_minutes(CAST(x AS INTEGER))"
        );
    }

    #[test]
    fn test_cast_to_week_interval_lowers_to_days() {
        let op = Operation::Cast {
            arg: ident("x"),
            from: DataType::Int64,
            to: DataType::Interval {
                unit: IntervalUnit::Week,
            },
        };
        assert_eq!(
            compiler().compile(&op).unwrap().to_sql(),
            "to_days((CAST(x AS INTEGER) * 7))"
        );
    }

    #[test]
    fn test_cast_to_nanosecond_interval_rejected() {
        let op = Operation::Cast {
            arg: ident("x"),
            from: DataType::Int64,
            to: DataType::Interval {
                unit: IntervalUnit::Nanosecond,
            },
        };
        assert_eq!(
            compiler().compile(&op),
            Err(DuckDbCompileError::UnsupportedIntervalResolution { unit: "nanosecond" })
        );
    }

    #[test]
    fn test_integer_to_timestamp_is_epoch_seconds() {
        let op = Operation::Cast {
            arg: ident("x"),
            from: DataType::Int64,
            to: DataType::Timestamp { timezone: None },
        };
        assert_eq!(compiler().compile(&op).unwrap().to_sql(), "to_timestamp(x)");
    }

    #[test]
    fn test_string_to_timestamp_stays_a_cast() {
        let op = Operation::Cast {
            arg: ident("x"),
            from: DataType::String,
            to: DataType::Timestamp { timezone: None },
        };
        assert_eq!(
            compiler().compile(&op).unwrap().to_sql(),
            "CAST(x AS TIMESTAMP)"
        );
    }

    #[test]
    fn test_json_casts_are_lossy() {
        let map = Operation::ToJsonMap { arg: ident("x") };
        let arr = Operation::ToJsonArray { arg: ident("x") };
        assert_eq!(
            compiler().compile(&map).unwrap().to_sql(),
            "TRY_CAST(x AS MAP(VARCHAR, JSON))"
        );
        assert_eq!(
            compiler().compile(&arr).unwrap().to_sql(),
            "TRY_CAST(x AS JSON[])"
        );
    }
}
