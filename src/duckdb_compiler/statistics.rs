//! Reduction and sampling translation rules.

use crate::duckdb_ast::builder::{agg, cast, column};
use crate::duckdb_ast::{SqlExpr, TableSample};
use crate::operation_graph::{CorrelationMode, DataType, SampleMethod};

use super::errors::DuckDbCompileError;
use super::DuckDbCompiler;

impl DuckDbCompiler {
    pub(super) fn correlation(
        &self,
        left: &SqlExpr,
        right: &SqlExpr,
        left_type: &DataType,
        right_type: &DataType,
        how: CorrelationMode,
        filter: Option<&SqlExpr>,
    ) -> Result<SqlExpr, DuckDbCompileError> {
        if how == CorrelationMode::Sample {
            return Err(DuckDbCompileError::UnsupportedCorrelationMode);
        }

        // corr does not accept booleans; widen them first
        let left = if left_type.is_boolean() {
            cast(left.clone(), &DataType::Int32)
        } else {
            left.clone()
        };
        let right = if right_type.is_boolean() {
            cast(right.clone(), &DataType::Int32)
        } else {
            right.clone()
        };

        Ok(agg("corr", vec![left, right], filter))
    }

    /// Continuous interpolation for numeric inputs, discrete selection for
    /// ordinal ones. Shared by single- and multi-quantile nodes.
    pub(super) fn quantile(
        &self,
        arg: &SqlExpr,
        quantile: &SqlExpr,
        arg_type: &DataType,
        filter: Option<&SqlExpr>,
    ) -> SqlExpr {
        let suffix = if arg_type.is_numeric() { "cont" } else { "disc" };
        agg(
            format!("percentile_{}", suffix),
            vec![arg.clone(), quantile.clone()],
            filter,
        )
    }

    /// DuckDB rejects `count(DISTINCT a, b)`; count a row value instead.
    pub(super) fn count_distinct_star(
        &self,
        columns: &[String],
        filter: Option<&SqlExpr>,
    ) -> SqlExpr {
        let row = SqlExpr::Tuple(
            columns
                .iter()
                .map(|name| column(name.as_str(), self.options.quote_identifiers))
                .collect(),
        );
        agg("count", vec![SqlExpr::Distinct(vec![row])], filter)
    }

    pub(super) fn sample(
        &self,
        parent: &SqlExpr,
        fraction: f64,
        method: SampleMethod,
        seed: Option<i64>,
    ) -> SqlExpr {
        let method = match method {
            SampleMethod::Row => "bernoulli",
            SampleMethod::Block => "system",
        };
        SqlExpr::TableSample(TableSample {
            parent: Box::new(parent.clone()),
            method: method.to_string(),
            percent: fraction * 100.0,
            seed,
        })
    }
}
