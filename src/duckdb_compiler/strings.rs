//! String and digest translation rules.

use crate::duckdb_ast::builder::{func, int_lit, str_lit};
use crate::duckdb_ast::SqlExpr;

use super::capabilities::SUPPORTED_DIGESTS;
use super::errors::DuckDbCompileError;
use super::DuckDbCompiler;

impl DuckDbCompiler {
    pub(super) fn capitalize(&self, arg: &SqlExpr) -> SqlExpr {
        let head = func(
            "upper",
            vec![func("substr", vec![arg.clone(), int_lit(1), int_lit(1)])],
        );
        let tail = func(
            "lower",
            vec![func("substr", vec![arg.clone(), int_lit(2)])],
        );
        func("concat", vec![head, tail])
    }

    pub(super) fn regex_extract(
        &self,
        arg: &SqlExpr,
        pattern: &SqlExpr,
        index: &SqlExpr,
    ) -> SqlExpr {
        func(
            "regexp_extract",
            vec![arg.clone(), pattern.clone(), index.clone()],
        )
    }

    pub(super) fn regex_replace(
        &self,
        arg: &SqlExpr,
        pattern: &SqlExpr,
        replacement: &SqlExpr,
    ) -> SqlExpr {
        // 'g' replaces every match, not just the first
        func(
            "regexp_replace",
            vec![
                arg.clone(),
                pattern.clone(),
                replacement.clone(),
                str_lit("g"),
            ],
        )
    }

    pub(super) fn hex_digest(
        &self,
        arg: &SqlExpr,
        how: &str,
    ) -> Result<SqlExpr, DuckDbCompileError> {
        if SUPPORTED_DIGESTS.contains(&how) {
            Ok(func(how, vec![arg.clone()]))
        } else {
            Err(DuckDbCompileError::UnsupportedHashFunction {
                name: how.to_string(),
            })
        }
    }
}
