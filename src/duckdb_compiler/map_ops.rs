//! Map translation rules.

use crate::duckdb_ast::builder::{func, int_lit, neq};
use crate::duckdb_ast::SqlExpr;

use super::capabilities::{ARRAY_INDEX_BASE, MAP_EXTRACT_RETURNS_LIST};
use super::DuckDbCompiler;

impl DuckDbCompiler {
    /// `element_at` yields a one-element list for a present key and an
    /// empty list for a missing one, never NULL; unwrap that level before
    /// applying the caller's default.
    pub(super) fn map_get(&self, arg: &SqlExpr, key: &SqlExpr, default: &SqlExpr) -> SqlExpr {
        let hit = func("element_at", vec![arg.clone(), key.clone()]);
        let value = if MAP_EXTRACT_RETURNS_LIST {
            func("list_extract", vec![hit, int_lit(ARRAY_INDEX_BASE)])
        } else {
            hit
        };
        func("ifnull", vec![value, default.clone()])
    }

    pub(super) fn map_contains(&self, arg: &SqlExpr, key: &SqlExpr) -> SqlExpr {
        let hit = func("element_at", vec![arg.clone(), key.clone()]);
        neq(func("len", vec![hit]), int_lit(0))
    }
}
