//! Array translation rules.
//!
//! DuckDB's list primitives are 1-based with inclusive slice bounds and no
//! native negative indexing, and `list_distinct` drops nulls outright. The
//! rules here bridge each of those gaps.

use crate::duckdb_ast::builder::{
    add, array, func, ge, ident, if_, int_lit, is_null, lambda, lt, neg, neq, null,
};
use crate::duckdb_ast::SqlExpr;

use super::capabilities::{
    ARRAY_INDEX_BASE, LIST_DISTINCT_DROPS_NULLS, SET_OP_LAMBDA_PARAM,
};
use super::DuckDbCompiler;

impl DuckDbCompiler {
    pub(super) fn array_distinct(&self, arg: &SqlExpr) -> SqlExpr {
        if_(
            is_null(arg.clone()),
            null(),
            self.dedup_with_null_sentinel(arg),
        )
    }

    pub(super) fn array_union(&self, left: &SqlExpr, right: &SqlExpr) -> SqlExpr {
        let combined = func("list_concat", vec![left.clone(), right.clone()]);
        if_(
            is_null(combined.clone()),
            null(),
            self.dedup_with_null_sentinel(&combined),
        )
    }

    /// Re-append exactly one null after deduplication when the source
    /// contained any (non-null count below total length).
    fn dedup_with_null_sentinel(&self, arg: &SqlExpr) -> SqlExpr {
        let deduplicated = func("list_distinct", vec![arg.clone()]);
        if !LIST_DISTINCT_DROPS_NULLS {
            return deduplicated;
        }
        let sentinel = if_(
            lt(
                func("list_count", vec![arg.clone()]),
                func("len", vec![arg.clone()]),
            ),
            array(vec![null()]),
            array(vec![]),
        );
        func("list_concat", vec![deduplicated, sentinel])
    }

    pub(super) fn array_index(&self, arg: &SqlExpr, index: &SqlExpr) -> SqlExpr {
        let position = add(self.neg_idx_to_pos(arg, index), int_lit(ARRAY_INDEX_BASE));
        func("list_extract", vec![arg.clone(), position])
    }

    pub(super) fn array_slice(
        &self,
        arg: &SqlExpr,
        start: Option<&SqlExpr>,
        stop: Option<&SqlExpr>,
    ) -> SqlExpr {
        let length = func("len", vec![arg.clone()]);

        let start = match start {
            None => int_lit(0),
            Some(start) => func(
                "least",
                vec![length.clone(), self.neg_idx_to_pos(arg, start)],
            ),
        };
        let stop = match stop {
            None => length,
            Some(stop) => self.neg_idx_to_pos(arg, stop),
        };

        func(
            "list_slice",
            vec![arg.clone(), add(start, int_lit(ARRAY_INDEX_BASE)), stop],
        )
    }

    /// Normalize a possibly-negative index to a 0-based position:
    /// `i` when `i >= 0`, else `len + greatest(i, -len)`. The `greatest`
    /// clamps so a negative index with magnitude beyond the length lands
    /// at 0 instead of before the array.
    fn neg_idx_to_pos(&self, array: &SqlExpr, idx: &SqlExpr) -> SqlExpr {
        let length = func("len", vec![array.clone()]);
        if_(
            ge(idx.clone(), int_lit(0)),
            idx.clone(),
            add(
                length.clone(),
                func("greatest", vec![idx.clone(), neg(length)]),
            ),
        )
    }

    pub(super) fn array_map(&self, arg: &SqlExpr, body: &SqlExpr, param: &str) -> SqlExpr {
        func(
            "list_apply",
            vec![arg.clone(), lambda(vec![param], body.clone())],
        )
    }

    pub(super) fn array_filter(&self, arg: &SqlExpr, body: &SqlExpr, param: &str) -> SqlExpr {
        func(
            "list_filter",
            vec![arg.clone(), lambda(vec![param], body.clone())],
        )
    }

    pub(super) fn array_intersect(&self, left: &SqlExpr, right: &SqlExpr) -> SqlExpr {
        let body = func(
            "list_contains",
            vec![right.clone(), ident(SET_OP_LAMBDA_PARAM)],
        );
        func(
            "list_filter",
            vec![left.clone(), lambda(vec![SET_OP_LAMBDA_PARAM], body)],
        )
    }

    pub(super) fn array_remove(&self, arg: &SqlExpr, other: &SqlExpr) -> SqlExpr {
        let body = neq(ident(SET_OP_LAMBDA_PARAM), other.clone());
        func(
            "list_filter",
            vec![arg.clone(), lambda(vec![SET_OP_LAMBDA_PARAM], body)],
        )
    }

    pub(super) fn array_concat(&self, args: &[SqlExpr]) -> SqlExpr {
        args.iter()
            .cloned()
            .reduce(|acc, next| func("list_concat", vec![acc, next]))
            .unwrap_or_else(|| array(vec![]))
    }

    pub(super) fn array_repeat(&self, arg: &SqlExpr, times: &SqlExpr) -> SqlExpr {
        let copies = func(
            "list_apply",
            vec![
                func("range", vec![times.clone()]),
                lambda(vec!["_"], arg.clone()),
            ],
        );
        func("flatten", vec![copies])
    }

    pub(super) fn array_zip(&self, args: &[SqlExpr], fields: &[String]) -> SqlExpr {
        let struct_fields: Vec<(String, SqlExpr)> = fields
            .iter()
            .zip(args)
            .map(|(name, arr)| {
                (
                    name.clone(),
                    func("list_extract", vec![arr.clone(), ident("i")]),
                )
            })
            .collect();
        let body = SqlExpr::StructLiteral(struct_fields);

        let lengths: Vec<SqlExpr> = args
            .iter()
            .map(|arr| func("len", vec![arr.clone()]))
            .collect();
        // range excludes its upper bound
        let positions = func(
            "range",
            vec![int_lit(1), add(func("greatest", lengths), int_lit(1))],
        );

        func("list_apply", vec![positions, lambda(vec!["i"], body)])
    }

    pub(super) fn find_in_set(&self, needle: &SqlExpr, values: &[SqlExpr]) -> SqlExpr {
        func(
            "list_indexof",
            vec![array(values.to_vec()), needle.clone()],
        )
    }
}
