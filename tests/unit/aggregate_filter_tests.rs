//! Filter threading is a cross-cutting contract: every reduction compiled
//! through the uniform mapping must accept an optional predicate, wrap the
//! call in FILTER (WHERE ...) when present, and leave the arguments
//! otherwise identical.

use duckgraph::duckdb_ast::builder::{ge, ident, int_lit};
use duckgraph::duckdb_ast::{SqlExpr, ToSql};
use duckgraph::duckdb_compiler::{
    get_function_mapping, DuckDbCompiler, FunctionKind,
};
use duckgraph::operation_graph::Operation;

fn reduction_pairs() -> Vec<(Operation<SqlExpr>, Operation<SqlExpr>)> {
    let predicate = ge(ident("x"), int_lit(0));
    vec![
        (
            Operation::BitAnd {
                arg: ident("x"),
                filter: None,
            },
            Operation::BitAnd {
                arg: ident("x"),
                filter: Some(predicate.clone()),
            },
        ),
        (
            Operation::BitOr {
                arg: ident("x"),
                filter: None,
            },
            Operation::BitOr {
                arg: ident("x"),
                filter: Some(predicate.clone()),
            },
        ),
        (
            Operation::BitXor {
                arg: ident("x"),
                filter: None,
            },
            Operation::BitXor {
                arg: ident("x"),
                filter: Some(predicate.clone()),
            },
        ),
        (
            Operation::Mode {
                arg: ident("x"),
                filter: None,
            },
            Operation::Mode {
                arg: ident("x"),
                filter: Some(predicate),
            },
        ),
    ]
}

#[test]
fn test_registry_flags_reductions_as_aggregates() {
    for (bare, _) in reduction_pairs() {
        let mapping = get_function_mapping(bare.name()).unwrap();
        assert_eq!(
            mapping.kind,
            FunctionKind::Aggregate,
            "'{}' must be registered as an aggregate",
            bare.name()
        );
    }
}

#[test]
fn test_filter_wraps_without_changing_arguments() {
    let compiler = DuckDbCompiler::new();
    for (bare, filtered) in reduction_pairs() {
        let bare_sql = compiler.compile(&bare).unwrap().to_sql();
        let filtered_sql = compiler.compile(&filtered).unwrap().to_sql();
        assert_eq!(
            filtered_sql,
            format!("{} FILTER (WHERE (x >= 0))", bare_sql),
            "'{}' must only differ by the FILTER clause",
            bare.name()
        );
    }
}

#[test]
fn test_scalar_mappings_never_gain_a_filter() {
    let compiler = DuckDbCompiler::new();
    let op = Operation::MapLength { arg: ident("m") };
    let mapping = get_function_mapping(op.name()).unwrap();
    assert_eq!(mapping.kind, FunctionKind::Scalar);
    assert_eq!(compiler.compile(&op).unwrap().to_sql(), "cardinality(m)");
}
