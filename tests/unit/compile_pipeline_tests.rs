//! Bottom-up composition: the surrounding generic compiler lowers children
//! first and feeds the results back in as plain expressions. These tests
//! stack nodes the same way and check the output is stable.

use duckgraph::duckdb_ast::builder::{ident, int_lit};
use duckgraph::duckdb_ast::ToSql;
use duckgraph::duckdb_compiler::DuckDbCompiler;
use duckgraph::operation_graph::Operation;

#[test]
fn test_child_expressions_nest_unchanged() {
    let compiler = DuckDbCompiler::new();

    // distinct(xs[1:3]) built bottom-up
    let slice = compiler
        .compile(&Operation::ArraySlice {
            arg: ident("xs"),
            start: Some(int_lit(1)),
            stop: Some(int_lit(3)),
        })
        .unwrap();
    let distinct = compiler
        .compile(&Operation::ArrayDistinct { arg: slice.clone() })
        .unwrap();

    let slice_sql = slice.to_sql();
    let distinct_sql = distinct.to_sql();
    assert!(
        distinct_sql.contains(&slice_sql),
        "child translation must appear verbatim inside the parent:\n{}",
        distinct_sql
    );
}

#[test]
fn test_compilation_is_deterministic_across_instances() {
    // two independent compiler instances, same node, same output
    let op = Operation::ArrayIndex {
        arg: ident("xs"),
        index: int_lit(-2),
    };
    let first = DuckDbCompiler::new().compile(&op).unwrap().to_sql();
    let second = DuckDbCompiler::new().compile(&op).unwrap().to_sql();
    assert_eq!(first, second);
}

#[test]
fn test_portable_vocabulary_round_trips_as_json() {
    // the operation graph is interchange data; a node description parsed
    // from JSON must compile the same as one built in code
    let json = r#"{
        "interval_from_integer": {
            "arg": "n",
            "unit": "week"
        }
    }"#;
    let parsed: Operation<String> = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.name(), "IntervalFromInteger");

    let op = match parsed {
        Operation::IntervalFromInteger { arg, unit } => Operation::IntervalFromInteger {
            arg: ident(arg),
            unit,
        },
        other => panic!("unexpected kind {}", other.name()),
    };
    let sql = DuckDbCompiler::new().compile(&op).unwrap().to_sql();
    assert_eq!(sql, "to_days((n * 7))");
}
