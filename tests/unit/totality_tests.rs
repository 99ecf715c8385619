//! Every node kind must resolve to exactly one rule: a dedicated one, a
//! uniform mapping, or a well-defined unsupported-operation failure. A
//! `NotImplemented` result here means a kind fell through both paths.

use duckgraph::duckdb_ast::builder::{float_lit, ident, int_lit, str_lit};
use duckgraph::duckdb_ast::SqlExpr;
use duckgraph::duckdb_compiler::{DuckDbCompileError, DuckDbCompiler};
use duckgraph::operation_graph::{
    CorrelationMode, DataType, IntervalUnit, LiteralValue, Operation, SampleMethod,
    TimestampUnit,
};

/// One representative instance of every node kind, built with supported
/// units and modes so each should translate cleanly.
fn sample_ops() -> Vec<Operation<SqlExpr>> {
    vec![
        Operation::ArrayDistinct { arg: ident("xs") },
        Operation::ArrayIndex {
            arg: ident("xs"),
            index: int_lit(0),
        },
        Operation::ArraySlice {
            arg: ident("xs"),
            start: Some(int_lit(1)),
            stop: None,
        },
        Operation::ArrayMap {
            arg: ident("xs"),
            body: ident("v"),
            param: "v".to_string(),
        },
        Operation::ArrayFilter {
            arg: ident("xs"),
            body: ident("v"),
            param: "v".to_string(),
        },
        Operation::ArrayIntersect {
            left: ident("a"),
            right: ident("b"),
        },
        Operation::ArrayRemove {
            arg: ident("xs"),
            other: int_lit(1),
        },
        Operation::ArrayUnion {
            left: ident("a"),
            right: ident("b"),
        },
        Operation::ArrayConcat {
            args: vec![ident("a"), ident("b")],
        },
        Operation::ArrayRepeat {
            arg: ident("xs"),
            times: int_lit(3),
        },
        Operation::ArrayZip {
            args: vec![ident("a"), ident("b")],
            fields: vec!["f1".to_string(), "f2".to_string()],
        },
        Operation::FindInSet {
            needle: ident("n"),
            values: vec![int_lit(1), int_lit(2)],
        },
        Operation::MapGet {
            arg: ident("m"),
            key: str_lit("k"),
            default: int_lit(0),
        },
        Operation::MapContains {
            arg: ident("m"),
            key: str_lit("k"),
        },
        Operation::IntervalFromInteger {
            arg: int_lit(3),
            unit: IntervalUnit::Hour,
        },
        Operation::TimestampFromUnix {
            arg: ident("n"),
            unit: TimestampUnit::Second,
        },
        Operation::TimestampFromComponents {
            year: int_lit(2024),
            month: int_lit(1),
            day: int_lit(1),
            hours: int_lit(0),
            minutes: int_lit(0),
            seconds: int_lit(0),
            microseconds: None,
            timezone: None,
        },
        Operation::TimestampNow,
        Operation::ExtractMillisecond { arg: ident("ts") },
        Operation::ExtractMicrosecond { arg: ident("ts") },
        Operation::Cast {
            arg: ident("x"),
            from: DataType::Int64,
            to: DataType::String,
        },
        Operation::ToJsonMap { arg: ident("j") },
        Operation::ToJsonArray { arg: ident("j") },
        Operation::Literal {
            value: LiteralValue::Int(42),
            dtype: DataType::Int32,
        },
        Operation::Capitalize { arg: ident("s") },
        Operation::RegexExtract {
            arg: ident("s"),
            pattern: str_lit("x"),
            index: int_lit(0),
        },
        Operation::RegexReplace {
            arg: ident("s"),
            pattern: str_lit("x"),
            replacement: str_lit("y"),
        },
        Operation::HexDigest {
            arg: ident("s"),
            how: "md5".to_string(),
        },
        Operation::Correlation {
            left: ident("a"),
            right: ident("b"),
            left_type: DataType::Float64,
            right_type: DataType::Float64,
            how: CorrelationMode::Population,
            filter: None,
        },
        Operation::Quantile {
            arg: ident("x"),
            quantile: float_lit(0.5),
            arg_type: DataType::Float64,
            filter: None,
        },
        Operation::MultiQuantile {
            arg: ident("x"),
            quantiles: ident("qs"),
            arg_type: DataType::Float64,
            filter: None,
        },
        Operation::CountDistinctStar {
            columns: vec!["a".to_string()],
            filter: None,
        },
        Operation::Sample {
            parent: ident("t"),
            fraction: 0.25,
            method: SampleMethod::Row,
            seed: None,
        },
        Operation::ArrayPosition {
            arg: ident("xs"),
            other: int_lit(1),
        },
        Operation::BitAnd {
            arg: ident("x"),
            filter: None,
        },
        Operation::BitOr {
            arg: ident("x"),
            filter: None,
        },
        Operation::BitXor {
            arg: ident("x"),
            filter: None,
        },
        Operation::StartsWith {
            arg: ident("s"),
            start: str_lit("pre"),
        },
        Operation::EndsWith {
            arg: ident("s"),
            end: str_lit("post"),
        },
        Operation::Hash { arg: ident("x") },
        Operation::IntegerRange {
            start: int_lit(0),
            stop: int_lit(10),
            step: int_lit(1),
        },
        Operation::TimestampRange {
            start: ident("lo"),
            stop: ident("hi"),
            step: ident("step"),
        },
        Operation::MapKeys { arg: ident("m") },
        Operation::MapLength { arg: ident("m") },
        Operation::MapMerge {
            left: ident("m1"),
            right: ident("m2"),
        },
        Operation::MapValues { arg: ident("m") },
        Operation::Mode {
            arg: ident("x"),
            filter: None,
        },
        Operation::TimeFromHMS {
            hours: int_lit(1),
            minutes: int_lit(2),
            seconds: int_lit(3),
        },
        Operation::TypeOf { arg: ident("x") },
    ]
}

#[test]
fn test_every_kind_has_a_rule() {
    let compiler = DuckDbCompiler::new();
    for op in sample_ops() {
        match compiler.compile(&op) {
            Ok(_) => {}
            Err(DuckDbCompileError::NotImplemented { name }) => {
                panic!("operation '{}' fell through every rule path", name)
            }
            Err(other) => panic!(
                "operation '{}' unexpectedly unsupported: {}",
                op.name(),
                other
            ),
        }
    }
}

#[test]
fn test_sample_covers_every_kind_once() {
    let ops = sample_ops();
    let mut names: Vec<&str> = ops.iter().map(|op| op.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), ops.len(), "duplicate kind in sample set");
    assert_eq!(ops.len(), 49);
}
