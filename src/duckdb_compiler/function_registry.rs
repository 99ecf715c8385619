//! Uniform function mapping: operation kinds whose DuckDB translation is a
//! pure rename.
//!
//! Each entry maps a node-kind name to a DuckDB function name plus a flag
//! distinguishing scalar calls from aggregates. Aggregates get the filter
//! predicate threaded through `FILTER (WHERE ...)`; scalars become a plain
//! call over the children in declared order. Anything needing more than a
//! rename belongs in a dedicated rule, never here.

use std::collections::HashMap;

use super::GAP_RULE_OPS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Scalar,
    Aggregate,
}

/// One uniform-mapping entry.
#[derive(Debug, Clone, Copy)]
pub struct FunctionMapping {
    pub op_name: &'static str,
    pub duckdb_name: &'static str,
    pub kind: FunctionKind,
}

/// Look up the uniform mapping for an operation kind name.
pub fn get_function_mapping(op_name: &str) -> Option<&'static FunctionMapping> {
    FUNCTION_MAPPINGS.get(op_name)
}

fn insert(
    m: &mut HashMap<&'static str, FunctionMapping>,
    op_name: &'static str,
    duckdb_name: &'static str,
    kind: FunctionKind,
) {
    // A kind with a dedicated rule must never also be registered here:
    // the dispatch core would silently shadow one of the two.
    assert!(
        !GAP_RULE_OPS.contains(&op_name),
        "operation '{}' already has a dedicated translation rule",
        op_name
    );
    let previous = m.insert(
        op_name,
        FunctionMapping {
            op_name,
            duckdb_name,
            kind,
        },
    );
    assert!(
        previous.is_none(),
        "duplicate uniform mapping for operation '{}'",
        op_name
    );
}

lazy_static::lazy_static! {
    static ref FUNCTION_MAPPINGS: HashMap<&'static str, FunctionMapping> = {
        use FunctionKind::{Aggregate, Scalar};

        let mut m = HashMap::new();

        // ===== ARRAY =====
        insert(&mut m, "ArrayPosition", "list_indexof", Scalar);

        // ===== BITWISE AGGREGATES =====
        insert(&mut m, "BitAnd", "bit_and", Aggregate);
        insert(&mut m, "BitOr", "bit_or", Aggregate);
        insert(&mut m, "BitXor", "bit_xor", Aggregate);

        // ===== STRING =====
        insert(&mut m, "StartsWith", "prefix", Scalar);
        insert(&mut m, "EndsWith", "suffix", Scalar);
        insert(&mut m, "Hash", "hash", Scalar);

        // ===== RANGES =====
        insert(&mut m, "IntegerRange", "range", Scalar);
        insert(&mut m, "TimestampRange", "range", Scalar);

        // ===== MAP =====
        insert(&mut m, "MapKeys", "map_keys", Scalar);
        insert(&mut m, "MapLength", "cardinality", Scalar);
        insert(&mut m, "MapMerge", "map_concat", Scalar);
        insert(&mut m, "MapValues", "map_values", Scalar);

        // ===== MISC =====
        insert(&mut m, "Mode", "mode", Aggregate);
        insert(&mut m, "TimeFromHMS", "make_time", Scalar);
        insert(&mut m, "TypeOf", "typeof", Scalar);

        m
    };
}
