//! Operation-graph node kinds.
//!
//! `Operation<E>` is the closed vocabulary of relational and scalar node
//! kinds the dialect compiler accepts. It is generic over the child
//! expression type `E`: by the time a node reaches the compiler, the
//! surrounding traversal has already lowered every child, so the compiler
//! only ever sees `Operation<SqlExpr>`. Literal and config fields (units,
//! modes, lambda parameter names) stay as plain data on the variant.
//!
//! Nodes are immutable once constructed and arrive pre-validated.

use serde::{Deserialize, Serialize};

use super::datatypes::{
    CorrelationMode, DataType, IntervalUnit, SampleMethod, TimestampUnit,
};
use super::literal::LiteralValue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation<E> {
    // ===== ARRAY OPERATIONS =====
    /// Deduplicate an array, keeping at most one null element.
    ArrayDistinct { arg: E },

    /// Extract one element; negative indices count from the end.
    ArrayIndex { arg: E, index: E },

    /// Subarray between `start` (inclusive) and `stop` (exclusive), both
    /// optional and possibly negative.
    ArraySlice {
        arg: E,
        start: Option<E>,
        stop: Option<E>,
    },

    /// Apply `body` to every element, binding it as `param`.
    ArrayMap { arg: E, body: E, param: String },

    /// Keep the elements for which `body` holds, binding each as `param`.
    ArrayFilter { arg: E, body: E, param: String },

    /// Elements of `left` that also occur in `right`.
    ArrayIntersect { left: E, right: E },

    /// Drop every occurrence of `other` from the array.
    ArrayRemove { arg: E, other: E },

    /// Set union of two arrays, null-deduplicated like `ArrayDistinct`.
    ArrayUnion { left: E, right: E },

    /// Concatenate arrays left to right.
    ArrayConcat { args: Vec<E> },

    /// The array repeated `times` times.
    ArrayRepeat { arg: E, times: E },

    /// Zip arrays into an array of structs; `fields` are the struct field
    /// names from the node's result type, one per input array.
    ArrayZip { args: Vec<E>, fields: Vec<String> },

    /// Position of `needle` among an inline list of values.
    FindInSet { needle: E, values: Vec<E> },

    // ===== MAP OPERATIONS =====
    /// Key lookup that yields `default` when the key is absent.
    MapGet { arg: E, key: E, default: E },

    /// Whether the map has an entry for `key`.
    MapContains { arg: E, key: E },

    // ===== TEMPORAL OPERATIONS =====
    /// An interval of `arg` units.
    IntervalFromInteger { arg: E, unit: IntervalUnit },

    /// Timestamp from an integer epoch value of the given resolution.
    TimestampFromUnix { arg: E, unit: TimestampUnit },

    /// Timestamp assembled from calendar and clock components. The
    /// timezone, when present, comes from the node's result type.
    TimestampFromComponents {
        year: E,
        month: E,
        day: E,
        hours: E,
        minutes: E,
        seconds: E,
        microseconds: Option<E>,
        timezone: Option<String>,
    },

    /// Current timestamp, timezone-naive.
    TimestampNow,

    /// Millisecond-of-second component of a timestamp.
    ExtractMillisecond { arg: E },

    /// Microsecond-of-second component of a timestamp.
    ExtractMicrosecond { arg: E },

    // ===== CASTS AND LITERALS =====
    /// Value conversion from `from` to `to`.
    Cast { arg: E, from: DataType, to: DataType },

    /// Lossy parse of a JSON string into a map value.
    ToJsonMap { arg: E },

    /// Lossy parse of a JSON string into an array value.
    ToJsonArray { arg: E },

    /// A constant of the given type.
    Literal { value: LiteralValue, dtype: DataType },

    // ===== STRING OPERATIONS =====
    /// Upper-case the first character, lower-case the rest.
    Capitalize { arg: E },

    /// Regex group extraction.
    RegexExtract { arg: E, pattern: E, index: E },

    /// Global regex replacement.
    RegexReplace { arg: E, pattern: E, replacement: E },

    /// Hex digest of a string under a named algorithm.
    HexDigest { arg: E, how: String },

    // ===== REDUCTIONS =====
    /// Correlation coefficient of two columns.
    Correlation {
        left: E,
        right: E,
        left_type: DataType,
        right_type: DataType,
        how: CorrelationMode,
        filter: Option<E>,
    },

    /// Quantile of a column at one probability.
    Quantile {
        arg: E,
        quantile: E,
        arg_type: DataType,
        filter: Option<E>,
    },

    /// Quantiles of a column at several probabilities.
    MultiQuantile {
        arg: E,
        quantiles: E,
        arg_type: DataType,
        filter: Option<E>,
    },

    /// Count of distinct whole rows over the named columns.
    CountDistinctStar {
        columns: Vec<String>,
        filter: Option<E>,
    },

    // ===== RELATIONAL OPERATIONS =====
    /// Random sample of a relation.
    Sample {
        parent: E,
        fraction: f64,
        method: SampleMethod,
        seed: Option<i64>,
    },

    // ===== UNIFORM-MAPPED OPERATIONS =====
    // Pure renames: translated through the function registry, no dedicated
    // rule. Reductions among them carry a filter predicate.
    ArrayPosition { arg: E, other: E },
    BitAnd { arg: E, filter: Option<E> },
    BitOr { arg: E, filter: Option<E> },
    BitXor { arg: E, filter: Option<E> },
    StartsWith { arg: E, start: E },
    EndsWith { arg: E, end: E },
    Hash { arg: E },
    IntegerRange { start: E, stop: E, step: E },
    TimestampRange { start: E, stop: E, step: E },
    MapKeys { arg: E },
    MapLength { arg: E },
    MapMerge { left: E, right: E },
    MapValues { arg: E },
    Mode { arg: E, filter: Option<E> },
    TimeFromHMS { hours: E, minutes: E, seconds: E },
    TypeOf { arg: E },
}

impl<E> Operation<E> {
    /// Kind discriminant, used for registry lookup and error reporting.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ArrayDistinct { .. } => "ArrayDistinct",
            Operation::ArrayIndex { .. } => "ArrayIndex",
            Operation::ArraySlice { .. } => "ArraySlice",
            Operation::ArrayMap { .. } => "ArrayMap",
            Operation::ArrayFilter { .. } => "ArrayFilter",
            Operation::ArrayIntersect { .. } => "ArrayIntersect",
            Operation::ArrayRemove { .. } => "ArrayRemove",
            Operation::ArrayUnion { .. } => "ArrayUnion",
            Operation::ArrayConcat { .. } => "ArrayConcat",
            Operation::ArrayRepeat { .. } => "ArrayRepeat",
            Operation::ArrayZip { .. } => "ArrayZip",
            Operation::FindInSet { .. } => "FindInSet",
            Operation::MapGet { .. } => "MapGet",
            Operation::MapContains { .. } => "MapContains",
            Operation::IntervalFromInteger { .. } => "IntervalFromInteger",
            Operation::TimestampFromUnix { .. } => "TimestampFromUnix",
            Operation::TimestampFromComponents { .. } => "TimestampFromComponents",
            Operation::TimestampNow => "TimestampNow",
            Operation::ExtractMillisecond { .. } => "ExtractMillisecond",
            Operation::ExtractMicrosecond { .. } => "ExtractMicrosecond",
            Operation::Cast { .. } => "Cast",
            Operation::ToJsonMap { .. } => "ToJsonMap",
            Operation::ToJsonArray { .. } => "ToJsonArray",
            Operation::Literal { .. } => "Literal",
            Operation::Capitalize { .. } => "Capitalize",
            Operation::RegexExtract { .. } => "RegexExtract",
            Operation::RegexReplace { .. } => "RegexReplace",
            Operation::HexDigest { .. } => "HexDigest",
            Operation::Correlation { .. } => "Correlation",
            Operation::Quantile { .. } => "Quantile",
            Operation::MultiQuantile { .. } => "MultiQuantile",
            Operation::CountDistinctStar { .. } => "CountDistinctStar",
            Operation::Sample { .. } => "Sample",
            Operation::ArrayPosition { .. } => "ArrayPosition",
            Operation::BitAnd { .. } => "BitAnd",
            Operation::BitOr { .. } => "BitOr",
            Operation::BitXor { .. } => "BitXor",
            Operation::StartsWith { .. } => "StartsWith",
            Operation::EndsWith { .. } => "EndsWith",
            Operation::Hash { .. } => "Hash",
            Operation::IntegerRange { .. } => "IntegerRange",
            Operation::TimestampRange { .. } => "TimestampRange",
            Operation::MapKeys { .. } => "MapKeys",
            Operation::MapLength { .. } => "MapLength",
            Operation::MapMerge { .. } => "MapMerge",
            Operation::MapValues { .. } => "MapValues",
            Operation::Mode { .. } => "Mode",
            Operation::TimeFromHMS { .. } => "TimeFromHMS",
            Operation::TypeOf { .. } => "TypeOf",
        }
    }

    /// Translated child expressions in declared order, excluding any
    /// aggregate filter predicate (threaded separately).
    pub fn children(&self) -> Vec<&E> {
        match self {
            Operation::ArrayDistinct { arg }
            | Operation::Capitalize { arg }
            | Operation::ToJsonMap { arg }
            | Operation::ToJsonArray { arg }
            | Operation::ExtractMillisecond { arg }
            | Operation::ExtractMicrosecond { arg }
            | Operation::MapKeys { arg }
            | Operation::MapLength { arg }
            | Operation::MapValues { arg }
            | Operation::Hash { arg }
            | Operation::TypeOf { arg } => vec![arg],
            Operation::ArrayIndex { arg, index } => vec![arg, index],
            Operation::ArraySlice { arg, start, stop } => {
                let mut out = vec![arg];
                out.extend(start.iter());
                out.extend(stop.iter());
                out
            }
            Operation::ArrayMap { arg, body, .. }
            | Operation::ArrayFilter { arg, body, .. } => vec![arg, body],
            Operation::ArrayIntersect { left, right }
            | Operation::ArrayUnion { left, right }
            | Operation::MapMerge { left, right } => vec![left, right],
            Operation::ArrayRemove { arg, other }
            | Operation::ArrayPosition { arg, other } => vec![arg, other],
            Operation::ArrayConcat { args } => args.iter().collect(),
            Operation::ArrayRepeat { arg, times } => vec![arg, times],
            Operation::ArrayZip { args, .. } => args.iter().collect(),
            Operation::FindInSet { needle, values } => {
                let mut out = vec![needle];
                out.extend(values.iter());
                out
            }
            Operation::MapGet { arg, key, default } => vec![arg, key, default],
            Operation::MapContains { arg, key } => vec![arg, key],
            Operation::IntervalFromInteger { arg, .. }
            | Operation::TimestampFromUnix { arg, .. }
            | Operation::Cast { arg, .. }
            | Operation::HexDigest { arg, .. } => vec![arg],
            Operation::TimestampFromComponents {
                year,
                month,
                day,
                hours,
                minutes,
                seconds,
                microseconds,
                ..
            } => {
                let mut out = vec![year, month, day, hours, minutes, seconds];
                out.extend(microseconds.iter());
                out
            }
            Operation::TimestampNow | Operation::Literal { .. } => vec![],
            Operation::RegexExtract {
                arg,
                pattern,
                index,
            } => vec![arg, pattern, index],
            Operation::RegexReplace {
                arg,
                pattern,
                replacement,
            } => vec![arg, pattern, replacement],
            Operation::Correlation { left, right, .. } => vec![left, right],
            Operation::Quantile { arg, quantile, .. } => vec![arg, quantile],
            Operation::MultiQuantile { arg, quantiles, .. } => vec![arg, quantiles],
            Operation::CountDistinctStar { .. } => vec![],
            Operation::Sample { parent, .. } => vec![parent],
            Operation::BitAnd { arg, .. }
            | Operation::BitOr { arg, .. }
            | Operation::BitXor { arg, .. }
            | Operation::Mode { arg, .. } => vec![arg],
            Operation::StartsWith { arg, start } => vec![arg, start],
            Operation::EndsWith { arg, end } => vec![arg, end],
            Operation::IntegerRange { start, stop, step }
            | Operation::TimestampRange { start, stop, step } => vec![start, stop, step],
            Operation::TimeFromHMS {
                hours,
                minutes,
                seconds,
            } => vec![hours, minutes, seconds],
        }
    }

    /// Aggregate filter predicate of a reduction node, if any.
    pub fn filter(&self) -> Option<&E> {
        match self {
            Operation::Correlation { filter, .. }
            | Operation::Quantile { filter, .. }
            | Operation::MultiQuantile { filter, .. }
            | Operation::CountDistinctStar { filter, .. }
            | Operation::BitAnd { filter, .. }
            | Operation::BitOr { filter, .. }
            | Operation::BitXor { filter, .. }
            | Operation::Mode { filter, .. } => filter.as_ref(),
            _ => None,
        }
    }
}
