//! DuckDB dialect compiler.
//!
//! Translates one operation-graph node at a time into a DuckDB expression.
//! Children arrive pre-translated from the surrounding generic compiler;
//! this module only decides how a single node lowers.
//!
//! Rule resolution, first match wins:
//! 1. a dedicated rule for the node kind (the arms of [`DuckDbCompiler::compile`]),
//! 2. a uniform-mapping entry (pure rename, see `function_registry`),
//! 3. the `NotImplemented` fallback signal.
//!
//! The whole pass is synchronous and side-effect-free; the only shared
//! state is the read-only mapping table.

mod array_ops;
pub mod capabilities;
mod casts;
mod errors;
mod function_registry;
mod literals;
mod map_ops;
mod statistics;
mod strings;
mod temporal;

use serde::{Deserialize, Serialize};

use crate::duckdb_ast::builder::{agg, func};
use crate::duckdb_ast::SqlExpr;
use crate::operation_graph::Operation;

pub use errors::DuckDbCompileError;
pub use function_registry::{get_function_mapping, FunctionKind, FunctionMapping};

/// Node kinds translated by a dedicated rule rather than a pure rename.
///
/// Together with the uniform-mapping table this is the declared override
/// set of the dialect compiler. The table asserts against this list at
/// construction, so a kind can never be registered on both paths.
pub const GAP_RULE_OPS: &[&str] = &[
    "ArrayDistinct",
    "ArrayIndex",
    "ArraySlice",
    "ArrayMap",
    "ArrayFilter",
    "ArrayIntersect",
    "ArrayRemove",
    "ArrayUnion",
    "ArrayConcat",
    "ArrayRepeat",
    "ArrayZip",
    "FindInSet",
    "MapGet",
    "MapContains",
    "IntervalFromInteger",
    "TimestampFromUnix",
    "TimestampFromComponents",
    "TimestampNow",
    "ExtractMillisecond",
    "ExtractMicrosecond",
    "Cast",
    "ToJsonMap",
    "ToJsonArray",
    "Literal",
    "Capitalize",
    "RegexExtract",
    "RegexReplace",
    "HexDigest",
    "Correlation",
    "Quantile",
    "MultiQuantile",
    "CountDistinctStar",
    "Sample",
];

/// Knobs of the dialect compiler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerOptions {
    /// Quote column identifiers the compiler synthesizes itself (row
    /// values for distinct-star counting).
    pub quote_identifiers: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            quote_identifiers: true,
        }
    }
}

/// The DuckDB dialect compiler.
///
/// Stateless apart from its options; one instance can compile any number
/// of graphs, concurrently from multiple threads.
#[derive(Debug, Clone, Default)]
pub struct DuckDbCompiler {
    options: CompilerOptions,
}

impl DuckDbCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompilerOptions) -> Self {
        Self { options }
    }

    /// Translate one node, its children already lowered.
    pub fn compile(&self, op: &Operation<SqlExpr>) -> Result<SqlExpr, DuckDbCompileError> {
        match op {
            Operation::ArrayDistinct { arg } => Ok(self.array_distinct(arg)),
            Operation::ArrayIndex { arg, index } => Ok(self.array_index(arg, index)),
            Operation::ArraySlice { arg, start, stop } => {
                Ok(self.array_slice(arg, start.as_ref(), stop.as_ref()))
            }
            Operation::ArrayMap { arg, body, param } => Ok(self.array_map(arg, body, param)),
            Operation::ArrayFilter { arg, body, param } => {
                Ok(self.array_filter(arg, body, param))
            }
            Operation::ArrayIntersect { left, right } => Ok(self.array_intersect(left, right)),
            Operation::ArrayRemove { arg, other } => Ok(self.array_remove(arg, other)),
            Operation::ArrayUnion { left, right } => Ok(self.array_union(left, right)),
            Operation::ArrayConcat { args } => Ok(self.array_concat(args)),
            Operation::ArrayRepeat { arg, times } => Ok(self.array_repeat(arg, times)),
            Operation::ArrayZip { args, fields } => Ok(self.array_zip(args, fields)),
            Operation::FindInSet { needle, values } => Ok(self.find_in_set(needle, values)),
            Operation::MapGet { arg, key, default } => Ok(self.map_get(arg, key, default)),
            Operation::MapContains { arg, key } => Ok(self.map_contains(arg, key)),
            Operation::IntervalFromInteger { arg, unit } => {
                self.interval_from_integer(arg, *unit)
            }
            Operation::TimestampFromUnix { arg, unit } => self.timestamp_from_unix(arg, *unit),
            Operation::TimestampFromComponents {
                year,
                month,
                day,
                hours,
                minutes,
                seconds,
                microseconds,
                timezone,
            } => Ok(self.timestamp_from_components(
                year,
                month,
                day,
                hours,
                minutes,
                seconds,
                microseconds.as_ref(),
                timezone.as_deref(),
            )),
            Operation::TimestampNow => Ok(self.timestamp_now()),
            Operation::ExtractMillisecond { arg } => Ok(self.extract_millisecond(arg)),
            Operation::ExtractMicrosecond { arg } => Ok(self.extract_microsecond(arg)),
            Operation::Cast { arg, from, to } => self.cast_value(arg, from, to),
            Operation::ToJsonMap { arg } => Ok(self.to_json_map(arg)),
            Operation::ToJsonArray { arg } => Ok(self.to_json_array(arg)),
            Operation::Literal { value, dtype } => self.literal(value, dtype),
            Operation::Capitalize { arg } => Ok(self.capitalize(arg)),
            Operation::RegexExtract {
                arg,
                pattern,
                index,
            } => Ok(self.regex_extract(arg, pattern, index)),
            Operation::RegexReplace {
                arg,
                pattern,
                replacement,
            } => Ok(self.regex_replace(arg, pattern, replacement)),
            Operation::HexDigest { arg, how } => self.hex_digest(arg, how),
            Operation::Correlation {
                left,
                right,
                left_type,
                right_type,
                how,
                filter,
            } => self.correlation(left, right, left_type, right_type, *how, filter.as_ref()),
            Operation::Quantile {
                arg,
                quantile,
                arg_type,
                filter,
            } => Ok(self.quantile(arg, quantile, arg_type, filter.as_ref())),
            Operation::MultiQuantile {
                arg,
                quantiles,
                arg_type,
                filter,
            } => Ok(self.quantile(arg, quantiles, arg_type, filter.as_ref())),
            Operation::CountDistinctStar { columns, filter } => {
                Ok(self.count_distinct_star(columns, filter.as_ref()))
            }
            Operation::Sample {
                parent,
                fraction,
                method,
                seed,
            } => Ok(self.sample(parent, *fraction, *method, *seed)),

            // everything else is either a pure rename or a coverage bug
            other => self.compile_via_mapping(other),
        }
    }

    fn compile_via_mapping(&self, op: &Operation<SqlExpr>) -> Result<SqlExpr, DuckDbCompileError> {
        match get_function_mapping(op.name()) {
            Some(mapping) => {
                log::debug!(
                    "compiling '{}' through uniform mapping '{}'",
                    op.name(),
                    mapping.duckdb_name
                );
                let args: Vec<SqlExpr> = op.children().into_iter().cloned().collect();
                match mapping.kind {
                    FunctionKind::Scalar => Ok(func(mapping.duckdb_name, args)),
                    FunctionKind::Aggregate => Ok(agg(mapping.duckdb_name, args, op.filter())),
                }
            }
            None => Err(DuckDbCompileError::NotImplemented { name: op.name() }),
        }
    }
}
