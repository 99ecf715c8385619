//! Dialect-agnostic operation graph vocabulary.
//!
//! The node kinds, datatypes, and literal values the dialect compiler
//! consumes. Graph construction, validation, and traversal live with the
//! surrounding generic compiler; this module only defines the shapes that
//! cross that boundary.

mod datatypes;
mod literal;
mod operations;

pub use datatypes::{
    CorrelationMode, DataType, IntervalUnit, SampleMethod, TimestampUnit,
};
pub use literal::LiteralValue;
pub use operations::Operation;
