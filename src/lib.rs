//! Duckgraph - DuckDB dialect compiler for a portable operation graph
//!
//! This crate lowers dialect-agnostic relational and scalar operation nodes
//! into DuckDB SQL expressions:
//! - A closed vocabulary of operation node kinds
//! - Per-kind translation rules bridging DuckDB's semantic gaps
//! - A uniform mapping table for pure function renames
//! - DuckDB expression tree construction and SQL rendering

pub mod duckdb_ast;
pub mod duckdb_compiler;
pub mod operation_graph;
