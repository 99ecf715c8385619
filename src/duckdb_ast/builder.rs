//! Expression builder facade.
//!
//! Free-function constructors over the DuckDB expression tree: function
//! calls, casts, and aggregate-with-filter construction, plus the small
//! combinators the translation rules lean on. Everything here returns a new
//! value; existing expressions are never modified.

use crate::operation_graph::DataType;

use super::data_type::duckdb_type;
use super::{
    BinaryOp, BinaryOperator, Cast, FilteredAggregate, FunctionCall, Identifier, Lambda,
    SqlExpr, SqlLiteral, UnaryOp, UnaryOperator,
};

/// Plain function call over the arguments in order.
pub fn func(name: impl Into<String>, args: Vec<SqlExpr>) -> SqlExpr {
    SqlExpr::FunctionCall(FunctionCall {
        name: name.into(),
        args,
    })
}

/// Aggregate call, wrapped in FILTER (WHERE ...) when a predicate is given.
///
/// Every reduction translation threads its optional predicate through here,
/// so filtered and unfiltered calls stay structurally identical otherwise.
pub fn agg(name: impl Into<String>, args: Vec<SqlExpr>, filter: Option<&SqlExpr>) -> SqlExpr {
    let call = func(name, args);
    match filter {
        Some(predicate) => SqlExpr::FilteredAggregate(FilteredAggregate {
            call: Box::new(call),
            predicate: Box::new(predicate.clone()),
        }),
        None => call,
    }
}

pub fn cast(expr: SqlExpr, to: &DataType) -> SqlExpr {
    SqlExpr::Cast(Cast {
        expr: Box::new(expr),
        to: duckdb_type(to),
        trying: false,
    })
}

pub fn try_cast(expr: SqlExpr, to: &DataType) -> SqlExpr {
    SqlExpr::Cast(Cast {
        expr: Box::new(expr),
        to: duckdb_type(to),
        trying: true,
    })
}

/// `if(cond, then, otherwise)`.
pub fn if_(cond: SqlExpr, then: SqlExpr, otherwise: SqlExpr) -> SqlExpr {
    func("if", vec![cond, then, otherwise])
}

pub fn lambda(params: Vec<&str>, body: SqlExpr) -> SqlExpr {
    SqlExpr::Lambda(Lambda {
        params: params.into_iter().map(str::to_string).collect(),
        body: Box::new(body),
    })
}

pub fn ident(name: impl Into<String>) -> SqlExpr {
    SqlExpr::Identifier(Identifier {
        name: name.into(),
        quoted: false,
    })
}

pub fn column(name: impl Into<String>, quoted: bool) -> SqlExpr {
    SqlExpr::Identifier(Identifier {
        name: name.into(),
        quoted,
    })
}

pub fn int_lit(value: i64) -> SqlExpr {
    SqlExpr::Literal(SqlLiteral::Integer(value))
}

pub fn float_lit(value: f64) -> SqlExpr {
    SqlExpr::Literal(SqlLiteral::Float(value))
}

pub fn str_lit(value: impl Into<String>) -> SqlExpr {
    SqlExpr::Literal(SqlLiteral::String(value.into()))
}

pub fn bool_lit(value: bool) -> SqlExpr {
    SqlExpr::Literal(SqlLiteral::Boolean(value))
}

pub fn null() -> SqlExpr {
    SqlExpr::Literal(SqlLiteral::Null)
}

pub fn array(items: Vec<SqlExpr>) -> SqlExpr {
    SqlExpr::Array(items)
}

pub fn binary(operator: BinaryOperator, left: SqlExpr, right: SqlExpr) -> SqlExpr {
    SqlExpr::BinaryOp(BinaryOp {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn add(left: SqlExpr, right: SqlExpr) -> SqlExpr {
    binary(BinaryOperator::Addition, left, right)
}

pub fn mul(left: SqlExpr, right: SqlExpr) -> SqlExpr {
    binary(BinaryOperator::Multiplication, left, right)
}

pub fn div(left: SqlExpr, right: SqlExpr) -> SqlExpr {
    binary(BinaryOperator::Division, left, right)
}

pub fn ge(left: SqlExpr, right: SqlExpr) -> SqlExpr {
    binary(BinaryOperator::GreaterThanEqual, left, right)
}

pub fn lt(left: SqlExpr, right: SqlExpr) -> SqlExpr {
    binary(BinaryOperator::LessThan, left, right)
}

pub fn neq(left: SqlExpr, right: SqlExpr) -> SqlExpr {
    binary(BinaryOperator::NotEqual, left, right)
}

pub fn neg(operand: SqlExpr) -> SqlExpr {
    SqlExpr::UnaryOp(UnaryOp {
        operator: UnaryOperator::Negate,
        operand: Box::new(operand),
    })
}

pub fn is_null(operand: SqlExpr) -> SqlExpr {
    SqlExpr::UnaryOp(UnaryOp {
        operator: UnaryOperator::IsNull,
        operand: Box::new(operand),
    })
}
