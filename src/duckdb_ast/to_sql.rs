//! SQL text rendering for the DuckDB expression tree.

use super::{BinaryOperator, SqlExpr, SqlLiteral, UnaryOperator};

/// Render a node as DuckDB SQL text.
///
/// Rendering is total: every constructible expression has a textual form,
/// so no error channel is threaded through here.
pub trait ToSql {
    fn to_sql(&self) -> String;
}

impl BinaryOperator {
    fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Addition => "+",
            BinaryOperator::Subtraction => "-",
            BinaryOperator::Multiplication => "*",
            BinaryOperator::Division => "/",
            BinaryOperator::ModuloDivision => "%",
            BinaryOperator::Equal => "=",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThanEqual => "<=",
            BinaryOperator::GreaterThanEqual => ">=",
            BinaryOperator::And => "AND",
            BinaryOperator::Or => "OR",
        }
    }
}

impl ToSql for SqlLiteral {
    fn to_sql(&self) -> String {
        match self {
            SqlLiteral::Null => "NULL".to_string(),
            SqlLiteral::Boolean(b) => b.to_string(),
            SqlLiteral::Integer(i) => i.to_string(),
            SqlLiteral::Float(f) => f.to_string(),
            SqlLiteral::String(s) => format!("'{}'", s.replace('\'', "''")),
        }
    }
}

impl ToSql for SqlExpr {
    fn to_sql(&self) -> String {
        match self {
            SqlExpr::Literal(lit) => lit.to_sql(),
            SqlExpr::Identifier(id) => {
                if id.quoted {
                    format!("\"{}\"", id.name.replace('"', "\"\""))
                } else {
                    id.name.clone()
                }
            }
            SqlExpr::FunctionCall(call) => {
                let args: Vec<String> = call.args.iter().map(|a| a.to_sql()).collect();
                format!("{}({})", call.name, args.join(", "))
            }
            SqlExpr::FilteredAggregate(filtered) => format!(
                "{} FILTER (WHERE {})",
                filtered.call.to_sql(),
                filtered.predicate.to_sql()
            ),
            SqlExpr::BinaryOp(op) => format!(
                "({} {} {})",
                op.left.to_sql(),
                op.operator.symbol(),
                op.right.to_sql()
            ),
            SqlExpr::UnaryOp(op) => match op.operator {
                UnaryOperator::Negate => format!("(-{})", op.operand.to_sql()),
                UnaryOperator::Not => format!("NOT ({})", op.operand.to_sql()),
                UnaryOperator::IsNull => format!("({} IS NULL)", op.operand.to_sql()),
                UnaryOperator::IsNotNull => format!("({} IS NOT NULL)", op.operand.to_sql()),
            },
            SqlExpr::Cast(cast) => {
                let keyword = if cast.trying { "TRY_CAST" } else { "CAST" };
                format!("{}({} AS {})", keyword, cast.expr.to_sql(), cast.to)
            }
            SqlExpr::Lambda(lambda) => {
                let body = lambda.body.to_sql();
                match lambda.params.as_slice() {
                    [single] => format!("{} -> {}", single, body),
                    many => format!("({}) -> {}", many.join(", "), body),
                }
            }
            SqlExpr::IntervalLiteral(interval) => {
                format!("INTERVAL '{}' {}", interval.value, interval.unit)
            }
            SqlExpr::Array(items) => {
                let items: Vec<String> = items.iter().map(|i| i.to_sql()).collect();
                format!("[{}]", items.join(", "))
            }
            SqlExpr::Tuple(items) => {
                let items: Vec<String> = items.iter().map(|i| i.to_sql()).collect();
                format!("({})", items.join(", "))
            }
            SqlExpr::StructLiteral(fields) => {
                let fields: Vec<String> = fields
                    .iter()
                    .map(|(name, value)| {
                        format!("'{}': {}", name.replace('\'', "''"), value.to_sql())
                    })
                    .collect();
                format!("{{{}}}", fields.join(", "))
            }
            SqlExpr::Distinct(items) => {
                let items: Vec<String> = items.iter().map(|i| i.to_sql()).collect();
                format!("DISTINCT {}", items.join(", "))
            }
            SqlExpr::TableSample(sample) => {
                let method = match sample.seed {
                    Some(seed) => format!("({}, {})", sample.method, seed),
                    None => format!("({})", sample.method),
                };
                format!(
                    "(SELECT * FROM ({}) USING SAMPLE {} PERCENT {})",
                    sample.parent.to_sql(),
                    sample.percent,
                    method
                )
            }
            SqlExpr::Star => "*".to_string(),
        }
    }
}
