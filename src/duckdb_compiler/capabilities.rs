//! DuckDB capability facts.
//!
//! Compile-time truths about the engine that the translation rules consult.
//! Porting this compiler to a different dialect means revisiting exactly
//! these constants and the rules that reference them.

use crate::operation_graph::IntervalUnit;

/// `list_extract` and `list_slice` index their first element at 1.
pub const ARRAY_INDEX_BASE: i64 = 1;

/// `element_at` on a map yields an empty list for a missing key, not NULL.
/// Rules that need "NULL on absent" must unwrap one level.
pub const MAP_EXTRACT_RETURNS_LIST: bool = true;

/// `list_distinct` drops null elements instead of keeping one. Rules that
/// promise a null survivor must re-append it themselves.
pub const LIST_DISTINCT_DROPS_NULLS: bool = true;

/// Fixed lambda parameter identifier for rules that synthesize their own
/// lambda (set intersection/removal). Operation-supplied parameter names
/// are used as-is instead.
pub const SET_OP_LAMBDA_PARAM: &str = "x";

/// Digest algorithms with a native single-argument function.
pub const SUPPORTED_DIGESTS: [&str; 2] = ["md5", "sha256"];

/// Suffix of the native `to_<suffix>` interval constructor for a unit.
///
/// Nanoseconds have no constructor at all; weeks are only reachable
/// through the day constructor (`to_days(n * 7)`).
pub fn interval_constructor_suffix(unit: IntervalUnit) -> Option<&'static str> {
    match unit {
        IntervalUnit::Year => Some("years"),
        IntervalUnit::Month => Some("months"),
        IntervalUnit::Day => Some("days"),
        IntervalUnit::Hour => Some("hours"),
        IntervalUnit::Minute => Some("minutes"),
        IntervalUnit::Second => Some("seconds"),
        IntervalUnit::Millisecond => Some("milliseconds"),
        IntervalUnit::Microsecond => Some("microseconds"),
        IntervalUnit::Week | IntervalUnit::Nanosecond => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_native_constructor_for_week_or_nanosecond() {
        assert_eq!(interval_constructor_suffix(IntervalUnit::Week), None);
        assert_eq!(interval_constructor_suffix(IntervalUnit::Nanosecond), None);
        assert_eq!(
            interval_constructor_suffix(IntervalUnit::Millisecond),
            Some("milliseconds")
        );
    }
}
