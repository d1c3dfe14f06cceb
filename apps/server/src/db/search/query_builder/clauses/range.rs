use super::super::bind::push_float;
use super::super::BindValue;

/// Inclusive range clauses for a numeric column; min and max are independent.
///
/// An inverted range (min > max) is passed through unchanged and matches
/// nothing; it is defined behavior, not input to repair. A NULL column value
/// never satisfies either comparison.
pub(in crate::db::search::query_builder) fn build_range_clauses(
    column: &str,
    min: Option<f64>,
    max: Option<f64>,
    bind_params: &mut Vec<BindValue>,
) -> Vec<String> {
    let mut clauses = Vec::new();
    if let Some(min) = min {
        let idx = push_float(bind_params, min);
        clauses.push(format!("l.{column} >= ${idx}"));
    }
    if let Some(max) = max {
        let idx = push_float(bind_params, max);
        clauses.push(format!("l.{column} <= ${idx}"));
    }
    clauses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_bounds_emit_nothing() {
        let mut bind_params = Vec::new();
        assert!(build_range_clauses("price", None, None, &mut bind_params).is_empty());
    }

    #[test]
    fn each_bound_is_independent() {
        let mut bind_params = Vec::new();
        let clauses = build_range_clauses("price", None, Some(500_000.0), &mut bind_params);
        assert_eq!(clauses, vec!["l.price <= $1"]);
        assert!(matches!(bind_params[0], BindValue::Float(v) if v == 500_000.0));
    }

    #[test]
    fn inverted_range_emits_both_comparisons() {
        // min > max compiles as-is; the conjunction matches zero rows.
        let mut bind_params = Vec::new();
        let clauses = build_range_clauses("main_area", Some(200.0), Some(100.0), &mut bind_params);
        assert_eq!(clauses, vec!["l.main_area >= $1", "l.main_area <= $2"]);
    }
}
