use super::super::bind::push_text_array;
use super::super::BindValue;

/// "Contains any" clause for a `text[]` tag column.
///
/// Compiles to the array-overlap operator, so the test is membership on the
/// decoded list: a stored tag `12` can never satisfy a request for `2`.
/// Blank requested values are skipped; if nothing remains, no condition is
/// emitted. A NULL tag column never matches (`NULL && x` is not true).
pub(in crate::db::search::query_builder) fn build_tags_any_clause(
    column: &str,
    values: &[String],
    bind_params: &mut Vec<BindValue>,
) -> Option<String> {
    let wanted: Vec<String> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();

    if wanted.is_empty() {
        return None;
    }

    let idx = push_text_array(bind_params, wanted);
    Some(format!("l.{column} && ${idx}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_emits_nothing() {
        let mut bind_params = Vec::new();
        assert_eq!(
            build_tags_any_clause("internal_features", &[], &mut bind_params),
            None
        );
    }

    #[test]
    fn all_blank_values_emit_nothing() {
        let mut bind_params = Vec::new();
        let values = vec!["".to_string(), "  ".to_string()];
        assert_eq!(
            build_tags_any_clause("internal_features", &values, &mut bind_params),
            None
        );
        assert!(bind_params.is_empty());
    }

    #[test]
    fn values_are_trimmed_and_blanks_dropped() {
        let mut bind_params = Vec::new();
        let values = vec![" Piscina ".to_string(), "".to_string(), "2".to_string()];
        let clause = build_tags_any_clause("external_features", &values, &mut bind_params);
        assert_eq!(clause.as_deref(), Some("l.external_features && $1"));
        assert!(matches!(
            bind_params[0],
            BindValue::TextArray(ref vs) if vs == &["Piscina".to_string(), "2".to_string()]
        ));
    }
}
