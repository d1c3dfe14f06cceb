use super::super::bind::push_text;
use super::super::BindValue;

/// Case-insensitive substring clause for a text column.
///
/// Blank input (after trimming) means "no preference" and contributes no
/// condition. LIKE metacharacters in the input are escaped so user text is
/// matched literally.
pub(in crate::db::search::query_builder) fn build_contains_clause(
    column: &str,
    value: Option<&str>,
    bind_params: &mut Vec<BindValue>,
) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }

    let idx = push_text(
        bind_params,
        format!("%{}%", escape_like_pattern(trimmed)),
    );
    Some(format!("l.{column} ILIKE ${idx} ESCAPE '\\'"))
}

fn escape_like_pattern(s: &str) -> String {
    // Escape SQL LIKE meta-characters so user input is treated literally.
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '%' | '_' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_emits_nothing() {
        let mut bind_params = Vec::new();
        assert_eq!(build_contains_clause("city", None, &mut bind_params), None);
        assert!(bind_params.is_empty());
    }

    #[test]
    fn blank_value_is_treated_as_absent() {
        let mut bind_params = Vec::new();
        assert_eq!(
            build_contains_clause("city", Some("   "), &mut bind_params),
            None
        );
        assert!(bind_params.is_empty());
    }

    #[test]
    fn value_is_trimmed_and_wrapped() {
        let mut bind_params = Vec::new();
        let clause = build_contains_clause("city", Some("  Campinas "), &mut bind_params);
        assert_eq!(
            clause.as_deref(),
            Some("l.city ILIKE $1 ESCAPE '\\'")
        );
        assert!(matches!(bind_params[0], BindValue::Text(ref s) if s == "%Campinas%"));
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        let mut bind_params = Vec::new();
        build_contains_clause("condominium", Some("100%_lar\\"), &mut bind_params);
        assert!(
            matches!(bind_params[0], BindValue::Text(ref s) if s == "%100\\%\\_lar\\\\%")
        );
    }
}
