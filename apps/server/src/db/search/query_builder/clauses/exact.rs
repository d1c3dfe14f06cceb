use super::super::bind::{push_bigint, push_bool, push_int, push_text};
use super::super::BindValue;
use crate::db::search::filter::ListingFilter;

/// Equality clauses for the exact-match fields: id, accepts-trade, modality
/// and the four counts. Emitted only for present fields.
pub(in crate::db::search::query_builder) fn build_exact_clauses(
    filter: &ListingFilter,
    bind_params: &mut Vec<BindValue>,
) -> Vec<String> {
    let mut clauses = Vec::new();

    if let Some(id) = filter.id {
        let idx = push_bigint(bind_params, id);
        clauses.push(format!("l.id = ${idx}"));
    }
    if let Some(accepts_trade) = filter.accepts_trade {
        let idx = push_bool(bind_params, accepts_trade);
        clauses.push(format!("l.accepts_trade = ${idx}"));
    }
    if let Some(modality) = filter.modality {
        // The column is the `modality` enum type; the bind is its text label.
        let idx = push_text(bind_params, modality.as_str().to_string());
        clauses.push(format!("l.modality = ${idx}::modality"));
    }

    for (column, value) in [
        ("bedrooms", filter.bedrooms),
        ("bathrooms", filter.bathrooms),
        ("suites", filter.suites),
        ("parking_spots", filter.parking_spots),
    ] {
        if let Some(count) = value {
            let idx = push_int(bind_params, count);
            clauses.push(format!("l.{column} = ${idx}"));
        }
    }

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Modality;

    #[test]
    fn absent_fields_emit_nothing() {
        let mut bind_params = Vec::new();
        let clauses = build_exact_clauses(&ListingFilter::default(), &mut bind_params);
        assert!(clauses.is_empty());
        assert!(bind_params.is_empty());
    }

    #[test]
    fn present_fields_emit_equalities_in_declaration_order() {
        let filter = ListingFilter {
            id: Some(7),
            accepts_trade: Some(false),
            modality: Some(Modality::Rental),
            bedrooms: Some(3),
            parking_spots: Some(0),
            ..ListingFilter::default()
        };
        let mut bind_params = Vec::new();
        let clauses = build_exact_clauses(&filter, &mut bind_params);
        assert_eq!(
            clauses,
            vec![
                "l.id = $1",
                "l.accepts_trade = $2",
                "l.modality = $3::modality",
                "l.bedrooms = $4",
                "l.parking_spots = $5",
            ]
        );
        assert!(matches!(bind_params[0], BindValue::BigInt(7)));
        assert!(matches!(bind_params[2], BindValue::Text(ref s) if s == "ALUGUEL"));
        // A zero count is a real constraint, not "unset".
        assert!(matches!(bind_params[4], BindValue::Int(0)));
    }
}
