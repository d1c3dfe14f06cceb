//! SQL query builder for listing searches.
//!
//! Compiles a [`ListingFilter`] into one conjunctive SQL predicate plus an
//! ordered bind vector:
//! - exact fields, counts: equality
//! - text fields: case-insensitive substring (blank input is "no preference")
//! - numeric attributes: independent inclusive bounds
//! - tag sets: array overlap ("contains any" on the decoded list)
//!
//! An all-absent filter compiles to no WHERE clause at all. `build_sql` adds
//! deterministic ordering and LIMIT/OFFSET; `build_count_sql` shares the
//! filters and drops both.

use super::filter::ListingFilter;
use super::params::PageRequest;

mod bind;
mod clauses;

/// Bind values for `sqlx` queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Bool(bool),
    Int(i32),
    BigInt(i64),
    Float(f64),
    Text(String),
    TextArray(Vec<String>),
}

/// Sortable listing attributes exposed on the search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Price,
    MainArea,
    Bedrooms,
    Highlighted,
}

impl SortKey {
    fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Price => "price",
            Self::MainArea => "main_area",
            Self::Bedrooms => "bedrooms",
            Self::Highlighted => "highlighted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub ascending: bool,
}

impl Default for SortSpec {
    /// Natural catalog order: ascending identifier.
    fn default() -> Self {
        Self {
            key: SortKey::Id,
            ascending: true,
        }
    }
}

/// Query builder for one search request.
#[derive(Debug)]
pub struct QueryBuilder<'a> {
    filter: &'a ListingFilter,
    page: PageRequest,
    sort: SortSpec,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(filter: &'a ListingFilter, page: PageRequest, sort: SortSpec) -> Self {
        Self { filter, page, sort }
    }

    pub fn build_sql(&self) -> (String, Vec<BindValue>) {
        let mut sql = String::from("SELECT l.* FROM listings l");
        let mut bind_params = Vec::new();

        self.push_filters(&mut sql, &mut bind_params);
        self.push_order_by(&mut sql);
        sql.push_str(&format!(
            " LIMIT {} OFFSET {}",
            self.page.size,
            self.page.offset()
        ));

        (sql, bind_params)
    }

    pub fn build_count_sql(&self) -> (String, Vec<BindValue>) {
        let mut sql = String::from("SELECT COUNT(*) FROM listings l");
        let mut bind_params = Vec::new();

        self.push_filters(&mut sql, &mut bind_params);

        (sql, bind_params)
    }

    fn push_filters(&self, sql: &mut String, bind_params: &mut Vec<BindValue>) {
        let f = self.filter;
        let mut conditions = clauses::build_exact_clauses(f, bind_params);

        for (column, value) in [
            ("condominium", f.condominium.as_deref()),
            ("neighborhood", f.neighborhood.as_deref()),
            ("city", f.city.as_deref()),
            ("property_type", f.property_type.as_deref()),
        ] {
            conditions.extend(clauses::build_contains_clause(column, value, bind_params));
        }

        for (column, min, max) in [
            ("main_area", f.main_area_min, f.main_area_max),
            ("lot_area", f.lot_area_min, f.lot_area_max),
            ("price", f.price_min, f.price_max),
            ("condo_fee", f.condo_fee_min, f.condo_fee_max),
            ("property_tax", f.property_tax_min, f.property_tax_max),
        ] {
            conditions.extend(clauses::build_range_clauses(column, min, max, bind_params));
        }

        for (column, values) in [
            ("internal_features", &f.internal_features_any),
            ("external_features", &f.external_features_any),
        ] {
            conditions.extend(clauses::build_tags_any_clause(column, values, bind_params));
        }

        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
    }

    fn push_order_by(&self, sql: &mut String) {
        let dir = if self.sort.ascending { "ASC" } else { "DESC" };
        if self.sort.key == SortKey::Id {
            sql.push_str(&format!(" ORDER BY l.id {dir}"));
            return;
        }

        // Nullable sort columns go last; the id tiebreak keeps page windows
        // deterministic.
        sql.push_str(&format!(
            " ORDER BY l.{} {dir} NULLS LAST, l.id {dir}",
            self.sort.key.column()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Modality;

    fn page(number: u32, size: u32) -> PageRequest {
        PageRequest { page: number, size }
    }

    #[test]
    fn empty_filter_compiles_to_match_all() {
        let filter = ListingFilter::default();
        let qb = QueryBuilder::new(&filter, page(0, 21), SortSpec::default());
        let (sql, bind_params) = qb.build_sql();
        assert_eq!(
            sql,
            "SELECT l.* FROM listings l ORDER BY l.id ASC LIMIT 21 OFFSET 0"
        );
        assert!(bind_params.is_empty());
    }

    #[test]
    fn single_exact_field_emits_one_equality() {
        let filter = ListingFilter {
            bedrooms: Some(2),
            ..ListingFilter::default()
        };
        let qb = QueryBuilder::new(&filter, page(0, 21), SortSpec::default());
        let (sql, bind_params) = qb.build_sql();
        assert_eq!(
            sql,
            "SELECT l.* FROM listings l WHERE l.bedrooms = $1 ORDER BY l.id ASC LIMIT 21 OFFSET 0"
        );
        assert_eq!(bind_params, vec![BindValue::Int(2)]);
    }

    #[test]
    fn conditions_join_with_and_and_binds_stay_ordered() {
        let filter = ListingFilter {
            city: Some("Campinas".to_string()),
            modality: Some(Modality::Purchase),
            price_min: Some(100_000.0),
            internal_features_any: vec!["Piscina".to_string()],
            ..ListingFilter::default()
        };
        let qb = QueryBuilder::new(&filter, page(0, 10), SortSpec::default());
        let (sql, bind_params) = qb.build_sql();
        assert_eq!(
            sql,
            "SELECT l.* FROM listings l WHERE l.modality = $1::modality \
             AND l.city ILIKE $2 ESCAPE '\\' AND l.price >= $3 \
             AND l.internal_features && $4 \
             ORDER BY l.id ASC LIMIT 10 OFFSET 0"
        );
        assert_eq!(
            bind_params,
            vec![
                BindValue::Text("COMPRA".to_string()),
                BindValue::Text("%Campinas%".to_string()),
                BindValue::Float(100_000.0),
                BindValue::TextArray(vec!["Piscina".to_string()]),
            ]
        );
    }

    #[test]
    fn blank_substring_filter_contributes_no_condition() {
        let filter = ListingFilter {
            city: Some("   ".to_string()),
            ..ListingFilter::default()
        };
        let qb = QueryBuilder::new(&filter, page(0, 21), SortSpec::default());
        let (sql, bind_params) = qb.build_sql();
        assert!(!sql.contains("WHERE"));
        assert!(bind_params.is_empty());
    }

    #[test]
    fn inverted_range_compiles_to_unsatisfiable_conjunction() {
        let filter = ListingFilter {
            price_min: Some(500_000.0),
            price_max: Some(100_000.0),
            ..ListingFilter::default()
        };
        let qb = QueryBuilder::new(&filter, page(0, 21), SortSpec::default());
        let (sql, _) = qb.build_sql();
        assert!(sql.contains("l.price >= $1 AND l.price <= $2"));
    }

    #[test]
    fn second_page_offsets_by_page_size() {
        let filter = ListingFilter::default();
        let qb = QueryBuilder::new(&filter, page(1, 21), SortSpec::default());
        let (sql, _) = qb.build_sql();
        assert!(sql.ends_with("LIMIT 21 OFFSET 21"));
    }

    #[test]
    fn count_sql_shares_filters_and_drops_ordering() {
        let filter = ListingFilter {
            city: Some("Campinas".to_string()),
            ..ListingFilter::default()
        };
        let qb = QueryBuilder::new(&filter, page(3, 21), SortSpec::default());
        let (sql, bind_params) = qb.build_count_sql();
        assert_eq!(
            sql,
            "SELECT COUNT(*) FROM listings l WHERE l.city ILIKE $1 ESCAPE '\\'"
        );
        assert_eq!(bind_params.len(), 1);
        assert!(!sql.contains("ORDER BY"));
        assert!(!sql.contains("LIMIT"));
    }

    #[test]
    fn non_id_sort_keeps_id_tiebreak_and_nulls_last() {
        let filter = ListingFilter::default();
        let sort = SortSpec {
            key: SortKey::Price,
            ascending: false,
        };
        let qb = QueryBuilder::new(&filter, page(0, 21), sort);
        let (sql, _) = qb.build_sql();
        assert!(sql.contains("ORDER BY l.price DESC NULLS LAST, l.id DESC"));
    }
}
