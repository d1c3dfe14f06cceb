//! Search request parsing
//!
//! Turns raw query items into a validated [`SearchRequest`]. This is the
//! boundary where malformed scalars are rejected; everything past it assumes
//! clean values. Unknown parameter names are ignored, matching the original
//! API's lenient binding. Blank values for scalar parameters mean "not
//! provided".

use crate::db::search::filter::ListingFilter;
use crate::db::search::query_builder::{SortKey, SortSpec};
use crate::models::Modality;
use crate::{Error, Result};

/// Zero-based page window. `size` is at least 1 and already clamped to the
/// configured maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }
}

/// A fully parsed search request: filter, page window and ordering.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub filter: ListingFilter,
    pub page: PageRequest,
    pub sort: SortSpec,
}

impl SearchRequest {
    /// Parse decoded query items. Scalar parameters take the last occurrence;
    /// tag parameters accumulate across occurrences and split on commas.
    pub fn from_items(
        items: &[(String, String)],
        default_page_size: u32,
        max_page_size: u32,
    ) -> Result<Self> {
        let mut filter = ListingFilter::default();
        let mut page: u32 = 0;
        let mut size: u32 = default_page_size;
        let mut sort = SortSpec::default();

        for (key, value) in items {
            let is_blank = value.trim().is_empty();
            match key.as_str() {
                // Tag parameters accept repeats and comma-separated values.
                "caractInternasContem" => {
                    extend_tag_values(&mut filter.internal_features_any, value);
                    continue;
                }
                "caractExternasContem" => {
                    extend_tag_values(&mut filter.external_features_any, value);
                    continue;
                }
                _ => {}
            }

            // A blank scalar means the parameter was not provided.
            if is_blank {
                continue;
            }

            match key.as_str() {
                "id" => filter.id = Some(parse_i64(key, value)?),
                "condominio" => filter.condominium = Some(value.clone()),
                "bairro" => filter.neighborhood = Some(value.clone()),
                "cidade" => filter.city = Some(value.clone()),
                "tipo" => filter.property_type = Some(value.clone()),
                "aceitaPermuta" => filter.accepts_trade = Some(parse_bool(key, value)?),
                "modalidade" => filter.modality = Some(parse_modality(value)?),
                "areaPrincipalMin" => filter.main_area_min = Some(parse_f64(key, value)?),
                "areaPrincipalMax" => filter.main_area_max = Some(parse_f64(key, value)?),
                "areaLoteMin" => filter.lot_area_min = Some(parse_f64(key, value)?),
                "areaLoteMax" => filter.lot_area_max = Some(parse_f64(key, value)?),
                "qtdQuartos" => filter.bedrooms = Some(parse_i32(key, value)?),
                "qtdBanheiros" => filter.bathrooms = Some(parse_i32(key, value)?),
                "qtdSuites" => filter.suites = Some(parse_i32(key, value)?),
                "qtdVagas" => filter.parking_spots = Some(parse_i32(key, value)?),
                "valorImovelMin" => filter.price_min = Some(parse_f64(key, value)?),
                "valorImovelMax" => filter.price_max = Some(parse_f64(key, value)?),
                "valorCondominioMin" => filter.condo_fee_min = Some(parse_f64(key, value)?),
                "valorCondominioMax" => filter.condo_fee_max = Some(parse_f64(key, value)?),
                "valorIptuMin" => filter.property_tax_min = Some(parse_f64(key, value)?),
                "valorIptuMax" => filter.property_tax_max = Some(parse_f64(key, value)?),
                "page" => page = parse_u32(key, value)?,
                "size" => size = parse_u32(key, value)?,
                "sort" => sort = parse_sort(value)?,
                // Unknown parameters are ignored.
                _ => {}
            }
        }

        if size == 0 {
            return Err(Error::InvalidArgument(
                "Parameter 'size' must be at least 1".to_string(),
            ));
        }
        let size = size.min(max_page_size);

        Ok(Self {
            filter,
            page: PageRequest { page, size },
            sort,
        })
    }
}

fn extend_tag_values(target: &mut Vec<String>, raw: &str) {
    target.extend(
        raw.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string),
    );
}

fn invalid(name: &str, raw: &str) -> Error {
    Error::InvalidArgument(format!("Invalid value for parameter '{name}': {raw}"))
}

fn parse_i64(name: &str, raw: &str) -> Result<i64> {
    raw.trim().parse().map_err(|_| invalid(name, raw))
}

fn parse_i32(name: &str, raw: &str) -> Result<i32> {
    raw.trim().parse().map_err(|_| invalid(name, raw))
}

fn parse_u32(name: &str, raw: &str) -> Result<u32> {
    raw.trim().parse().map_err(|_| invalid(name, raw))
}

fn parse_f64(name: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| invalid(name, raw))?;
    // `parse` accepts "NaN" and "inf"; neither is a usable bound.
    if !value.is_finite() {
        return Err(invalid(name, raw));
    }
    Ok(value)
}

fn parse_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid(name, raw)),
    }
}

fn parse_modality(raw: &str) -> Result<Modality> {
    Modality::from_param(raw.trim()).ok_or_else(|| invalid("modalidade", raw))
}

fn parse_sort(raw: &str) -> Result<SortSpec> {
    let mut parts = raw.split(',').map(str::trim);
    let field = parts.next().unwrap_or("");
    let key = match field {
        "id" => SortKey::Id,
        "valorImovel" => SortKey::Price,
        "areaPrincipal" => SortKey::MainArea,
        "qtdQuartos" => SortKey::Bedrooms,
        "destaque" => SortKey::Highlighted,
        _ => {
            return Err(Error::InvalidArgument(format!(
                "Unsupported sort field: {field}"
            )))
        }
    };

    let ascending = match parts.next() {
        None | Some("") => true,
        Some(dir) if dir.eq_ignore_ascii_case("asc") => true,
        Some(dir) if dir.eq_ignore_ascii_case("desc") => false,
        Some(dir) => {
            return Err(Error::InvalidArgument(format!(
                "Unsupported sort direction: {dir}"
            )))
        }
    };

    Ok(SortSpec { key, ascending })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn parse(pairs: &[(&str, &str)]) -> Result<SearchRequest> {
        SearchRequest::from_items(&items(pairs), 21, 100)
    }

    #[test]
    fn no_items_yields_unconstrained_defaults() {
        let request = parse(&[]).unwrap();
        assert!(request.filter.id.is_none());
        assert!(request.filter.internal_features_any.is_empty());
        assert_eq!(request.page, PageRequest { page: 0, size: 21 });
        assert_eq!(request.sort, SortSpec::default());
    }

    #[test]
    fn scalar_fields_parse_into_the_filter() {
        let request = parse(&[
            ("cidade", "Campinas"),
            ("aceitaPermuta", "true"),
            ("modalidade", "COMPRA"),
            ("qtdQuartos", "3"),
            ("valorImovelMax", "350000.5"),
        ])
        .unwrap();
        assert_eq!(request.filter.city.as_deref(), Some("Campinas"));
        assert_eq!(request.filter.accepts_trade, Some(true));
        assert_eq!(request.filter.modality, Some(Modality::Purchase));
        assert_eq!(request.filter.bedrooms, Some(3));
        assert_eq!(request.filter.price_max, Some(350000.5));
    }

    #[test]
    fn tag_params_accumulate_and_split_on_commas() {
        let request = parse(&[
            ("caractInternasContem", "Piscina, Churrasqueira"),
            ("caractInternasContem", "Academia"),
            ("caractExternasContem", ""),
        ])
        .unwrap();
        assert_eq!(
            request.filter.internal_features_any,
            vec!["Piscina", "Churrasqueira", "Academia"]
        );
        assert!(request.filter.external_features_any.is_empty());
    }

    #[test]
    fn blank_scalars_are_treated_as_absent() {
        let request = parse(&[("id", "  "), ("qtdSuites", "")]).unwrap();
        assert!(request.filter.id.is_none());
        assert!(request.filter.suites.is_none());
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert!(matches!(
            parse(&[("areaPrincipalMin", "abc")]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            parse(&[("id", "12.5")]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        for raw in ["NaN", "inf", "-inf"] {
            assert!(matches!(
                parse(&[("valorImovelMin", raw)]),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn unknown_modality_is_rejected() {
        assert!(matches!(
            parse(&[("modalidade", "PERMUTA")]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn unknown_parameters_are_ignored() {
        let request = parse(&[("destaque", "true"), ("utm_source", "ad")]).unwrap();
        assert!(request.filter.id.is_none());
    }

    #[test]
    fn last_scalar_occurrence_wins() {
        let request = parse(&[("qtdQuartos", "2"), ("qtdQuartos", "4")]).unwrap();
        assert_eq!(request.filter.bedrooms, Some(4));
    }

    #[test]
    fn zero_size_is_rejected_and_large_size_is_clamped() {
        assert!(matches!(
            parse(&[("size", "0")]),
            Err(Error::InvalidArgument(_))
        ));
        let request = parse(&[("size", "500")]).unwrap();
        assert_eq!(request.page.size, 100);
    }

    #[test]
    fn sort_parses_field_and_direction() {
        let request = parse(&[("sort", "valorImovel,desc")]).unwrap();
        assert_eq!(
            request.sort,
            SortSpec {
                key: SortKey::Price,
                ascending: false,
            }
        );
        let request = parse(&[("sort", "areaPrincipal")]).unwrap();
        assert!(request.sort.ascending);
    }

    #[test]
    fn unsupported_sort_field_is_rejected() {
        assert!(matches!(
            parse(&[("sort", "descricao,desc")]),
            Err(Error::InvalidArgument(_))
        ));
    }
}
