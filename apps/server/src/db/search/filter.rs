//! Sparse search criteria for the listing catalog
//!
//! Every field is optional; an absent field constrains nothing. An
//! all-absent filter matches every listing. Values arrive here already
//! validated as scalars (see [`super::params`]); blank-vs-absent policy for
//! substrings and inverted ranges is resolved by the query builder.

use crate::models::Modality;

#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    pub id: Option<i64>,
    pub condominium: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub accepts_trade: Option<bool>,
    pub property_type: Option<String>,
    pub modality: Option<Modality>,
    pub main_area_min: Option<f64>,
    pub main_area_max: Option<f64>,
    pub lot_area_min: Option<f64>,
    pub lot_area_max: Option<f64>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub suites: Option<i32>,
    pub parking_spots: Option<i32>,
    /// Match listings carrying any of these internal tags.
    pub internal_features_any: Vec<String>,
    /// Match listings carrying any of these external tags.
    pub external_features_any: Vec<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub condo_fee_min: Option<f64>,
    pub condo_fee_max: Option<f64>,
    pub property_tax_min: Option<f64>,
    pub property_tax_max: Option<f64>,
}
