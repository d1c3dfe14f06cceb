//! Listing entity and its wire representation
//!
//! The JSON field names are the catalog's original public contract
//! (Portuguese), kept stable for the existing frontend. Struct and column
//! names are the internal vocabulary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Commercial modality of a listing. Closed set; the wire values are part of
/// the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "modality")]
pub enum Modality {
    #[serde(rename = "COMPRA")]
    #[sqlx(rename = "COMPRA")]
    Purchase,
    #[serde(rename = "ALUGUEL")]
    #[sqlx(rename = "ALUGUEL")]
    Rental,
    #[serde(rename = "LANCAMENTOS")]
    #[sqlx(rename = "LANCAMENTOS")]
    Launch,
}

impl Modality {
    /// Parse the wire value used in query strings and stored rows.
    /// Matching is exact: the set is closed and uppercase.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "COMPRA" => Some(Self::Purchase),
            "ALUGUEL" => Some(Self::Rental),
            "LANCAMENTOS" => Some(Self::Launch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Purchase => "COMPRA",
            Self::Rental => "ALUGUEL",
            Self::Launch => "LANCAMENTOS",
        }
    }
}

/// One persisted catalog record.
///
/// Media URLs are deliberately not part of this entity: they are derived from
/// the filesystem at read time and never written back (see
/// [`ListingWithMedia`]).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Listing {
    pub id: i64,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "condominio")]
    pub condominium: Option<String>,
    #[serde(rename = "bairro")]
    pub neighborhood: Option<String>,
    #[serde(rename = "cidade")]
    pub city: Option<String>,
    #[serde(rename = "aceitaPermuta")]
    pub accepts_trade: bool,
    #[serde(rename = "tipo")]
    pub property_type: Option<String>,
    #[serde(rename = "modalidade")]
    pub modality: Option<Modality>,
    #[serde(rename = "areaPrincipal")]
    pub main_area: Option<f64>,
    #[serde(rename = "areaLote")]
    pub lot_area: Option<f64>,
    #[serde(rename = "qtdQuartos")]
    pub bedrooms: Option<i32>,
    #[serde(rename = "qtdBanheiros")]
    pub bathrooms: Option<i32>,
    #[serde(rename = "qtdSuites")]
    pub suites: Option<i32>,
    #[serde(rename = "qtdVagas")]
    pub parking_spots: Option<i32>,
    /// Ordered tag list; storage preserves order and duplicates.
    #[serde(rename = "caractInternas")]
    pub internal_features: Option<Vec<String>>,
    #[serde(rename = "caractExternas")]
    pub external_features: Option<Vec<String>>,
    #[serde(rename = "valorImovel")]
    pub price: Option<f64>,
    #[serde(rename = "valorCondominio")]
    pub condo_fee: Option<f64>,
    #[serde(rename = "valorIptu")]
    pub property_tax: Option<f64>,
    #[serde(rename = "destaque")]
    pub highlighted: bool,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub updated_at: DateTime<Utc>,
}

/// A listing enriched with its resolved media URLs, the shape served to
/// clients. Built per response and discarded after serialization.
#[derive(Debug, Clone, Serialize)]
pub struct ListingWithMedia {
    #[serde(flatten)]
    pub listing: Listing,
    #[serde(rename = "midias")]
    pub media: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modality_round_trips_wire_values() {
        for raw in ["COMPRA", "ALUGUEL", "LANCAMENTOS"] {
            let m = Modality::from_param(raw).unwrap();
            assert_eq!(m.as_str(), raw);
        }
    }

    #[test]
    fn modality_rejects_unknown_and_lowercase_values() {
        assert_eq!(Modality::from_param("compra"), None);
        assert_eq!(Modality::from_param("VENDA"), None);
        assert_eq!(Modality::from_param(""), None);
    }

    #[test]
    fn modality_serializes_to_wire_value() {
        let json = serde_json::to_string(&Modality::Rental).unwrap();
        assert_eq!(json, "\"ALUGUEL\"");
    }
}
