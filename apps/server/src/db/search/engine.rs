//! Search execution against Postgres
//!
//! Runs the compiled query twice per request: once for the page slice
//! (bounded by LIMIT, so at most one page is held in memory) and once for the
//! total match count.

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

use super::params::SearchRequest;
use super::query_builder::{BindValue, QueryBuilder};
use crate::models::{Listing, Page};
use crate::Result;

#[derive(Debug, Clone)]
pub struct SearchEngine {
    pool: PgPool,
}

impl SearchEngine {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Execute one search request: fetch the requested page and the total
    /// count under the same compiled filter.
    pub async fn search(&self, request: &SearchRequest) -> Result<Page<Listing>> {
        let builder = QueryBuilder::new(&request.filter, request.page, request.sort);

        let (sql, bind_values) = builder.build_sql();
        let mut query = sqlx::query_as::<_, Listing>(&sql);
        for value in bind_values {
            query = bind_listing_value(query, value);
        }
        let content = query
            .fetch_all(&self.pool)
            .await
            .map_err(crate::Error::Database)?;

        let (count_sql, count_binds) = builder.build_count_sql();
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        for value in count_binds {
            count_query = match value {
                BindValue::Bool(v) => count_query.bind(v),
                BindValue::Int(v) => count_query.bind(v),
                BindValue::BigInt(v) => count_query.bind(v),
                BindValue::Float(v) => count_query.bind(v),
                BindValue::Text(v) => count_query.bind(v),
                BindValue::TextArray(vs) => count_query.bind(vs),
            };
        }
        let total = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(crate::Error::Database)?;

        Ok(Page::new(content, total, &request.page))
    }
}

fn bind_listing_value<'q>(
    query: QueryAs<'q, Postgres, Listing, PgArguments>,
    value: BindValue,
) -> QueryAs<'q, Postgres, Listing, PgArguments> {
    match value {
        BindValue::Bool(v) => query.bind(v),
        BindValue::Int(v) => query.bind(v),
        BindValue::BigInt(v) => query.bind(v),
        BindValue::Float(v) => query.bind(v),
        BindValue::Text(v) => query.bind(v),
        BindValue::TextArray(vs) => query.bind(vs),
    }
}
