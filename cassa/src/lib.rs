//! Cassa answers sales analytics queries over an immutable transaction
//! snapshot.
//!
//! Overview
//! - Holds one read-only [`TransactionStore`] behind an `Arc` so every
//!   concurrent caller sees the same dataset version.
//! - Exposes the four core operations (filter, calendar-complete daily
//!   aggregation, weighted-moving-average forecast, co-purchase
//!   recommendation) plus the KPI summaries a dashboard renders.
//! - Every query is a pure function of the snapshot and its parameters:
//!   no I/O, no hidden state, no caching, deterministic output.
//!
//! Key behaviors and trade-offs
//! - Aggregation is calendar-complete: zero-sales days appear explicitly,
//!   so downstream moving averages can assume daily cadence.
//! - The forecast is one recency-weighted level projected flat over the
//!   horizon: explainable by construction, and deliberately not a
//!   statistical day-by-day model.
//! - Recommendation baskets are calendar days (the data model has no
//!   customer identifier), and rankings carry a deterministic tie-break.
//! - An inverted query range selects the empty subset rather than failing;
//!   genuinely empty inputs surface as typed errors the caller can turn
//!   into a "no data in range" state.
//!
//! Examples
//! Building an engine over a loaded snapshot and querying it:
//! ```rust,ignore
//! use std::sync::Arc;
//! use cassa::{Cassa, SalesQuery};
//! use cassa_csv::CsvLoader;
//!
//! let store = Arc::new(CsvLoader::new().load_path("data/sales.csv")?);
//! let engine = Cassa::builder().with_store(store).build()?;
//!
//! let span = engine.store().date_span().expect("non-empty snapshot");
//! let query = SalesQuery::new(span.0, span.1).with_category("Hygiene");
//!
//! let series = engine.daily_revenue(&query)?;
//! let projection = engine.forecast(&query)?;
//! let basket_peers = engine.recommend(&query, "Savon d'Alep bio")?;
//! ```
#![warn(missing_docs)]

mod core;

pub use crate::core::{Cassa, CassaBuilder};
pub use cassa_core::{
    AssociationScore, CassaConfig, CassaError, CategoryFilter, CategoryShare, DailyRevenuePoint,
    ForecastConfig, ForecastPoint, ProductRevenue, RecommendConfig, SalesQuery, SalesSummary,
    TransactionRecord, TransactionStore,
};
