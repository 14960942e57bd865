//! cassa-core
//!
//! Core types and analytics for the cassa retail sales engine.
//!
//! - `types`: the transaction row and the derived entities (daily revenue
//!   points, forecast points, association scores, KPI summaries).
//! - `store`: the immutable in-memory transaction snapshot.
//! - `config`: per-engine defaults for forecasting and recommendation.
//! - `analytics`: the query algorithms (filtering, calendar-complete daily
//!   aggregation, weighted-moving-average forecasting, co-purchase scoring,
//!   KPI summaries).
//!
//! Every operation in this crate is a pure function of its explicit inputs:
//! no I/O, no shared mutable state, no caching. A host serving concurrent
//! queries shares one [`store::TransactionStore`] behind an `Arc` and calls
//! into the analytics functions freely.
#![warn(missing_docs)]

/// Query algorithms over transaction subsets and daily series.
pub mod analytics;
/// Engine configuration types with serde support and defaults.
pub mod config;
/// The `CassaError` type shared across the cassa workspace.
pub mod error;
/// The immutable transaction snapshot.
pub mod store;
pub mod types;

pub use analytics::associate::recommend_products;
pub use analytics::daily::aggregate_daily;
pub use analytics::filter::filter_records;
pub use analytics::forecast::forecast_revenue;
pub use analytics::summary::{category_breakdown, summarize, top_products};
pub use config::{CassaConfig, ForecastConfig, RecommendConfig};
pub use error::CassaError;
pub use store::TransactionStore;
pub use types::*;
