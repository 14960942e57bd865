//! Sales analytics shared by the facade and any direct caller.
//!
//! Modules include:
//! - `filter`: select a transaction subset by date range and category
//! - `daily`: reduce a subset to a calendar-complete daily revenue series
//! - `forecast`: project the series forward with a recency-weighted mean
//! - `associate`: rank products by daily co-occurrence with an anchor
//! - `summary`: KPI totals and ranked product/category breakdowns
/// Date-range and category filtering.
pub mod filter;
/// Calendar-gap-filling daily aggregation.
pub mod daily;
/// Weighted-moving-average forecasting.
pub mod forecast;
/// Co-purchase association scoring.
pub mod associate;
/// KPI summaries and revenue breakdowns.
pub mod summary;
