//! Value types exchanged between the store, the analytics, and the caller.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point-of-sale line: a quantity of a single product sold on one
/// calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Calendar day of the sale. Granularity is daily; there is no
    /// time-of-day component anywhere in the model.
    pub date: NaiveDate,
    /// Product identifier. Not guaranteed unique across categories.
    pub product: String,
    /// Category the line was sold under. This is a per-row attribute, not
    /// a property derived from the product: rows sharing a product may
    /// disagree on category and both are kept as-is.
    pub category: String,
    /// Non-negative unit price, fixed-point with three fractional digits
    /// (currency minor-unit precision).
    pub unit_price: Decimal,
    /// Units sold on this line. Strictly positive.
    pub quantity: u32,
    /// Line revenue. Invariant: `revenue == unit_price * quantity`,
    /// validated at load time within a configurable tolerance.
    pub revenue: Decimal,
}

/// Category constraint applied when filtering transactions.
///
/// The presentation layer's "all categories" sentinel string stays at the
/// presentation boundary; inside the engine the constraint is explicit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Keep every category.
    #[default]
    All,
    /// Keep only rows whose category equals the given name exactly.
    Only(String),
}

impl CategoryFilter {
    /// Whether a row carrying `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == category,
        }
    }
}

/// A date range plus category constraint selecting a transaction subset.
///
/// Both bounds are inclusive. An inverted range (`start > end`) is not an
/// error; it selects the empty subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesQuery {
    /// First day of the range, inclusive.
    pub start: NaiveDate,
    /// Last day of the range, inclusive.
    pub end: NaiveDate,
    /// Category constraint; defaults to [`CategoryFilter::All`].
    pub category: CategoryFilter,
}

impl SalesQuery {
    /// Query covering `[start, end]` across all categories.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            category: CategoryFilter::All,
        }
    }

    /// Restrict the query to a single category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = CategoryFilter::Only(category.into());
        self
    }
}

/// Revenue total for one calendar day of an aggregated series.
///
/// Series produced by the aggregator are calendar-complete: days without
/// sales appear with `revenue` zero rather than being skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRevenuePoint {
    /// The calendar day.
    pub date: NaiveDate,
    /// Summed revenue of every transaction on that day; zero if none.
    pub revenue: Decimal,
}

/// One projected day of a revenue forecast.
///
/// All points emitted by a single forecast call carry the identical
/// `predicted_revenue`: the model is one recency-weighted aggregate
/// estimate projected flat over the horizon, not a day-by-day model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Projected day, strictly after the last historical date.
    pub date: NaiveDate,
    /// The flat projection value shared by every point of the call.
    pub predicted_revenue: Decimal,
}

/// Co-purchase affinity of one product with the queried anchor product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationScore {
    /// The co-occurring product.
    pub product: String,
    /// Conditional frequency in `[0, 1]`: of the days the anchor sold,
    /// the fraction on which this product also sold.
    pub score: f64,
}

/// Headline KPIs over a transaction subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSummary {
    /// Sum of line revenues.
    pub total_revenue: Decimal,
    /// Number of transaction lines.
    pub sale_count: usize,
    /// Sum of quantities across lines.
    pub units_sold: u64,
    /// Mean line revenue, or `None` for an empty subset.
    pub average_sale: Option<Decimal>,
}

/// Revenue attributed to one product, for ranked product listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRevenue {
    /// Product identifier.
    pub product: String,
    /// Summed revenue for the product within the subset.
    pub revenue: Decimal,
}

/// Revenue attributed to one category, for category breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category identifier.
    pub category: String,
    /// Summed revenue for the category within the subset.
    pub revenue: Decimal,
}
