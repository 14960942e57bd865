use std::sync::Arc;

use cassa_core::{
    AssociationScore, CassaConfig, CassaError, CategoryShare, DailyRevenuePoint, ForecastPoint,
    ProductRevenue, SalesQuery, SalesSummary, TransactionRecord, TransactionStore,
    aggregate_daily, category_breakdown, filter_records, forecast_revenue, recommend_products,
    summarize, top_products,
};

/// Engine answering analytics queries over one immutable snapshot.
///
/// All methods take `&self` and hold no interior mutability, so a `Cassa`
/// shared behind an `Arc` serves concurrent dashboard sessions without
/// locking; every reader computes against the same dataset version.
#[derive(Debug)]
pub struct Cassa {
    store: Arc<TransactionStore>,
    cfg: CassaConfig,
}

/// Builder for constructing a [`Cassa`] engine.
pub struct CassaBuilder {
    store: Option<Arc<TransactionStore>>,
    cfg: CassaConfig,
}

impl Default for CassaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CassaBuilder {
    /// Create a new builder with default query configuration
    /// (30-day forecast window, 7-day horizon, top 3 recommendations).
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: None,
            cfg: CassaConfig::default(),
        }
    }

    /// Attach the transaction snapshot the engine will query.
    ///
    /// The handle is shared, not copied: the caller keeps ownership of the
    /// dataset version and may hand the same `Arc` to other readers.
    #[must_use]
    pub fn with_store(mut self, store: Arc<TransactionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the default query configuration.
    #[must_use]
    pub const fn with_config(mut self, cfg: CassaConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the engine.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no store has been attached via
    /// [`with_store`](Self::with_store).
    pub fn build(self) -> Result<Cassa, CassaError> {
        let Some(store) = self.store else {
            return Err(CassaError::invalid_arg(
                "no transaction store attached; add one via with_store(...)",
            ));
        };
        Ok(Cassa {
            store,
            cfg: self.cfg,
        })
    }
}

impl Cassa {
    /// Start building a new `Cassa` engine.
    #[must_use]
    pub fn builder() -> CassaBuilder {
        CassaBuilder::new()
    }

    /// The underlying snapshot, e.g. for seeding date pickers and category
    /// selectors from [`TransactionStore::date_span`] and
    /// [`TransactionStore::categories`].
    #[must_use]
    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    /// The defaults applied by [`forecast`](Self::forecast) and
    /// [`recommend`](Self::recommend).
    #[must_use]
    pub const fn config(&self) -> &CassaConfig {
        &self.cfg
    }

    /// Records matching the query, in source order.
    ///
    /// An inverted range yields an empty subset, never an error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "cassa::engine",
            skip(self, query),
            fields(start = %query.start, end = %query.end),
        )
    )]
    #[must_use]
    pub fn filter(&self, query: &SalesQuery) -> Vec<&TransactionRecord> {
        filter_records(self.store.records(), query)
    }

    /// Calendar-complete daily revenue series for the query.
    ///
    /// # Errors
    /// Returns `EmptyInput` when nothing matches the query; the caller
    /// decides the user-facing "no data in range" presentation.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "cassa::engine",
            skip(self, query),
            fields(start = %query.start, end = %query.end),
        )
    )]
    pub fn daily_revenue(&self, query: &SalesQuery) -> Result<Vec<DailyRevenuePoint>, CassaError> {
        aggregate_daily(self.filter(query))
    }

    /// Revenue projection using the engine's configured window and horizon.
    ///
    /// # Errors
    /// Returns `EmptyInput` when nothing matches the query, or
    /// `InsufficientHistory` / `InvalidArg` as described on
    /// [`forecast_with`](Self::forecast_with).
    pub fn forecast(&self, query: &SalesQuery) -> Result<Vec<ForecastPoint>, CassaError> {
        self.forecast_with(query, self.cfg.forecast.window, self.cfg.forecast.horizon)
    }

    /// Revenue projection with explicit window and horizon.
    ///
    /// The daily series is aggregated first, so the forecast sees
    /// zero-sales days; the projection is flat across the horizon by
    /// design.
    ///
    /// # Errors
    /// - `EmptyInput` when nothing matches the query.
    /// - `InsufficientHistory` when the aggregated series is empty.
    /// - `InvalidArg` when `window` is zero.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "cassa::engine",
            skip(self, query),
            fields(start = %query.start, end = %query.end),
        )
    )]
    pub fn forecast_with(
        &self,
        query: &SalesQuery,
        window: usize,
        horizon: usize,
    ) -> Result<Vec<ForecastPoint>, CassaError> {
        let series = self.daily_revenue(query)?;
        forecast_revenue(&series, window, horizon)
    }

    /// Top co-purchased products for an anchor, using the configured
    /// `top_k`.
    ///
    /// # Errors
    /// As described on [`recommend_with`](Self::recommend_with).
    pub fn recommend(
        &self,
        query: &SalesQuery,
        anchor: &str,
    ) -> Result<Vec<AssociationScore>, CassaError> {
        self.recommend_with(query, anchor, self.cfg.recommend.top_k)
    }

    /// Top co-purchased products for an anchor with an explicit `top_k`.
    ///
    /// Scores are conditional daily co-occurrence frequencies in `[0, 1]`;
    /// the anchor never appears in its own ranking, and ties are broken by
    /// product identifier so results are reproducible.
    ///
    /// # Errors
    /// Returns `NoCoOccurrence` when the anchor never sold within the
    /// queried subset.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "cassa::engine",
            skip(self, query),
            fields(start = %query.start, end = %query.end),
        )
    )]
    pub fn recommend_with(
        &self,
        query: &SalesQuery,
        anchor: &str,
        top_k: usize,
    ) -> Result<Vec<AssociationScore>, CassaError> {
        recommend_products(self.filter(query), anchor, top_k)
    }

    /// Headline KPIs (revenue total, sale count, units, average sale) for
    /// the query. An empty subset yields zero totals and no average.
    #[must_use]
    pub fn summary(&self, query: &SalesQuery) -> SalesSummary {
        summarize(self.filter(query))
    }

    /// The `k` highest-revenue products within the query.
    #[must_use]
    pub fn top_products(&self, query: &SalesQuery, k: usize) -> Vec<ProductRevenue> {
        top_products(self.filter(query), k)
    }

    /// Revenue per category within the query, highest first.
    #[must_use]
    pub fn category_breakdown(&self, query: &SalesQuery) -> Vec<CategoryShare> {
        category_breakdown(self.filter(query))
    }
}
