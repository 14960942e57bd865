//! Configuration types for per-engine query defaults.

use serde::{Deserialize, Serialize};

/// Defaults for the weighted-moving-average revenue forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Maximum number of trailing daily points fed into the weighted mean.
    /// Shorter histories use every available point.
    pub window: usize,
    /// Number of days projected past the last historical date.
    pub horizon: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window: 30,
            horizon: 7,
        }
    }
}

/// Defaults for the co-purchase recommender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Number of ranked co-occurring products returned per query.
    pub top_k: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self { top_k: 3 }
    }
}

/// Bundle of per-engine defaults applied when a query method is called
/// without explicit parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CassaConfig {
    /// Forecast defaults.
    pub forecast: ForecastConfig,
    /// Recommendation defaults.
    pub recommend: RecommendConfig,
}
