use rust_decimal::Decimal;

use crate::error::CassaError;
use crate::types::{DailyRevenuePoint, ForecastPoint};

/// Project a daily revenue series `horizon` days past its last date using
/// a linearly recency-weighted moving average.
///
/// The trailing `min(window, len)` points are weighted `1, 2, …, k`
/// (oldest = 1, most recent = k) and collapsed into one estimate
/// `Σ(wᵢ·revenueᵢ) / Σ(wᵢ)`, favoring recent demand without a regression
/// model. Every emitted point carries that identical estimate: the
/// projection is deliberately flat, a single aggregate level rather than a
/// day-by-day model. Dates start the day after the last historical point.
///
/// `series` is expected in chronological order, as produced by
/// [`aggregate_daily`](crate::aggregate_daily). Arithmetic stays in
/// `Decimal`; nothing is rounded here.
///
/// A zero `horizon` yields an empty projection.
///
/// # Errors
/// - `Err(CassaError::InsufficientHistory)` when `series` is empty: there
///   is nothing to average, and a fabricated forecast would mask it.
/// - `Err(CassaError::InvalidArg)` when `window` is zero.
///
/// ```
/// use cassa_core::{forecast_revenue, DailyRevenuePoint};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let d = |s: &str| s.parse::<NaiveDate>().unwrap();
/// let series = vec![
///     DailyRevenuePoint { date: d("2025-01-01"), revenue: Decimal::new(10_000, 3) },
///     DailyRevenuePoint { date: d("2025-01-02"), revenue: Decimal::new(40_000, 3) },
/// ];
/// // weights 1 and 2: (1*10 + 2*40) / 3 = 30
/// let points = forecast_revenue(&series, 30, 7).unwrap();
/// assert_eq!(points.len(), 7);
/// assert_eq!(points[0].date, d("2025-01-03"));
/// assert!(points.iter().all(|p| p.predicted_revenue == Decimal::new(30_000, 3)));
/// ```
pub fn forecast_revenue(
    series: &[DailyRevenuePoint],
    window: usize,
    horizon: usize,
) -> Result<Vec<ForecastPoint>, CassaError> {
    if window == 0 {
        return Err(CassaError::invalid_arg("forecast window must be positive"));
    }
    let Some(last) = series.last() else {
        return Err(CassaError::insufficient_history(1));
    };

    let tail = &series[series.len().saturating_sub(window)..];
    let mut weighted_sum = Decimal::ZERO;
    let mut weight_total = Decimal::ZERO;
    for (i, point) in tail.iter().enumerate() {
        let weight = Decimal::from(i + 1);
        weighted_sum += weight * point.revenue;
        weight_total += weight;
    }
    // weight_total >= 1 here; the emptiness check above is what keeps this
    // division well-defined.
    let predicted = weighted_sum / weight_total;

    Ok(last
        .date
        .iter_days()
        .skip(1)
        .take(horizon)
        .map(|date| ForecastPoint {
            date,
            predicted_revenue: predicted,
        })
        .collect())
}
