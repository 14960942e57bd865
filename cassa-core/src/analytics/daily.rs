use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::CassaError;
use crate::types::{DailyRevenuePoint, TransactionRecord};

/// Reduce a transaction subset to a calendar-complete daily revenue series.
///
/// Revenue is summed per date (duplicate dates accumulate, they are never
/// overwritten), then one point is emitted for **every** calendar day from
/// the earliest to the latest date in the subset, in chronological order.
/// Days absent from the input appear with zero revenue. A naive group-by
/// would silently omit zero-sales days and skew any moving average that
/// assumes daily cadence, so the gap filling is part of the contract.
///
/// A single-day subset yields a one-point series.
///
/// # Errors
/// Returns `Err(CassaError::EmptyInput)` when the subset is empty: with no
/// dates there is no span to fill, and fabricating one would be worse than
/// telling the caller.
///
/// ```
/// use cassa_core::{aggregate_daily, TransactionRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let d = |s: &str| s.parse::<NaiveDate>().unwrap();
/// let row = |date: &str, revenue: i64| TransactionRecord {
///     date: d(date),
///     product: "serum".into(),
///     category: "face".into(),
///     unit_price: Decimal::new(revenue, 3),
///     quantity: 1,
///     revenue: Decimal::new(revenue, 3),
/// };
/// // Jan 2 has no sales; the series still contains it, at zero.
/// let rows = [row("2025-01-01", 130_000), row("2025-01-03", 48_000)];
/// let series = aggregate_daily(rows.iter()).unwrap();
/// assert_eq!(series.len(), 3);
/// assert_eq!(series[1].date, d("2025-01-02"));
/// assert_eq!(series[1].revenue, Decimal::ZERO);
/// ```
pub fn aggregate_daily<'a, I>(subset: I) -> Result<Vec<DailyRevenuePoint>, CassaError>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for record in subset {
        *by_day.entry(record.date).or_insert(Decimal::ZERO) += record.revenue;
    }

    let (Some((&first, _)), Some((&last, _))) =
        (by_day.first_key_value(), by_day.last_key_value())
    else {
        return Err(CassaError::empty_input("daily aggregation"));
    };

    Ok(first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|date| DailyRevenuePoint {
            date,
            revenue: by_day.get(&date).copied().unwrap_or(Decimal::ZERO),
        })
        .collect())
}
