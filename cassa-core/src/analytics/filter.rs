use crate::types::{SalesQuery, TransactionRecord};

/// Select the records matching a query's date range and category.
///
/// Bounds are inclusive on both ends. The result borrows from `records`
/// and preserves source order; nothing is cloned. An inverted range
/// (`start > end`) matches nothing and yields an empty subset; by
/// contract this is tolerated, not an error.
///
/// ```
/// use cassa_core::{filter_records, SalesQuery, TransactionRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let d = |s: &str| s.parse::<NaiveDate>().unwrap();
/// let row = |date: &str, category: &str| TransactionRecord {
///     date: d(date),
///     product: "soap".into(),
///     category: category.into(),
///     unit_price: Decimal::new(18_000, 3),
///     quantity: 1,
///     revenue: Decimal::new(18_000, 3),
/// };
/// let records = vec![row("2025-01-01", "hygiene"), row("2025-01-05", "hair")];
///
/// let all = filter_records(&records, &SalesQuery::new(d("2025-01-01"), d("2025-01-31")));
/// assert_eq!(all.len(), 2);
///
/// let hair = filter_records(
///     &records,
///     &SalesQuery::new(d("2025-01-01"), d("2025-01-31")).with_category("hair"),
/// );
/// assert_eq!(hair.len(), 1);
///
/// let inverted = filter_records(&records, &SalesQuery::new(d("2025-01-31"), d("2025-01-01")));
/// assert!(inverted.is_empty());
/// ```
#[must_use]
pub fn filter_records<'a>(
    records: &'a [TransactionRecord],
    query: &SalesQuery,
) -> Vec<&'a TransactionRecord> {
    records
        .iter()
        .filter(|r| {
            query.start <= r.date && r.date <= query.end && query.category.matches(&r.category)
        })
        .collect()
}
