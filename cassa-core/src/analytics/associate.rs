use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::error::CassaError;
use crate::types::{AssociationScore, TransactionRecord};

/// Rank products by how often they sell on the same day as `anchor`.
///
/// A "basket" is every transaction sharing one calendar date: the data
/// model carries no transaction or customer identifier, so daily
/// co-occurrence is the documented unit of association, even though it
/// conflates unrelated customers. Presence is binary: a product is either
/// in a day's basket or not, regardless of quantity.
///
/// For each other product, `score = co_days / anchor_days`: the
/// conditional frequency of that product appearing on an anchor-purchase
/// day. Scores are therefore always within `[0, 1]`. The anchor itself is
/// excluded from the result. Ordering is score descending with ties broken
/// by product identifier ascending, so repeated queries over identical
/// data return byte-identical rankings; the result is truncated to
/// `top_k` entries.
///
/// # Errors
/// Returns `Err(CassaError::NoCoOccurrence)` when the anchor never sold in
/// the subset: with zero anchor days there is no denominator, and the
/// emptiness check is what keeps the scoring division well-defined.
///
/// ```
/// use cassa_core::{recommend_products, TransactionRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let d = |s: &str| s.parse::<NaiveDate>().unwrap();
/// let row = |date: &str, product: &str| TransactionRecord {
///     date: d(date),
///     product: product.into(),
///     category: "care".into(),
///     unit_price: Decimal::ONE,
///     quantity: 1,
///     revenue: Decimal::ONE,
/// };
/// // A sells on two days, B on one of them: score 1/2.
/// let rows = [row("2025-01-01", "A"), row("2025-01-01", "B"), row("2025-01-02", "A")];
/// let ranked = recommend_products(rows.iter(), "A", 3).unwrap();
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].product, "B");
/// assert!((ranked[0].score - 0.5).abs() < f64::EPSILON);
/// ```
pub fn recommend_products<'a, I>(
    subset: I,
    anchor: &str,
    top_k: usize,
) -> Result<Vec<AssociationScore>, CassaError>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut baskets: BTreeMap<NaiveDate, BTreeSet<&str>> = BTreeMap::new();
    for record in subset {
        if record.quantity > 0 {
            baskets
                .entry(record.date)
                .or_default()
                .insert(record.product.as_str());
        }
    }

    let anchor_baskets: Vec<&BTreeSet<&str>> = baskets
        .values()
        .filter(|basket| basket.contains(anchor))
        .collect();
    if anchor_baskets.is_empty() {
        return Err(CassaError::no_co_occurrence(anchor));
    }

    let mut co_days: BTreeMap<&str, usize> = BTreeMap::new();
    for basket in &anchor_baskets {
        for &product in basket.iter() {
            if product != anchor {
                *co_days.entry(product).or_insert(0) += 1;
            }
        }
    }

    let anchor_days = anchor_baskets.len();
    // All scores share the denominator, so ranking compares the raw day
    // counts; the BTreeMap already yields products in ascending order and
    // the stable sort preserves that order within equal counts.
    let mut ranked: Vec<(&str, usize)> = co_days.into_iter().collect();
    ranked.sort_by_key(|&(_, count)| Reverse(count));

    Ok(ranked
        .into_iter()
        .take(top_k)
        .map(|(product, count)| AssociationScore {
            product: product.to_string(),
            score: count as f64 / anchor_days as f64,
        })
        .collect())
}
