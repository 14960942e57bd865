use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::types::{CategoryShare, ProductRevenue, SalesSummary, TransactionRecord};

/// Compute headline KPIs over a transaction subset in one pass.
///
/// `average_sale` is the mean line revenue, `None` for an empty subset
/// rather than a fabricated zero.
pub fn summarize<'a, I>(subset: I) -> SalesSummary
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut total_revenue = Decimal::ZERO;
    let mut sale_count = 0usize;
    let mut units_sold = 0u64;
    for record in subset {
        total_revenue += record.revenue;
        sale_count += 1;
        units_sold += u64::from(record.quantity);
    }
    let average_sale = if sale_count == 0 {
        None
    } else {
        Some(total_revenue / Decimal::from(sale_count))
    };
    SalesSummary {
        total_revenue,
        sale_count,
        units_sold,
        average_sale,
    }
}

/// The `k` highest-revenue products of a subset, revenue descending.
///
/// Ties are broken by product identifier ascending so the listing is
/// reproducible. An empty subset yields an empty listing.
pub fn top_products<'a, I>(subset: I, k: usize) -> Vec<ProductRevenue>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut by_product: BTreeMap<&str, Decimal> = BTreeMap::new();
    for record in subset {
        *by_product.entry(record.product.as_str()).or_insert(Decimal::ZERO) += record.revenue;
    }
    let mut ranked: Vec<(&str, Decimal)> = by_product.into_iter().collect();
    // Stable sort on descending revenue keeps the map's ascending name
    // order within ties.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(k)
        .map(|(product, revenue)| ProductRevenue {
            product: product.to_string(),
            revenue,
        })
        .collect()
}

/// Revenue per category over a subset, revenue descending.
///
/// Same deterministic ordering rule as [`top_products`]; the full
/// breakdown is returned, there is no truncation.
pub fn category_breakdown<'a, I>(subset: I) -> Vec<CategoryShare>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut by_category: BTreeMap<&str, Decimal> = BTreeMap::new();
    for record in subset {
        *by_category
            .entry(record.category.as_str())
            .or_insert(Decimal::ZERO) += record.revenue;
    }
    let mut shares: Vec<(&str, Decimal)> = by_category.into_iter().collect();
    shares.sort_by(|a, b| b.1.cmp(&a.1));
    shares
        .into_iter()
        .map(|(category, revenue)| CategoryShare {
            category: category.to_string(),
            revenue,
        })
        .collect()
}
