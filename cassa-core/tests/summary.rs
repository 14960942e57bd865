use cassa_core::{TransactionRecord, category_breakdown, summarize, top_products};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn row(product: &str, category: &str, price_millis: i64, quantity: u32) -> TransactionRecord {
    let unit_price = Decimal::new(price_millis, 3);
    TransactionRecord {
        date: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
        product: product.to_string(),
        category: category.to_string(),
        unit_price,
        quantity,
        revenue: unit_price * Decimal::from(quantity),
    }
}

#[test]
fn kpis_add_up() {
    let rows = [
        row("soap", "hygiene", 18_000, 2),   // 36.000
        row("oil", "hair", 95_000, 1),       // 95.000
        row("serum", "face", 130_000, 1),    // 130.000
    ];
    let summary = summarize(rows.iter());
    assert_eq!(summary.total_revenue, Decimal::new(261_000, 3));
    assert_eq!(summary.sale_count, 3);
    assert_eq!(summary.units_sold, 4);
    assert_eq!(summary.average_sale, Some(Decimal::new(87_000, 3)));
}

#[test]
fn empty_subset_has_no_average() {
    let summary = summarize(std::iter::empty());
    assert_eq!(summary.total_revenue, Decimal::ZERO);
    assert_eq!(summary.sale_count, 0);
    assert_eq!(summary.units_sold, 0);
    assert_eq!(summary.average_sale, None);
}

#[test]
fn top_products_rank_by_revenue_with_name_tie_break() {
    let rows = [
        row("b-cream", "face", 10_000, 1),
        row("a-cream", "face", 10_000, 1),
        row("oil", "hair", 95_000, 1),
    ];
    let ranked = top_products(rows.iter(), 10);
    let names: Vec<&str> = ranked.iter().map(|p| p.product.as_str()).collect();
    assert_eq!(names, ["oil", "a-cream", "b-cream"]);
}

#[test]
fn top_products_sums_across_lines_and_truncates() {
    let rows = [
        row("soap", "hygiene", 18_000, 1),
        row("soap", "hygiene", 18_000, 2),
        row("oil", "hair", 95_000, 1),
        row("serum", "face", 130_000, 1),
    ];
    let ranked = top_products(rows.iter(), 2);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].product, "serum");
    assert_eq!(ranked[1].product, "oil");

    let soap_total = top_products(rows.iter(), 10)
        .into_iter()
        .find(|p| p.product == "soap")
        .unwrap();
    assert_eq!(soap_total.revenue, Decimal::new(54_000, 3));
}

#[test]
fn category_breakdown_covers_every_category() {
    let rows = [
        row("soap", "hygiene", 18_000, 1),
        row("oil", "hair", 95_000, 1),
        row("mask", "hair", 52_000, 1),
    ];
    let shares = category_breakdown(rows.iter());
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].category, "hair");
    assert_eq!(shares[0].revenue, Decimal::new(147_000, 3));
    assert_eq!(shares[1].category, "hygiene");

    let total: Decimal = shares.iter().map(|s| s.revenue).sum();
    let input_total: Decimal = rows.iter().map(|r| r.revenue).sum();
    assert_eq!(total, input_total);
}
