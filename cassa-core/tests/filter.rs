use cassa_core::{CategoryFilter, SalesQuery, TransactionRecord, filter_records};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

fn row(day_offset: i64, product: &str, category: &str) -> TransactionRecord {
    TransactionRecord {
        date: base_date() + Duration::days(day_offset),
        product: product.to_string(),
        category: category.to_string(),
        unit_price: Decimal::new(45_500, 3),
        quantity: 1,
        revenue: Decimal::new(45_500, 3),
    }
}

fn fixture() -> Vec<TransactionRecord> {
    vec![
        row(0, "shampoo", "hair"),
        row(1, "soap", "hygiene"),
        row(2, "mask", "hair"),
        row(5, "toothpaste", "hygiene"),
    ]
}

#[test]
fn bounds_are_inclusive_on_both_ends() {
    let records = fixture();
    let query = SalesQuery::new(base_date(), base_date() + Duration::days(2));
    let subset = filter_records(&records, &query);
    assert_eq!(subset.len(), 3);
    assert_eq!(subset[0].product, "shampoo");
    assert_eq!(subset[2].product, "mask");
}

#[test]
fn category_constraint_is_exact() {
    let records = fixture();
    let query =
        SalesQuery::new(base_date(), base_date() + Duration::days(10)).with_category("hair");
    let subset = filter_records(&records, &query);
    assert_eq!(subset.len(), 2);
    assert!(subset.iter().all(|r| r.category == "hair"));

    // Category names never match partially or case-insensitively.
    let query =
        SalesQuery::new(base_date(), base_date() + Duration::days(10)).with_category("Hair");
    assert!(filter_records(&records, &query).is_empty());
}

#[test]
fn all_filter_keeps_every_category() {
    let records = fixture();
    assert!(CategoryFilter::All.matches("anything"));
    let query = SalesQuery::new(base_date(), base_date() + Duration::days(10));
    assert_eq!(filter_records(&records, &query).len(), records.len());
}

#[test]
fn inverted_range_selects_the_empty_subset() {
    let records = fixture();
    let query = SalesQuery::new(base_date() + Duration::days(5), base_date());
    assert!(filter_records(&records, &query).is_empty());
}

#[test]
fn source_order_is_preserved() {
    // Deliberately unsorted input: filtering must not reorder it.
    let records = vec![row(3, "late", "hair"), row(0, "early", "hair")];
    let query = SalesQuery::new(base_date(), base_date() + Duration::days(10));
    let subset = filter_records(&records, &query);
    let names: Vec<&str> = subset.iter().map(|r| r.product.as_str()).collect();
    assert_eq!(names, ["late", "early"]);
}
