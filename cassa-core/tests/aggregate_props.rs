use cassa_core::{CassaError, TransactionRecord, aggregate_daily};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn record(day_offset: i64, product: &str, price_millis: i64, quantity: u32) -> TransactionRecord {
    let unit_price = Decimal::new(price_millis, 3);
    TransactionRecord {
        date: base_date() + Duration::days(day_offset),
        product: product.to_string(),
        category: "care".to_string(),
        unit_price,
        quantity,
        revenue: unit_price * Decimal::from(quantity),
    }
}

fn arb_record() -> impl Strategy<Value = TransactionRecord> {
    (0i64..400, 0u8..8, 1u32..4, 0i64..200_000).prop_map(|(day, product, quantity, millis)| {
        let mut r = record(day, &format!("P{product}"), millis, quantity);
        r.category = format!("C{}", product % 3);
        r
    })
}

proptest! {
    #[test]
    fn series_is_calendar_complete(records in proptest::collection::vec(arb_record(), 1..120)) {
        let series = aggregate_daily(records.iter()).unwrap();

        let min = records.iter().map(|r| r.date).min().unwrap();
        let max = records.iter().map(|r| r.date).max().unwrap();
        let expected_len = usize::try_from((max - min).num_days() + 1).unwrap();
        prop_assert_eq!(series.len(), expected_len);
        prop_assert_eq!(series.first().unwrap().date, min);
        prop_assert_eq!(series.last().unwrap().date, max);
        for w in series.windows(2) {
            prop_assert_eq!((w[1].date - w[0].date).num_days(), 1);
        }
    }

    #[test]
    fn revenue_is_conserved(records in proptest::collection::vec(arb_record(), 1..120)) {
        let series = aggregate_daily(records.iter()).unwrap();
        let input_total: Decimal = records.iter().map(|r| r.revenue).sum();
        let series_total: Decimal = series.iter().map(|p| p.revenue).sum();
        // Decimal arithmetic is exact; no float tolerance needed.
        prop_assert_eq!(series_total, input_total);
    }

    #[test]
    fn input_order_is_irrelevant(mut records in proptest::collection::vec(arb_record(), 1..60)) {
        let forward = aggregate_daily(records.iter()).unwrap();
        records.reverse();
        let reversed = aggregate_daily(records.iter()).unwrap();
        prop_assert_eq!(forward, reversed);
    }
}

#[test]
fn duplicate_dates_are_summed_not_overwritten() {
    let rows = [
        record(0, "soap", 18_000, 1),
        record(0, "soap", 18_000, 2),
        record(0, "oil", 95_000, 1),
    ];
    let series = aggregate_daily(rows.iter()).unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].revenue, Decimal::new(149_000, 3));
}

#[test]
fn gaps_are_filled_with_zero() {
    let rows = [record(0, "soap", 18_000, 1), record(3, "soap", 18_000, 1)];
    let series = aggregate_daily(rows.iter()).unwrap();
    assert_eq!(series.len(), 4);
    assert_eq!(series[1].revenue, Decimal::ZERO);
    assert_eq!(series[2].revenue, Decimal::ZERO);
}

#[test]
fn single_day_span_yields_one_point() {
    let rows = [record(5, "soap", 18_000, 1)];
    let series = aggregate_daily(rows.iter()).unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].date, base_date() + Duration::days(5));
}

#[test]
fn empty_subset_is_a_typed_error() {
    let err = aggregate_daily(std::iter::empty()).unwrap_err();
    assert!(matches!(err, CassaError::EmptyInput { .. }));
}
