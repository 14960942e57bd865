use cassa_core::{CassaConfig, CategoryFilter, SalesQuery};
use chrono::NaiveDate;

#[test]
fn defaults_match_the_documented_contract() {
    let cfg = CassaConfig::default();
    assert_eq!(cfg.forecast.window, 30);
    assert_eq!(cfg.forecast.horizon, 7);
    assert_eq!(cfg.recommend.top_k, 3);
}

#[test]
fn queries_serialize_with_iso_dates() {
    let query = SalesQuery::new(
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
    )
    .with_category("Hygiene");

    let json = serde_json::to_value(&query).unwrap();
    assert_eq!(json["start"], "2025-01-01");
    assert_eq!(json["end"], "2025-03-31");
    assert_eq!(json["category"], serde_json::json!({ "Only": "Hygiene" }));

    let back: SalesQuery = serde_json::from_value(json).unwrap();
    assert_eq!(back, query);
    assert_eq!(back.category, CategoryFilter::Only("Hygiene".into()));
}
