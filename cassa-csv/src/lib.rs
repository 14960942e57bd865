//! cassa-csv
//!
//! The ingestion boundary of the cassa engine: parses a comma-separated
//! transaction log into an immutable [`TransactionStore`].
//!
//! Loading is fail-fast. A row that violates the schema (unparseable
//! ISO-8601 date, non-positive quantity, negative unit price, or a revenue
//! that disagrees with `unit_price * quantity` beyond the configured
//! tolerance) fails the whole load with a line-numbered error. Rows are
//! never silently dropped: a snapshot either loads completely or not at
//! all.
#![warn(missing_docs)]

use std::fs;
use std::io::Read;
use std::path::Path;

use cassa_core::{CassaError, TransactionRecord, TransactionStore};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Header names the loader requires, matched case-insensitively and in any
/// column order. Extra columns are ignored.
const REQUIRED_COLUMNS: [&str; 6] = [
    "date",
    "product",
    "category",
    "unit_price",
    "quantity",
    "revenue",
];

/// Loader for the six-column transaction CSV schema
/// (`date,product,category,unit_price,quantity,revenue`).
///
/// ```
/// use cassa_csv::CsvLoader;
///
/// let data = "\
/// date,product,category,unit_price,quantity,revenue
/// 2025-01-01,Savon d'Alep bio,Hygiene,18.000,2,36.000
/// 2025-01-02,Huile d'argan,Cheveux,95.000,1,95.000
/// ";
/// let store = CsvLoader::new().load_str(data).unwrap();
/// assert_eq!(store.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CsvLoader {
    revenue_tolerance: Decimal,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvLoader {
    /// Loader with the default revenue tolerance of `0.001` (one currency
    /// minor unit at three fractional digits).
    #[must_use]
    pub fn new() -> Self {
        Self {
            revenue_tolerance: Decimal::new(1, 3),
        }
    }

    /// Override the allowed absolute difference between a row's `revenue`
    /// and `unit_price * quantity`.
    ///
    /// Source files written by float-based tooling can carry rounding noise
    /// in the last digit; the tolerance absorbs exactly that and nothing
    /// more.
    #[must_use]
    pub const fn revenue_tolerance(mut self, tolerance: Decimal) -> Self {
        self.revenue_tolerance = tolerance;
        self
    }

    /// Load a snapshot from a file on disk.
    ///
    /// # Errors
    /// - `CassaError::Load` when the file cannot be read or the CSV is
    ///   syntactically broken.
    /// - `CassaError::MalformedRecord` when any row violates the schema.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<TransactionStore, CassaError> {
        let text = fs::read_to_string(path).map_err(|e| CassaError::Load(e.to_string()))?;
        self.load_str(&text)
    }

    /// Load a snapshot from any reader.
    ///
    /// # Errors
    /// Same failure modes as [`load_path`](Self::load_path).
    pub fn load(&self, mut reader: impl Read) -> Result<TransactionStore, CassaError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| CassaError::Load(e.to_string()))?;
        self.load_str(&text)
    }

    /// Load a snapshot from CSV text.
    ///
    /// A leading UTF-8 BOM is tolerated. A file with a valid header and no
    /// data rows loads an empty store; emptiness surfaces later, at
    /// aggregation time, where the caller can phrase a "no data" message.
    ///
    /// # Errors
    /// Same failure modes as [`load_path`](Self::load_path).
    pub fn load_str(&self, text: &str) -> Result<TransactionStore, CassaError> {
        let text = text.trim_start_matches('\u{FEFF}');

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| CassaError::Load(e.to_string()))?
            .clone();

        let mut columns = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, name) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    CassaError::malformed(1, format!("missing required column `{name}`"))
                })?;
        }
        let [date_col, product_col, category_col, price_col, quantity_col, revenue_col] = columns;

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(|e| CassaError::Load(e.to_string()))?;
            // The header occupies line 1; fall back to the record index if
            // the reader did not record a position.
            let line = row.position().map_or(index as u64 + 2, csv::Position::line);

            let field = |col: usize, name: &str| -> Result<&str, CassaError> {
                row.get(col)
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| {
                        CassaError::malformed(line, format!("missing or empty field `{name}`"))
                    })
            };

            let date = parse_date(field(date_col, "date")?, line)?;
            let product = field(product_col, "product")?.to_string();
            let category = field(category_col, "category")?.to_string();
            let unit_price = parse_price(field(price_col, "unit_price")?, line)?;
            let quantity = parse_quantity(field(quantity_col, "quantity")?, line)?;
            let revenue = parse_decimal(field(revenue_col, "revenue")?, "revenue", line)?;

            let expected = unit_price * Decimal::from(quantity);
            if (revenue - expected).abs() >= self.revenue_tolerance {
                return Err(CassaError::malformed(
                    line,
                    format!("revenue {revenue} does not match unit_price * quantity = {expected}"),
                ));
            }

            records.push(TransactionRecord {
                date,
                product,
                category,
                unit_price,
                quantity,
                revenue,
            });
        }

        let store = TransactionStore::new(records);
        #[cfg(feature = "tracing")]
        tracing::debug!(records = store.len(), "loaded transaction snapshot");
        Ok(store)
    }
}

fn parse_date(value: &str, line: u64) -> Result<NaiveDate, CassaError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| CassaError::malformed(line, format!("invalid ISO-8601 date `{value}`")))
}

fn parse_decimal(value: &str, name: &str, line: u64) -> Result<Decimal, CassaError> {
    value
        .parse::<Decimal>()
        .map_err(|_| CassaError::malformed(line, format!("invalid decimal {name} `{value}`")))
}

fn parse_price(value: &str, line: u64) -> Result<Decimal, CassaError> {
    let price = parse_decimal(value, "unit_price", line)?;
    if price.is_sign_negative() {
        return Err(CassaError::malformed(
            line,
            format!("unit_price must be non-negative, got `{value}`"),
        ));
    }
    Ok(price)
}

fn parse_quantity(value: &str, line: u64) -> Result<u32, CassaError> {
    let quantity = value.parse::<u32>().map_err(|_| {
        CassaError::malformed(line, format!("invalid quantity `{value}`"))
    })?;
    if quantity == 0 {
        return Err(CassaError::malformed(line, "quantity must be positive"));
    }
    Ok(quantity)
}
