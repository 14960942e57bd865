use thiserror::Error;

/// Unified error type for the cassa workspace.
///
/// Every variant is recoverable at the call boundary: the engine returns
/// these as values so the presentation layer can show a specific message,
/// and never terminates the host process. Note that an inverted date range
/// (start after end) is deliberately not an error anywhere in the engine;
/// it yields an empty result instead.
#[derive(Debug, Error)]
pub enum CassaError {
    /// A row failed schema or invariant validation during ingestion. The
    /// whole load fails; rows are never silently dropped.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the source file, header included.
        line: u64,
        /// Which check failed, e.g. "quantity must be positive".
        reason: String,
    },

    /// The underlying dataset could not be read (I/O or CSV syntax).
    #[error("load failed: {0}")]
    Load(String),

    /// An aggregation was requested over an empty subset, so no calendar
    /// span exists to fill.
    #[error("no transactions to aggregate: {context}")]
    EmptyInput {
        /// The operation that found nothing to work with.
        context: &'static str,
    },

    /// A forecast was requested without enough historical points.
    #[error("insufficient history: need at least {needed} daily point(s)")]
    InsufficientHistory {
        /// Minimum number of daily points the operation requires.
        needed: usize,
    },

    /// The recommendation anchor product never appears in the subset, so
    /// no co-occurrence basket can be selected.
    #[error("no co-occurrence data for product: {product}")]
    NoCoOccurrence {
        /// The anchor product that was never sold in the queried range.
        product: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl CassaError {
    /// Helper: build a `MalformedRecord` error for a source line.
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Helper: build an `EmptyInput` error naming the requesting operation.
    #[must_use]
    pub const fn empty_input(context: &'static str) -> Self {
        Self::EmptyInput { context }
    }

    /// Helper: build an `InsufficientHistory` error with the required minimum.
    #[must_use]
    pub const fn insufficient_history(needed: usize) -> Self {
        Self::InsufficientHistory { needed }
    }

    /// Helper: build a `NoCoOccurrence` error for an anchor product.
    pub fn no_co_occurrence(product: impl Into<String>) -> Self {
        Self::NoCoOccurrence {
            product: product.into(),
        }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }
}
