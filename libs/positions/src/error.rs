use thiserror::Error;

/// Aggregation failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AggregateError {
    /// Summed balances exceeded 256 bits. These totals represent real
    /// reserves, so wrapping would silently misreport them.
    #[error("underlying balance sum overflowed 256 bits")]
    BalanceOverflow,
}
