use thiserror::Error;

/// Errors raised while building an [`InitialTable`](crate::InitialTable).
///
/// Table operations themselves never fail; only construction can.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// A table needs at least one bucket
    #[error("Table capacity must be at least 1 bucket")]
    ZeroCapacity,
    /// The threshold is a percentage of used buckets and must lie in 1..=100
    #[error("Load factor threshold invalid got: {threshold}%, valid range: 1..=100")]
    InvalidLoadFactorThreshold {
        /// The rejected threshold percentage
        threshold: usize,
    },
    /// Resizing must actually grow the table
    #[error("Growth factor invalid got: {factor}, expected at least 2")]
    InvalidGrowthFactor {
        /// The rejected growth factor
        factor: usize,
    },
}
