//! Construction options for [`InitialTable`](crate::InitialTable)

use crate::TableError;

/// Number of buckets a table starts with, one per letter of the alphabet
pub const DEFAULT_CAPACITY: usize = 26;

/// Resize once more than 70% of the buckets are in use
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: usize = 70;

/// Capacity multiplier applied on every resize
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Tunables for an [`InitialTable`](crate::InitialTable).
///
/// ```rust
/// use initial_table::{InitialTable, TableOptions};
///
/// let options = TableOptions::new().capacity(4).load_factor_threshold(50);
/// let table = InitialTable::with_options(options).unwrap();
/// assert_eq!(table.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Starting number of buckets
    pub(crate) capacity: usize,
    /// Used-bucket percentage that must be exceeded before a resize
    pub(crate) load_factor_threshold: usize,
    /// Capacity multiplier on resize
    pub(crate) growth_factor: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl TableOptions {
    /// Options with the default capacity (26), threshold (70%) and growth factor (2)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Sets the starting number of buckets
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the load factor threshold as a percentage (70 means 0.7)
    #[must_use]
    pub const fn load_factor_threshold(mut self, threshold: usize) -> Self {
        self.load_factor_threshold = threshold;
        self
    }

    /// Sets the capacity multiplier used when the table resizes
    #[must_use]
    pub const fn growth_factor(mut self, factor: usize) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Checks that the options describe a usable table.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ZeroCapacity`] for a capacity of 0,
    /// [`TableError::InvalidLoadFactorThreshold`] for a threshold outside 1..=100 and
    /// [`TableError::InvalidGrowthFactor`] for a growth factor below 2.
    pub const fn validate(self) -> Result<Self, TableError> {
        if self.capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        if self.load_factor_threshold == 0 || self.load_factor_threshold > 100 {
            return Err(TableError::InvalidLoadFactorThreshold {
                threshold: self.load_factor_threshold,
            });
        }
        if self.growth_factor < 2 {
            return Err(TableError::InvalidGrowthFactor { factor: self.growth_factor });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TableOptions::default();
        assert_eq!(options.capacity, 26);
        assert_eq!(options.load_factor_threshold, 70);
        assert_eq!(options.growth_factor, 2);
        assert_eq!(options.validate(), Ok(options));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        assert_eq!(TableOptions::new().capacity(0).validate(), Err(TableError::ZeroCapacity));
    }

    #[test]
    fn test_rejects_bad_threshold() {
        assert_eq!(
            TableOptions::new().load_factor_threshold(0).validate(),
            Err(TableError::InvalidLoadFactorThreshold { threshold: 0 })
        );
        assert_eq!(
            TableOptions::new().load_factor_threshold(101).validate(),
            Err(TableError::InvalidLoadFactorThreshold { threshold: 101 })
        );
        assert!(TableOptions::new().load_factor_threshold(100).validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_growth_factor() {
        assert_eq!(
            TableOptions::new().growth_factor(1).validate(),
            Err(TableError::InvalidGrowthFactor { factor: 1 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(TableError::ZeroCapacity.to_string(), "Table capacity must be at least 1 bucket");
        assert_eq!(
            TableError::InvalidGrowthFactor { factor: 1 }.to_string(),
            "Growth factor invalid got: 1, expected at least 2"
        );
    }
}
