//! Tunables of a `CompactingStore`.

use crate::error::{Result, StoreError};

/// Capacity of a store created with `CompactingStore::new()`.
pub const DEFAULT_CAPACITY: usize = 8;

/// Number of extra slots added on top of what is strictly required whenever
/// a store grows.
pub const DEFAULT_GROWTH_SLACK: usize = 8;

/// Configuration of a `CompactingStore`.
///
/// ```
/// use compacting_store::{CompactingStore, Config};
///
/// let config = Config::new().with_default_capacity(2).with_growth_slack(0);
/// let mut store = CompactingStore::with_config(config).unwrap();
/// store.add_all('a', vec!['b', 'c']);
/// assert_eq!(store.capacity(), 3);
///
/// store.clear();
/// assert_eq!(store.capacity(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub(crate) default_capacity: usize,
    pub(crate) growth_slack: usize,
}

impl Config {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the capacity used by `with_config()` and restored by `clear()`.
    /// Must be greater than zero.
    pub fn with_default_capacity(mut self, capacity: usize) -> Self {
        self.default_capacity = capacity;
        self
    }

    /// Sets the number of slots allocated beyond the required amount when
    /// the store grows.
    pub fn with_growth_slack(mut self, slack: usize) -> Self {
        self.growth_slack = slack;
        self
    }

    /// Returns the capacity of a new or cleared store.
    pub fn default_capacity(&self) -> usize {
        self.default_capacity
    }

    /// Returns the number of extra slots allocated on growth.
    pub fn growth_slack(&self) -> usize {
        self.growth_slack
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.default_capacity == 0 {
            return Err(StoreError::InvalidArgument(
                "default capacity must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
            growth_slack: DEFAULT_GROWTH_SLACK,
        }
    }
}
