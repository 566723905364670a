//! Store configuration.

/// Default number of record slots reserved by a new store.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Default capacity multiplier applied when a full store grows.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Configuration for creating a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of record slots reserved up front. Never zero.
    pub initial_capacity: usize,

    /// Capacity multiplier used when the store is full. At least 2.
    pub growth_factor: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl StoreConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial capacity. Zero is raised to one.
    #[must_use]
    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = if capacity == 0 { 1 } else { capacity };
        self
    }

    /// Sets the growth factor. Values below two are raised to two.
    #[must_use]
    pub const fn growth_factor(mut self, factor: usize) -> Self {
        self.growth_factor = if factor < 2 { 2 } else { factor };
        self
    }
}
