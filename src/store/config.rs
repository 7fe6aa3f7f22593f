//! Store configuration

use super::error::StoreError;

/// Default capacity ceiling
pub const DEFAULT_MAX_CAPACITY: usize = 1000;

/// Configuration for a bounded store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum number of entries held at once; inserting beyond this evicts
    /// the oldest entry
    pub max_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// Set the capacity ceiling
    pub fn max_capacity(mut self, max: usize) -> Self {
        self.max_capacity = max;
        self
    }

    /// Initial capacity to reserve for the backing map
    pub(super) fn initial_capacity(&self) -> usize {
        self.max_capacity / 2
    }

    /// Check the configuration for values a store cannot operate with
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.max_capacity == 0 {
            return Err(StoreError::InvalidCapacity(self.max_capacity));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();

        assert_eq!(config.max_capacity, DEFAULT_MAX_CAPACITY);
        assert_eq!(config.initial_capacity(), DEFAULT_MAX_CAPACITY / 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_max_capacity() {
        let config = StoreConfig::default().max_capacity(2);

        assert_eq!(config.max_capacity, 2);
        assert_eq!(config.initial_capacity(), 1);
    }

    #[test]
    fn test_zero_capacity_is_invalid() {
        let config = StoreConfig::default().max_capacity(0);

        assert_eq!(config.validate(), Err(StoreError::InvalidCapacity(0)));
    }
}
