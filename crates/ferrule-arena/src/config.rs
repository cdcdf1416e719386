//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for the arena allocator.
///
/// Validated at construction; all values are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Total size of the backing storage in bytes, null guard included.
    ///
    /// Default: 10 MiB. Offsets are `u32` on the wire, so the capacity
    /// can never exceed `u32::MAX`.
    pub capacity: u32,

    /// Number of leading bytes that are never handed out.
    ///
    /// Default: 8. Must be at least 1 so that offset 0 stays free to act
    /// as the "no allocation" sentinel.
    pub reserved: u32,
}

impl ArenaConfig {
    /// Default capacity: 10 MiB.
    pub const DEFAULT_CAPACITY: u32 = 10 * 1024 * 1024;

    /// Default null guard: 8 bytes.
    pub const DEFAULT_RESERVED: u32 = 8;

    /// Create a config with the given capacity and the default null guard.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            reserved: Self::DEFAULT_RESERVED,
        }
    }

    /// Bytes available to allocations once the null guard is carved out.
    pub fn usable_bytes(&self) -> u32 {
        self.capacity.saturating_sub(self.reserved)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.reserved == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "reserved must be at least 1 byte so offset 0 stays a sentinel".into(),
            });
        }
        if self.reserved >= self.capacity {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "reserved ({}) must be smaller than capacity ({})",
                    self.reserved, self.capacity
                ),
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_10mib() {
        let config = ArenaConfig::default();
        assert_eq!(config.capacity, 10 * 1024 * 1024);
        assert_eq!(config.reserved, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn usable_bytes_excludes_guard() {
        let config = ArenaConfig::new(64);
        assert_eq!(config.usable_bytes(), 56);
    }

    #[test]
    fn zero_guard_rejected() {
        let config = ArenaConfig {
            capacity: 64,
            reserved: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn guard_must_leave_room() {
        let config = ArenaConfig {
            capacity: 8,
            reserved: 8,
        };
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidConfig { .. })
        ));
    }
}
