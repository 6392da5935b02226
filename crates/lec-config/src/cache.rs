//! Query cache timing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_stale_secs() -> u64 {
    30
}

const fn default_gc_secs() -> u64 {
    300
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// How long a fetched result is served without refetching, unless a
    /// mutation invalidates it first.
    #[serde(default = "default_stale_secs")]
    pub stale_secs: u64,

    /// How long an unused entry survives before garbage collection.
    #[serde(default = "default_gc_secs")]
    pub gc_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_secs: default_stale_secs(),
            gc_secs: default_gc_secs(),
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub const fn stale_time(&self) -> Duration {
        Duration::from_secs(self.stale_secs)
    }

    #[must_use]
    pub const fn gc_time(&self) -> Duration {
        Duration::from_secs(self.gc_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = CacheConfig::default();
        assert_eq!(config.stale_time(), Duration::from_secs(30));
        assert_eq!(config.gc_time(), Duration::from_secs(300));
    }
}
