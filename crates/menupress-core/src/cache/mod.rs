//! Time-boxed read caches and refresh throttling.
//!
//! Both are plain values owned by whoever serves requests; nothing here is
//! global. Time comes from a [`Clock`] so the browser build can supply
//! `Date.now()` and tests can step time by hand.

mod throttle;
mod ttl;

pub use throttle::RefreshThrottle;
pub use ttl::TtlCache;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Default lifetime of cached category and item lists.
pub const DEFAULT_TTL_MS: u64 = 30_000;

/// Default minimum gap between manual refreshes.
pub const DEFAULT_REFRESH_COOLDOWN_MS: u64 = 2_000;

/// Source of wall-clock milliseconds.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Clock backed by `SystemTime`. Not usable on `wasm32-unknown-unknown`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn set(&self, ms: u64) {
        self.now.store(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Cache and throttle timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheConfig {
    pub categories_ttl_ms: u64,
    pub items_ttl_ms: u64,
    pub refresh_cooldown_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            categories_ttl_ms: DEFAULT_TTL_MS,
            items_ttl_ms: DEFAULT_TTL_MS,
            refresh_cooldown_ms: DEFAULT_REFRESH_COOLDOWN_MS,
        }
    }
}
