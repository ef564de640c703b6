use super::Clock;

/// A single cached value that expires `ttl_ms` after it was stored.
#[derive(Debug, Clone)]
pub struct TtlCache<T, C> {
    clock: C,
    ttl_ms: u64,
    entry: Option<(T, u64)>,
}

impl<T, C: Clock> TtlCache<T, C> {
    pub fn new(clock: C, ttl_ms: u64) -> Self {
        Self {
            clock,
            ttl_ms,
            entry: None,
        }
    }

    /// The cached value, if one was stored less than `ttl_ms` ago.
    pub fn get(&self) -> Option<&T> {
        let (value, stored_at) = self.entry.as_ref()?;
        let age = self.clock.now_ms().saturating_sub(*stored_at);
        (age < self.ttl_ms).then_some(value)
    }

    pub fn set(&mut self, value: T) {
        self.entry = Some((value, self.clock.now_ms()));
    }

    /// Drop the cached value; the next `get` misses.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }
}
