use tracing::warn;

use super::Clock;

/// Enforces a cooldown between manual refreshes of the admin lists.
#[derive(Debug, Clone)]
pub struct RefreshThrottle<C> {
    clock: C,
    cooldown_ms: u64,
    last_refresh_ms: Option<u64>,
}

impl<C: Clock> RefreshThrottle<C> {
    pub fn new(clock: C, cooldown_ms: u64) -> Self {
        Self {
            clock,
            cooldown_ms,
            last_refresh_ms: None,
        }
    }

    /// Claim a refresh. Returns `false`, without claiming, while the cooldown runs.
    pub fn try_refresh(&mut self) -> bool {
        let remaining = self.remaining_ms();
        if remaining > 0 {
            warn!(
                wait_secs = remaining.div_ceil(1000),
                "refresh requested during cooldown"
            );
            return false;
        }
        self.last_refresh_ms = Some(self.clock.now_ms());
        true
    }

    /// Milliseconds until the next refresh is allowed; 0 when allowed now.
    pub fn remaining_ms(&self) -> u64 {
        let Some(last) = self.last_refresh_ms else {
            return 0;
        };
        let elapsed = self.clock.now_ms().saturating_sub(last);
        self.cooldown_ms.saturating_sub(elapsed)
    }

    pub fn reset(&mut self) {
        self.last_refresh_ms = None;
    }
}
