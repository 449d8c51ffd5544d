use rand::Rng;
use tokio::time::Duration;

/// ConflictBackoff spaces out retries of a CAS that lost to a concurrent writer. Correctness never
/// depends on it; it only keeps hot keys from being hammered by every loser at once.
///
/// Delay for the n-th conflict (0-based) is drawn uniformly from `[ceiling / 2, ceiling]` where
/// `ceiling = min(max, min * 2^n)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ConflictBackoff {
    min: Duration,
    max: Duration,
}

impl ConflictBackoff {
    pub fn new(min: Duration, max: Duration) -> Self {
        assert!(min <= max, "Backoff minimum must not exceed maximum");
        ConflictBackoff { min, max }
    }

    /// Retry immediately after every conflict.
    pub fn none() -> Self {
        Self::new(Duration::from_millis(0), Duration::from_millis(0))
    }

    pub(crate) fn delay(&self, conflicts_so_far: u32) -> Duration {
        let ceiling = self.ceiling(conflicts_so_far);
        if ceiling == Duration::from_millis(0) {
            return ceiling;
        }

        rand::thread_rng().gen_range(ceiling / 2..=ceiling)
    }

    fn ceiling(&self, conflicts_so_far: u32) -> Duration {
        // 2^16 of anything reasonable is already past any sane max.
        let factor = 1u32 << conflicts_so_far.min(16);
        self.min
            .checked_mul(factor)
            .map(|d| d.min(self.max))
            .unwrap_or(self.max)
    }
}
