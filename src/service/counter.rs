use crate::kv::KvClient;
use crate::occ::{Deadline, OccError, OccRetry, Rejection};
use crate::service::keys;
use std::sync::Arc;

/// CounterService keeps named integer counters in the shared store. Increments from any number of
/// nodes are never lost: the stored value is always the sum of every delta that was applied.
pub struct CounterService<K: KvClient + ?Sized> {
    logger: slog::Logger,
    occ: Arc<OccRetry<K>>,
}

impl<K: KvClient + ?Sized> CounterService<K> {
    pub fn new(logger: slog::Logger, occ: Arc<OccRetry<K>>) -> Self {
        CounterService { logger, occ }
    }

    /// Adds `delta` (of either sign) and returns the value it produced.
    pub async fn increment(&self, key: &str, delta: i64, deadline: &Deadline) -> Result<i64, OccError> {
        let applied = self
            .occ
            .update(&keys::counter_key(key), 0i64, deadline, |old| {
                old.checked_add(delta)
                    .ok_or_else(|| Rejection(format!("adding {} to {} overflows", delta, old)))
            })
            .await?;

        slog::debug!(
            self.logger,
            "Counter '{}' {} -> {} after {} attempt(s)",
            key,
            applied.previous,
            applied.current,
            applied.attempts
        );
        Ok(applied.current)
    }

    /// Current value; 0 for a counter nobody has touched.
    pub async fn value(&self, key: &str, deadline: &Deadline) -> Result<i64, OccError> {
        let value = self.occ.read::<i64>(&keys::counter_key(key), deadline).await?;
        Ok(value.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{Fault, InMemoryKv, KvError, ScriptedKv};
    use crate::occ::ConflictBackoff;

    fn counters<K: KvClient + ?Sized>(kv: Arc<K>) -> CounterService<K> {
        let logger = slog::Logger::root(slog::Discard, slog::o!());
        let occ = OccRetry::new(logger.clone(), kv, ConflictBackoff::none(), None);
        CounterService::new(logger, Arc::new(occ))
    }

    #[tokio::test]
    async fn untouched_counter_reads_zero() {
        let counters = counters(Arc::new(InMemoryKv::new()));

        assert_eq!(counters.value("c", &Deadline::none()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn deltas_of_either_sign_accumulate() {
        let counters = counters(Arc::new(InMemoryKv::new()));
        let deadline = Deadline::none();

        assert_eq!(counters.increment("c", 100, &deadline).await.unwrap(), 100);
        assert_eq!(counters.increment("c", -101, &deadline).await.unwrap(), -1);
        assert_eq!(counters.increment("other", 7, &deadline).await.unwrap(), 7);

        assert_eq!(counters.value("c", &deadline).await.unwrap(), -1);
        assert_eq!(counters.value("other", &deadline).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn overflow_is_rejected_and_value_kept() {
        let counters = counters(Arc::new(InMemoryKv::new()));
        let deadline = Deadline::none();
        counters.increment("c", i64::MAX, &deadline).await.unwrap();

        let result = counters.increment("c", 1, &deadline).await;

        assert!(matches!(result, Err(OccError::Rejected { .. })));
        assert_eq!(counters.value("c", &deadline).await.unwrap(), i64::MAX);
    }

    #[tokio::test]
    async fn store_outage_is_reported() {
        let counters = counters(Arc::new(ScriptedKv::new(Fault::Unavailable)));

        let add = counters.increment("c", 1, &Deadline::none()).await;
        let read = counters.value("c", &Deadline::none()).await;

        assert!(matches!(add, Err(OccError::Store(KvError::Unavailable(_)))));
        assert!(matches!(read, Err(OccError::Store(KvError::Unavailable(_)))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_increments_converge_to_the_sum() {
        let counters = Arc::new(counters(Arc::new(InMemoryKv::new())));

        let mut tasks = Vec::new();
        for i in 0..40i64 {
            let counters = counters.clone();
            // Mix of signs and magnitudes across 4 "nodes" worth of callers.
            let delta = if i % 4 == 0 { -i } else { i * 3 };
            tasks.push(tokio::spawn(async move {
                counters.increment("c", delta, &Deadline::none()).await.unwrap();
                delta
            }));
        }
        let mut expected = 0;
        for task in tasks {
            expected += task.await.unwrap();
        }

        assert_eq!(counters.value("c", &Deadline::none()).await.unwrap(), expected);
    }
}
