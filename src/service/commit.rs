use crate::kv::KvClient;
use crate::occ::{Deadline, OccError, OccRetry, Rejection};
use crate::service::keys;
use std::collections::BTreeMap;
use std::sync::Arc;

// Offsets are stored as signed ints.
pub(crate) const MAX_COMMITTABLE_OFFSET: u64 = i64::MAX as u64;

/// CommitTracker records, per log key, the highest offset a consumer has committed.
///
/// Commits merge by max: a commit below the current value changes nothing and is not an error,
/// so commits are idempotent, order-insensitive, and never move a key backward.
pub struct CommitTracker<K: KvClient + ?Sized> {
    logger: slog::Logger,
    occ: Arc<OccRetry<K>>,
}

impl<K: KvClient + ?Sized> CommitTracker<K> {
    pub fn new(logger: slog::Logger, occ: Arc<OccRetry<K>>) -> Self {
        CommitTracker { logger, occ }
    }

    /// Commits `offset` for `key` and returns the committed offset afterwards, which is larger
    /// than `offset` if someone already committed further.
    ///
    /// Offsets past `i64::MAX` can't be stored and are rejected without touching the key.
    pub async fn commit(&self, key: &str, offset: u64, deadline: &Deadline) -> Result<u64, OccError> {
        let applied = self
            .occ
            .update(&keys::commit_key(key), 0u64, deadline, |committed| {
                if offset > MAX_COMMITTABLE_OFFSET {
                    return Err(Rejection(format!("offset {} is beyond the largest storable offset", offset)));
                }
                Ok(*committed.max(&offset))
            })
            .await?;

        if applied.current > offset {
            slog::debug!(
                self.logger,
                "Commit of {} to '{}' is stale, already at {}",
                offset,
                key,
                applied.current
            );
        }
        Ok(applied.current)
    }

    /// Commits every key of `offsets`. Keys are independent; on error, keys committed before the
    /// failing one stay committed.
    pub async fn commit_all(&self, offsets: &BTreeMap<String, u64>, deadline: &Deadline) -> Result<(), OccError> {
        for (key, offset) in offsets {
            self.commit(key, *offset, deadline).await?;
        }

        Ok(())
    }

    pub async fn committed(&self, key: &str, deadline: &Deadline) -> Result<Option<u64>, OccError> {
        self.occ.read::<u64>(&keys::commit_key(key), deadline).await
    }

    /// Committed offsets of `keys`. Keys that were never committed are left out rather than
    /// reported as 0.
    pub async fn list_committed(&self, keys: &[String], deadline: &Deadline) -> Result<BTreeMap<String, u64>, OccError> {
        let mut listed = BTreeMap::new();
        for key in keys {
            if let Some(offset) = self.committed(key, deadline).await? {
                listed.insert(key.clone(), offset);
            }
        }

        Ok(listed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{Fault, InMemoryKv, KvError, ScriptedKv};
    use crate::occ::ConflictBackoff;

    fn tracker<K: KvClient + ?Sized>(kv: Arc<K>) -> CommitTracker<K> {
        let logger = slog::Logger::root(slog::Discard, slog::o!());
        let occ = OccRetry::new(logger.clone(), kv, ConflictBackoff::none(), None);
        CommitTracker::new(logger, Arc::new(occ))
    }

    fn names(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[tokio::test]
    async fn commits_never_move_backward() {
        let tracker = tracker(Arc::new(InMemoryKv::new()));
        let deadline = Deadline::none();

        assert_eq!(tracker.commit("t", 5, &deadline).await.unwrap(), 5);
        assert_eq!(tracker.commit("t", 3, &deadline).await.unwrap(), 5);
        assert_eq!(tracker.commit("t", 5, &deadline).await.unwrap(), 5);
        assert_eq!(tracker.commit("t", 9, &deadline).await.unwrap(), 9);

        assert_eq!(tracker.committed("t", &deadline).await.unwrap(), Some(9));
    }

    #[tokio::test]
    async fn offset_beyond_storable_range_is_rejected() {
        let tracker = tracker(Arc::new(InMemoryKv::new()));
        let deadline = Deadline::none();
        tracker.commit("t", 5, &deadline).await.unwrap();

        let result = tracker.commit("t", MAX_COMMITTABLE_OFFSET + 1, &deadline).await;

        assert!(matches!(result, Err(OccError::Rejected { .. })));
        // The key is still readable and still accepts commits.
        assert_eq!(tracker.committed("t", &deadline).await.unwrap(), Some(5));
        assert_eq!(tracker.commit("t", MAX_COMMITTABLE_OFFSET, &deadline).await.unwrap(), MAX_COMMITTABLE_OFFSET);
        let listed = tracker.list_committed(&names(&["t"]), &deadline).await.unwrap();
        assert_eq!(listed["t"], MAX_COMMITTABLE_OFFSET);
    }

    #[tokio::test]
    async fn never_committed_keys_are_omitted() {
        let tracker = tracker(Arc::new(InMemoryKv::new()));
        let deadline = Deadline::none();
        tracker.commit("t", 0, &deadline).await.unwrap();

        let listed = tracker
            .list_committed(&names(&["t", "never-committed"]), &deadline)
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed["t"], 0);
        assert!(!listed.contains_key("never-committed"));
    }

    #[tokio::test]
    async fn commit_all_commits_each_key_independently() {
        let tracker = tracker(Arc::new(InMemoryKv::new()));
        let deadline = Deadline::none();
        tracker.commit("a", 10, &deadline).await.unwrap();

        let mut offsets = BTreeMap::new();
        offsets.insert("a".to_string(), 4);
        offsets.insert("b".to_string(), 7);
        tracker.commit_all(&offsets, &deadline).await.unwrap();

        let listed = tracker.list_committed(&names(&["a", "b"]), &deadline).await.unwrap();
        assert_eq!(listed["a"], 10);
        assert_eq!(listed["b"], 7);
    }

    #[tokio::test]
    async fn store_outage_is_reported() {
        let tracker = tracker(Arc::new(ScriptedKv::new(Fault::Unavailable)));

        let committed = tracker.commit("t", 1, &Deadline::none()).await;
        let listed = tracker.list_committed(&names(&["t"]), &Deadline::none()).await;

        assert!(matches!(committed, Err(OccError::Store(KvError::Unavailable(_)))));
        assert!(matches!(listed, Err(OccError::Store(KvError::Unavailable(_)))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_commits_settle_on_the_max() {
        let tracker = Arc::new(tracker(Arc::new(InMemoryKv::new())));
        // Offsets arrive shuffled, with repeats.
        let offsets: Vec<u64> = (0..60).map(|i| (i * 37) % 41).collect();

        let mut tasks = Vec::new();
        for offset in offsets.clone() {
            let tracker = tracker.clone();
            tasks.push(tokio::spawn(async move {
                tracker.commit("t", offset, &Deadline::none()).await.unwrap()
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let max = *offsets.iter().max().unwrap();
        assert_eq!(tracker.committed("t", &Deadline::none()).await.unwrap(), Some(max));
    }
}
