use crate::kv::{KvClient, KvError, StoredValue};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// InMemoryKv is a linearizable store held in this process: every operation runs under one
/// mutex, so each takes effect atomically at the instant the lock is held.
///
/// It is the backing store of `StoreRpcServer`. Nodes talk to it through `GrpcKvClient`, or
/// directly when they share the process (tests, single-binary deployments).
#[derive(Clone, Default)]
pub struct InMemoryKv {
    entries: Arc<Mutex<HashMap<String, StoredValue>>>,
}

impl InMemoryKv {
    pub fn new() -> Self {
        InMemoryKv::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, StoredValue>>, KvError> {
        // A poisoned map means some writer panicked mid-update; refuse to serve from it.
        self.entries
            .lock()
            .map_err(|_| KvError::Unavailable("in-memory store lock poisoned".to_string()))
    }
}

// Each operation yields before touching the map. This stands in for the network hop a remote
// store would cost, and gives concurrent read-modify-CAS sequences a chance to interleave.
#[async_trait::async_trait]
impl KvClient for InMemoryKv {
    async fn read(&self, key: &str) -> Result<StoredValue, KvError> {
        tokio::task::yield_now().await;

        self.lock()?
            .get(key)
            .cloned()
            .ok_or_else(|| KvError::KeyAbsent(key.to_string()))
    }

    async fn write(&self, key: &str, value: StoredValue, create_if_absent: bool) -> Result<(), KvError> {
        tokio::task::yield_now().await;

        let mut entries = self.lock()?;
        match entries.get_mut(key) {
            Some(current) => *current = value,
            None if create_if_absent => {
                entries.insert(key.to_string(), value);
            }
            None => return Err(KvError::KeyAbsent(key.to_string())),
        }

        Ok(())
    }

    async fn compare_and_swap(
        &self,
        key: &str,
        expected: StoredValue,
        new_value: StoredValue,
        create_if_absent: bool,
    ) -> Result<(), KvError> {
        tokio::task::yield_now().await;

        let mut entries = self.lock()?;
        match entries.get_mut(key) {
            Some(current) if *current == expected => *current = new_value,
            Some(_) => return Err(KvError::PreconditionFailed(key.to_string())),
            None if create_if_absent => {
                entries.insert(key.to_string(), new_value);
            }
            None => return Err(KvError::KeyAbsent(key.to_string())),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_missing_key_is_absent() {
        let kv = InMemoryKv::new();

        assert_eq!(kv.read("nope").await, Err(KvError::KeyAbsent("nope".into())));
    }

    #[tokio::test]
    async fn write_respects_create_if_absent() {
        let kv = InMemoryKv::new();

        assert_eq!(
            kv.write("k", StoredValue::Int(1), false).await,
            Err(KvError::KeyAbsent("k".into()))
        );
        kv.write("k", StoredValue::Int(1), true).await.unwrap();
        kv.write("k", StoredValue::Int(2), false).await.unwrap();

        assert_eq!(kv.read("k").await, Ok(StoredValue::Int(2)));
    }

    #[tokio::test]
    async fn cas_on_mismatch_is_precondition_failure() {
        let kv = InMemoryKv::new();
        kv.write("k", StoredValue::Int(5), true).await.unwrap();

        let result = kv
            .compare_and_swap("k", StoredValue::Int(4), StoredValue::Int(6), false)
            .await;

        assert_eq!(result, Err(KvError::PreconditionFailed("k".into())));
        assert_eq!(kv.read("k").await, Ok(StoredValue::Int(5)));
    }

    #[tokio::test]
    async fn cas_on_match_replaces_value() {
        let kv = InMemoryKv::new();
        kv.write("k", StoredValue::Int(5), true).await.unwrap();

        kv.compare_and_swap("k", StoredValue::Int(5), StoredValue::Int(6), false)
            .await
            .unwrap();

        assert_eq!(kv.read("k").await, Ok(StoredValue::Int(6)));
    }

    #[tokio::test]
    async fn cas_on_missing_key_creates_only_when_asked() {
        let kv = InMemoryKv::new();

        let result = kv
            .compare_and_swap("k", StoredValue::Int(0), StoredValue::Int(1), false)
            .await;
        assert_eq!(result, Err(KvError::KeyAbsent("k".into())));

        kv.compare_and_swap("k", StoredValue::Int(0), StoredValue::Int(1), true)
            .await
            .unwrap();
        assert_eq!(kv.read("k").await, Ok(StoredValue::Int(1)));
    }

    #[tokio::test]
    async fn second_creator_loses_the_race() {
        let kv = InMemoryKv::new();

        kv.compare_and_swap("k", StoredValue::Int(0), StoredValue::Int(1), true)
            .await
            .unwrap();
        let result = kv
            .compare_and_swap("k", StoredValue::Int(0), StoredValue::Int(1), true)
            .await;

        assert_eq!(result, Err(KvError::PreconditionFailed("k".into())));
    }
}
