use crate::kv::StoredValue;
use std::sync::Arc;

/// KvClient is the boundary to the shared key-value store. The store only promises single-key
/// atomicity; anything spanning two keys must be built on top of `compare_and_swap`.
///
/// Counters and commit trackers only need sequentially consistent CAS. The log's offset counter
/// needs linearizable CAS, otherwise two nodes may both be told they won the same offset.
#[async_trait::async_trait]
pub trait KvClient: Send + Sync {
    /// Returns `KvError::KeyAbsent` if nothing was ever written under `key`.
    async fn read(&self, key: &str) -> Result<StoredValue, KvError>;

    /// Unconditional write. With `create_if_absent == false`, writing a missing key fails with
    /// `KvError::KeyAbsent`.
    async fn write(&self, key: &str, value: StoredValue, create_if_absent: bool) -> Result<(), KvError>;

    /// Replace the value under `key` with `new_value` iff it currently equals `expected`.
    ///
    /// A missing key is created with `new_value` when `create_if_absent` is set, and fails with
    /// `KvError::KeyAbsent` otherwise. A present key holding anything other than `expected` fails
    /// with `KvError::PreconditionFailed`.
    async fn compare_and_swap(
        &self,
        key: &str,
        expected: StoredValue,
        new_value: StoredValue,
        create_if_absent: bool,
    ) -> Result<(), KvError>;
}

#[async_trait::async_trait]
impl<K: KvClient + ?Sized> KvClient for Arc<K> {
    async fn read(&self, key: &str) -> Result<StoredValue, KvError> {
        (**self).read(key).await
    }

    async fn write(&self, key: &str, value: StoredValue, create_if_absent: bool) -> Result<(), KvError> {
        (**self).write(key, value, create_if_absent).await
    }

    async fn compare_and_swap(
        &self,
        key: &str,
        expected: StoredValue,
        new_value: StoredValue,
        create_if_absent: bool,
    ) -> Result<(), KvError> {
        (**self)
            .compare_and_swap(key, expected, new_value, create_if_absent)
            .await
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KvError {
    #[error("Key '{0}' does not exist")]
    KeyAbsent(String),

    // Somebody else changed the key between our read and our CAS. Expected under contention.
    #[error("Precondition failed for key '{0}'")]
    PreconditionFailed(String),

    #[error("Key '{key}' holds a {found} value, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl KvError {
    pub(crate) fn type_mismatch(key: &str, expected: &'static str, found: &StoredValue) -> Self {
        KvError::TypeMismatch {
            key: key.to_string(),
            expected,
            found: found.kind(),
        }
    }
}
