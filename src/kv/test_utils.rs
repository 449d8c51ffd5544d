use crate::kv::{InMemoryKv, KvClient, KvError, StoredValue};
use std::sync::atomic::{AtomicU32, Ordering};

/// How `ScriptedKv` misbehaves.
#[derive(Debug, Copy, Clone)]
pub(crate) enum Fault {
    /// Behave like the wrapped store.
    None,
    /// Before each of the first `n` CAS calls, another "node" adds `bump` to the int under the
    /// same key, so the CAS genuinely loses.
    InterfereWithCas { n: u32, bump: i64 },
    /// Every CAS loses, forever.
    AlwaysConflict,
    /// Every call fails as if the store were down.
    Unavailable,
    /// Every call hangs until dropped.
    Hang,
    /// CAS calls on keys ending in the given suffix hang until dropped. Everything else behaves.
    HangCasOnSuffix(&'static str),
}

/// ScriptedKv wraps an `InMemoryKv`, injects a `Fault`, and counts calls.
pub(crate) struct ScriptedKv {
    pub(crate) inner: InMemoryKv,
    fault: Fault,
    interfered: AtomicU32,
    reads: AtomicU32,
    cas_calls: AtomicU32,
}

impl ScriptedKv {
    pub(crate) fn new(fault: Fault) -> Self {
        ScriptedKv {
            inner: InMemoryKv::new(),
            fault,
            interfered: AtomicU32::new(0),
            reads: AtomicU32::new(0),
            cas_calls: AtomicU32::new(0),
        }
    }

    pub(crate) fn reads(&self) -> u32 {
        self.reads.load(Ordering::SeqCst)
    }

    pub(crate) fn cas_calls(&self) -> u32 {
        self.cas_calls.load(Ordering::SeqCst)
    }

    async fn common_fault(&self) -> Result<(), KvError> {
        match self.fault {
            Fault::Unavailable => Err(KvError::Unavailable("scripted outage".to_string())),
            Fault::Hang => std::future::pending().await,
            _ => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl KvClient for ScriptedKv {
    async fn read(&self, key: &str) -> Result<StoredValue, KvError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.common_fault().await?;
        self.inner.read(key).await
    }

    async fn write(&self, key: &str, value: StoredValue, create_if_absent: bool) -> Result<(), KvError> {
        self.common_fault().await?;
        self.inner.write(key, value, create_if_absent).await
    }

    async fn compare_and_swap(
        &self,
        key: &str,
        expected: StoredValue,
        new_value: StoredValue,
        create_if_absent: bool,
    ) -> Result<(), KvError> {
        self.cas_calls.fetch_add(1, Ordering::SeqCst);
        self.common_fault().await?;

        match self.fault {
            Fault::AlwaysConflict => return Err(KvError::PreconditionFailed(key.to_string())),
            Fault::HangCasOnSuffix(suffix) if key.ends_with(suffix) => std::future::pending::<()>().await,
            Fault::InterfereWithCas { n, bump } if self.interfered.fetch_add(1, Ordering::SeqCst) < n => {
                let current = match self.inner.read(key).await {
                    Ok(StoredValue::Int(v)) => v,
                    _ => 0,
                };
                self.inner.write(key, StoredValue::Int(current + bump), true).await?;
            }
            _ => {}
        }

        self.inner
            .compare_and_swap(key, expected, new_value, create_if_absent)
            .await
    }
}
