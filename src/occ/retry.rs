use crate::kv::{KvClient, KvError, StoreCodec};
use crate::occ::backoff::ConflictBackoff;
use crate::occ::deadline::{Deadline, Expiry};
use std::sync::Arc;

/// OccRetry applies a pure update function to a single key using optimistic concurrency: read,
/// compute, compare-and-swap, and start over from a fresh read whenever the CAS loses.
///
/// Every value it installs was computed from a value that was current at some instant, so the
/// sequence of values under a key is linearizable with respect to the update functions applied
/// (given a linearizable store). The store is the only arbiter; nothing is cached between calls.
pub struct OccRetry<K: KvClient + ?Sized> {
    logger: slog::Logger,
    kv: Arc<K>,
    backoff: ConflictBackoff,
    // None means retry until success, store failure, or deadline.
    max_attempts: Option<u32>,
}

/// Applied is the outcome of a successful update.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied<T> {
    /// The value the update was computed from (the default if the key was absent).
    pub previous: T,
    /// The value now stored under the key.
    pub current: T,
    /// Number of read-compute-CAS rounds it took.
    pub attempts: u32,
}

/// Rejection is returned by an update function that refuses to produce a next value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection(pub String);

impl<K: KvClient + ?Sized> OccRetry<K> {
    pub fn new(logger: slog::Logger, kv: Arc<K>, backoff: ConflictBackoff, max_attempts: Option<u32>) -> Self {
        OccRetry {
            logger,
            kv,
            backoff,
            max_attempts,
        }
    }

    /// Plain read. `Ok(None)` if the key was never written.
    pub async fn read<T: StoreCodec>(&self, key: &str, deadline: &Deadline) -> Result<Option<T>, OccError> {
        let result = deadline
            .run(self.kv.read(key))
            .await
            .map_err(|expiry| OccError::from_expiry(key, expiry, 0))?;

        match result {
            Ok(value) => Ok(Some(T::decode(key, value)?)),
            Err(KvError::KeyAbsent(_)) => Ok(None),
            Err(e) => Err(OccError::Store(e)),
        }
    }

    /// Replace the value `old` under `key` with `next(old)`, treating an absent key as `default`.
    ///
    /// A lost CAS is retried from a fresh read after a jittered backoff. Any other store error, a
    /// `Rejection` from `next`, an expired `deadline`, or running out of attempts ends the loop.
    ///
    /// If `next` returns the value it was given and the key already exists, nothing is written:
    /// the read observed that value at some instant, which is all a CAS would have established.
    pub async fn update<T, F>(&self, key: &str, default: T, deadline: &Deadline, mut next: F) -> Result<Applied<T>, OccError>
    where
        T: StoreCodec,
        F: FnMut(&T) -> Result<T, Rejection> + Send,
    {
        let mut attempts = 0;
        loop {
            deadline
                .check()
                .map_err(|expiry| OccError::from_expiry(key, expiry, attempts))?;
            if let Some(max_attempts) = self.max_attempts {
                if attempts >= max_attempts {
                    return Err(OccError::AttemptsExhausted {
                        key: key.to_string(),
                        attempts,
                    });
                }
            }
            attempts += 1;

            let (previous, from_absence) = match self.read::<T>(key, deadline).await {
                Ok(Some(value)) => (value, false),
                Ok(None) => (default.clone(), true),
                Err(e) => return Err(e.with_attempts(attempts)),
            };

            let current = next(&previous).map_err(|rejection| OccError::Rejected {
                key: key.to_string(),
                reason: rejection.0,
            })?;

            if !from_absence && current == previous {
                return Ok(Applied {
                    previous,
                    current,
                    attempts,
                });
            }

            let cas_result = deadline
                .run(
                    self.kv
                        .compare_and_swap(key, previous.encode(), current.encode(), from_absence),
                )
                .await
                .map_err(|expiry| OccError::from_expiry(key, expiry, attempts))?;

            match cas_result {
                Ok(()) => {
                    return Ok(Applied {
                        previous,
                        current,
                        attempts,
                    })
                }
                // Another writer got there first. The key only goes absent again if the store
                // itself dropped it, which is a conflict all the same.
                Err(KvError::PreconditionFailed(_)) | Err(KvError::KeyAbsent(_)) => {
                    slog::debug!(self.logger, "CAS conflict on '{}' (attempt {})", key, attempts);
                    self.back_off(key, deadline, attempts).await?;
                }
                Err(e) => return Err(OccError::Store(e)),
            }
        }
    }

    async fn back_off(&self, key: &str, deadline: &Deadline, attempts: u32) -> Result<(), OccError> {
        let delay = self.backoff.delay(attempts - 1);
        if delay.as_nanos() == 0 {
            return Ok(());
        }

        deadline
            .run(tokio::time::sleep(delay))
            .await
            .map_err(|expiry| OccError::from_expiry(key, expiry, attempts))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OccError {
    #[error("Store failure: {0}")]
    Store(#[from] KvError),

    // If the deadline trips while a CAS is in flight, that CAS may or may not have landed.
    #[error("Deadline exceeded updating '{key}' after {attempts} attempt(s)")]
    DeadlineExceeded { key: String, attempts: u32 },

    #[error("Caller cancelled update of '{key}' after {attempts} attempt(s)")]
    Cancelled { key: String, attempts: u32 },

    #[error("Gave up updating '{key}' after {attempts} conflicting attempt(s)")]
    AttemptsExhausted { key: String, attempts: u32 },

    #[error("Update of '{key}' rejected: {reason}")]
    Rejected { key: String, reason: String },
}

impl OccError {
    fn from_expiry(key: &str, expiry: Expiry, attempts: u32) -> Self {
        let key = key.to_string();
        match expiry {
            Expiry::TimedOut => OccError::DeadlineExceeded { key, attempts },
            Expiry::Cancelled => OccError::Cancelled { key, attempts },
        }
    }

    fn with_attempts(self, attempts: u32) -> Self {
        match self {
            OccError::DeadlineExceeded { key, .. } => OccError::DeadlineExceeded { key, attempts },
            OccError::Cancelled { key, .. } => OccError::Cancelled { key, attempts },
            other => other,
        }
    }
}
