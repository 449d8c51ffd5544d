use crate::kv::{KvClient, LogBody};
use crate::occ::{Deadline, OccError, OccRetry, Rejection};
use crate::service::keys;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::sync::Arc;

/// LogEntry is one payload of a log together with the offset it was assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub offset: u64,
    pub payload: Bytes,
}

/// LogService keeps per-key append-only logs in the shared store.
///
/// Each log key is backed by two store keys: an offset counter holding the next offset to hand
/// out, and a body mapping offset to payload. An append first reserves an offset by bumping the
/// counter, and only then inserts its payload into the body. Since the counter only moves
/// forward, every offset is handed out exactly once, and offsets per key are dense from 0.
///
/// The two steps are separate single-key updates. An appender that dies between them leaves its
/// offset reserved but unfilled. The hole is never reused; polls skip it, and
/// `unfilled_offsets` reports it.
pub struct LogService<K: KvClient + ?Sized> {
    logger: slog::Logger,
    occ: Arc<OccRetry<K>>,
}

impl<K: KvClient + ?Sized> LogService<K> {
    pub fn new(logger: slog::Logger, occ: Arc<OccRetry<K>>) -> Self {
        LogService { logger, occ }
    }

    /// Appends `payload` to the log under `key` and returns the offset it was assigned.
    pub async fn append(&self, key: &str, payload: Bytes, deadline: &Deadline) -> Result<u64, OccError> {
        let offset = self.reserve_offset(key, deadline).await?;

        let filled = self
            .occ
            .update(&keys::log_body_key(key), LogBody::new(), deadline, |body| {
                if body.contains_key(&offset) {
                    return Err(Rejection(format!("offset {} is already filled", offset)));
                }
                let mut body = body.clone();
                body.insert(offset, payload.clone());
                Ok(body)
            })
            .await;

        match filled {
            Ok(applied) => {
                slog::debug!(
                    self.logger,
                    "Appended offset {} to '{}' after {} attempt(s)",
                    offset,
                    key,
                    applied.attempts
                );
                Ok(offset)
            }
            Err(e) => {
                slog::warn!(self.logger, "Offset {} of '{}' reserved but left unfilled: {}", offset, key, e);
                Err(e)
            }
        }
    }

    async fn reserve_offset(&self, key: &str, deadline: &Deadline) -> Result<u64, OccError> {
        let reserved = self
            .occ
            .update(&keys::log_offset_key(key), 0u64, deadline, |next_offset| {
                // Offsets are stored as signed ints.
                if *next_offset >= i64::MAX as u64 {
                    return Err(Rejection("log has run out of offsets".to_string()));
                }
                Ok(next_offset + 1)
            })
            .await?;

        Ok(reserved.previous)
    }

    /// Returns, for each requested log, its entries with offsets in `[start, next offset)` in
    /// increasing order. Holes are skipped. Logs with nothing in range, including logs that don't
    /// exist, are left out of the result.
    pub async fn poll(
        &self,
        requests: &BTreeMap<String, u64>,
        deadline: &Deadline,
    ) -> Result<BTreeMap<String, Vec<LogEntry>>, OccError> {
        let mut polled = BTreeMap::new();
        for (key, start) in requests {
            let entries = self.read_from(key, *start, deadline).await?;
            if !entries.is_empty() {
                polled.insert(key.clone(), entries);
            }
        }

        Ok(polled)
    }

    /// Entries of one log from `start` up to its current next offset.
    pub async fn read_from(&self, key: &str, start: u64, deadline: &Deadline) -> Result<Vec<LogEntry>, OccError> {
        // Read the counter before the body. Payloads are inserted only after their offset was
        // reserved, so the body can't hold anything the counter doesn't cover yet.
        let next_offset = match self.occ.read::<u64>(&keys::log_offset_key(key), deadline).await? {
            Some(next_offset) => next_offset,
            None => return Ok(Vec::new()),
        };
        if start >= next_offset {
            return Ok(Vec::new());
        }

        let body = match self.occ.read::<LogBody>(&keys::log_body_key(key), deadline).await? {
            Some(body) => body,
            None => return Ok(Vec::new()),
        };

        Ok(body
            .range(start..next_offset)
            .map(|(offset, payload)| LogEntry {
                offset: *offset,
                payload: payload.clone(),
            })
            .collect())
    }

    /// Offsets below the log's next offset that have no payload. An append still in flight shows
    /// up here too, until its payload lands.
    pub async fn unfilled_offsets(&self, key: &str, deadline: &Deadline) -> Result<Vec<u64>, OccError> {
        let next_offset = self
            .occ
            .read::<u64>(&keys::log_offset_key(key), deadline)
            .await?
            .unwrap_or(0);
        let body = self
            .occ
            .read::<LogBody>(&keys::log_body_key(key), deadline)
            .await?
            .unwrap_or_default();

        Ok((0..next_offset).filter(|offset| !body.contains_key(offset)).collect())
    }
}
