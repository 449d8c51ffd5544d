use crate::api::options::OccOptionsValidated;
use crate::kv::{KvClient, KvError};
use crate::occ::{ConflictBackoff, Deadline, OccError, OccRetry};
use crate::service::{CommitTracker, CounterService, LogEntry, LogService, MAX_COMMITTABLE_OFFSET};
use bytes::Bytes;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::time::Duration;

/// StateNode is one node's view of the shared state: counters, logs and commit trackers,
/// all living in the shared store. Any number of nodes may serve the same store concurrently;
/// none of them holds state of its own.
///
/// Every operation takes a typed input, validates it, and runs under a deadline (the input's
/// timeout, else the node's default).
pub struct StateNode {
    logger: slog::Logger,
    counters: CounterService<dyn KvClient>,
    logs: LogService<dyn KvClient>,
    commits: CommitTracker<dyn KvClient>,
    operation_timeout: Duration,
}

impl StateNode {
    pub(crate) fn new(logger: slog::Logger, kv: Arc<dyn KvClient>, options: OccOptionsValidated) -> Self {
        let occ = Arc::new(OccRetry::new(
            logger.clone(),
            kv,
            ConflictBackoff::new(options.conflict_backoff_min, options.conflict_backoff_max),
            options.max_attempts,
        ));

        StateNode {
            counters: CounterService::new(logger.clone(), occ.clone()),
            logs: LogService::new(logger.clone(), occ.clone()),
            commits: CommitTracker::new(logger.clone(), occ),
            logger,
            operation_timeout: options.operation_timeout,
        }
    }

    pub async fn add(&self, input: AddInput) -> Result<AddOutput, NodeError> {
        validate_key(&input.key)?;
        let deadline = self.deadline(input.timeout)?;

        let value = self
            .counters
            .increment(&input.key, input.delta, &deadline)
            .await
            .map_err(|e| self.failed("add", e))?;

        Ok(AddOutput { value })
    }

    pub async fn read(&self, input: ReadInput) -> Result<ReadOutput, NodeError> {
        validate_key(&input.key)?;
        let deadline = self.deadline(input.timeout)?;

        let value = self
            .counters
            .value(&input.key, &deadline)
            .await
            .map_err(|e| self.failed("read", e))?;

        Ok(ReadOutput { value })
    }

    pub async fn send(&self, input: SendInput) -> Result<SendOutput, NodeError> {
        validate_key(&input.key)?;
        let deadline = self.deadline(input.timeout)?;

        let offset = self
            .logs
            .append(&input.key, input.payload, &deadline)
            .await
            .map_err(|e| self.failed("send", e))?;

        Ok(SendOutput { offset })
    }

    pub async fn poll(&self, input: PollInput) -> Result<PollOutput, NodeError> {
        for key in input.offsets.keys() {
            validate_key(key)?;
        }
        let deadline = self.deadline(input.timeout)?;

        let msgs = self
            .logs
            .poll(&input.offsets, &deadline)
            .await
            .map_err(|e| self.failed("poll", e))?;

        Ok(PollOutput { msgs })
    }

    pub async fn commit_offsets(&self, input: CommitOffsetsInput) -> Result<CommitOffsetsOutput, NodeError> {
        for (key, offset) in &input.offsets {
            validate_key(key)?;
            if *offset > MAX_COMMITTABLE_OFFSET {
                return Err(NodeError::MalformedInput(format!(
                    "offset {} for '{}' exceeds {}",
                    offset, key, MAX_COMMITTABLE_OFFSET
                )));
            }
        }
        let deadline = self.deadline(input.timeout)?;

        self.commits
            .commit_all(&input.offsets, &deadline)
            .await
            .map_err(|e| self.failed("commit_offsets", e))?;

        Ok(CommitOffsetsOutput {})
    }

    pub async fn list_committed_offsets(
        &self,
        input: ListCommittedOffsetsInput,
    ) -> Result<ListCommittedOffsetsOutput, NodeError> {
        for key in &input.keys {
            validate_key(key)?;
        }
        let deadline = self.deadline(input.timeout)?;

        let offsets = self
            .commits
            .list_committed(&input.keys, &deadline)
            .await
            .map_err(|e| self.failed("list_committed_offsets", e))?;

        Ok(ListCommittedOffsetsOutput { offsets })
    }

    /// Offsets of a log that were reserved by an append that never stored its payload, plus
    /// appends still in flight. Polls skip these offsets.
    pub async fn unfilled_offsets(&self, input: UnfilledOffsetsInput) -> Result<UnfilledOffsetsOutput, NodeError> {
        validate_key(&input.key)?;
        let deadline = self.deadline(input.timeout)?;

        let offsets = self
            .logs
            .unfilled_offsets(&input.key, &deadline)
            .await
            .map_err(|e| self.failed("unfilled_offsets", e))?;

        Ok(UnfilledOffsetsOutput { offsets })
    }

    fn deadline(&self, timeout: Option<Duration>) -> Result<Deadline, NodeError> {
        match timeout {
            Some(timeout) if timeout == Duration::from_millis(0) => {
                Err(NodeError::MalformedInput("timeout must be non-zero".to_string()))
            }
            Some(timeout) => Ok(Deadline::after(timeout)),
            None => Ok(Deadline::after(self.operation_timeout)),
        }
    }

    fn failed(&self, operation: &str, error: OccError) -> NodeError {
        match &error {
            OccError::Store(_) => slog::warn!(self.logger, "{} failed: {}", operation, error),
            _ => slog::debug!(self.logger, "{} failed: {}", operation, error),
        }

        NodeError::from(error)
    }
}

fn validate_key(key: &str) -> Result<(), NodeError> {
    if key.is_empty() {
        return Err(NodeError::MalformedInput("key must be non-empty".to_string()));
    }

    Ok(())
}

#[derive(Debug)]
pub struct AddInput {
    pub key: String,
    pub delta: i64,
    pub timeout: Option<Duration>,
}

#[derive(Debug, PartialEq)]
pub struct AddOutput {
    pub value: i64,
}

#[derive(Debug)]
pub struct ReadInput {
    pub key: String,
    pub timeout: Option<Duration>,
}

#[derive(Debug, PartialEq)]
pub struct ReadOutput {
    pub value: i64,
}

#[derive(Debug)]
pub struct SendInput {
    pub key: String,
    pub payload: Bytes,
    pub timeout: Option<Duration>,
}

#[derive(Debug, PartialEq)]
pub struct SendOutput {
    pub offset: u64,
}

#[derive(Debug)]
pub struct PollInput {
    pub offsets: BTreeMap<String, u64>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, PartialEq)]
pub struct PollOutput {
    pub msgs: BTreeMap<String, Vec<LogEntry>>,
}

#[derive(Debug)]
pub struct CommitOffsetsInput {
    pub offsets: BTreeMap<String, u64>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, PartialEq)]
pub struct CommitOffsetsOutput {
    // Nothing
}

#[derive(Debug)]
pub struct ListCommittedOffsetsInput {
    pub keys: Vec<String>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, PartialEq)]
pub struct ListCommittedOffsetsOutput {
    pub offsets: BTreeMap<String, u64>,
}

#[derive(Debug)]
pub struct UnfilledOffsetsInput {
    pub key: String,
    pub timeout: Option<Duration>,
}

#[derive(Debug, PartialEq)]
pub struct UnfilledOffsetsOutput {
    pub offsets: Vec<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    // Never retried: the same input would fail the same way.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    // Deadline passed, caller cancelled, or the attempt cap ran out before the update landed.
    #[error("Operation did not complete: {0}")]
    Timeout(String),

    #[error("Store failure: {0}")]
    StoreFailure(KvError),

    #[error("Operation rejected: {0}")]
    Rejected(String),
}

// ------- Conversions --------

impl From<OccError> for NodeError {
    fn from(error: OccError) -> Self {
        match error {
            OccError::Store(e) => NodeError::StoreFailure(e),
            e @ OccError::DeadlineExceeded { .. } => NodeError::Timeout(e.to_string()),
            e @ OccError::Cancelled { .. } => NodeError::Timeout(e.to_string()),
            e @ OccError::AttemptsExhausted { .. } => NodeError::Timeout(e.to_string()),
            e @ OccError::Rejected { .. } => NodeError::Rejected(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::options::OccOptions;
    use crate::kv::{Fault, InMemoryKv, ScriptedKv};
    use std::convert::TryFrom;

    fn node_with(kv: Arc<dyn KvClient>, options: OccOptions) -> StateNode {
        let logger = slog::Logger::root(slog::Discard, slog::o!());
        StateNode::new(logger, kv, OccOptionsValidated::try_from(options).unwrap())
    }

    fn node() -> StateNode {
        node_with(Arc::new(InMemoryKv::new()), OccOptions::default())
    }

    fn send(key: &str, payload: &'static [u8]) -> SendInput {
        SendInput {
            key: key.to_string(),
            payload: Bytes::from_static(payload),
            timeout: None,
        }
    }

    #[tokio::test]
    async fn counter_operations() {
        let node = node();

        let added = node
            .add(AddInput {
                key: "c".into(),
                delta: 3,
                timeout: None,
            })
            .await
            .unwrap();
        let read = node
            .read(ReadInput {
                key: "c".into(),
                timeout: Some(Duration::from_secs(1)),
            })
            .await
            .unwrap();

        assert_eq!(added, AddOutput { value: 3 });
        assert_eq!(read, ReadOutput { value: 3 });
    }

    #[tokio::test]
    async fn log_and_commit_operations() {
        let node = node();
        assert_eq!(node.send(send("k1", b"a")).await.unwrap(), SendOutput { offset: 0 });
        assert_eq!(node.send(send("k1", b"b")).await.unwrap(), SendOutput { offset: 1 });
        assert_eq!(node.send(send("k2", b"c")).await.unwrap(), SendOutput { offset: 0 });

        let mut offsets = BTreeMap::new();
        offsets.insert("k1".to_string(), 1);
        offsets.insert("k2".to_string(), 1);
        let polled = node
            .poll(PollInput {
                offsets: offsets.clone(),
                timeout: None,
            })
            .await
            .unwrap();
        assert_eq!(polled.msgs.len(), 1);
        assert_eq!(
            polled.msgs["k1"],
            vec![LogEntry {
                offset: 1,
                payload: Bytes::from_static(b"b")
            }]
        );

        node.commit_offsets(CommitOffsetsInput { offsets, timeout: None })
            .await
            .unwrap();
        let listed = node
            .list_committed_offsets(ListCommittedOffsetsInput {
                keys: vec!["k1".into(), "k2".into(), "k3".into()],
                timeout: None,
            })
            .await
            .unwrap();
        assert_eq!(listed.offsets.len(), 2);
        assert_eq!(listed.offsets["k1"], 1);
        assert_eq!(listed.offsets["k2"], 1);
    }

    #[tokio::test]
    async fn empty_keys_are_malformed() {
        let node = node();

        let sent = node.send(send("", b"x")).await;
        let mut offsets = BTreeMap::new();
        offsets.insert(String::new(), 0);
        let committed = node
            .commit_offsets(CommitOffsetsInput { offsets, timeout: None })
            .await;
        let listed = node
            .list_committed_offsets(ListCommittedOffsetsInput {
                keys: vec!["ok".into(), "".into()],
                timeout: None,
            })
            .await;

        assert!(matches!(sent, Err(NodeError::MalformedInput(_))));
        assert!(matches!(committed, Err(NodeError::MalformedInput(_))));
        assert!(matches!(listed, Err(NodeError::MalformedInput(_))));
    }

    #[tokio::test]
    async fn unstorable_commit_offset_is_malformed() {
        let node = node();
        let mut offsets = BTreeMap::new();
        offsets.insert("a".to_string(), 1);
        offsets.insert("b".to_string(), MAX_COMMITTABLE_OFFSET + 1);

        let result = node
            .commit_offsets(CommitOffsetsInput { offsets, timeout: None })
            .await;
        let listed = node
            .list_committed_offsets(ListCommittedOffsetsInput {
                keys: vec!["a".into(), "b".into()],
                timeout: None,
            })
            .await
            .unwrap();

        assert!(matches!(result, Err(NodeError::MalformedInput(_))));
        // Validation happens before any key is committed.
        assert!(listed.offsets.is_empty());
    }

    #[tokio::test]
    async fn fully_written_log_has_no_unfilled_offsets() {
        let node = node();
        node.send(send("k", b"a")).await.unwrap();

        let unfilled = node
            .unfilled_offsets(UnfilledOffsetsInput {
                key: "k".into(),
                timeout: None,
            })
            .await
            .unwrap();

        assert_eq!(unfilled, UnfilledOffsetsOutput { offsets: vec![] });
    }

    #[tokio::test]
    async fn zero_timeout_is_malformed() {
        let node = node();

        let result = node
            .add(AddInput {
                key: "c".into(),
                delta: 1,
                timeout: Some(Duration::from_millis(0)),
            })
            .await;

        assert!(matches!(result, Err(NodeError::MalformedInput(_))));
    }

    #[tokio::test]
    async fn store_outage_is_a_store_failure() {
        let node = node_with(Arc::new(ScriptedKv::new(Fault::Unavailable)), OccOptions::default());

        let result = node.send(send("k", b"x")).await;

        assert!(matches!(result, Err(NodeError::StoreFailure(KvError::Unavailable(_)))));
    }

    #[tokio::test]
    async fn hung_store_times_out() {
        let node = node_with(Arc::new(ScriptedKv::new(Fault::Hang)), OccOptions::default());

        let result = node
            .read(ReadInput {
                key: "c".into(),
                timeout: Some(Duration::from_millis(20)),
            })
            .await;

        assert!(matches!(result, Err(NodeError::Timeout(_))));
    }

    #[tokio::test]
    async fn attempt_cap_reports_as_timeout() {
        let options = OccOptions {
            max_attempts: Some(2),
            conflict_backoff_min: Some(Duration::from_millis(0)),
            conflict_backoff_max: Some(Duration::from_millis(0)),
            ..OccOptions::default()
        };
        let node = node_with(Arc::new(ScriptedKv::new(Fault::AlwaysConflict)), options);

        let result = node
            .add(AddInput {
                key: "c".into(),
                delta: 1,
                timeout: None,
            })
            .await;

        assert!(matches!(result, Err(NodeError::Timeout(_))));
    }

    #[tokio::test]
    async fn overflow_is_rejected() {
        let node = node();
        let add = |delta| AddInput {
            key: "c".into(),
            delta,
            timeout: None,
        };

        node.add(add(i64::MAX)).await.unwrap();
        let result = node.add(add(1)).await;

        assert!(matches!(result, Err(NodeError::Rejected(_))));
    }
}
