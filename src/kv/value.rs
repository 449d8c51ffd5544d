use crate::kv::KvError;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::convert::TryFrom;

/// LogBody is the stored form of one log key's entries, keyed by offset.
pub type LogBody = BTreeMap<u64, Bytes>;

/// StoredValue is anything the store can hold under a single key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredValue {
    Int(i64),
    Log(LogBody),
}

impl StoredValue {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            StoredValue::Int(_) => "int",
            StoredValue::Log(_) => "log",
        }
    }
}

/// StoreCodec maps a typed value onto `StoredValue` and back. Equality of the typed value must
/// agree with equality of its encoding, because compare-and-swap compares encodings.
pub trait StoreCodec: Clone + PartialEq + Send + Sync + 'static {
    fn encode(&self) -> StoredValue;

    fn decode(key: &str, value: StoredValue) -> Result<Self, KvError>;
}

impl StoreCodec for i64 {
    fn encode(&self) -> StoredValue {
        StoredValue::Int(*self)
    }

    fn decode(key: &str, value: StoredValue) -> Result<Self, KvError> {
        match value {
            StoredValue::Int(v) => Ok(v),
            other => Err(KvError::type_mismatch(key, "int", &other)),
        }
    }
}

// Offsets live in the store as non-negative ints.
impl StoreCodec for u64 {
    fn encode(&self) -> StoredValue {
        StoredValue::Int(*self as i64)
    }

    fn decode(key: &str, value: StoredValue) -> Result<Self, KvError> {
        match value {
            StoredValue::Int(v) => u64::try_from(v).map_err(|_| KvError::TypeMismatch {
                key: key.to_string(),
                expected: "non-negative int",
                found: "negative int",
            }),
            other => Err(KvError::type_mismatch(key, "non-negative int", &other)),
        }
    }
}

impl StoreCodec for LogBody {
    fn encode(&self) -> StoredValue {
        StoredValue::Log(self.clone())
    }

    fn decode(key: &str, value: StoredValue) -> Result<Self, KvError> {
        match value {
            StoredValue::Log(body) => Ok(body),
            other => Err(KvError::type_mismatch(key, "log", &other)),
        }
    }
}
