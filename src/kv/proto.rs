//! Conversions between store types and their protobuf form, shared by `GrpcKvClient` and
//! `StoreRpcServer`.

use crate::grpc::{
    proto_kv_error, proto_stored_value, ProtoKeyAbsent, ProtoKvError, ProtoLogBody, ProtoPreconditionFailed,
    ProtoServerFault, ProtoStoredValue, ProtoTypeMismatch,
};
use crate::kv::{KvError, LogBody, StoredValue};
use bytes::Bytes;

impl From<StoredValue> for ProtoStoredValue {
    fn from(value: StoredValue) -> Self {
        let value = match value {
            StoredValue::Int(v) => proto_stored_value::Value::IntValue(v),
            StoredValue::Log(body) => proto_stored_value::Value::LogBody(ProtoLogBody {
                entries: body.into_iter().map(|(offset, data)| (offset, data.to_vec())).collect(),
            }),
        };

        ProtoStoredValue { value: Some(value) }
    }
}

pub(crate) fn stored_value_from_proto(proto: Option<ProtoStoredValue>) -> Result<StoredValue, String> {
    match proto.and_then(|p| p.value) {
        Some(proto_stored_value::Value::IntValue(v)) => Ok(StoredValue::Int(v)),
        Some(proto_stored_value::Value::LogBody(body)) => Ok(StoredValue::Log(
            body.entries
                .into_iter()
                .map(|(offset, data)| (offset, Bytes::from(data)))
                .collect::<LogBody>(),
        )),
        None => Err("missing stored value".to_string()),
    }
}

// The key travels in the request, so it is not repeated on the wire.
pub(crate) fn kv_error_to_proto(error: KvError) -> ProtoKvError {
    let err = match error {
        KvError::KeyAbsent(_) => proto_kv_error::Err::KeyAbsent(ProtoKeyAbsent {}),
        KvError::PreconditionFailed(_) => proto_kv_error::Err::PreconditionFailed(ProtoPreconditionFailed {}),
        KvError::TypeMismatch { expected, found, .. } => proto_kv_error::Err::TypeMismatch(ProtoTypeMismatch {
            expected: format!("{} (found {})", expected, found),
        }),
        KvError::Unavailable(message) => proto_kv_error::Err::ServerFault(ProtoServerFault { message }),
    };

    ProtoKvError { err: Some(err) }
}

pub(crate) fn kv_error_from_proto(key: &str, proto: ProtoKvError) -> KvError {
    match proto.err {
        Some(proto_kv_error::Err::KeyAbsent(_)) => KvError::KeyAbsent(key.to_string()),
        Some(proto_kv_error::Err::PreconditionFailed(_)) => KvError::PreconditionFailed(key.to_string()),
        Some(proto_kv_error::Err::TypeMismatch(mismatch)) => {
            KvError::Unavailable(format!("store rejected value for '{}': {}", key, mismatch.expected))
        }
        Some(proto_kv_error::Err::ServerFault(fault)) => KvError::Unavailable(fault.message),
        None => KvError::Unavailable("store replied with an empty error".to_string()),
    }
}
