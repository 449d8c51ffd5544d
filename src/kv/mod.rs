mod client;
mod grpc_client;
mod in_memory;
mod proto;
mod value;

pub use client::KvClient;
pub use client::KvError;
pub use grpc_client::ConnectError;
pub use grpc_client::GrpcKvClient;
pub use in_memory::InMemoryKv;
pub use value::LogBody;
pub use value::StoreCodec;
pub use value::StoredValue;

// So the store server can speak the same wire format as the client.
pub(crate) use proto::{kv_error_to_proto, stored_value_from_proto};

#[cfg(test)]
mod test_utils;
#[cfg(test)]
pub(crate) use test_utils::{Fault, ScriptedKv};
