mod api;
mod kv;
mod occ;
mod server;
mod service;
mod grpc {
    include!("../generated/occstate.rs");
}

pub use api::try_create_state_node;
pub use api::AddInput;
pub use api::AddOutput;
pub use api::CommitOffsetsInput;
pub use api::CommitOffsetsOutput;
pub use api::ListCommittedOffsetsInput;
pub use api::ListCommittedOffsetsOutput;
pub use api::NodeError;
pub use api::OccOptions;
pub use api::PollInput;
pub use api::PollOutput;
pub use api::ReadInput;
pub use api::ReadOutput;
pub use api::SendInput;
pub use api::SendOutput;
pub use api::StateNode;
pub use api::StateNodeConfig;
pub use api::StateNodeCreationError;
pub use api::StoreLocation;
pub use api::UnfilledOffsetsInput;
pub use api::UnfilledOffsetsOutput;
pub use kv::ConnectError;
pub use kv::GrpcKvClient;
pub use kv::InMemoryKv;
pub use kv::KvClient;
pub use kv::KvError;
pub use kv::LogBody;
pub use kv::StoreCodec;
pub use kv::StoredValue;
pub use occ::Applied;
pub use occ::ConflictBackoff;
pub use occ::Deadline;
pub use occ::OccError;
pub use occ::OccRetry;
pub use occ::Rejection;
pub use server::shutdown_signal;
pub use server::NodeRpcServer;
pub use server::RpcServerShutdownHandle;
pub use server::RpcServerShutdownSignal;
pub use server::StoreRpcServer;
pub use service::CommitTracker;
pub use service::CounterService;
pub use service::LogEntry;
pub use service::LogService;

// `crate::{root_mod}` holds no code, only `mod` and `pub use` statements. No `mod` is `pub`;
// everything public is exported one item at a time.
