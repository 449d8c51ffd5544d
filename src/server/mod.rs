mod node_server;
mod shutdown;
mod store_server;

pub use node_server::NodeRpcServer;
pub use shutdown::shutdown_signal;
pub use shutdown::RpcServerShutdownHandle;
pub use shutdown::RpcServerShutdownSignal;
pub use store_server::StoreRpcServer;
