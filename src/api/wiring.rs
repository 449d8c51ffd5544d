use crate::api::node::StateNode;
use crate::api::options::OccOptionsValidated;
use crate::kv::{ConnectError, GrpcKvClient, InMemoryKv, KvClient};
use crate::OccOptions;
use std::convert::TryFrom;
use std::net::Ipv4Addr;
use std::sync::Arc;

pub struct StateNodeConfig {
    pub node_id: String,
    pub store: StoreLocation,
    pub info_logger: slog::Logger,
    pub options: OccOptions,
}

/// Where the shared store lives. Nodes that should see each other's state must be given the same
/// store: clones of one `InMemoryKv`, or the same remote address.
pub enum StoreLocation {
    InProcess(InMemoryKv),
    Remote { ip: Ipv4Addr, port: u16 },
}

#[derive(Debug, thiserror::Error)]
pub enum StateNodeCreationError {
    #[error("Illegal options for configuring node: {0}")]
    IllegalOptions(String),
    #[error("Failed to connect to store")]
    StoreConnection(#[source] ConnectError),
}

pub async fn try_create_state_node(config: StateNodeConfig) -> Result<StateNode, StateNodeCreationError> {
    let logger = config.info_logger.new(slog::o!("NodeId" => config.node_id));

    let options = OccOptionsValidated::try_from(config.options)
        .map_err(|e| StateNodeCreationError::IllegalOptions(e.to_string()))?;

    let kv: Arc<dyn KvClient> = match config.store {
        StoreLocation::InProcess(kv) => Arc::new(kv),
        StoreLocation::Remote { ip, port } => {
            let client = GrpcKvClient::connect(logger.clone(), ip, port)
                .await
                .map_err(StateNodeCreationError::StoreConnection)?;
            Arc::new(client)
        }
    };

    slog::info!(logger, "State node ready");
    Ok(StateNode::new(logger, kv, options))
}
