use crate::api::{
    AddInput, AddOutput, CommitOffsetsInput, ListCommittedOffsetsInput, ListCommittedOffsetsOutput, NodeError,
    PollInput, PollOutput, ReadInput, ReadOutput, SendInput, SendOutput, StateNode, UnfilledOffsetsInput,
    UnfilledOffsetsOutput,
};
use crate::grpc::grpc_state_node_server::{GrpcStateNode, GrpcStateNodeServer};
use crate::grpc::{
    ProtoAddReply, ProtoAddReq, ProtoCommitOffsetsReply, ProtoCommitOffsetsReq, ProtoListCommittedOffsetsReply,
    ProtoListCommittedOffsetsReq, ProtoLogEntries, ProtoLogEntry, ProtoPollReply, ProtoPollReq,
    ProtoReadCounterReply, ProtoReadCounterReq, ProtoSendReply, ProtoSendReq, ProtoUnfilledOffsetsReply,
    ProtoUnfilledOffsetsReq,
};
use crate::server::RpcServerShutdownSignal;
use bytes::Bytes;
use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::time::Duration;
use tonic::transport::Server;
use tonic::{Request, Response, Status};

/// NodeRpcServer exposes a `StateNode`'s operations to remote callers.
pub struct NodeRpcServer {
    logger: slog::Logger,
    node: Arc<StateNode>,
}

impl NodeRpcServer {
    pub fn new(logger: slog::Logger, node: Arc<StateNode>) -> Self {
        NodeRpcServer { logger, node }
    }

    pub async fn run(self, socket_addr: SocketAddr, shutdown_signal: RpcServerShutdownSignal) {
        let logger = self.logger.clone();
        slog::info!(logger, "Node listening on '{:?}'", socket_addr);

        let result = Server::builder()
            .add_service(GrpcStateNodeServer::new(self))
            .serve_with_shutdown(socket_addr, shutdown_signal)
            .await;

        slog::info!(logger, "Node server run() has exited: {:?}", result);
    }

    async fn handle_add(&self, rpc_request: ProtoAddReq) -> Result<ProtoAddReply, Status> {
        let app_input = AddInput {
            key: rpc_request.key,
            delta: rpc_request.delta,
            timeout: Self::convert_timeout(rpc_request.timeout_millis),
        };
        let app_result = self.node.add(app_input).await;
        app_result
            .map(|AddOutput { value }| ProtoAddReply { value })
            .map_err(Self::convert_node_error)
    }

    async fn handle_read(&self, rpc_request: ProtoReadCounterReq) -> Result<ProtoReadCounterReply, Status> {
        let app_input = ReadInput {
            key: rpc_request.key,
            timeout: Self::convert_timeout(rpc_request.timeout_millis),
        };
        let app_result = self.node.read(app_input).await;
        app_result
            .map(|ReadOutput { value }| ProtoReadCounterReply { value })
            .map_err(Self::convert_node_error)
    }

    async fn handle_send(&self, rpc_request: ProtoSendReq) -> Result<ProtoSendReply, Status> {
        let app_input = Self::convert_send_input(rpc_request)?;
        let app_result = self.node.send(app_input).await;
        app_result
            .map(|SendOutput { offset }| ProtoSendReply { offset })
            .map_err(Self::convert_node_error)
    }

    fn convert_send_input(rpc_request: ProtoSendReq) -> Result<SendInput, Status> {
        let msg = rpc_request
            .msg
            .ok_or_else(|| Status::invalid_argument("Send requires a msg"))?;

        Ok(SendInput {
            key: rpc_request.key,
            payload: Bytes::from(msg.data),
            timeout: Self::convert_timeout(rpc_request.timeout_millis),
        })
    }

    async fn handle_poll(&self, rpc_request: ProtoPollReq) -> Result<ProtoPollReply, Status> {
        let app_input = PollInput {
            offsets: Self::convert_offsets(rpc_request.offsets)?,
            timeout: Self::convert_timeout(rpc_request.timeout_millis),
        };
        let app_result = self.node.poll(app_input).await;
        app_result
            .map(Self::convert_poll_output)
            .map_err(Self::convert_node_error)
    }

    fn convert_poll_output(app_output: PollOutput) -> ProtoPollReply {
        let msgs = app_output
            .msgs
            .into_iter()
            .map(|(key, entries)| {
                let entries = entries
                    .into_iter()
                    .map(|entry| ProtoLogEntry {
                        offset: entry.offset,
                        data: entry.payload.to_vec(),
                    })
                    .collect();
                (key, ProtoLogEntries { entries })
            })
            .collect();

        ProtoPollReply { msgs }
    }

    async fn handle_commit_offsets(&self, rpc_request: ProtoCommitOffsetsReq) -> Result<ProtoCommitOffsetsReply, Status> {
        let app_input = CommitOffsetsInput {
            offsets: Self::convert_offsets(rpc_request.offsets)?,
            timeout: Self::convert_timeout(rpc_request.timeout_millis),
        };
        let app_result = self.node.commit_offsets(app_input).await;
        app_result
            .map(|_| ProtoCommitOffsetsReply {
                // Empty
            })
            .map_err(Self::convert_node_error)
    }

    async fn handle_list_committed_offsets(
        &self,
        rpc_request: ProtoListCommittedOffsetsReq,
    ) -> Result<ProtoListCommittedOffsetsReply, Status> {
        let app_input = ListCommittedOffsetsInput {
            keys: rpc_request.keys,
            timeout: Self::convert_timeout(rpc_request.timeout_millis),
        };
        let app_result = self.node.list_committed_offsets(app_input).await;
        app_result
            .map(|ListCommittedOffsetsOutput { offsets }| ProtoListCommittedOffsetsReply {
                offsets: offsets.into_iter().collect(),
            })
            .map_err(Self::convert_node_error)
    }

    async fn handle_unfilled_offsets(
        &self,
        rpc_request: ProtoUnfilledOffsetsReq,
    ) -> Result<ProtoUnfilledOffsetsReply, Status> {
        let app_input = UnfilledOffsetsInput {
            key: rpc_request.key,
            timeout: Self::convert_timeout(rpc_request.timeout_millis),
        };
        let app_result = self.node.unfilled_offsets(app_input).await;
        app_result
            .map(|UnfilledOffsetsOutput { offsets }| ProtoUnfilledOffsetsReply { offsets })
            .map_err(Self::convert_node_error)
    }

    fn convert_timeout(timeout_millis: u64) -> Option<Duration> {
        match timeout_millis {
            0 => None,
            millis => Some(Duration::from_millis(millis)),
        }
    }

    fn convert_offsets(offsets: HashMap<String, i64>) -> Result<BTreeMap<String, u64>, Status> {
        let mut converted = BTreeMap::new();
        for (key, offset) in offsets {
            if offset < 0 {
                return Err(Status::invalid_argument(format!(
                    "Offset for '{}' is negative: {}",
                    key, offset
                )));
            }
            converted.insert(key, offset as u64);
        }

        Ok(converted)
    }

    fn convert_node_error(app_error: NodeError) -> Status {
        match app_error {
            NodeError::MalformedInput(message) => Status::invalid_argument(message),
            NodeError::Timeout(message) => Status::deadline_exceeded(message),
            NodeError::StoreFailure(e) => Status::unavailable(e.to_string()),
            NodeError::Rejected(message) => Status::failed_precondition(message),
        }
    }
}

#[async_trait::async_trait]
impl GrpcStateNode for NodeRpcServer {
    async fn add(&self, rpc_request_wrapped: Request<ProtoAddReq>) -> Result<Response<ProtoAddReply>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let rpc_result = self.handle_add(rpc_request).await;
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }

    async fn read(
        &self,
        rpc_request_wrapped: Request<ProtoReadCounterReq>,
    ) -> Result<Response<ProtoReadCounterReply>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let rpc_result = self.handle_read(rpc_request).await;
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }

    async fn send(&self, rpc_request_wrapped: Request<ProtoSendReq>) -> Result<Response<ProtoSendReply>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let rpc_result = self.handle_send(rpc_request).await;
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }

    async fn poll(&self, rpc_request_wrapped: Request<ProtoPollReq>) -> Result<Response<ProtoPollReply>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let rpc_result = self.handle_poll(rpc_request).await;
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }

    async fn commit_offsets(
        &self,
        rpc_request_wrapped: Request<ProtoCommitOffsetsReq>,
    ) -> Result<Response<ProtoCommitOffsetsReply>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let rpc_result = self.handle_commit_offsets(rpc_request).await;
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }

    async fn list_committed_offsets(
        &self,
        rpc_request_wrapped: Request<ProtoListCommittedOffsetsReq>,
    ) -> Result<Response<ProtoListCommittedOffsetsReply>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let rpc_result = self.handle_list_committed_offsets(rpc_request).await;
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }

    async fn unfilled_offsets(
        &self,
        rpc_request_wrapped: Request<ProtoUnfilledOffsetsReq>,
    ) -> Result<Response<ProtoUnfilledOffsetsReply>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let rpc_result = self.handle_unfilled_offsets(rpc_request).await;
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }
}
