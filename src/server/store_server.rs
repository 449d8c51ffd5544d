use crate::grpc::grpc_kv_store_server::{GrpcKvStore, GrpcKvStoreServer};
use crate::grpc::{
    proto_compare_and_swap_result, proto_read_result, proto_write_result, ProtoCompareAndSwapReq,
    ProtoCompareAndSwapResult, ProtoKvSuccess, ProtoReadReq, ProtoReadResult, ProtoStoredValue, ProtoWriteReq,
    ProtoWriteResult,
};
use crate::kv::{kv_error_to_proto, stored_value_from_proto, KvClient, KvError, StoredValue};
use crate::server::RpcServerShutdownSignal;
use std::net::SocketAddr;
use std::sync::Arc;
use tonic::transport::Server;
use tonic::{Request, Response, Status};

/// StoreRpcServer serves a `KvClient` (normally an `InMemoryKv`) over the store's gRPC interface,
/// so nodes in other processes can share it through `GrpcKvClient`.
pub struct StoreRpcServer<K: KvClient + ?Sized> {
    logger: slog::Logger,
    store: Arc<K>,
}

impl<K: KvClient + ?Sized + 'static> StoreRpcServer<K> {
    pub fn new(logger: slog::Logger, store: Arc<K>) -> Self {
        StoreRpcServer { logger, store }
    }

    pub async fn run(self, socket_addr: SocketAddr, shutdown_signal: RpcServerShutdownSignal) {
        let logger = self.logger.clone();
        slog::info!(logger, "Store listening on '{:?}'", socket_addr);

        let result = Server::builder()
            .add_service(GrpcKvStoreServer::new(self))
            .serve_with_shutdown(socket_addr, shutdown_signal)
            .await;

        slog::info!(logger, "Store server run() has exited: {:?}", result);
    }

    async fn handle_read(&self, rpc_request: ProtoReadReq) -> Result<ProtoReadResult, Status> {
        let key = Self::convert_key(rpc_request.key)?;
        let app_result = self.store.read(&key).await;
        Ok(Self::convert_read_result(app_result))
    }

    async fn handle_write(&self, rpc_request: ProtoWriteReq) -> Result<ProtoWriteResult, Status> {
        let key = Self::convert_key(rpc_request.key)?;
        let value = Self::convert_value(rpc_request.value)?;
        let app_result = self.store.write(&key, value, rpc_request.create_if_absent).await;

        let result = match app_result {
            Ok(()) => proto_write_result::Result::Ok(ProtoKvSuccess {}),
            Err(e) => proto_write_result::Result::Err(kv_error_to_proto(e)),
        };
        Ok(ProtoWriteResult { result: Some(result) })
    }

    async fn handle_compare_and_swap(
        &self,
        rpc_request: ProtoCompareAndSwapReq,
    ) -> Result<ProtoCompareAndSwapResult, Status> {
        let key = Self::convert_key(rpc_request.key)?;
        let expected = Self::convert_value(rpc_request.expected)?;
        let new_value = Self::convert_value(rpc_request.new_value)?;
        let app_result = self
            .store
            .compare_and_swap(&key, expected, new_value, rpc_request.create_if_absent)
            .await;

        let result = match app_result {
            Ok(()) => proto_compare_and_swap_result::Result::Ok(ProtoKvSuccess {}),
            Err(e) => proto_compare_and_swap_result::Result::Err(kv_error_to_proto(e)),
        };
        Ok(ProtoCompareAndSwapResult { result: Some(result) })
    }

    fn convert_key(key: String) -> Result<String, Status> {
        if key.is_empty() {
            return Err(Status::invalid_argument("Key must be non-empty"));
        }

        Ok(key)
    }

    fn convert_value(value: Option<ProtoStoredValue>) -> Result<StoredValue, Status> {
        stored_value_from_proto(value).map_err(Status::invalid_argument)
    }

    fn convert_read_result(app_result: Result<StoredValue, KvError>) -> ProtoReadResult {
        let result = match app_result {
            Ok(value) => proto_read_result::Result::Ok(ProtoStoredValue::from(value)),
            Err(e) => proto_read_result::Result::Err(kv_error_to_proto(e)),
        };

        ProtoReadResult { result: Some(result) }
    }
}

#[async_trait::async_trait]
impl<K: KvClient + ?Sized + 'static> GrpcKvStore for StoreRpcServer<K> {
    async fn read(&self, rpc_request_wrapped: Request<ProtoReadReq>) -> Result<Response<ProtoReadResult>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let rpc_result = self.handle_read(rpc_request).await;
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }

    async fn write(&self, rpc_request_wrapped: Request<ProtoWriteReq>) -> Result<Response<ProtoWriteResult>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let rpc_result = self.handle_write(rpc_request).await;
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }

    async fn compare_and_swap(
        &self,
        rpc_request_wrapped: Request<ProtoCompareAndSwapReq>,
    ) -> Result<Response<ProtoCompareAndSwapResult>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();

        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        let rpc_result = self.handle_compare_and_swap(rpc_request).await;
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_result);

        rpc_result.map(Response::new)
    }
}
