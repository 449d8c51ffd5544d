use crate::grpc::grpc_kv_store_client::GrpcKvStoreClient;
use crate::grpc::{
    proto_compare_and_swap_result, proto_read_result, proto_write_result, ProtoCompareAndSwapReq, ProtoReadReq,
    ProtoStoredValue, ProtoWriteReq,
};
use crate::kv::proto::{kv_error_from_proto, stored_value_from_proto};
use crate::kv::{KvClient, KvError, StoredValue};
use std::error::Error;
use std::net::Ipv4Addr;
use tonic::codegen::http::uri;
use tonic::transport::{Channel, Endpoint};

/// GrpcKvClient is a `KvClient` for a store served remotely by `StoreRpcServer`.
#[derive(Clone)]
pub struct GrpcKvClient {
    logger: slog::Logger,
    inner: GrpcKvStoreClient<Channel>,
}

impl GrpcKvClient {
    pub async fn connect(logger: slog::Logger, ip: Ipv4Addr, port: u16) -> Result<Self, ConnectError> {
        let ip_octets = ip.octets();
        let url = format!(
            "http://{}.{}.{}.{}:{}",
            ip_octets[0], ip_octets[1], ip_octets[2], ip_octets[3], port
        );
        slog::info!(logger, "Connecting to store at {} ...", url);
        let endpoint = Endpoint::from_shared(url)?;

        let connection = endpoint.connect().await?;

        Ok(GrpcKvClient {
            logger,
            inner: GrpcKvStoreClient::new(connection),
        })
    }

    fn transport_error(&self, key: &str, status: tonic::Status) -> KvError {
        slog::debug!(self.logger, "ClientWire - key '{}' failed with {:?}", key, status);
        KvError::Unavailable(format!("{:?}: {}", status.code(), status.message()))
    }
}

#[async_trait::async_trait]
impl KvClient for GrpcKvClient {
    async fn read(&self, key: &str) -> Result<StoredValue, KvError> {
        let rpc_request = ProtoReadReq { key: key.to_string() };

        let rpc_reply = self
            .inner
            .clone()
            .read(rpc_request)
            .await
            .map_err(|status| self.transport_error(key, status))?
            .into_inner();

        match rpc_reply.result {
            Some(proto_read_result::Result::Ok(value)) => {
                stored_value_from_proto(Some(value)).map_err(KvError::Unavailable)
            }
            Some(proto_read_result::Result::Err(err)) => Err(kv_error_from_proto(key, err)),
            None => Err(KvError::Unavailable("store replied without a result".to_string())),
        }
    }

    async fn write(&self, key: &str, value: StoredValue, create_if_absent: bool) -> Result<(), KvError> {
        let rpc_request = ProtoWriteReq {
            key: key.to_string(),
            value: Some(ProtoStoredValue::from(value)),
            create_if_absent,
        };

        let rpc_reply = self
            .inner
            .clone()
            .write(rpc_request)
            .await
            .map_err(|status| self.transport_error(key, status))?
            .into_inner();

        match rpc_reply.result {
            Some(proto_write_result::Result::Ok(_)) => Ok(()),
            Some(proto_write_result::Result::Err(err)) => Err(kv_error_from_proto(key, err)),
            None => Err(KvError::Unavailable("store replied without a result".to_string())),
        }
    }

    async fn compare_and_swap(
        &self,
        key: &str,
        expected: StoredValue,
        new_value: StoredValue,
        create_if_absent: bool,
    ) -> Result<(), KvError> {
        let rpc_request = ProtoCompareAndSwapReq {
            key: key.to_string(),
            expected: Some(ProtoStoredValue::from(expected)),
            new_value: Some(ProtoStoredValue::from(new_value)),
            create_if_absent,
        };

        let rpc_reply = self
            .inner
            .clone()
            .compare_and_swap(rpc_request)
            .await
            .map_err(|status| self.transport_error(key, status))?
            .into_inner();

        match rpc_reply.result {
            Some(proto_compare_and_swap_result::Result::Ok(_)) => Ok(()),
            Some(proto_compare_and_swap_result::Result::Err(err)) => Err(kv_error_from_proto(key, err)),
            None => Err(KvError::Unavailable("store replied without a result".to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("Invalid store URI")]
    InvalidUri(#[from] uri::InvalidUri),
    #[error("Failed to connect to store")]
    ConnectFailure(Box<dyn Error + Send + Sync>),
}

impl From<tonic::transport::Error> for ConnectError {
    fn from(e: tonic::transport::Error) -> Self {
        ConnectError::ConnectFailure(e.into())
    }
}
