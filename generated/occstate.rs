#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoStoredValue {
    #[prost(oneof = "proto_stored_value::Value", tags = "1, 2")]
    pub value: ::core::option::Option<proto_stored_value::Value>,
}
/// Nested message and enum types in `ProtoStoredValue`.
pub mod proto_stored_value {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Value {
        #[prost(int64, tag = "1")]
        IntValue(i64),
        #[prost(message, tag = "2")]
        LogBody(super::ProtoLogBody),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoLogBody {
    #[prost(map = "uint64, bytes", tag = "1")]
    pub entries: ::std::collections::HashMap<u64, ::prost::alloc::vec::Vec<u8>>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoReadReq {
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoReadResult {
    #[prost(oneof = "proto_read_result::Result", tags = "1, 2")]
    pub result: ::core::option::Option<proto_read_result::Result>,
}
/// Nested message and enum types in `ProtoReadResult`.
pub mod proto_read_result {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Result {
        #[prost(message, tag = "1")]
        Ok(super::ProtoStoredValue),
        #[prost(message, tag = "2")]
        Err(super::ProtoKvError),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoWriteReq {
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub value: ::core::option::Option<ProtoStoredValue>,
    #[prost(bool, tag = "3")]
    pub create_if_absent: bool,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoWriteResult {
    #[prost(oneof = "proto_write_result::Result", tags = "1, 2")]
    pub result: ::core::option::Option<proto_write_result::Result>,
}
/// Nested message and enum types in `ProtoWriteResult`.
pub mod proto_write_result {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Result {
        #[prost(message, tag = "1")]
        Ok(super::ProtoKvSuccess),
        #[prost(message, tag = "2")]
        Err(super::ProtoKvError),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoCompareAndSwapReq {
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub expected: ::core::option::Option<ProtoStoredValue>,
    #[prost(message, optional, tag = "3")]
    pub new_value: ::core::option::Option<ProtoStoredValue>,
    #[prost(bool, tag = "4")]
    pub create_if_absent: bool,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoCompareAndSwapResult {
    #[prost(oneof = "proto_compare_and_swap_result::Result", tags = "1, 2")]
    pub result: ::core::option::Option<proto_compare_and_swap_result::Result>,
}
/// Nested message and enum types in `ProtoCompareAndSwapResult`.
pub mod proto_compare_and_swap_result {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Result {
        #[prost(message, tag = "1")]
        Ok(super::ProtoKvSuccess),
        #[prost(message, tag = "2")]
        Err(super::ProtoKvError),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoKvSuccess {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoKvError {
    #[prost(oneof = "proto_kv_error::Err", tags = "1, 2, 3, 4")]
    pub err: ::core::option::Option<proto_kv_error::Err>,
}
/// Nested message and enum types in `ProtoKvError`.
pub mod proto_kv_error {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Err {
        #[prost(message, tag = "1")]
        KeyAbsent(super::ProtoKeyAbsent),
        #[prost(message, tag = "2")]
        PreconditionFailed(super::ProtoPreconditionFailed),
        #[prost(message, tag = "3")]
        TypeMismatch(super::ProtoTypeMismatch),
        #[prost(message, tag = "4")]
        ServerFault(super::ProtoServerFault),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoKeyAbsent {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoPreconditionFailed {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoTypeMismatch {
    #[prost(string, tag = "1")]
    pub expected: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoServerFault {
    #[prost(string, tag = "1")]
    pub message: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoAddReq {
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
    #[prost(int64, tag = "2")]
    pub delta: i64,
    #[prost(uint64, tag = "3")]
    pub timeout_millis: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoAddReply {
    #[prost(int64, tag = "1")]
    pub value: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoReadCounterReq {
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
    #[prost(uint64, tag = "2")]
    pub timeout_millis: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoReadCounterReply {
    #[prost(int64, tag = "1")]
    pub value: i64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoPayload {
    #[prost(bytes = "vec", tag = "1")]
    pub data: ::prost::alloc::vec::Vec<u8>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoSendReq {
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub msg: ::core::option::Option<ProtoPayload>,
    #[prost(uint64, tag = "3")]
    pub timeout_millis: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoSendReply {
    #[prost(uint64, tag = "1")]
    pub offset: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoPollReq {
    #[prost(map = "string, int64", tag = "1")]
    pub offsets: ::std::collections::HashMap<::prost::alloc::string::String, i64>,
    #[prost(uint64, tag = "2")]
    pub timeout_millis: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoLogEntry {
    #[prost(uint64, tag = "1")]
    pub offset: u64,
    #[prost(bytes = "vec", tag = "2")]
    pub data: ::prost::alloc::vec::Vec<u8>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoLogEntries {
    #[prost(message, repeated, tag = "1")]
    pub entries: ::prost::alloc::vec::Vec<ProtoLogEntry>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoPollReply {
    #[prost(map = "string, message", tag = "1")]
    pub msgs: ::std::collections::HashMap<::prost::alloc::string::String, ProtoLogEntries>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoCommitOffsetsReq {
    #[prost(map = "string, int64", tag = "1")]
    pub offsets: ::std::collections::HashMap<::prost::alloc::string::String, i64>,
    #[prost(uint64, tag = "2")]
    pub timeout_millis: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoCommitOffsetsReply {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoListCommittedOffsetsReq {
    #[prost(string, repeated, tag = "1")]
    pub keys: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(uint64, tag = "2")]
    pub timeout_millis: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoListCommittedOffsetsReply {
    #[prost(map = "string, uint64", tag = "1")]
    pub offsets: ::std::collections::HashMap<::prost::alloc::string::String, u64>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoUnfilledOffsetsReq {
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
    #[prost(uint64, tag = "2")]
    pub timeout_millis: u64,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoUnfilledOffsetsReply {
    #[prost(uint64, repeated, tag = "1")]
    pub offsets: ::prost::alloc::vec::Vec<u64>,
}
#[doc = r" Generated client implementations."]
pub mod grpc_kv_store_client {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = " ------- Store boundary --------"]
    #[doc = ""]
    #[doc = " Single-key operations of the shared store. Every node's composite operations are built out of"]
    #[doc = " these three calls and nothing else."]
    pub struct GrpcKvStoreClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl GrpcKvStoreClient<tonic::transport::Channel> {
        #[doc = r" Attempt to create a new client by connecting to a given endpoint."]
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: std::convert::TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> GrpcKvStoreClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + HttpBody + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as HttpBody>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = tonic::client::Grpc::with_interceptor(inner, interceptor);
            Self { inner }
        }
        pub async fn read(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoReadReq>,
        ) -> Result<tonic::Response<super::ProtoReadResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/occstate.GrpcKvStore/Read");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn write(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoWriteReq>,
        ) -> Result<tonic::Response<super::ProtoWriteResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/occstate.GrpcKvStore/Write");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn compare_and_swap(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoCompareAndSwapReq>,
        ) -> Result<tonic::Response<super::ProtoCompareAndSwapResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/occstate.GrpcKvStore/CompareAndSwap");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
    impl<T: Clone> Clone for GrpcKvStoreClient<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }
    impl<T> std::fmt::Debug for GrpcKvStoreClient<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "GrpcKvStoreClient {{ ... }}")
        }
    }
}
#[doc = r" Generated client implementations."]
pub mod grpc_state_node_client {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = " ------- Operation surface --------"]
    #[doc = ""]
    #[doc = " `timeout_millis` of 0 means \"use the node's default operation timeout\"."]
    pub struct GrpcStateNodeClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl GrpcStateNodeClient<tonic::transport::Channel> {
        #[doc = r" Attempt to create a new client by connecting to a given endpoint."]
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: std::convert::TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> GrpcStateNodeClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + HttpBody + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as HttpBody>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = tonic::client::Grpc::with_interceptor(inner, interceptor);
            Self { inner }
        }
        pub async fn add(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoAddReq>,
        ) -> Result<tonic::Response<super::ProtoAddReply>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/occstate.GrpcStateNode/Add");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn read(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoReadCounterReq>,
        ) -> Result<tonic::Response<super::ProtoReadCounterReply>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/occstate.GrpcStateNode/Read");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn send(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoSendReq>,
        ) -> Result<tonic::Response<super::ProtoSendReply>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/occstate.GrpcStateNode/Send");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn poll(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoPollReq>,
        ) -> Result<tonic::Response<super::ProtoPollReply>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/occstate.GrpcStateNode/Poll");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn commit_offsets(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoCommitOffsetsReq>,
        ) -> Result<tonic::Response<super::ProtoCommitOffsetsReply>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/occstate.GrpcStateNode/CommitOffsets");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn list_committed_offsets(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoListCommittedOffsetsReq>,
        ) -> Result<tonic::Response<super::ProtoListCommittedOffsetsReply>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/occstate.GrpcStateNode/ListCommittedOffsets",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn unfilled_offsets(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoUnfilledOffsetsReq>,
        ) -> Result<tonic::Response<super::ProtoUnfilledOffsetsReply>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/occstate.GrpcStateNode/UnfilledOffsets");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
    impl<T: Clone> Clone for GrpcStateNodeClient<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }
    impl<T> std::fmt::Debug for GrpcStateNodeClient<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "GrpcStateNodeClient {{ ... }}")
        }
    }
}
#[doc = r" Generated server implementations."]
pub mod grpc_kv_store_server {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = "Generated trait containing gRPC methods that should be implemented for use with GrpcKvStoreServer."]
    #[async_trait]
    pub trait GrpcKvStore: Send + Sync + 'static {
        async fn read(
            &self,
            request: tonic::Request<super::ProtoReadReq>,
        ) -> Result<tonic::Response<super::ProtoReadResult>, tonic::Status>;
        async fn write(
            &self,
            request: tonic::Request<super::ProtoWriteReq>,
        ) -> Result<tonic::Response<super::ProtoWriteResult>, tonic::Status>;
        async fn compare_and_swap(
            &self,
            request: tonic::Request<super::ProtoCompareAndSwapReq>,
        ) -> Result<tonic::Response<super::ProtoCompareAndSwapResult>, tonic::Status>;
    }
    #[doc = " ------- Store boundary --------"]
    #[doc = ""]
    #[doc = " Single-key operations of the shared store. Every node's composite operations are built out of"]
    #[doc = " these three calls and nothing else."]
    #[derive(Debug)]
    pub struct GrpcKvStoreServer<T: GrpcKvStore> {
        inner: _Inner<T>,
    }
    struct _Inner<T>(Arc<T>, Option<tonic::Interceptor>);
    impl<T: GrpcKvStore> GrpcKvStoreServer<T> {
        pub fn new(inner: T) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, None);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, Some(interceptor.into()));
            Self { inner }
        }
    }
    impl<T, B> Service<http::Request<B>> for GrpcKvStoreServer<T>
    where
        T: GrpcKvStore,
        B: HttpBody + Send + Sync + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = Never;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/occstate.GrpcKvStore/Read" => {
                    #[allow(non_camel_case_types)]
                    struct ReadSvc<T: GrpcKvStore>(pub Arc<T>);
                    impl<T: GrpcKvStore> tonic::server::UnaryService<super::ProtoReadReq> for ReadSvc<T> {
                        type Response = super::ProtoReadResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoReadReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).read(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = ReadSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/occstate.GrpcKvStore/Write" => {
                    #[allow(non_camel_case_types)]
                    struct WriteSvc<T: GrpcKvStore>(pub Arc<T>);
                    impl<T: GrpcKvStore> tonic::server::UnaryService<super::ProtoWriteReq> for WriteSvc<T> {
                        type Response = super::ProtoWriteResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoWriteReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).write(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = WriteSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/occstate.GrpcKvStore/CompareAndSwap" => {
                    #[allow(non_camel_case_types)]
                    struct CompareAndSwapSvc<T: GrpcKvStore>(pub Arc<T>);
                    impl<T: GrpcKvStore> tonic::server::UnaryService<super::ProtoCompareAndSwapReq>
                        for CompareAndSwapSvc<T>
                    {
                        type Response = super::ProtoCompareAndSwapResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoCompareAndSwapReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).compare_and_swap(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = CompareAndSwapSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::BoxBody::empty())
                        .unwrap())
                }),
            }
        }
    }
    impl<T: GrpcKvStore> Clone for GrpcKvStoreServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self { inner }
        }
    }
    impl<T: GrpcKvStore> Clone for _Inner<T> {
        fn clone(&self) -> Self {
            Self(self.0.clone(), self.1.clone())
        }
    }
    impl<T: std::fmt::Debug> std::fmt::Debug for _Inner<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }
    impl<T: GrpcKvStore> tonic::transport::NamedService for GrpcKvStoreServer<T> {
        const NAME: &'static str = "occstate.GrpcKvStore";
    }
}
#[doc = r" Generated server implementations."]
pub mod grpc_state_node_server {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = "Generated trait containing gRPC methods that should be implemented for use with GrpcStateNodeServer."]
    #[async_trait]
    pub trait GrpcStateNode: Send + Sync + 'static {
        async fn add(
            &self,
            request: tonic::Request<super::ProtoAddReq>,
        ) -> Result<tonic::Response<super::ProtoAddReply>, tonic::Status>;
        async fn read(
            &self,
            request: tonic::Request<super::ProtoReadCounterReq>,
        ) -> Result<tonic::Response<super::ProtoReadCounterReply>, tonic::Status>;
        async fn send(
            &self,
            request: tonic::Request<super::ProtoSendReq>,
        ) -> Result<tonic::Response<super::ProtoSendReply>, tonic::Status>;
        async fn poll(
            &self,
            request: tonic::Request<super::ProtoPollReq>,
        ) -> Result<tonic::Response<super::ProtoPollReply>, tonic::Status>;
        async fn commit_offsets(
            &self,
            request: tonic::Request<super::ProtoCommitOffsetsReq>,
        ) -> Result<tonic::Response<super::ProtoCommitOffsetsReply>, tonic::Status>;
        async fn list_committed_offsets(
            &self,
            request: tonic::Request<super::ProtoListCommittedOffsetsReq>,
        ) -> Result<tonic::Response<super::ProtoListCommittedOffsetsReply>, tonic::Status>;
        async fn unfilled_offsets(
            &self,
            request: tonic::Request<super::ProtoUnfilledOffsetsReq>,
        ) -> Result<tonic::Response<super::ProtoUnfilledOffsetsReply>, tonic::Status>;
    }
    #[doc = " ------- Operation surface --------"]
    #[doc = ""]
    #[doc = " `timeout_millis` of 0 means \"use the node's default operation timeout\"."]
    #[derive(Debug)]
    pub struct GrpcStateNodeServer<T: GrpcStateNode> {
        inner: _Inner<T>,
    }
    struct _Inner<T>(Arc<T>, Option<tonic::Interceptor>);
    impl<T: GrpcStateNode> GrpcStateNodeServer<T> {
        pub fn new(inner: T) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, None);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, Some(interceptor.into()));
            Self { inner }
        }
    }
    impl<T, B> Service<http::Request<B>> for GrpcStateNodeServer<T>
    where
        T: GrpcStateNode,
        B: HttpBody + Send + Sync + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = Never;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/occstate.GrpcStateNode/Add" => {
                    #[allow(non_camel_case_types)]
                    struct AddSvc<T: GrpcStateNode>(pub Arc<T>);
                    impl<T: GrpcStateNode> tonic::server::UnaryService<super::ProtoAddReq> for AddSvc<T> {
                        type Response = super::ProtoAddReply;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoAddReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).add(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = AddSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/occstate.GrpcStateNode/Read" => {
                    #[allow(non_camel_case_types)]
                    struct ReadSvc<T: GrpcStateNode>(pub Arc<T>);
                    impl<T: GrpcStateNode> tonic::server::UnaryService<super::ProtoReadCounterReq> for ReadSvc<T> {
                        type Response = super::ProtoReadCounterReply;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoReadCounterReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).read(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = ReadSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/occstate.GrpcStateNode/Send" => {
                    #[allow(non_camel_case_types)]
                    struct SendSvc<T: GrpcStateNode>(pub Arc<T>);
                    impl<T: GrpcStateNode> tonic::server::UnaryService<super::ProtoSendReq> for SendSvc<T> {
                        type Response = super::ProtoSendReply;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoSendReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).send(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = SendSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/occstate.GrpcStateNode/Poll" => {
                    #[allow(non_camel_case_types)]
                    struct PollSvc<T: GrpcStateNode>(pub Arc<T>);
                    impl<T: GrpcStateNode> tonic::server::UnaryService<super::ProtoPollReq> for PollSvc<T> {
                        type Response = super::ProtoPollReply;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoPollReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).poll(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = PollSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/occstate.GrpcStateNode/CommitOffsets" => {
                    #[allow(non_camel_case_types)]
                    struct CommitOffsetsSvc<T: GrpcStateNode>(pub Arc<T>);
                    impl<T: GrpcStateNode> tonic::server::UnaryService<super::ProtoCommitOffsetsReq>
                        for CommitOffsetsSvc<T>
                    {
                        type Response = super::ProtoCommitOffsetsReply;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoCommitOffsetsReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).commit_offsets(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = CommitOffsetsSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/occstate.GrpcStateNode/ListCommittedOffsets" => {
                    #[allow(non_camel_case_types)]
                    struct ListCommittedOffsetsSvc<T: GrpcStateNode>(pub Arc<T>);
                    impl<T: GrpcStateNode>
                        tonic::server::UnaryService<super::ProtoListCommittedOffsetsReq>
                        for ListCommittedOffsetsSvc<T>
                    {
                        type Response = super::ProtoListCommittedOffsetsReply;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoListCommittedOffsetsReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).list_committed_offsets(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = ListCommittedOffsetsSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/occstate.GrpcStateNode/UnfilledOffsets" => {
                    #[allow(non_camel_case_types)]
                    struct UnfilledOffsetsSvc<T: GrpcStateNode>(pub Arc<T>);
                    impl<T: GrpcStateNode>
                        tonic::server::UnaryService<super::ProtoUnfilledOffsetsReq>
                        for UnfilledOffsetsSvc<T>
                    {
                        type Response = super::ProtoUnfilledOffsetsReply;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoUnfilledOffsetsReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).unfilled_offsets(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = UnfilledOffsetsSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::BoxBody::empty())
                        .unwrap())
                }),
            }
        }
    }
    impl<T: GrpcStateNode> Clone for GrpcStateNodeServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self { inner }
        }
    }
    impl<T: GrpcStateNode> Clone for _Inner<T> {
        fn clone(&self) -> Self {
            Self(self.0.clone(), self.1.clone())
        }
    }
    impl<T: std::fmt::Debug> std::fmt::Debug for _Inner<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }
    impl<T: GrpcStateNode> tonic::transport::NamedService for GrpcStateNodeServer<T> {
        const NAME: &'static str = "occstate.GrpcStateNode";
    }
}
