use super::grpc_client::{call_unary, Channel, GrpcClientError};
use crate::google::protobuf::Struct;
use crate::proto::common::v1::{DoCommandRequest, DoCommandResponse};

/// A robot-wide service proxy. Unlike components, service clients are
/// constructed lazily on every lookup and bound only to the shared channel.
pub trait ServiceClient {
    /// The service subtype under which the robot advertises this service.
    const SUBTYPE: &'static str;

    fn from_channel(channel: Channel) -> Self;
}

/// Client proxy for the generic service.
#[derive(Clone)]
pub struct GenericServiceClient {
    channel: Channel,
}

impl ServiceClient for GenericServiceClient {
    const SUBTYPE: &'static str = "generic";

    fn from_channel(channel: Channel) -> Self {
        Self { channel }
    }
}

impl GenericServiceClient {
    pub async fn do_command(
        &self,
        name: &str,
        command: Struct,
    ) -> Result<Struct, GrpcClientError> {
        let req = DoCommandRequest {
            name: name.to_owned(),
            command: Some(command),
        };
        let resp: DoCommandResponse = call_unary(
            self.channel.as_ref(),
            "/viam.service.generic.v1.GenericService/DoCommand",
            req,
        )
        .await?;
        Ok(resp.result.unwrap_or_default())
    }
}
