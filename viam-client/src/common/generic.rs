use std::rc::Rc;

use super::component::{component_resource_name, ComponentClient, ComponentType};
use super::grpc_client::{call_unary, Channel, GrpcClientError};
use crate::google::protobuf::Struct;
use crate::proto::common::v1::{DoCommandRequest, DoCommandResponse, ResourceName};

pub static COMPONENT_NAME: &str = "generic";

#[cfg(feature = "builtin-components")]
pub(crate) fn register_client(registry: &mut super::registry::ClientRegistry) {
    if registry
        .register_component_client(COMPONENT_NAME, &GenericClient::from_channel)
        .is_err()
    {
        log::error!("generic client is already registered");
    }
}

/// Client proxy for a remote generic component, a catch-all for hardware
/// that only speaks `DoCommand`.
#[derive(Clone)]
pub struct GenericClient {
    name: String,
    channel: Channel,
}

impl GenericClient {
    pub fn new(name: impl Into<String>, channel: Channel) -> Self {
        Self {
            name: name.into(),
            channel,
        }
    }

    pub(crate) fn from_channel(name: String, channel: Channel) -> ComponentType {
        Rc::new(Self { name, channel })
    }

    /// The [`ResourceName`] under which a generic component named `name` is
    /// exposed.
    pub fn resource_name(name: &str) -> ResourceName {
        component_resource_name(COMPONENT_NAME, name)
    }

    pub async fn do_command(&self, command: Struct) -> Result<Struct, GrpcClientError> {
        let req = DoCommandRequest {
            name: self.name.clone(),
            command: Some(command),
        };
        let resp: DoCommandResponse = call_unary(
            self.channel.as_ref(),
            "/viam.component.generic.v1.GenericService/DoCommand",
            req,
        )
        .await?;
        Ok(resp.result.unwrap_or_default())
    }
}

impl ComponentClient for GenericClient {
    fn name(&self) -> &str {
        &self.name
    }
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
