use std::rc::Rc;

use super::component::{component_resource_name, ComponentClient, ComponentType};
use super::grpc_client::{call_unary, Channel, GrpcClientError};
use crate::proto::common::v1::ResourceName;
use crate::proto::component::gripper::v1::{
    GrabRequest, GrabResponse, OpenRequest, OpenResponse, StopRequest, StopResponse,
};

pub static COMPONENT_NAME: &str = "gripper";

#[cfg(feature = "builtin-components")]
pub(crate) fn register_client(registry: &mut super::registry::ClientRegistry) {
    if registry
        .register_component_client(COMPONENT_NAME, &GripperClient::from_channel)
        .is_err()
    {
        log::error!("gripper client is already registered");
    }
}

/// Client proxy for a remote gripper.
#[derive(Clone)]
pub struct GripperClient {
    name: String,
    channel: Channel,
}

impl GripperClient {
    pub fn new(name: impl Into<String>, channel: Channel) -> Self {
        Self {
            name: name.into(),
            channel,
        }
    }

    pub(crate) fn from_channel(name: String, channel: Channel) -> ComponentType {
        Rc::new(Self { name, channel })
    }

    /// The [`ResourceName`] under which a gripper named `name` is exposed.
    pub fn resource_name(name: &str) -> ResourceName {
        component_resource_name(COMPONENT_NAME, name)
    }

    pub async fn open(&self) -> Result<(), GrpcClientError> {
        let req = OpenRequest {
            name: self.name.clone(),
            extra: None,
        };
        let _: OpenResponse = call_unary(
            self.channel.as_ref(),
            "/viam.component.gripper.v1.GripperService/Open",
            req,
        )
        .await?;
        Ok(())
    }

    /// Instruct the gripper to grab; reports whether it grabbed something.
    pub async fn grab(&self) -> Result<bool, GrpcClientError> {
        let req = GrabRequest {
            name: self.name.clone(),
            extra: None,
        };
        let resp: GrabResponse = call_unary(
            self.channel.as_ref(),
            "/viam.component.gripper.v1.GripperService/Grab",
            req,
        )
        .await?;
        Ok(resp.success)
    }

    pub async fn stop(&self) -> Result<(), GrpcClientError> {
        let req = StopRequest {
            name: self.name.clone(),
            extra: None,
        };
        let _: StopResponse = call_unary(
            self.channel.as_ref(),
            "/viam.component.gripper.v1.GripperService/Stop",
            req,
        )
        .await?;
        Ok(())
    }
}

impl ComponentClient for GripperClient {
    fn name(&self) -> &str {
        &self.name
    }
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
