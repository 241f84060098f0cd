use std::rc::Rc;

use super::component::{component_resource_name, ComponentClient, ComponentType};
use super::grpc_client::{call_unary, Channel, GrpcClientError};
use crate::proto::common::v1::{Pose, ResourceName};
use crate::proto::component::arm::v1::{
    GetEndPositionRequest, GetEndPositionResponse, MoveToPositionRequest, MoveToPositionResponse,
    StopRequest, StopResponse,
};

pub static COMPONENT_NAME: &str = "arm";

#[cfg(feature = "builtin-components")]
pub(crate) fn register_client(registry: &mut super::registry::ClientRegistry) {
    if registry
        .register_component_client(COMPONENT_NAME, &ArmClient::from_channel)
        .is_err()
    {
        log::error!("arm client is already registered");
    }
}

/// Client proxy for a remote arm.
#[derive(Clone)]
pub struct ArmClient {
    name: String,
    channel: Channel,
}

impl ArmClient {
    pub fn new(name: impl Into<String>, channel: Channel) -> Self {
        Self {
            name: name.into(),
            channel,
        }
    }

    pub(crate) fn from_channel(name: String, channel: Channel) -> ComponentType {
        Rc::new(Self { name, channel })
    }

    /// The [`ResourceName`] under which an arm named `name` is exposed.
    pub fn resource_name(name: &str) -> ResourceName {
        component_resource_name(COMPONENT_NAME, name)
    }

    /// The pose of the end effector relative to the arm's base.
    pub async fn get_end_position(&self) -> Result<Pose, GrpcClientError> {
        let req = GetEndPositionRequest {
            name: self.name.clone(),
            extra: None,
        };
        let resp: GetEndPositionResponse = call_unary(
            self.channel.as_ref(),
            "/viam.component.arm.v1.ArmService/GetEndPosition",
            req,
        )
        .await?;
        Ok(resp.pose.unwrap_or_default())
    }

    /// Move the end effector to `to`, expressed in the arm's reference frame.
    pub async fn move_to_position(&self, to: Pose) -> Result<(), GrpcClientError> {
        let req = MoveToPositionRequest {
            name: self.name.clone(),
            to: Some(to),
            extra: None,
        };
        let _: MoveToPositionResponse = call_unary(
            self.channel.as_ref(),
            "/viam.component.arm.v1.ArmService/MoveToPosition",
            req,
        )
        .await?;
        Ok(())
    }

    pub async fn stop(&self) -> Result<(), GrpcClientError> {
        let req = StopRequest {
            name: self.name.clone(),
            extra: None,
        };
        let _: StopResponse = call_unary(
            self.channel.as_ref(),
            "/viam.component.arm.v1.ArmService/Stop",
            req,
        )
        .await?;
        Ok(())
    }
}

impl ComponentClient for ArmClient {
    fn name(&self) -> &str {
        &self.name
    }
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
