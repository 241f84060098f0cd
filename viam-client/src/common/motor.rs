use std::rc::Rc;

use super::component::{component_resource_name, ComponentClient, ComponentType};
use super::grpc_client::{call_unary, Channel, GrpcClientError};
use crate::proto::common::v1::ResourceName;
use crate::proto::component::motor::v1::{
    GetPositionRequest, GetPositionResponse, IsMovingRequest, IsMovingResponse, SetPowerRequest,
    SetPowerResponse, StopRequest, StopResponse,
};

pub static COMPONENT_NAME: &str = "motor";

#[cfg(feature = "builtin-components")]
pub(crate) fn register_client(registry: &mut super::registry::ClientRegistry) {
    if registry
        .register_component_client(COMPONENT_NAME, &MotorClient::from_channel)
        .is_err()
    {
        log::error!("motor client is already registered");
    }
}

/// Client proxy for a remote motor.
#[derive(Clone)]
pub struct MotorClient {
    name: String,
    channel: Channel,
}

impl MotorClient {
    pub fn new(name: impl Into<String>, channel: Channel) -> Self {
        Self {
            name: name.into(),
            channel,
        }
    }

    pub(crate) fn from_channel(name: String, channel: Channel) -> ComponentType {
        Rc::new(Self { name, channel })
    }

    /// The [`ResourceName`] under which a motor named `name` is exposed.
    pub fn resource_name(name: &str) -> ResourceName {
        component_resource_name(COMPONENT_NAME, name)
    }

    /// Sets the percentage of the motor's total power that should be employed,
    /// expressed as a value between `-1.0` and `1.0` where negative values
    /// indicate a backwards direction and positive values a forward direction.
    pub async fn set_power(&self, power_pct: f64) -> Result<(), GrpcClientError> {
        let req = SetPowerRequest {
            name: self.name.clone(),
            power_pct,
            extra: None,
        };
        let _: SetPowerResponse = call_unary(
            self.channel.as_ref(),
            "/viam.component.motor.v1.MotorService/SetPower",
            req,
        )
        .await?;
        Ok(())
    }

    /// Reports the position of the motor relative to its zero position, in
    /// revolutions.
    pub async fn get_position(&self) -> Result<f64, GrpcClientError> {
        let req = GetPositionRequest {
            name: self.name.clone(),
            extra: None,
        };
        let resp: GetPositionResponse = call_unary(
            self.channel.as_ref(),
            "/viam.component.motor.v1.MotorService/GetPosition",
            req,
        )
        .await?;
        Ok(resp.position)
    }

    pub async fn is_moving(&self) -> Result<bool, GrpcClientError> {
        let req = IsMovingRequest {
            name: self.name.clone(),
        };
        let resp: IsMovingResponse = call_unary(
            self.channel.as_ref(),
            "/viam.component.motor.v1.MotorService/IsMoving",
            req,
        )
        .await?;
        Ok(resp.is_moving)
    }

    pub async fn stop(&self) -> Result<(), GrpcClientError> {
        let req = StopRequest {
            name: self.name.clone(),
            extra: None,
        };
        let _: StopResponse = call_unary(
            self.channel.as_ref(),
            "/viam.component.motor.v1.MotorService/Stop",
            req,
        )
        .await?;
        Ok(())
    }
}

impl ComponentClient for MotorClient {
    fn name(&self) -> &str {
        &self.name
    }
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
