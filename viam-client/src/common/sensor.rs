use std::collections::HashMap;
use std::rc::Rc;

use super::component::{component_resource_name, ComponentClient, ComponentType};
use super::grpc_client::{call_unary, Channel, GrpcClientError};
use crate::google;
use crate::proto::common::v1::{GetReadingsRequest, GetReadingsResponse, ResourceName};

pub static COMPONENT_NAME: &str = "sensor";

#[cfg(feature = "builtin-components")]
pub(crate) fn register_client(registry: &mut super::registry::ClientRegistry) {
    if registry
        .register_component_client(COMPONENT_NAME, &SensorClient::from_channel)
        .is_err()
    {
        log::error!("sensor client is already registered");
    }
}

/// Client proxy for a remote sensor.
#[derive(Clone)]
pub struct SensorClient {
    name: String,
    channel: Channel,
}

impl SensorClient {
    pub fn new(name: impl Into<String>, channel: Channel) -> Self {
        Self {
            name: name.into(),
            channel,
        }
    }

    pub(crate) fn from_channel(name: String, channel: Channel) -> ComponentType {
        Rc::new(Self { name, channel })
    }

    /// The [`ResourceName`] under which a sensor named `name` is exposed.
    pub fn resource_name(name: &str) -> ResourceName {
        component_resource_name(COMPONENT_NAME, name)
    }

    /// The latest readings of the sensor, keyed by reading name.
    pub async fn get_readings(
        &self,
    ) -> Result<HashMap<String, google::protobuf::Value>, GrpcClientError> {
        let req = GetReadingsRequest {
            name: self.name.clone(),
            extra: None,
        };
        let resp: GetReadingsResponse = call_unary(
            self.channel.as_ref(),
            "/viam.component.sensor.v1.SensorService/GetReadings",
            req,
        )
        .await?;
        Ok(resp.readings)
    }
}

impl ComponentClient for SensorClient {
    fn name(&self) -> &str {
        &self.name
    }
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
