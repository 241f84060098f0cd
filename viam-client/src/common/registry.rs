use std::collections::HashMap as Map;
use thiserror::Error;

use super::component::ComponentType;
use super::grpc_client::Channel;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum RegistryError {
    #[error("RegistryError : component subtype '{0}' not found")]
    ComponentNotFound(String),
    #[error("RegistryError : component subtype '{0}' already registered")]
    ComponentAlreadyRegistered(&'static str),
}

/// Fn that returns a `ComponentType`, a client proxy bound to a resource
/// name and the shared channel
type ComponentConstructor = dyn Fn(String, Channel) -> ComponentType;

/// Maps a component subtype (arm, motor, etc.) to the constructor of its
/// client proxy. A registry is handed to the robot client at construction;
/// there is no process-wide instance.
#[derive(Clone)]
pub struct ClientRegistry {
    components: Map<&'static str, &'static ComponentConstructor>,
}

impl Default for ClientRegistry {
    fn default() -> Self {
        #[allow(unused_mut)]
        let mut r = Self::new();
        #[cfg(feature = "builtin-components")]
        {
            crate::common::arm::register_client(&mut r);
            crate::common::generic::register_client(&mut r);
            crate::common::gripper::register_client(&mut r);
            crate::common::motor::register_client(&mut r);
            crate::common::sensor::register_client(&mut r);
        }
        r
    }
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self {
            components: Map::new(),
        }
    }

    pub fn register_component_client(
        &mut self,
        subtype: &'static str,
        constructor: &'static ComponentConstructor,
    ) -> Result<(), RegistryError> {
        if self.components.contains_key(subtype) {
            return Err(RegistryError::ComponentAlreadyRegistered(subtype));
        }
        let _ = self.components.insert(subtype, constructor);
        Ok(())
    }

    pub(crate) fn get_component_constructor(
        &self,
        subtype: &str,
    ) -> Result<&'static ComponentConstructor, RegistryError> {
        if let Some(ctor) = self.components.get(subtype) {
            return Ok(*ctor);
        }
        Err(RegistryError::ComponentNotFound(subtype.to_owned()))
    }
}
