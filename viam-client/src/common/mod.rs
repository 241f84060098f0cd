//! Structs, traits, and utils to interact with the
//! [components](https://docs.viam.com/components/) and services a robot
//! exposes over gRPC.
//!
//! # Component clients
//! - [arm]
//! - [generic]
//! - [gripper]
//! - [motor]
//! - [sensor]
//!
//! # Utils
//! - [dial]
//! - [exec]
//! - [grpc_client]
//! - [registry]
//! - [robot_client]

pub mod arm;
pub mod component;
pub mod dial;
pub mod exec;
pub mod generic;
pub mod grpc_client;
pub mod gripper;
pub mod motor;
pub mod registry;
pub mod robot_client;
pub mod sensor;
pub mod service;
